// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{Debug, Formatter, Result as FmtResult};

use kurbo::{Point, Rect, Size};

use crate::entity::EntityRecord;
use crate::{Canvas, EntityCore, EntityHandle, Renderable, ZInsert, ZMove, ZOrderedList};

/// An entity that groups an ordered list of child entities.
///
/// Lifecycle calls forward to every child in z order, so the group moves
/// through setup, calculate, render, and teardown as one unit. The
/// container's bounding rectangle is the union of its children's, which
/// makes the default hit test cover the whole group.
///
/// Children inserted while the container is already running are set up
/// lazily at the start of the container's next render.
pub struct EntityContainer<C: Canvas> {
    core: EntityCore,
    children: ZOrderedList<EntityRecord<C>>,
}

impl<C: Canvas> EntityContainer<C> {
    /// Create an empty container, deriving a unique name from `base_name`
    /// (or a generic base when `None`).
    pub fn new(base_name: Option<&str>) -> Self {
        Self {
            core: EntityCore::new(Some(base_name.unwrap_or("container"))),
            children: ZOrderedList::new(),
        }
    }

    /// The number of children in the container.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Insert a child at the given z position within the container.
    ///
    /// # Panics
    ///
    /// Panics if the child is already in the container, or a referenced
    /// position child is not.
    pub fn insert(&mut self, entity: EntityHandle<C>, at: ZInsert<'_, EntityHandle<C>>) {
        self.children.insert(EntityRecord::new(entity), at);
    }

    /// Move a child to the given z position within the container.
    ///
    /// # Panics
    ///
    /// Panics if the child, or a referenced position child, is not in the
    /// container.
    pub fn move_z(&mut self, entity: &EntityHandle<C>, to: ZMove<'_, EntityHandle<C>>) {
        self.children.move_z(entity, to);
    }

    /// Remove a child, tearing it down if it had been set up. Does nothing
    /// if the child is not in the container.
    pub fn remove(&mut self, entity: &EntityHandle<C>) {
        if let Some(mut record) = self.children.remove(entity) {
            record.teardown();
        }
    }
}

impl<C: Canvas> Renderable<C> for EntityContainer<C> {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn setup(&mut self, canvas_size: Size, canvas: &mut C) {
        for child in self.children.iter_mut() {
            child.ensure_setup(canvas_size, canvas);
        }
    }

    fn calculate(&mut self, canvas_size: Size) {
        for child in self.children.iter_mut() {
            child.calculate(canvas_size);
        }
    }

    fn render(&mut self, canvas: &mut C) {
        if let Some(canvas_size) = canvas.canvas_size() {
            for child in self.children.iter_mut() {
                child.ensure_setup(canvas_size, canvas);
            }
        }
        for child in self.children.iter_mut() {
            child.render(canvas);
        }
    }

    fn teardown(&mut self) {
        for child in self.children.iter_mut() {
            child.teardown();
        }
    }

    fn bounding_rect(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        for child in self.children.iter() {
            let child_rect = child.bounding_rect();
            bounds = Some(match bounds {
                Some(rect) => rect.union(child_rect),
                None => child_rect,
            });
        }
        bounds.unwrap_or(Rect::ZERO)
    }

    fn hit_test(&self, global_location: Point) -> bool {
        self.children
            .iter()
            .any(|child| child.hit_name(global_location, false).is_some())
    }
}

impl<C: Canvas> Debug for EntityContainer<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EntityContainer")
            .field("core", &self.core)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct TestCanvas;

    impl Canvas for TestCanvas {
        fn canvas_size(&self) -> Option<Size> {
            Some(SIZE)
        }
    }

    const SIZE: Size = Size::new(100.0, 100.0);

    struct Block {
        core: EntityCore,
        rect: Rect,
        calls: Vec<&'static str>,
    }

    impl Renderable<TestCanvas> for Block {
        fn core(&self) -> &EntityCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut EntityCore {
            &mut self.core
        }

        fn setup(&mut self, _canvas_size: Size, _canvas: &mut TestCanvas) {
            self.calls.push("setup");
        }

        fn calculate(&mut self, _canvas_size: Size) {
            self.calls.push("calculate");
        }

        fn render(&mut self, _canvas: &mut TestCanvas) {
            self.calls.push("render");
        }

        fn teardown(&mut self) {
            self.calls.push("teardown");
        }

        fn bounding_rect(&self) -> Rect {
            self.rect
        }
    }

    fn block(rect: Rect) -> (Rc<RefCell<Block>>, EntityHandle<TestCanvas>) {
        let block = Rc::new(RefCell::new(Block {
            core: EntityCore::new(Some("block")),
            rect,
            calls: Vec::new(),
        }));
        let handle: EntityHandle<TestCanvas> = block.clone();
        (block, handle)
    }

    #[test]
    fn forwards_the_lifecycle_to_children() {
        let mut canvas = TestCanvas;
        let (child, handle) = block(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut container = EntityContainer::new(Some("group"));
        container.insert(handle, ZInsert::Front);

        container.setup(SIZE, &mut canvas);
        container.calculate(SIZE);
        container.render(&mut canvas);
        container.teardown();
        assert_eq!(
            child.borrow().calls,
            ["setup", "calculate", "render", "teardown"]
        );
    }

    #[test]
    fn bounding_rect_is_the_union_of_children() {
        let (_, a) = block(Rect::new(0.0, 0.0, 10.0, 10.0));
        let (_, b) = block(Rect::new(20.0, 5.0, 30.0, 40.0));
        let mut container = EntityContainer::new(None);
        container.insert(a, ZInsert::Front);
        container.insert(b, ZInsert::Front);
        assert_eq!(container.bounding_rect(), Rect::new(0.0, 0.0, 30.0, 40.0));
        assert_eq!(container.child_count(), 2);
    }

    #[test]
    fn empty_container_has_an_empty_bounding_rect() {
        let container: EntityContainer<TestCanvas> = EntityContainer::new(None);
        assert_eq!(container.bounding_rect(), Rect::ZERO);
        assert!(!container.hit_test(Point::new(0.0, 0.0)));
    }

    #[test]
    fn hit_test_requires_an_actual_child_hit() {
        // Two disjoint children leave a gap inside the union rectangle.
        let (_, a) = block(Rect::new(0.0, 0.0, 10.0, 10.0));
        let (_, b) = block(Rect::new(30.0, 30.0, 40.0, 40.0));
        let mut container = EntityContainer::new(None);
        container.insert(a, ZInsert::Front);
        container.insert(b, ZInsert::Front);
        assert!(container.hit_test(Point::new(5.0, 5.0)));
        assert!(container.hit_test(Point::new(35.0, 35.0)));
        assert!(!container.hit_test(Point::new(20.0, 20.0)));
    }

    #[test]
    fn late_children_are_set_up_before_their_first_render() {
        let mut canvas = TestCanvas;
        let mut container: EntityContainer<TestCanvas> = EntityContainer::new(None);
        container.setup(SIZE, &mut canvas);

        let (child, handle) = block(Rect::new(0.0, 0.0, 10.0, 10.0));
        container.insert(handle, ZInsert::Front);
        container.render(&mut canvas);
        assert_eq!(child.borrow().calls, ["setup", "calculate", "render"]);
    }

    #[test]
    fn removal_tears_down_a_running_child() {
        let mut canvas = TestCanvas;
        let (child, handle) = block(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut container = EntityContainer::new(None);
        container.insert(handle.clone(), ZInsert::Front);
        container.setup(SIZE, &mut canvas);
        container.remove(&handle);
        assert_eq!(child.borrow().calls, ["setup", "teardown"]);
    }
}
