// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use kurbo::{Point, Size};

use crate::entity::{EntityRecord, unique_name};
use crate::{Canvas, EntityHandle, ZInsert, ZMove, ZOrderedList};

/// A shareable handle to a [`Layer`].
pub type LayerHandle<C> = Rc<RefCell<Layer<C>>>;

/// An ordered plane of entities within a scene.
///
/// Layers own the lifecycle bookkeeping for their entities: each entity is
/// set up exactly once before its first calculate (lazily, for entities
/// inserted after the layer itself), and torn down exactly once when it is
/// removed or the scene terminates.
///
/// Structural mutation (insert, move, remove) must happen outside the
/// calculate/render traversal: from event handlers, or between frames.
pub struct Layer<C: Canvas> {
    name: String,
    records: ZOrderedList<EntityRecord<C>>,
    was_setup: bool,
    was_torndown: bool,
}

impl<C: Canvas> Layer<C> {
    /// Create an empty layer, deriving a unique name from `base_name` (or a
    /// generic base when `None`).
    pub fn new(base_name: Option<&str>) -> Self {
        Self {
            name: unique_name(base_name.unwrap_or("layer")),
            records: ZOrderedList::new(),
            was_setup: false,
            was_torndown: false,
        }
    }

    /// Create an empty layer and wrap it in a [`LayerHandle`].
    pub fn shared(base_name: Option<&str>) -> LayerHandle<C> {
        Rc::new(RefCell::new(Self::new(base_name)))
    }

    /// The unique name of this layer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of entities in the layer.
    pub fn entity_count(&self) -> usize {
        self.records.len()
    }

    /// Insert an entity at the given z position.
    ///
    /// An entity inserted into a layer that is already running is set up
    /// lazily at the start of the next frame.
    ///
    /// # Panics
    ///
    /// Panics if the entity is already in the layer, or a referenced
    /// position entity is not.
    pub fn insert(&mut self, entity: EntityHandle<C>, at: ZInsert<'_, EntityHandle<C>>) {
        self.records.insert(EntityRecord::new(entity), at);
    }

    /// Move an entity to the given z position.
    ///
    /// # Panics
    ///
    /// Panics if the entity, or a referenced position entity, is not in the
    /// layer.
    pub fn move_z(&mut self, entity: &EntityHandle<C>, to: ZMove<'_, EntityHandle<C>>) {
        self.records.move_z(entity, to);
    }

    /// Remove an entity, tearing it down if it had been set up. Does
    /// nothing if the entity is not in the layer.
    pub fn remove(&mut self, entity: &EntityHandle<C>) {
        if let Some(mut record) = self.records.remove(entity) {
            record.teardown();
        }
    }

    pub(crate) fn was_setup(&self) -> bool {
        self.was_setup
    }

    pub(crate) fn setup(&mut self, canvas_size: Size, canvas: &mut C) {
        assert!(
            !self.was_setup,
            "layer '{}' was already set up",
            self.name
        );
        for record in self.records.iter_mut() {
            record.ensure_setup(canvas_size, canvas);
        }
        self.was_setup = true;
    }

    pub(crate) fn calculate(&mut self, canvas_size: Size, canvas: &mut C) {
        assert!(
            self.was_setup,
            "layer '{}' was never set up",
            self.name
        );
        for record in self.records.iter_mut() {
            record.ensure_setup(canvas_size, canvas);
            record.calculate(canvas_size);
        }
    }

    pub(crate) fn render(&mut self, canvas: &mut C) {
        for record in self.records.iter_mut() {
            record.render(canvas);
        }
    }

    pub(crate) fn teardown(&mut self) {
        assert!(
            !self.was_torndown,
            "layer '{}' was already torn down",
            self.name
        );
        for record in self.records.iter_mut() {
            record.teardown();
        }
        self.was_torndown = true;
    }

    /// The name of the frontmost entity in this layer at `global_location`,
    /// if any.
    pub fn front_most_entity_at(
        &self,
        global_location: Point,
        exclude_mouse_transparent: bool,
    ) -> Option<String> {
        self.records
            .iter()
            .rev()
            .find_map(|record| record.hit_name(global_location, exclude_mouse_transparent))
    }
}

impl<C: Canvas> PartialEq for Layer<C> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<C: Canvas> Debug for Layer<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("entities", &self.records.len())
            .field("was_setup", &self.was_setup)
            .field("was_torndown", &self.was_torndown)
            .finish_non_exhaustive()
    }
}
