// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::{Affine, Point, Rect, Size};

/// The rendering surface the runtime draws into.
///
/// Drawing primitives live entirely in the host's canvas type; the runtime
/// only needs to know whether the surface has reported its size yet. Until
/// it has, the director skips the frame.
pub trait Canvas {
    /// The size of the surface, once known.
    fn canvas_size(&self) -> Option<Size>;
}

/// A shareable handle to an entity.
///
/// The same handle is inserted into a layer and, separately cloned, registered
/// with the dispatcher for any events the entity handles.
pub type EntityHandle<C> = Rc<RefCell<dyn Renderable<C>>>;

static NAME_DISCRIMINATOR: AtomicU64 = AtomicU64::new(0);

/// Produce a process-unique name with the given base.
pub(crate) fn unique_name(base: &str) -> String {
    let id = NAME_DISCRIMINATOR.fetch_add(1, Ordering::Relaxed);
    format!("{base}-{id}")
}

/// The identity and presentation state every entity carries.
///
/// Concrete entities embed one and hand it out through
/// [`Renderable::core`] / [`Renderable::core_mut`]. The transform, alpha,
/// and clip overlays are plain data here; the host's render backend applies
/// them when drawing the entity.
pub struct EntityCore {
    name: String,
    transform: Option<Affine>,
    alpha: Option<f64>,
    clip_rect: Option<Rect>,
}

impl EntityCore {
    /// Create a core, deriving a unique name from `base_name` (or a generic
    /// base when `None`).
    pub fn new(base_name: Option<&str>) -> Self {
        Self {
            name: unique_name(base_name.unwrap_or("entity")),
            transform: None,
            alpha: None,
            clip_rect: None,
        }
    }

    /// The unique name of this entity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The transform overlay, if set.
    pub fn transform(&self) -> Option<Affine> {
        self.transform
    }

    /// Set or clear the transform overlay.
    pub fn set_transform(&mut self, transform: Option<Affine>) {
        self.transform = transform;
    }

    /// The alpha overlay, if set.
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Set or clear the alpha overlay.
    pub fn set_alpha(&mut self, alpha: Option<f64>) {
        self.alpha = alpha;
    }

    /// The clip rectangle overlay, if set.
    pub fn clip_rect(&self) -> Option<Rect> {
        self.clip_rect
    }

    /// Set or clear the clip rectangle overlay.
    pub fn set_clip_rect(&mut self, clip_rect: Option<Rect>) {
        self.clip_rect = clip_rect;
    }

    /// Map a point through the transform overlay. Identity when no
    /// transform is set.
    pub fn apply_transform(&self, point: Point) -> Point {
        match self.transform {
            Some(transform) => transform * point,
            None => point,
        }
    }
}

impl Debug for EntityCore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EntityCore")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("alpha", &self.alpha)
            .field("clip_rect", &self.clip_rect)
            .finish()
    }
}

/// An entity in a layer: the lifecycle and hit-testing surface of everything
/// the runtime manages.
///
/// All behavior hooks default to no-ops, so a concrete entity implements
/// only [`core`](Renderable::core) / [`core_mut`](Renderable::core_mut) plus
/// whatever it actually does. Lifecycle guarantees are provided by the
/// containers: `setup` runs exactly once before the first `calculate`,
/// `calculate` at least once before the first `render`, and `teardown`
/// exactly once for every entity that was set up.
pub trait Renderable<C: Canvas> {
    /// The embedded identity and presentation state.
    fn core(&self) -> &EntityCore;

    /// Mutable access to the embedded identity and presentation state.
    fn core_mut(&mut self) -> &mut EntityCore;

    /// The unique name, as reported to handler registries and hit scans.
    fn name(&self) -> &str {
        self.core().name()
    }

    /// One-time initialization, before the first calculate.
    fn setup(&mut self, _canvas_size: Size, _canvas: &mut C) {}

    /// Per-frame state update, before this frame's render.
    fn calculate(&mut self, _canvas_size: Size) {}

    /// Draw into the canvas. Backmost entities render first.
    fn render(&mut self, _canvas: &mut C) {}

    /// One-time cleanup when the entity leaves the running scene.
    fn teardown(&mut self) {}

    /// The rectangle the entity occupies, in global coordinates. Defaults
    /// to an empty rectangle, which no hit test ever contains.
    fn bounding_rect(&self) -> Rect {
        Rect::ZERO
    }

    /// Whether `global_location` is on the entity. Defaults to containment
    /// in the bounding rectangle.
    fn hit_test(&self, global_location: Point) -> bool {
        self.bounding_rect().contains(global_location)
    }

    /// Whether pointer events pass through this entity to those behind it.
    fn is_mouse_transparent(&self) -> bool {
        false
    }

    /// Convert a global location to the entity's local coordinates, relative
    /// to its bounding rectangle's origin.
    fn local_from_global(&self, global_location: Point) -> Point {
        global_location - self.bounding_rect().origin().to_vec2()
    }

    /// Convert a local location back to global coordinates.
    fn global_from_local(&self, local_location: Point) -> Point {
        local_location + self.bounding_rect().origin().to_vec2()
    }
}

/// A layer's bookkeeping for one entity: the handle plus lifecycle flags.
///
/// Equality is handle identity, so a record list can be addressed by the
/// handles the application holds.
pub(crate) struct EntityRecord<C: Canvas> {
    entity: EntityHandle<C>,
    name: String,
    was_setup: bool,
    was_torndown: bool,
    never_calculated: bool,
}

impl<C: Canvas> EntityRecord<C> {
    pub(crate) fn new(entity: EntityHandle<C>) -> Self {
        let name = entity.borrow().name().to_string();
        Self {
            entity,
            name,
            was_setup: false,
            was_torndown: false,
            never_calculated: true,
        }
    }

    /// Set the entity up if it has not been already. Entities inserted after
    /// their container reach this on the frame after insertion.
    pub(crate) fn ensure_setup(&mut self, canvas_size: Size, canvas: &mut C) {
        if !self.was_setup {
            self.entity.borrow_mut().setup(canvas_size, canvas);
            self.was_setup = true;
        }
    }

    /// Run the per-frame calculate, provided the entity has been set up.
    pub(crate) fn calculate(&mut self, canvas_size: Size) {
        if self.was_setup {
            self.entity.borrow_mut().calculate(canvas_size);
            self.never_calculated = false;
        }
    }

    /// Render the entity, calculating first if it has never been. Entities
    /// that are not yet set up are skipped.
    pub(crate) fn render(&mut self, canvas: &mut C) {
        if !self.was_setup {
            return;
        }
        if self.never_calculated
            && let Some(canvas_size) = canvas.canvas_size()
        {
            self.entity.borrow_mut().calculate(canvas_size);
            self.never_calculated = false;
        }
        self.entity.borrow_mut().render(canvas);
    }

    /// Tear the entity down exactly once, and only if it was set up.
    pub(crate) fn teardown(&mut self) {
        if self.was_setup && !self.was_torndown {
            self.entity.borrow_mut().teardown();
            self.was_torndown = true;
        }
    }

    pub(crate) fn bounding_rect(&self) -> Rect {
        self.entity.borrow().bounding_rect()
    }

    /// The entity's name if `global_location` is on it, honoring mouse
    /// transparency when asked to.
    pub(crate) fn hit_name(
        &self,
        global_location: Point,
        exclude_mouse_transparent: bool,
    ) -> Option<String> {
        let entity = self.entity.borrow();
        if !entity.hit_test(global_location) {
            return None;
        }
        if exclude_mouse_transparent && entity.is_mouse_transparent() {
            return None;
        }
        Some(self.name.clone())
    }
}

impl<C: Canvas> PartialEq for EntityRecord<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entity, &other.entity)
    }
}

impl<C: Canvas> PartialEq<EntityHandle<C>> for EntityRecord<C> {
    fn eq(&self, other: &EntityHandle<C>) -> bool {
        Rc::ptr_eq(&self.entity, other)
    }
}

impl<C: Canvas> Debug for EntityRecord<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EntityRecord")
            .field("name", &self.name)
            .field("was_setup", &self.was_setup)
            .field("was_torndown", &self.was_torndown)
            .field("never_calculated", &self.never_calculated)
            .finish_non_exhaustive()
    }
}
