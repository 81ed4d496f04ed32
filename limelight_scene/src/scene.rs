// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{Debug, Formatter, Result as FmtResult};

use kurbo::{Point, Size};

use limelight_dispatch::HitScan;

use crate::entity::unique_name;
use crate::{Canvas, Layer, LayerHandle, ZInsert, ZMove, ZOrderedList};

/// An ordered stack of layers making up everything currently on screen.
///
/// The director runs exactly one scene at a time; the scene cascades the
/// lifecycle to its layers in z order, back to front. A layer inserted into
/// a running scene is set up lazily at the start of the next frame.
///
/// The scene is also the [`HitScan`] the dispatcher consults: pointer
/// resolution walks the layer stack front to back and within each layer
/// front to back, returning the first entity hit.
pub struct Scene<C: Canvas> {
    name: String,
    layers: ZOrderedList<LayerHandle<C>>,
    was_setup: bool,
    was_torndown: bool,
}

impl<C: Canvas> Scene<C> {
    /// Create an empty scene, deriving a unique name from `base_name` (or a
    /// generic base when `None`).
    pub fn new(base_name: Option<&str>) -> Self {
        Self {
            name: unique_name(base_name.unwrap_or("scene")),
            layers: ZOrderedList::new(),
            was_setup: false,
            was_torndown: false,
        }
    }

    /// The unique name of this scene.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of layers in the scene.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Insert a layer at the given z position.
    ///
    /// # Panics
    ///
    /// Panics if the layer is already in the scene, or a referenced
    /// position layer is not.
    pub fn insert_layer(&mut self, layer: LayerHandle<C>, at: ZInsert<'_, LayerHandle<C>>) {
        self.layers.insert(layer, at);
    }

    /// Move a layer to the given z position.
    ///
    /// # Panics
    ///
    /// Panics if the layer, or a referenced position layer, is not in the
    /// scene.
    pub fn move_layer(&mut self, layer: &LayerHandle<C>, to: ZMove<'_, LayerHandle<C>>) {
        self.layers.move_z(layer, to);
    }

    /// Remove a layer, tearing it down if it had been set up. Does nothing
    /// if the layer is not in the scene.
    pub fn remove_layer(&mut self, layer: &LayerHandle<C>) {
        if let Some(removed) = self.layers.remove(layer) {
            let was_setup = removed.borrow().was_setup();
            if was_setup {
                removed.borrow_mut().teardown();
            }
        }
    }

    pub(crate) fn was_setup(&self) -> bool {
        self.was_setup
    }

    pub(crate) fn setup(&mut self, canvas_size: Size, canvas: &mut C) {
        assert!(
            !self.was_setup,
            "scene '{}' was already set up",
            self.name
        );
        for layer in self.layers.iter() {
            layer.borrow_mut().setup(canvas_size, canvas);
        }
        self.was_setup = true;
    }

    pub(crate) fn calculate(&mut self, canvas_size: Size, canvas: &mut C) {
        assert!(
            self.was_setup,
            "scene '{}' was never set up",
            self.name
        );
        for layer in self.layers.iter() {
            let mut layer = layer.borrow_mut();
            if !layer.was_setup() {
                layer.setup(canvas_size, canvas);
            }
            layer.calculate(canvas_size, canvas);
        }
    }

    pub(crate) fn render(&mut self, canvas: &mut C) {
        for layer in self.layers.iter() {
            layer.borrow_mut().render(canvas);
        }
    }

    pub(crate) fn teardown(&mut self) {
        assert!(
            !self.was_torndown,
            "scene '{}' was already torn down",
            self.name
        );
        for layer in self.layers.iter() {
            let mut layer = layer.borrow_mut();
            if layer.was_setup() {
                layer.teardown();
            }
        }
        self.was_torndown = true;
    }
}

impl<C: Canvas> HitScan for Scene<C> {
    fn front_most_entity_at(
        &self,
        global_location: Point,
        exclude_mouse_transparent: bool,
    ) -> Option<String> {
        self.layers.iter().rev().find_map(|layer| {
            layer
                .borrow()
                .front_most_entity_at(global_location, exclude_mouse_transparent)
        })
    }
}

impl<C: Canvas> Debug for Scene<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("layers", &self.layers.len())
            .field("was_setup", &self.was_setup)
            .field("was_torndown", &self.was_torndown)
            .finish_non_exhaustive()
    }
}
