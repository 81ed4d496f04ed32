// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Scene: a retained-mode scene graph for frame-driven 2D canvases.
//!
//! ## Overview
//!
//! A running application is a [`Director`] driving one [`Scene`] at a time.
//! A scene is an ordered stack of [`Layer`]s; each layer is an ordered list
//! of entities implementing [`Renderable`]. Everything in a z stack renders
//! back to front and hit-tests front to back.
//!
//! The host supplies two things: a [`Canvas`] (the drawing surface, which
//! only needs to report its size to the runtime) and a [`SceneDirector`]
//! delegate that hands out scenes and the frame rate. Each call to
//! [`Director::render`] is one frame:
//!
//! 1. scene transitions are resolved (teardown, then the next scene's setup),
//! 2. the frame-update event fires and the animation clock advances,
//! 3. every entity calculates, then every entity renders.
//!
//! Entities are shared as [`EntityHandle`]s (`Rc<RefCell<dyn Renderable>>`).
//! The same object can implement the handler traits from
//! [`limelight_dispatch`] and be registered, under its unique name, for the
//! pointer and keyboard events it wants; the scene implements the
//! dispatcher's hit scan so pointer events find the frontmost entity across
//! the whole layer stack.
//!
//! The runtime is single threaded: handlers and lifecycle hooks run to
//! completion inside the frame or event that triggered them. Structural
//! mutation of a running z stack (inserting, moving, or removing entities
//! and layers) belongs in event handlers or between frames, not inside
//! calculate or render hooks.

mod container;
mod director;
mod entity;
mod layer;
mod scene;
mod zorder;

pub use container::EntityContainer;
pub use director::{Director, SceneDirector};
pub use entity::{Canvas, EntityCore, EntityHandle, Renderable};
pub use layer::{Layer, LayerHandle};
pub use scene::Scene;
pub use zorder::{ZInsert, ZMove, ZOrderedList};
