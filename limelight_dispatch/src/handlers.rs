// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The handler traits the [`Dispatcher`](crate::Dispatcher) routes events to.
//!
//! Each event kind has its own trait so an object opts into exactly the
//! events it wants; all of them extend [`EventHandler`], which supplies the
//! unique name the registries key on. Global handlers hear every event of
//! their kind; the `EntityMouse*` handlers are only invoked when the hit
//! scan resolves the pointer to the entity carrying that name.

use kurbo::{Point, Size, Vec2};

use crate::KeyInfo;

/// Base trait for anything registered with the dispatcher.
///
/// The name must be unique across every object registered for the same
/// event kind; entity handlers must return the same name the entity's hit
/// scan reports.
pub trait EventHandler {
    /// The unique registration name.
    fn name(&self) -> &str;
}

/// Hears every key press.
pub trait KeyDownHandler: EventHandler {
    /// A key was pressed.
    fn on_key_down(&mut self, info: &KeyInfo);
}

/// Hears every key release.
pub trait KeyUpHandler: EventHandler {
    /// A key was released.
    fn on_key_up(&mut self, info: &KeyInfo);
}

/// Hears canvas size changes.
pub trait CanvasResizeHandler: EventHandler {
    /// The canvas was resized.
    fn on_canvas_resize(&mut self, size: Size);
}

/// Hears window size changes.
pub trait WindowResizeHandler: EventHandler {
    /// The window was resized.
    fn on_window_resize(&mut self, size: Size);
}

/// Hears every mouse press, wherever it lands.
pub trait MouseDownHandler: EventHandler {
    /// A mouse button was pressed at `global_location`.
    fn on_mouse_down(&mut self, global_location: Point);
}

/// Hears every mouse release, wherever it lands.
pub trait MouseUpHandler: EventHandler {
    /// A mouse button was released at `global_location`.
    fn on_mouse_up(&mut self, global_location: Point);
}

/// Hears every (non-zero) mouse movement.
pub trait MouseMoveHandler: EventHandler {
    /// The mouse moved to `global_location` by `movement` since the
    /// previous report.
    fn on_mouse_move(&mut self, global_location: Point, movement: Vec2);
}

/// Hears the start of every render frame.
pub trait FrameUpdateHandler: EventHandler {
    /// A new frame is starting under the given target frame rate.
    fn on_frame_update(&mut self, frames_per_second: u32);
}

/// Receives mouse presses that land on the named entity.
pub trait EntityMouseDownHandler: EventHandler {
    /// The entity was pressed at `global_location`.
    fn on_entity_mouse_down(&mut self, global_location: Point);
}

/// Receives mouse releases that land on the named entity.
pub trait EntityMouseUpHandler: EventHandler {
    /// The mouse was released over the entity at `global_location`.
    fn on_entity_mouse_up(&mut self, global_location: Point);
}

/// Receives clicks: a press and release both landing on the named entity.
pub trait EntityMouseClickHandler: EventHandler {
    /// The entity was clicked at `global_location`.
    fn on_entity_mouse_click(&mut self, global_location: Point);
}

/// Receives drags: pointer movement while a press on the named entity is
/// outstanding, whether or not the pointer is still over it.
pub trait EntityMouseDragHandler: EventHandler {
    /// The pointer moved to `global_location` by `movement` while dragging
    /// the entity.
    fn on_entity_mouse_drag(&mut self, global_location: Point, movement: Vec2);
}

/// Notified when the pointer first moves onto the named entity.
pub trait EntityMouseEnterHandler: EventHandler {
    /// The pointer entered the entity at `global_location`.
    fn on_entity_mouse_enter(&mut self, global_location: Point);
}

/// Notified when the pointer moves off the named entity.
pub trait EntityMouseLeaveHandler: EventHandler {
    /// The pointer left the entity; it is now at `global_location`.
    fn on_entity_mouse_leave(&mut self, global_location: Point);
}
