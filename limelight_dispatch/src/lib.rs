// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Dispatch: event handler registries and pointer/keyboard routing.
//!
//! ## Overview
//!
//! The [`Dispatcher`] routes host input events to registered handlers:
//!
//! - Global events (key up/down, canvas and window resize, mouse up/down/move,
//!   frame update) fan out to every handler registered for that kind.
//! - Entity-targeted pointer events (down, up, click, drag, enter, leave) are
//!   routed to the single frontmost entity under the pointer, resolved through
//!   the [`HitScan`] trait.
//!
//! This crate never walks a scene graph itself. The scene side implements
//! [`HitScan`] and lends it to each `raise_*` call, which keeps the routing
//! state machine (pending click/drag cursor, enter/leave tracking, previous
//! pointer location) independent of how entities are stored.
//!
//! Handlers are identified by their [`name`](EventHandler::name), registered
//! as `Rc<RefCell<dyn …Handler>>` trait objects, and invoked in registration
//! order. Registering two handlers under one name, or unregistering a name
//! that was never registered, is a caller bug and panics.

mod dispatcher;
mod handlers;
mod registry;
mod types;

pub use dispatcher::Dispatcher;
pub use handlers::{
    CanvasResizeHandler, EntityMouseClickHandler, EntityMouseDownHandler, EntityMouseDragHandler,
    EntityMouseEnterHandler, EntityMouseLeaveHandler, EntityMouseUpHandler, EventHandler,
    FrameUpdateHandler, KeyDownHandler, KeyUpHandler, MouseDownHandler, MouseMoveHandler,
    MouseUpHandler, WindowResizeHandler,
};
pub use types::{HitScan, KeyInfo, KeyModifiers};
