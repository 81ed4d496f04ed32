// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};

use crate::registry::HandlerRegistry;
use crate::{
    CanvasResizeHandler, EntityMouseClickHandler, EntityMouseDownHandler, EntityMouseDragHandler,
    EntityMouseEnterHandler, EntityMouseLeaveHandler, EntityMouseUpHandler, FrameUpdateHandler,
    HitScan, KeyDownHandler, KeyInfo, KeyUpHandler, MouseDownHandler, MouseMoveHandler,
    MouseUpHandler, WindowResizeHandler,
};

/// Routes host input events to registered handlers.
///
/// Global events fan out to every handler of their kind. Entity-targeted
/// pointer events consult the [`HitScan`] passed to the `raise_*` call and
/// route to the single frontmost entity under the pointer, tracking the
/// press/release pairing for clicks and drags and the hover set for
/// enter/leave.
///
/// All state transitions happen inside the `raise_*` methods; the dispatcher
/// holds no reference to the scene graph and can outlive any scene.
pub struct Dispatcher {
    key_down: HandlerRegistry<dyn KeyDownHandler>,
    key_up: HandlerRegistry<dyn KeyUpHandler>,
    canvas_resize: HandlerRegistry<dyn CanvasResizeHandler>,
    window_resize: HandlerRegistry<dyn WindowResizeHandler>,
    mouse_down: HandlerRegistry<dyn MouseDownHandler>,
    mouse_up: HandlerRegistry<dyn MouseUpHandler>,
    mouse_move: HandlerRegistry<dyn MouseMoveHandler>,
    frame_update: HandlerRegistry<dyn FrameUpdateHandler>,
    entity_mouse_down: HandlerRegistry<dyn EntityMouseDownHandler>,
    entity_mouse_up: HandlerRegistry<dyn EntityMouseUpHandler>,
    entity_mouse_click: HandlerRegistry<dyn EntityMouseClickHandler>,
    entity_mouse_drag: HandlerRegistry<dyn EntityMouseDragHandler>,
    entity_mouse_enter: HandlerRegistry<dyn EntityMouseEnterHandler>,
    entity_mouse_leave: HandlerRegistry<dyn EntityMouseLeaveHandler>,

    /// Entity pressed with a click or drag handler, awaiting the release.
    pending_click_or_drag: Option<String>,
    /// Entity the pointer most recently entered.
    most_recent_enter: Option<String>,
    /// Pointer location of the previous move report.
    previous_mouse_location: Option<Point>,
}

impl Dispatcher {
    /// Create a dispatcher with no registered handlers.
    pub fn new() -> Self {
        Self {
            key_down: HandlerRegistry::new("key down"),
            key_up: HandlerRegistry::new("key up"),
            canvas_resize: HandlerRegistry::new("canvas resize"),
            window_resize: HandlerRegistry::new("window resize"),
            mouse_down: HandlerRegistry::new("mouse down"),
            mouse_up: HandlerRegistry::new("mouse up"),
            mouse_move: HandlerRegistry::new("mouse move"),
            frame_update: HandlerRegistry::new("frame update"),
            entity_mouse_down: HandlerRegistry::new("entity mouse down"),
            entity_mouse_up: HandlerRegistry::new("entity mouse up"),
            entity_mouse_click: HandlerRegistry::new("entity mouse click"),
            entity_mouse_drag: HandlerRegistry::new("entity mouse drag"),
            entity_mouse_enter: HandlerRegistry::new("entity mouse enter"),
            entity_mouse_leave: HandlerRegistry::new("entity mouse leave"),
            pending_click_or_drag: None,
            most_recent_enter: None,
            previous_mouse_location: None,
        }
    }

    /// Register a handler for key presses.
    pub fn register_key_down_handler(&mut self, handler: Rc<RefCell<dyn KeyDownHandler>>) {
        self.key_down.register(handler);
    }

    /// Unregister the key press handler named `name`.
    pub fn unregister_key_down_handler(&mut self, name: &str) {
        self.key_down.unregister(name);
    }

    /// Register a handler for key releases.
    pub fn register_key_up_handler(&mut self, handler: Rc<RefCell<dyn KeyUpHandler>>) {
        self.key_up.register(handler);
    }

    /// Unregister the key release handler named `name`.
    pub fn unregister_key_up_handler(&mut self, name: &str) {
        self.key_up.unregister(name);
    }

    /// Register a handler for canvas resizes.
    pub fn register_canvas_resize_handler(&mut self, handler: Rc<RefCell<dyn CanvasResizeHandler>>) {
        self.canvas_resize.register(handler);
    }

    /// Unregister the canvas resize handler named `name`.
    pub fn unregister_canvas_resize_handler(&mut self, name: &str) {
        self.canvas_resize.unregister(name);
    }

    /// Register a handler for window resizes.
    pub fn register_window_resize_handler(&mut self, handler: Rc<RefCell<dyn WindowResizeHandler>>) {
        self.window_resize.register(handler);
    }

    /// Unregister the window resize handler named `name`.
    pub fn unregister_window_resize_handler(&mut self, name: &str) {
        self.window_resize.unregister(name);
    }

    /// Register a handler for global mouse presses.
    pub fn register_mouse_down_handler(&mut self, handler: Rc<RefCell<dyn MouseDownHandler>>) {
        self.mouse_down.register(handler);
    }

    /// Unregister the global mouse press handler named `name`.
    pub fn unregister_mouse_down_handler(&mut self, name: &str) {
        self.mouse_down.unregister(name);
    }

    /// Register a handler for global mouse releases.
    pub fn register_mouse_up_handler(&mut self, handler: Rc<RefCell<dyn MouseUpHandler>>) {
        self.mouse_up.register(handler);
    }

    /// Unregister the global mouse release handler named `name`.
    pub fn unregister_mouse_up_handler(&mut self, name: &str) {
        self.mouse_up.unregister(name);
    }

    /// Register a handler for global mouse movement.
    pub fn register_mouse_move_handler(&mut self, handler: Rc<RefCell<dyn MouseMoveHandler>>) {
        self.mouse_move.register(handler);
    }

    /// Unregister the global mouse movement handler named `name`.
    pub fn unregister_mouse_move_handler(&mut self, name: &str) {
        self.mouse_move.unregister(name);
    }

    /// Register a handler for frame updates.
    pub fn register_frame_update_handler(&mut self, handler: Rc<RefCell<dyn FrameUpdateHandler>>) {
        self.frame_update.register(handler);
    }

    /// Unregister the frame update handler named `name`.
    pub fn unregister_frame_update_handler(&mut self, name: &str) {
        self.frame_update.unregister(name);
    }

    /// Register an entity's handler for mouse presses on it.
    pub fn register_entity_mouse_down_handler(
        &mut self,
        handler: Rc<RefCell<dyn EntityMouseDownHandler>>,
    ) {
        self.entity_mouse_down.register(handler);
    }

    /// Unregister the entity mouse press handler named `name`.
    pub fn unregister_entity_mouse_down_handler(&mut self, name: &str) {
        self.entity_mouse_down.unregister(name);
    }

    /// Register an entity's handler for mouse releases on it.
    pub fn register_entity_mouse_up_handler(
        &mut self,
        handler: Rc<RefCell<dyn EntityMouseUpHandler>>,
    ) {
        self.entity_mouse_up.register(handler);
    }

    /// Unregister the entity mouse release handler named `name`.
    pub fn unregister_entity_mouse_up_handler(&mut self, name: &str) {
        self.entity_mouse_up.unregister(name);
    }

    /// Register an entity's handler for clicks on it.
    pub fn register_entity_mouse_click_handler(
        &mut self,
        handler: Rc<RefCell<dyn EntityMouseClickHandler>>,
    ) {
        self.entity_mouse_click.register(handler);
    }

    /// Unregister the entity click handler named `name`.
    pub fn unregister_entity_mouse_click_handler(&mut self, name: &str) {
        self.entity_mouse_click.unregister(name);
    }

    /// Register an entity's handler for drags starting on it.
    pub fn register_entity_mouse_drag_handler(
        &mut self,
        handler: Rc<RefCell<dyn EntityMouseDragHandler>>,
    ) {
        self.entity_mouse_drag.register(handler);
    }

    /// Unregister the entity drag handler named `name`.
    pub fn unregister_entity_mouse_drag_handler(&mut self, name: &str) {
        self.entity_mouse_drag.unregister(name);
    }

    /// Register an entity's handler for the pointer entering it.
    pub fn register_entity_mouse_enter_handler(
        &mut self,
        handler: Rc<RefCell<dyn EntityMouseEnterHandler>>,
    ) {
        self.entity_mouse_enter.register(handler);
    }

    /// Unregister the entity enter handler named `name`.
    pub fn unregister_entity_mouse_enter_handler(&mut self, name: &str) {
        self.entity_mouse_enter.unregister(name);
    }

    /// Register an entity's handler for the pointer leaving it.
    pub fn register_entity_mouse_leave_handler(
        &mut self,
        handler: Rc<RefCell<dyn EntityMouseLeaveHandler>>,
    ) {
        self.entity_mouse_leave.register(handler);
    }

    /// Unregister the entity leave handler named `name`.
    pub fn unregister_entity_mouse_leave_handler(&mut self, name: &str) {
        self.entity_mouse_leave.unregister(name);
    }

    /// Route a key press to every key down handler.
    pub fn raise_key_down_event(&mut self, info: &KeyInfo) {
        self.key_down.for_each(|h| h.on_key_down(info));
    }

    /// Route a key release to every key up handler.
    pub fn raise_key_up_event(&mut self, info: &KeyInfo) {
        self.key_up.for_each(|h| h.on_key_up(info));
    }

    /// Route a canvas resize to every canvas resize handler.
    pub fn raise_canvas_resize_event(&mut self, size: Size) {
        self.canvas_resize.for_each(|h| h.on_canvas_resize(size));
    }

    /// Route a window resize to every window resize handler.
    pub fn raise_window_resize_event(&mut self, size: Size) {
        self.window_resize.for_each(|h| h.on_window_resize(size));
    }

    /// Announce the start of a frame to every frame update handler.
    pub fn raise_frame_update_event(&mut self, frames_per_second: u32) {
        self.frame_update
            .for_each(|h| h.on_frame_update(frames_per_second));
    }

    /// Route a mouse press at `global_location`.
    ///
    /// Every global mouse down handler hears the event first. The press is
    /// then resolved against `scan`; a hit entity receives its entity mouse
    /// down, and a hit entity with a click or drag handler becomes the
    /// pending target for the matching release or movement.
    pub fn raise_mouse_down_event(&mut self, scan: &dyn HitScan, global_location: Point) {
        self.mouse_down.for_each(|h| h.on_mouse_down(global_location));

        if self.entity_mouse_down.is_empty()
            && self.entity_mouse_click.is_empty()
            && self.entity_mouse_drag.is_empty()
        {
            return;
        }
        if let Some(name) = scan.front_most_entity_at(global_location, true) {
            let mut handled = self
                .entity_mouse_down
                .with_named(&name, |h| h.on_entity_mouse_down(global_location));
            if self.entity_mouse_click.contains(&name) || self.entity_mouse_drag.contains(&name) {
                self.pending_click_or_drag = Some(name.clone());
                handled = true;
            }
            if !handled {
                log::warn!(
                    "mouse press hit entity '{name}' but no down, click, or drag handler is registered for it"
                );
            }
        }
    }

    /// Route a mouse release at `global_location`.
    ///
    /// Every global mouse up handler hears the event first. A hit entity
    /// receives its entity mouse up; it additionally receives a click when
    /// it is the entity the pending press landed on. The pending target is
    /// cleared regardless of where the release lands.
    pub fn raise_mouse_up_event(&mut self, scan: &dyn HitScan, global_location: Point) {
        self.mouse_up.for_each(|h| h.on_mouse_up(global_location));

        if !(self.entity_mouse_up.is_empty() && self.entity_mouse_click.is_empty())
            && let Some(name) = scan.front_most_entity_at(global_location, true)
        {
            let mut handled = false;
            if self.pending_click_or_drag.as_deref() == Some(name.as_str()) {
                handled |= self
                    .entity_mouse_click
                    .with_named(&name, |h| h.on_entity_mouse_click(global_location));
            }
            handled |= self
                .entity_mouse_up
                .with_named(&name, |h| h.on_entity_mouse_up(global_location));
            if !handled && !self.entity_mouse_drag.contains(&name) {
                log::warn!(
                    "mouse release hit entity '{name}' but no up or click handler is registered for it"
                );
            }
        }
        self.pending_click_or_drag = None;
    }

    /// Handle a mouse release outside the canvas: abandon any pending click
    /// or drag without hit-testing or invoking entity handlers.
    pub fn raise_window_mouse_up_event(&mut self) {
        self.pending_click_or_drag = None;
    }

    /// Route pointer movement to `global_location`.
    ///
    /// Reports with zero movement are suppressed entirely. The first report
    /// establishes the movement baseline, so it resolves enter/leave but
    /// raises no movement events. Otherwise every global mouse move handler
    /// hears the event, a pending drag target receives its drag, and changes
    /// to the frontmost entity raise leave then enter.
    pub fn raise_mouse_move_event(&mut self, scan: &dyn HitScan, global_location: Point) {
        let movement = self
            .previous_mouse_location
            .replace(global_location)
            .map(|previous| global_location - previous);
        if movement == Some(Vec2::ZERO) {
            return;
        }

        if let Some(movement) = movement {
            self.mouse_move
                .for_each(|h| h.on_mouse_move(global_location, movement));
            if let Some(pending) = self.pending_click_or_drag.clone() {
                self.entity_mouse_drag
                    .with_named(&pending, |h| h.on_entity_mouse_drag(global_location, movement));
            }
        }

        if self.entity_mouse_enter.is_empty() && self.entity_mouse_leave.is_empty() {
            return;
        }
        let front_most = scan.front_most_entity_at(global_location, true);
        if front_most != self.most_recent_enter {
            if let Some(previous) = self.most_recent_enter.take() {
                self.entity_mouse_leave
                    .with_named(&previous, |h| h.on_entity_mouse_leave(global_location));
            }
            if let Some(name) = &front_most {
                self.entity_mouse_enter
                    .with_named(name, |h| h.on_entity_mouse_enter(global_location));
            }
            self.most_recent_enter = front_most;
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Dispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Dispatcher")
            .field("pending_click_or_drag", &self.pending_click_or_drag)
            .field("most_recent_enter", &self.most_recent_enter)
            .field("previous_mouse_location", &self.previous_mouse_location)
            .finish_non_exhaustive()
    }
}
