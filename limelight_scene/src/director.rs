// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{Debug, Formatter, Result as FmtResult};

use kurbo::{Point, Size};

use limelight_dispatch::{Dispatcher, KeyInfo};
use limelight_tween::AnimationManager;

use crate::{Canvas, Scene};

/// The application's side of the [`Director`]: supplies scenes and the
/// frame rate, and decides when the current scene is finished.
pub trait SceneDirector<C: Canvas> {
    /// The scene to run next. Returning `None` leaves the stage empty; the
    /// director asks again on the following frame.
    fn next_scene(&mut self) -> Option<Scene<C>>;

    /// Whether the current scene should be torn down at the start of the
    /// next frame. Polled once per frame while a scene is running.
    fn should_scene_terminate(&mut self) -> bool {
        false
    }

    /// The target frame rate the host drives [`Director::render`] at. The
    /// animation clock advances by one frame's worth of seconds per render.
    fn frames_per_second(&self) -> u32 {
        10
    }
}

/// Owns the running scene and the runtime services around it.
///
/// The host forwards its canvas and input events here. Each
/// [`render`](Director::render) call is one frame: scene transitions are
/// resolved, the frame-update event fires, animations advance, and the
/// scene calculates then renders. Pointer events are routed through the
/// current scene's hit scan by the owned [`Dispatcher`].
pub struct Director<C: Canvas> {
    delegate: Box<dyn SceneDirector<C>>,
    dispatcher: Dispatcher,
    animation_manager: AnimationManager,
    current_scene: Option<Scene<C>>,
}

impl<C: Canvas> Director<C> {
    /// Create a director around the application's [`SceneDirector`].
    pub fn new(delegate: Box<dyn SceneDirector<C>>) -> Self {
        Self {
            delegate,
            dispatcher: Dispatcher::new(),
            animation_manager: AnimationManager::new(),
            current_scene: None,
        }
    }

    /// The event dispatcher, for registering and unregistering handlers.
    pub fn dispatcher(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// The animation scheduler, for running animations against the frame
    /// clock.
    pub fn animation_manager(&mut self) -> &mut AnimationManager {
        &mut self.animation_manager
    }

    /// Run one frame against the canvas.
    ///
    /// Nothing happens until the canvas reports its size. Once it does: a
    /// terminating scene is torn down, the next scene is fetched and set up
    /// if the stage is empty, the frame-update event is raised, the
    /// animation clock advances by one frame, and the scene calculates and
    /// renders.
    pub fn render(&mut self, canvas: &mut C) {
        let Some(canvas_size) = canvas.canvas_size() else {
            return;
        };

        if self.current_scene.is_some()
            && self.delegate.should_scene_terminate()
            && let Some(mut scene) = self.current_scene.take()
        {
            scene.teardown();
        }
        if self.current_scene.is_none() {
            self.current_scene = self.delegate.next_scene();
        }
        let Some(scene) = self.current_scene.as_mut() else {
            return;
        };
        if !scene.was_setup() {
            scene.setup(canvas_size, canvas);
        }

        let frames_per_second = self.delegate.frames_per_second().max(1);
        self.dispatcher.raise_frame_update_event(frames_per_second);
        self.animation_manager
            .update_frame(1.0 / f64::from(frames_per_second));

        scene.calculate(canvas_size, canvas);
        scene.render(canvas);
    }

    /// Forward a mouse press at `global_location`. Dropped while no scene
    /// is running.
    pub fn on_mouse_down(&mut self, global_location: Point) {
        let Self {
            dispatcher,
            current_scene,
            ..
        } = self;
        if let Some(scene) = current_scene {
            dispatcher.raise_mouse_down_event(&*scene, global_location);
        }
    }

    /// Forward a mouse release at `global_location`. Dropped while no
    /// scene is running.
    pub fn on_mouse_up(&mut self, global_location: Point) {
        let Self {
            dispatcher,
            current_scene,
            ..
        } = self;
        if let Some(scene) = current_scene {
            dispatcher.raise_mouse_up_event(&*scene, global_location);
        }
    }

    /// Forward a mouse release that happened outside the canvas. Abandons
    /// any pending click or drag without routing to entities.
    pub fn on_window_mouse_up(&mut self) {
        self.dispatcher.raise_window_mouse_up_event();
    }

    /// Forward pointer movement to `global_location`. Dropped while no
    /// scene is running.
    pub fn on_mouse_move(&mut self, global_location: Point) {
        let Self {
            dispatcher,
            current_scene,
            ..
        } = self;
        if let Some(scene) = current_scene {
            dispatcher.raise_mouse_move_event(&*scene, global_location);
        }
    }

    /// Forward a key press.
    pub fn on_key_down(&mut self, info: &KeyInfo) {
        self.dispatcher.raise_key_down_event(info);
    }

    /// Forward a key release.
    pub fn on_key_up(&mut self, info: &KeyInfo) {
        self.dispatcher.raise_key_up_event(info);
    }

    /// Forward a canvas resize.
    pub fn on_canvas_resize(&mut self, size: Size) {
        self.dispatcher.raise_canvas_resize_event(size);
    }

    /// Forward a window resize.
    pub fn on_window_resize(&mut self, size: Size) {
        self.dispatcher.raise_window_resize_event(size);
    }
}

impl<C: Canvas> Debug for Director<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Director")
            .field("dispatcher", &self.dispatcher)
            .field("animation_manager", &self.animation_manager)
            .field("current_scene", &self.current_scene)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use kurbo::Rect;

    use limelight_dispatch::{
        EntityMouseClickHandler, EntityMouseDownHandler, EventHandler, FrameUpdateHandler,
    };
    use limelight_tween::{Animation, EasingStyle, Tween};

    use super::*;
    use crate::{EntityCore, EntityHandle, Layer, Renderable, ZInsert};

    struct TestCanvas {
        size: Option<Size>,
        rendered: Vec<String>,
    }

    impl Canvas for TestCanvas {
        fn canvas_size(&self) -> Option<Size> {
            self.size
        }
    }

    fn canvas() -> TestCanvas {
        TestCanvas {
            size: Some(Size::new(100.0, 100.0)),
            rendered: Vec::new(),
        }
    }

    struct Block {
        core: EntityCore,
        rect: Rect,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Block {
        fn new(rect: Rect, calls: &Rc<RefCell<Vec<String>>>) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                core: EntityCore::new(Some("block")),
                rect,
                calls: Rc::clone(calls),
            }))
        }

        fn record(&self, call: &str) {
            self.calls.borrow_mut().push(call.to_string());
        }
    }

    impl Renderable<TestCanvas> for Block {
        fn core(&self) -> &EntityCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut EntityCore {
            &mut self.core
        }

        fn setup(&mut self, _canvas_size: Size, _canvas: &mut TestCanvas) {
            self.record("setup");
        }

        fn render(&mut self, canvas: &mut TestCanvas) {
            canvas.rendered.push(self.core.name().to_string());
        }

        fn teardown(&mut self) {
            self.record("teardown");
        }

        fn bounding_rect(&self) -> Rect {
            self.rect
        }
    }

    impl EventHandler for Block {
        fn name(&self) -> &str {
            self.core.name()
        }
    }

    impl EntityMouseDownHandler for Block {
        fn on_entity_mouse_down(&mut self, _global_location: Point) {
            self.record("down");
        }
    }

    impl EntityMouseClickHandler for Block {
        fn on_entity_mouse_click(&mut self, _global_location: Point) {
            self.record("click");
        }
    }

    /// Hands out one prepared scene, then leaves the stage empty.
    struct StageManager {
        scenes: Vec<Scene<TestCanvas>>,
        terminate: Rc<Cell<bool>>,
    }

    impl SceneDirector<TestCanvas> for StageManager {
        fn next_scene(&mut self) -> Option<Scene<TestCanvas>> {
            if self.scenes.is_empty() {
                None
            } else {
                Some(self.scenes.remove(0))
            }
        }

        fn should_scene_terminate(&mut self) -> bool {
            self.terminate.replace(false)
        }

        fn frames_per_second(&self) -> u32 {
            1
        }
    }

    fn staged(
        scenes: Vec<Scene<TestCanvas>>,
    ) -> (Director<TestCanvas>, Rc<Cell<bool>>) {
        let terminate = Rc::new(Cell::new(false));
        let director = Director::new(Box::new(StageManager {
            scenes,
            terminate: Rc::clone(&terminate),
        }));
        (director, terminate)
    }

    fn scene_with_block(
        calls: &Rc<RefCell<Vec<String>>>,
    ) -> (Scene<TestCanvas>, Rc<RefCell<Block>>) {
        let block = Block::new(Rect::new(0.0, 0.0, 20.0, 20.0), calls);
        let handle: EntityHandle<TestCanvas> = block.clone();
        let layer = Layer::shared(Some("main"));
        layer.borrow_mut().insert(handle, ZInsert::Front);
        let mut scene = Scene::new(Some("stage"));
        scene.insert_layer(layer, ZInsert::Front);
        (scene, block)
    }

    #[test]
    fn render_waits_for_the_canvas_size() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (scene, _) = scene_with_block(&calls);
        let (mut director, _) = staged(vec![scene]);
        let mut canvas = canvas();
        canvas.size = None;
        director.render(&mut canvas);
        assert!(calls.borrow().is_empty());

        canvas.size = Some(Size::new(100.0, 100.0));
        director.render(&mut canvas);
        assert_eq!(*calls.borrow(), ["setup"]);
        assert_eq!(canvas.rendered.len(), 1);
    }

    #[test]
    fn termination_tears_down_and_advances_to_the_next_scene() {
        let first_calls = Rc::new(RefCell::new(Vec::new()));
        let second_calls = Rc::new(RefCell::new(Vec::new()));
        let (first, _) = scene_with_block(&first_calls);
        let (second, _) = scene_with_block(&second_calls);
        let (mut director, terminate) = staged(vec![first, second]);
        let mut canvas = canvas();

        director.render(&mut canvas);
        assert_eq!(*first_calls.borrow(), ["setup"]);

        terminate.set(true);
        director.render(&mut canvas);
        assert_eq!(*first_calls.borrow(), ["setup", "teardown"]);
        assert_eq!(*second_calls.borrow(), ["setup"]);

        // With the stage exhausted, terminating again empties it.
        terminate.set(true);
        director.render(&mut canvas);
        assert_eq!(*second_calls.borrow(), ["setup", "teardown"]);
        director.render(&mut canvas);
        assert_eq!(canvas.rendered.len(), 2);
    }

    #[test]
    fn frame_update_and_animations_advance_each_render() {
        struct Pulse {
            count: Rc<Cell<u32>>,
        }

        impl EventHandler for Pulse {
            fn name(&self) -> &str {
                "pulse"
            }
        }

        impl FrameUpdateHandler for Pulse {
            fn on_frame_update(&mut self, _frames_per_second: u32) {
                self.count.set(self.count.get() + 1);
            }
        }

        let calls = Rc::new(RefCell::new(Vec::new()));
        let (scene, _) = scene_with_block(&calls);
        let (mut director, _) = staged(vec![scene]);
        let mut canvas = canvas();

        let count = Rc::new(Cell::new(0));
        director.dispatcher().register_frame_update_handler(Rc::new(
            RefCell::new(Pulse {
                count: Rc::clone(&count),
            }),
        ));

        let value = Rc::new(Cell::new(f64::NAN));
        let sink = Rc::clone(&value);
        let animation = Animation::shared(Box::new(Tween::new(
            0.0,
            100.0,
            2.0,
            EasingStyle::Linear,
            move |v| sink.set(v),
        )));
        director.animation_manager().run(&animation, true);

        // One frame per second at the delegate's frame rate of one.
        director.render(&mut canvas);
        director.render(&mut canvas);
        assert_eq!(count.get(), 2);
        assert_eq!(value.get(), 50.0);
    }

    #[test]
    fn pointer_events_route_through_the_scene_to_the_entity() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (scene, block) = scene_with_block(&calls);
        let (mut director, _) = staged(vec![scene]);
        let mut canvas = canvas();
        director.render(&mut canvas);

        let dispatcher = director.dispatcher();
        dispatcher.register_entity_mouse_down_handler(block.clone());
        dispatcher.register_entity_mouse_click_handler(block.clone());

        let on_block = Point::new(10.0, 10.0);
        director.on_mouse_down(on_block);
        director.on_mouse_up(on_block);
        assert_eq!(*calls.borrow(), ["setup", "down", "click"]);

        // A press abandoned by a window release produces no click.
        director.on_mouse_down(on_block);
        director.on_window_mouse_up();
        director.on_mouse_up(on_block);
        assert_eq!(*calls.borrow(), ["setup", "down", "click", "down"]);
    }

    #[test]
    fn pointer_events_without_a_scene_are_dropped() {
        let (mut director, _) = staged(Vec::new());
        director.on_mouse_down(Point::new(5.0, 5.0));
        director.on_mouse_move(Point::new(6.0, 5.0));
        director.on_mouse_up(Point::new(6.0, 5.0));
        director.on_window_mouse_up();
    }
}
