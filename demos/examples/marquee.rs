// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A block sliding across a text canvas, driven by an eased tween.
//!
//! Run with `cargo run --example marquee`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect, Size};

use limelight_demos::TextCanvas;
use limelight_scene::{
    Canvas as _, Director, EntityCore, EntityHandle, Layer, Renderable, Scene, SceneDirector,
    ZInsert,
};
use limelight_tween::{Animation, EasingStyle, Tween};

const FRAMES_PER_SECOND: u32 = 4;
const SLIDE_SECONDS: f64 = 3.0;

struct Marquee {
    core: EntityCore,
    position: Rc<Cell<Point>>,
}

impl Renderable<TextCanvas> for Marquee {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn render(&mut self, canvas: &mut TextCanvas) {
        canvas.fill_rect(self.bounding_rect(), '#');
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_origin_size(self.position.get(), Size::new(4.0, 2.0))
    }
}

struct Stage {
    position: Rc<Cell<Point>>,
}

impl SceneDirector<TextCanvas> for Stage {
    fn next_scene(&mut self) -> Option<Scene<TextCanvas>> {
        let marquee: EntityHandle<TextCanvas> = Rc::new(RefCell::new(Marquee {
            core: EntityCore::new(Some("marquee")),
            position: Rc::clone(&self.position),
        }));
        let layer = Layer::shared(Some("main"));
        layer.borrow_mut().insert(marquee, ZInsert::Front);
        let mut scene = Scene::new(Some("marquee"));
        scene.insert_layer(layer, ZInsert::Front);
        Some(scene)
    }

    fn frames_per_second(&self) -> u32 {
        FRAMES_PER_SECOND
    }
}

fn main() {
    let mut canvas = TextCanvas::new(30, 4);
    let position = Rc::new(Cell::new(Point::ZERO));
    let mut director = Director::new(Box::new(Stage {
        position: Rc::clone(&position),
    }));

    let sink = Rc::clone(&position);
    let slide = Tween::new(
        Point::new(0.0, 1.0),
        Point::new(26.0, 1.0),
        SLIDE_SECONDS,
        EasingStyle::InOutQuad,
        move |p| sink.set(p),
    );
    let animation = Animation::shared(Box::new(slide));
    director.animation_manager().run(&animation, true);

    let frames = (SLIDE_SECONDS * f64::from(FRAMES_PER_SECOND)) as u32 + 1;
    for frame in 0..frames {
        canvas.clear();
        director.render(&mut canvas);
        let size = canvas.canvas_size().unwrap_or_default();
        println!("frame {frame} ({:.0}x{:.0})", size.width, size.height);
        print!("{}", canvas.to_text());
    }
}
