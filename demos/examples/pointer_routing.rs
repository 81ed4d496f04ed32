// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer routing across an overlapping z stack: hover, click, and drag
//! events delivered to the frontmost card under a simulated pointer.
//!
//! Run with `cargo run --example pointer_routing`.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};

use limelight_demos::TextCanvas;
use limelight_dispatch::{
    EntityMouseClickHandler, EntityMouseDragHandler, EntityMouseEnterHandler,
    EntityMouseLeaveHandler, EventHandler,
};
use limelight_scene::{
    Director, EntityCore, EntityHandle, Layer, Renderable, Scene, SceneDirector, ZInsert,
};

struct Card {
    core: EntityCore,
    origin: Point,
    glyph: char,
}

impl Card {
    fn shared(label: &str, origin: Point, glyph: char) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            core: EntityCore::new(Some(label)),
            origin,
            glyph,
        }))
    }

    fn announce(&self, event: &str) {
        println!("  {} <- {event}", self.core.name());
    }
}

impl Renderable<TextCanvas> for Card {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn render(&mut self, canvas: &mut TextCanvas) {
        canvas.fill_rect(self.bounding_rect(), self.glyph);
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, (8.0, 4.0))
    }
}

impl EventHandler for Card {
    fn name(&self) -> &str {
        self.core.name()
    }
}

impl EntityMouseEnterHandler for Card {
    fn on_entity_mouse_enter(&mut self, _global_location: Point) {
        self.announce("enter");
    }
}

impl EntityMouseLeaveHandler for Card {
    fn on_entity_mouse_leave(&mut self, _global_location: Point) {
        self.announce("leave");
    }
}

impl EntityMouseClickHandler for Card {
    fn on_entity_mouse_click(&mut self, global_location: Point) {
        self.announce(&format!(
            "click at ({}, {})",
            global_location.x, global_location.y
        ));
    }
}

impl EntityMouseDragHandler for Card {
    fn on_entity_mouse_drag(&mut self, _global_location: Point, movement: Vec2) {
        self.origin += movement;
        self.announce(&format!("drag by ({}, {})", movement.x, movement.y));
    }
}

struct Stage {
    cards: Vec<EntityHandle<TextCanvas>>,
}

impl SceneDirector<TextCanvas> for Stage {
    fn next_scene(&mut self) -> Option<Scene<TextCanvas>> {
        let layer = Layer::shared(Some("cards"));
        for card in self.cards.drain(..) {
            layer.borrow_mut().insert(card, ZInsert::Front);
        }
        let mut scene = Scene::new(Some("table"));
        scene.insert_layer(layer, ZInsert::Front);
        Some(scene)
    }
}

fn main() {
    let mut canvas = TextCanvas::new(26, 8);
    let lower = Card::shared("lower", Point::new(2.0, 1.0), 'a');
    let upper = Card::shared("upper", Point::new(6.0, 3.0), 'B');

    let mut director = Director::new(Box::new(Stage {
        cards: vec![lower.clone(), upper.clone()],
    }));
    for card in [&lower, &upper] {
        let dispatcher = director.dispatcher();
        dispatcher.register_entity_mouse_enter_handler(card.clone());
        dispatcher.register_entity_mouse_leave_handler(card.clone());
        dispatcher.register_entity_mouse_click_handler(card.clone());
        dispatcher.register_entity_mouse_drag_handler(card.clone());
    }

    director.render(&mut canvas);
    print!("{}", canvas.to_text());

    println!("hover across both cards:");
    for x in [0.0, 3.0, 12.0, 20.0] {
        director.on_mouse_move(Point::new(x, 4.0));
    }

    println!("click the overlap (the upper card wins):");
    let overlap = Point::new(7.0, 3.5);
    director.on_mouse_move(overlap);
    director.on_mouse_down(overlap);
    director.on_mouse_up(overlap);

    println!("drag the upper card down and to the right:");
    director.on_mouse_down(overlap);
    director.on_mouse_move(Point::new(10.0, 5.0));
    director.on_mouse_move(Point::new(13.0, 6.0));
    director.on_mouse_up(Point::new(13.0, 6.0));

    canvas.clear();
    director.render(&mut canvas);
    print!("{}", canvas.to_text());
}
