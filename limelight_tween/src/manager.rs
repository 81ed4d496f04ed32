// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::SharedAnimation;

/// The per-frame animation scheduler.
///
/// Registered animations are advanced once per [`update_frame`] call and
/// dropped from the registry in the same frame their terminal state is
/// observed. The manager holds one handle per animation; application code
/// keeps its own [`SharedAnimation`] clone to control playback.
///
/// [`update_frame`]: AnimationManager::update_frame
#[derive(Default)]
pub struct AnimationManager {
    animations: Vec<SharedAnimation>,
}

impl AnimationManager {
    /// Create a manager with no registered animations.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of currently registered animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Whether no animations are registered.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Register an animation for frame updates, optionally starting playback
    /// immediately. An animation that previously completed is rewound and
    /// runs again from the start.
    ///
    /// # Panics
    ///
    /// Panics if the animation is already registered.
    pub fn run(&mut self, animation: &SharedAnimation, auto_play: bool) {
        assert!(
            !self.animations.iter().any(|a| Rc::ptr_eq(a, animation)),
            "animation is already registered with this manager"
        );
        if animation.borrow().is_completed() {
            animation.borrow_mut().requeue();
        }
        self.animations.push(Rc::clone(animation));
        if auto_play {
            animation.borrow_mut().play();
        }
    }

    /// Advance every registered animation by one frame of `frame_rate`
    /// seconds, then drop those that reached a terminal state.
    pub fn update_frame(&mut self, frame_rate: f64) {
        for animation in &self.animations {
            animation.borrow_mut().update_frame(frame_rate);
        }
        self.animations.retain(|a| !a.borrow().is_completed());
    }

    /// Terminate every registered animation. All of them are dropped from
    /// the registry on the next frame.
    pub fn terminate_all(&mut self) {
        for animation in &self.animations {
            animation.borrow_mut().terminate();
        }
    }

    /// Pause every registered animation.
    pub fn pause_all(&mut self) {
        for animation in &self.animations {
            animation.borrow_mut().pause();
        }
    }

    /// Resume every registered animation.
    pub fn play_all(&mut self) {
        for animation in &self.animations {
            animation.borrow_mut().play();
        }
    }

    /// Rewind every registered animation to its start.
    pub fn restart_all(&mut self) {
        for animation in &self.animations {
            animation.borrow_mut().restart();
        }
    }
}

impl Debug for AnimationManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AnimationManager")
            .field("animations", &self.animations.len())
            .finish_non_exhaustive()
    }
}
