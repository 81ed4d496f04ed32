// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Tween: easing curves, tweened interpolation, and a per-frame scheduler.
//!
//! ## Overview
//!
//! This crate provides time-driven value interpolation for a frame-based runtime:
//!
//! - [`EasingStyle`]: pure easing curves mapping a progress fraction in `[0, 1]`
//!   to an eased fraction, with exact endpoints.
//! - [`Tweenable`]: the value trait (linear interpolation plus a distance metric)
//!   that any tweened type implements. Provided for `f64`, `i32`, and the kurbo
//!   `Point`, `Vec2`, and `Size` types.
//! - [`Tween`] / [`TweenSequence`]: a single interpolation with an update
//!   callback, and an ordered composition of several (optionally separated by
//!   delays) behind one combined duration.
//! - [`Animation`]: a playable/pausable state machine around one tween, with
//!   looping and reversal.
//! - [`AnimationManager`]: the per-frame scheduler that advances registered
//!   animations and drops them as they complete.
//!
//! ## Scheduling model
//!
//! Everything here is single-threaded and cooperative. The host advances the
//! manager exactly once per frame; callbacks run to completion before the next
//! scene-graph traversal step begins. An animation cancelled with
//! [`Animation::terminate`] is observed on the next tick, never interrupted
//! mid-update.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use limelight_tween::{Animation, AnimationManager, EasingStyle, Tween};
//!
//! let value = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&value);
//! let tween = Tween::new(0.0, 100.0, 2.0, EasingStyle::Linear, move |v| sink.set(v));
//!
//! let mut manager = AnimationManager::new();
//! let animation = Animation::shared(Box::new(tween));
//! manager.run(&animation, true);
//! manager.update_frame(1.0);
//! manager.update_frame(1.0);
//! assert_eq!(value.get(), 50.0);
//! ```

mod animation;
mod easing;
mod manager;
mod sequence;
mod tween;
mod tweenable;

pub use animation::{Animation, AnimationState, SharedAnimation};
pub use easing::EasingStyle;
pub use manager::AnimationManager;
pub use sequence::TweenSequence;
pub use tween::{Tween, TweenTrack};
pub use tweenable::Tweenable;
