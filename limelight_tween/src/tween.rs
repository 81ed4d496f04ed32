// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::{EasingStyle, Tweenable};

/// A playable interpolation track, driven by a progress fraction.
///
/// [`Tween`] and [`TweenSequence`](crate::TweenSequence) both implement this;
/// an [`Animation`](crate::Animation) owns one as a boxed trait object and
/// drives it from elapsed time.
pub trait TweenTrack {
    /// Total duration of the track, in seconds.
    fn duration(&self) -> f64;

    /// Advance the track to `fraction` of its duration, invoking update
    /// callbacks with the interpolated value.
    fn update(&mut self, fraction: f64);

    /// A track which plays this one backward, with each easing curve
    /// direction-swapped.
    fn inverse(&self) -> Box<dyn TweenTrack>;
}

impl Debug for dyn TweenTrack {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TweenTrack")
            .field("duration", &self.duration())
            .finish_non_exhaustive()
    }
}

/// A single interpolation from one value to another over a fixed duration.
///
/// Each [`update`](TweenTrack::update) eases the progress fraction through
/// the configured [`EasingStyle`] and hands the interpolated value to the
/// update callback. The tween itself holds no clock; time lives in the
/// [`Animation`](crate::Animation) driving it.
pub struct Tween<V: Tweenable> {
    start_value: V,
    end_value: V,
    duration: f64,
    ease: EasingStyle,
    // Shared so that inverse() can reuse the same callback.
    update: Rc<RefCell<dyn FnMut(V)>>,
}

impl<V: Tweenable + 'static> Tween<V> {
    /// Create a tween from `start_value` to `end_value` over `duration`
    /// seconds.
    ///
    /// `update` receives the interpolated value on every frame the owning
    /// animation plays.
    pub fn new(
        start_value: V,
        end_value: V,
        duration: f64,
        ease: EasingStyle,
        update: impl FnMut(V) + 'static,
    ) -> Self {
        Self {
            start_value,
            end_value,
            duration,
            ease,
            update: Rc::new(RefCell::new(update)),
        }
    }

    /// Create a tween whose duration is derived from the distance between
    /// the values, travelled at `speed` units per second.
    ///
    /// A non-positive `speed` is coerced to its magnitude with a logged
    /// warning; a zero speed yields a zero-duration tween, which completes
    /// on its first frame.
    pub fn with_speed(
        start_value: V,
        end_value: V,
        speed: f64,
        ease: EasingStyle,
        update: impl FnMut(V) + 'static,
    ) -> Self {
        let speed = if speed < 0.0 {
            log::warn!("negative tween speed {speed}; using its magnitude");
            -speed
        } else {
            speed
        };
        let distance = start_value.distance(end_value);
        // A distance metric is contractually non-negative; tolerate a
        // misbehaving one rather than aborting playback.
        let distance = if distance < 0.0 {
            log::warn!("negative tween distance {distance}; using its magnitude");
            -distance
        } else {
            distance
        };
        let duration = if speed > 0.0 { distance / speed } else { 0.0 };
        Self::new(start_value, end_value, duration, ease, update)
    }

    fn shared(
        start_value: V,
        end_value: V,
        duration: f64,
        ease: EasingStyle,
        update: Rc<RefCell<dyn FnMut(V)>>,
    ) -> Self {
        Self {
            start_value,
            end_value,
            duration,
            ease,
            update,
        }
    }
}

impl<V: Tweenable + 'static> TweenTrack for Tween<V> {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn update(&mut self, fraction: f64) {
        let eased = self.ease.apply(fraction);
        let value = self.start_value.lerp(self.end_value, eased);
        (self.update.borrow_mut())(value);
    }

    fn inverse(&self) -> Box<dyn TweenTrack> {
        Box::new(Self::shared(
            self.end_value,
            self.start_value,
            self.duration,
            self.ease.inverse(),
            Rc::clone(&self.update),
        ))
    }
}

impl<V: Tweenable + Debug> Debug for Tween<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Tween")
            .field("start_value", &self.start_value)
            .field("end_value", &self.end_value)
            .field("duration", &self.duration)
            .field("ease", &self.ease)
            .finish_non_exhaustive()
    }
}
