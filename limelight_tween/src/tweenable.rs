// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// A value that can be interpolated by a [`Tween`](crate::Tween).
///
/// Implementations provide straight-line interpolation between two values and
/// a scalar distance between them. The distance feeds speed-based tween
/// construction, where a duration is derived from how far the value travels.
pub trait Tweenable: Copy {
    /// The value `fraction` of the way from `self` to `target`.
    ///
    /// A fraction of `0.0` yields `self` and `1.0` yields `target`. Fractions
    /// outside `[0, 1]` extrapolate, which overshooting easing curves rely on.
    fn lerp(self, target: Self, fraction: f64) -> Self;

    /// The non-negative distance from `self` to `target`.
    fn distance(self, target: Self) -> f64;
}

impl Tweenable for f64 {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }

    fn distance(self, target: Self) -> f64 {
        (target - self).abs()
    }
}

impl Tweenable for i32 {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        // Interpolate in f64 and truncate, so integer tweens step rather
        // than round up early.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "intermediate values stay within the i32 endpoints"
        )]
        let stepped = self + (f64::from(target - self) * fraction) as Self;
        stepped
    }

    fn distance(self, target: Self) -> f64 {
        f64::from((target - self).abs())
    }
}

impl Tweenable for Point {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }

    fn distance(self, target: Self) -> f64 {
        (target - self).hypot()
    }
}

impl Tweenable for Vec2 {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }

    fn distance(self, target: Self) -> f64 {
        (target - self).hypot()
    }
}

impl Tweenable for Size {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        Self::new(
            self.width + (target.width - self.width) * fraction,
            self.height + (target.height - self.height) * fraction,
        )
    }

    fn distance(self, target: Self) -> f64 {
        (target - self).to_vec2().hypot()
    }
}
