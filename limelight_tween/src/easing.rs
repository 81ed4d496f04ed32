// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves: acceleration and deceleration profiles for tweens.
//!
//! Every curve maps a progress fraction to an eased fraction. Inputs at or
//! below zero return exactly `0.0` and inputs at or above one return exactly
//! `1.0`, so animation endpoints land precisely despite floating-point curve
//! math in between. The named power families (quad through quint) factor
//! through the configurable power variants; the remaining families use the
//! standard Penner closed forms.

use std::f64::consts::PI;

/// An easing curve controlling the acceleration and deceleration of a tween.
///
/// `In` variants start slow, `Out` variants end slow, and `InOut` variants do
/// both. [`EasingStyle::Linear`] applies no shaping at all.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EasingStyle {
    /// No shaping; the eased fraction equals the input fraction.
    Linear,

    /// Configurable power curve, easing in. Exponent 2 is `InQuad`, 3 is
    /// `InCubic`, and so on.
    InPow {
        /// The exponent of the power curve.
        exponent: f64,
    },
    /// Configurable power curve, easing out.
    OutPow {
        /// The exponent of the power curve.
        exponent: f64,
    },
    /// Configurable power curve, easing in then out.
    InOutPow {
        /// The exponent of the power curve.
        exponent: f64,
    },

    /// Quadratic ease in.
    InQuad,
    /// Quadratic ease out.
    OutQuad,
    /// Quadratic ease in and out.
    InOutQuad,

    /// Cubic ease in.
    InCubic,
    /// Cubic ease out.
    OutCubic,
    /// Cubic ease in and out.
    InOutCubic,

    /// Quartic ease in.
    InQuart,
    /// Quartic ease out.
    OutQuart,
    /// Quartic ease in and out.
    InOutQuart,

    /// Quintic ease in.
    InQuint,
    /// Quintic ease out.
    OutQuint,
    /// Quintic ease in and out.
    InOutQuint,

    /// Sinusoidal ease in.
    InSine,
    /// Sinusoidal ease out.
    OutSine,
    /// Sinusoidal ease in and out.
    InOutSine,

    /// Exponential ease in.
    InExponential,
    /// Exponential ease out.
    OutExponential,
    /// Exponential ease in and out.
    InOutExponential,

    /// Overshooting ease in (pulls back before advancing).
    InBack,
    /// Overshooting ease out (overshoots the target, then settles).
    OutBack,
    /// Overshooting ease in and out.
    InOutBack,

    /// Circular ease in.
    InCirc,
    /// Circular ease out.
    OutCirc,
    /// Circular ease in and out.
    InOutCirc,

    /// Bouncing ease in.
    InBounce,
    /// Bouncing ease out (the classic four-segment bounce).
    OutBounce,
    /// Bouncing ease in and out.
    InOutBounce,

    /// Elastic ease in.
    InElastic,
    /// Elastic ease out.
    OutElastic,
    /// Elastic ease in and out.
    InOutElastic,
}

impl EasingStyle {
    /// The direction-swapped version of this curve: `In` becomes `Out` and
    /// vice versa, while `InOut` variants and [`EasingStyle::Linear`] map to
    /// themselves.
    ///
    /// Used to play an animation backward with matching deceleration
    /// characteristics rather than literally reversing sample order.
    pub fn inverse(self) -> Self {
        match self {
            Self::InPow { exponent } => Self::OutPow { exponent },
            Self::OutPow { exponent } => Self::InPow { exponent },
            Self::InQuad => Self::OutQuad,
            Self::OutQuad => Self::InQuad,
            Self::InCubic => Self::OutCubic,
            Self::OutCubic => Self::InCubic,
            Self::InQuart => Self::OutQuart,
            Self::OutQuart => Self::InQuart,
            Self::InQuint => Self::OutQuint,
            Self::OutQuint => Self::InQuint,
            Self::InSine => Self::OutSine,
            Self::OutSine => Self::InSine,
            Self::InExponential => Self::OutExponential,
            Self::OutExponential => Self::InExponential,
            Self::InBack => Self::OutBack,
            Self::OutBack => Self::InBack,
            Self::InCirc => Self::OutCirc,
            Self::OutCirc => Self::InCirc,
            Self::InBounce => Self::OutBounce,
            Self::OutBounce => Self::InBounce,
            Self::InElastic => Self::OutElastic,
            Self::OutElastic => Self::InElastic,
            other => other,
        }
    }

    /// Evaluate the curve at `fraction`.
    ///
    /// Fractions at or below `0.0` return exactly `0.0` and fractions at or
    /// above `1.0` return exactly `1.0`; the curve formulas only ever see the
    /// open interval.
    pub fn apply(self, fraction: f64) -> f64 {
        // Ensure values at the initial and ending positions are exact.
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Linear => fraction,

            Self::InPow { exponent } => fraction.powf(exponent),
            Self::OutPow { exponent } => 1.0 - (1.0 - fraction).powf(exponent),
            Self::InOutPow { exponent } => {
                if fraction < 0.5 {
                    (fraction * 2.0).powf(exponent) / 2.0
                } else {
                    1.0 - (2.0 - fraction * 2.0).powf(exponent) / 2.0
                }
            }

            Self::InQuad => Self::InPow { exponent: 2.0 }.apply(fraction),
            Self::OutQuad => Self::OutPow { exponent: 2.0 }.apply(fraction),
            Self::InOutQuad => Self::InOutPow { exponent: 2.0 }.apply(fraction),

            Self::InCubic => Self::InPow { exponent: 3.0 }.apply(fraction),
            Self::OutCubic => Self::OutPow { exponent: 3.0 }.apply(fraction),
            Self::InOutCubic => Self::InOutPow { exponent: 3.0 }.apply(fraction),

            Self::InQuart => Self::InPow { exponent: 4.0 }.apply(fraction),
            Self::OutQuart => Self::OutPow { exponent: 4.0 }.apply(fraction),
            Self::InOutQuart => Self::InOutPow { exponent: 4.0 }.apply(fraction),

            Self::InQuint => Self::InPow { exponent: 5.0 }.apply(fraction),
            Self::OutQuint => Self::OutPow { exponent: 5.0 }.apply(fraction),
            Self::InOutQuint => Self::InOutPow { exponent: 5.0 }.apply(fraction),

            Self::InSine => 1.0 - (fraction * PI / 2.0).cos(),
            Self::OutSine => (fraction * PI / 2.0).sin(),
            Self::InOutSine => (1.0 - (PI * fraction).cos()) / 2.0,

            Self::InExponential => 1024_f64.powf(fraction - 1.0),
            Self::OutExponential => 1.0 - 2_f64.powf(-10.0 * fraction),
            Self::InOutExponential => {
                if fraction < 0.5 {
                    1024_f64.powf(fraction * 2.0 - 1.0) / 2.0
                } else {
                    (-(2_f64.powf(-10.0 * (fraction * 2.0 - 1.0))) + 2.0) / 2.0
                }
            }

            Self::InBack => fraction.powi(2) * (2.7 * fraction - 1.7),
            Self::OutBack => (fraction - 1.0).powi(2) * (2.7 * (fraction - 1.0) + 1.7) + 1.0,
            Self::InOutBack => {
                if fraction < 0.5 {
                    ((fraction * 2.0).powi(2) * (3.5925 * (fraction * 2.0) - 2.5925)) / 2.0
                } else {
                    ((fraction * 2.0 - 2.0).powi(2) * (3.5925 * (fraction * 2.0 - 2.0) + 2.5925))
                        / 2.0
                        + 1.0
                }
            }

            Self::InCirc => 1.0 - (1.0 - fraction.powi(2)).sqrt(),
            Self::OutCirc => (1.0 - (fraction - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if fraction < 0.5 {
                    -((1.0 - (fraction * 2.0).powi(2)).sqrt() - 1.0) / 2.0
                } else {
                    ((1.0 - (-fraction * 2.0 + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Self::InBounce => 1.0 - Self::OutBounce.apply(1.0 - fraction),
            Self::OutBounce => {
                if fraction < 1.0 / 2.75 {
                    7.5625 * fraction.powi(2)
                } else if fraction < 2.0 / 2.75 {
                    7.5625 * (fraction - 1.5 / 2.75).powi(2) + 0.75
                } else if fraction < 2.5 / 2.75 {
                    7.5625 * (fraction - 2.25 / 2.75).powi(2) + 0.9375
                } else {
                    7.5625 * (fraction - 2.625 / 2.75).powi(2) + 0.984375
                }
            }
            Self::InOutBounce => {
                if fraction < 0.5 {
                    Self::InBounce.apply(fraction * 2.0) / 2.0
                } else {
                    Self::OutBounce.apply(fraction * 2.0 - 1.0) / 2.0 + 0.5
                }
            }

            Self::InElastic => {
                -(2_f64.powf(10.0 * fraction - 10.0))
                    * ((fraction * 10.0 - 10.75) * ((2.0 * PI) / 3.0)).sin()
            }
            Self::OutElastic => {
                2_f64.powf(-10.0 * fraction) * ((fraction * 10.0 - 0.75) * ((2.0 * PI) / 3.0)).sin()
                    + 1.0
            }
            Self::InOutElastic => {
                if fraction < 0.5 {
                    -(2_f64.powf(20.0 * fraction - 10.0)
                        * ((20.0 * fraction - 11.125) * ((PI * 2.0) / 4.5)).sin())
                        / 2.0
                } else {
                    (2_f64.powf(-20.0 * fraction + 10.0)
                        * ((20.0 * fraction - 11.125) * ((PI * 2.0) / 4.5)).sin())
                        / 2.0
                        + 1.0
                }
            }
        }
    }
}

impl Default for EasingStyle {
    fn default() -> Self {
        Self::Linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[EasingStyle] = &[
        EasingStyle::Linear,
        EasingStyle::InPow { exponent: 2.5 },
        EasingStyle::OutPow { exponent: 2.5 },
        EasingStyle::InOutPow { exponent: 2.5 },
        EasingStyle::InQuad,
        EasingStyle::OutQuad,
        EasingStyle::InOutQuad,
        EasingStyle::InCubic,
        EasingStyle::OutCubic,
        EasingStyle::InOutCubic,
        EasingStyle::InQuart,
        EasingStyle::OutQuart,
        EasingStyle::InOutQuart,
        EasingStyle::InQuint,
        EasingStyle::OutQuint,
        EasingStyle::InOutQuint,
        EasingStyle::InSine,
        EasingStyle::OutSine,
        EasingStyle::InOutSine,
        EasingStyle::InExponential,
        EasingStyle::OutExponential,
        EasingStyle::InOutExponential,
        EasingStyle::InBack,
        EasingStyle::OutBack,
        EasingStyle::InOutBack,
        EasingStyle::InCirc,
        EasingStyle::OutCirc,
        EasingStyle::InOutCirc,
        EasingStyle::InBounce,
        EasingStyle::OutBounce,
        EasingStyle::InOutBounce,
        EasingStyle::InElastic,
        EasingStyle::OutElastic,
        EasingStyle::InOutElastic,
    ];

    #[test]
    fn endpoints_are_exact_for_every_style() {
        for style in ALL {
            assert_eq!(style.apply(0.0), 0.0, "{style:?} at 0");
            assert_eq!(style.apply(1.0), 1.0, "{style:?} at 1");
            // Out-of-range inputs clamp to the exact endpoints too.
            assert_eq!(style.apply(-0.25), 0.0, "{style:?} below 0");
            assert_eq!(style.apply(1.25), 1.0, "{style:?} above 1");
        }
    }

    #[test]
    fn linear_is_identity_on_open_interval() {
        for i in 1..10 {
            let x = f64::from(i) / 10.0;
            assert_eq!(EasingStyle::Linear.apply(x), x);
        }
    }

    #[test]
    fn named_power_families_match_configured_curves() {
        let pairs = [
            (EasingStyle::InQuad, EasingStyle::InPow { exponent: 2.0 }),
            (EasingStyle::OutCubic, EasingStyle::OutPow { exponent: 3.0 }),
            (
                EasingStyle::InOutQuart,
                EasingStyle::InOutPow { exponent: 4.0 },
            ),
            (EasingStyle::InQuint, EasingStyle::InPow { exponent: 5.0 }),
        ];
        for (named, configured) in pairs {
            for i in 0..=20 {
                let x = f64::from(i) / 20.0;
                assert_eq!(named.apply(x), configured.apply(x), "{named:?} at {x}");
            }
        }
    }

    #[test]
    fn inverse_swaps_direction_and_is_an_involution() {
        for style in ALL {
            assert_eq!(style.inverse().inverse(), *style);
        }
        assert_eq!(EasingStyle::InQuad.inverse(), EasingStyle::OutQuad);
        assert_eq!(EasingStyle::OutElastic.inverse(), EasingStyle::InElastic);
        assert_eq!(EasingStyle::Linear.inverse(), EasingStyle::Linear);
        assert_eq!(EasingStyle::InOutSine.inverse(), EasingStyle::InOutSine);
    }

    #[test]
    fn in_out_pairs_mirror_each_other() {
        // out(x) == 1 - in(1 - x) holds for the power families by construction.
        for i in 1..10 {
            let x = f64::from(i) / 10.0;
            let mirrored = 1.0 - EasingStyle::InCubic.apply(1.0 - x);
            assert!((EasingStyle::OutCubic.apply(x) - mirrored).abs() < 1e-12);
        }
    }

    #[test]
    fn monotonic_families_are_non_decreasing() {
        let monotonic = [
            EasingStyle::InQuad,
            EasingStyle::OutQuad,
            EasingStyle::InOutCubic,
            EasingStyle::InSine,
            EasingStyle::OutSine,
            EasingStyle::InExponential,
            EasingStyle::OutExponential,
            EasingStyle::InCirc,
            EasingStyle::OutCirc,
            EasingStyle::OutBounce,
        ];
        for style in monotonic {
            let mut previous = 0.0;
            for i in 0..=100 {
                let eased = style.apply(f64::from(i) / 100.0);
                assert!(eased >= previous, "{style:?} decreased at step {i}");
                previous = eased;
            }
        }
    }

    #[test]
    fn out_bounce_segments_join_continuously() {
        // The four quadratic segments of the bounce meet at 1/2.75, 2/2.75,
        // and 2.5/2.75 within floating tolerance.
        for boundary in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let below = EasingStyle::OutBounce.apply(boundary - 1e-9);
            let above = EasingStyle::OutBounce.apply(boundary + 1e-9);
            assert!((below - above).abs() < 1e-6, "discontinuity at {boundary}");
        }
        // The first segment is exactly 7.5625 x^2.
        let x = 0.5 / 2.75;
        assert_eq!(EasingStyle::OutBounce.apply(x), 7.5625 * x * x);
    }

    #[test]
    fn elastic_and_back_overshoot() {
        // Back eases dip below zero near the start; elastic eases overshoot 1.
        assert!(EasingStyle::InBack.apply(0.2) < 0.0);
        assert!(EasingStyle::OutBack.apply(0.8) > 1.0);
        let overshoots = (1..100)
            .map(|i| EasingStyle::OutElastic.apply(f64::from(i) / 100.0))
            .any(|v| v > 1.0);
        assert!(overshoots, "OutElastic never exceeded 1.0");
    }
}
