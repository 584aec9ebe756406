//! Easing functions for transition interpolation.
//!
//! Every curve maps raw progress in `[0, 1]` to eased progress in `[0, 1]`
//! and hits both endpoints exactly, so a finished transition lands on its
//! target without drift.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Exponential ease-in: `2^(10(t-1))`.
    ExponentialIn,
    /// Exponential ease-out: `1 - 2^(-10t)`.
    ExponentialOut,
    /// Exponential ease-in-out. Sharp acceleration, sharp deceleration,
    /// point-symmetric around `(0.5, 0.5)`.
    #[default]
    ExponentialInOut,
}

impl EasingFunction {
    /// Evaluate the curve at raw progress `t`.
    ///
    /// Input is clamped to `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::ExponentialIn => {
                if t == 0.0 {
                    0.0
                } else {
                    1024f32.powf(t - 1.0)
                }
            }
            Self::ExponentialOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialInOut => {
                if t == 0.0 {
                    return 0.0;
                }
                if t == 1.0 {
                    return 1.0;
                }
                let k = t * 2.0;
                if k < 1.0 {
                    0.5 * 1024f32.powf(k - 1.0)
                } else {
                    0.5 * (2.0 - 2f32.powf(-10.0 * (k - 1.0)))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::ExponentialIn,
        EasingFunction::ExponentialOut,
        EasingFunction::ExponentialInOut,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?} at 0");
            assert_eq!(f.evaluate(1.0), 1.0, "{f:?} at 1");
        }
    }

    #[test]
    fn test_input_clamping() {
        for f in ALL {
            assert_eq!(f.evaluate(-0.5), 0.0);
            assert_eq!(f.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_exponential_in_out_midpoint() {
        let f = EasingFunction::ExponentialInOut;
        assert!((f.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_exponential_in_out_symmetry() {
        let f = EasingFunction::ExponentialInOut;
        for i in 1..50 {
            let t = i as f32 / 100.0;
            let lhs = f.evaluate(t);
            let rhs = 1.0 - f.evaluate(1.0 - t);
            assert!((lhs - rhs).abs() < 1e-5, "asymmetric at t={t}");
        }
    }

    #[test]
    fn test_exponential_in_out_is_sharp() {
        // Almost nothing happens in the first tenth, almost everything is
        // done by the last tenth.
        let f = EasingFunction::ExponentialInOut;
        assert!(f.evaluate(0.1) < 0.01);
        assert!(f.evaluate(0.9) > 0.99);
    }

    #[test]
    fn test_monotonic() {
        for f in ALL {
            let mut prev = f.evaluate(0.0);
            for i in 1..=100 {
                let next = f.evaluate(i as f32 / 100.0);
                assert!(next >= prev, "{f:?} decreased at step {i}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_quadratic_values() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_exponential_in_out() {
        assert_eq!(
            EasingFunction::default(),
            EasingFunction::ExponentialInOut
        );
    }
}
