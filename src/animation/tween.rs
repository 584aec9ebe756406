//! A single time-bounded interpolation of one transform component.

use std::fmt;

use glam::Vec3;
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Which half of an item's transform a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Scene-space position.
    Position,
    /// Euler orientation.
    Orientation,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => f.write_str("position"),
            Self::Orientation => f.write_str("orientation"),
        }
    }
}

/// Interpolates one `Vec3` from a captured source to a target.
///
/// One duration covers all three axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
}

/// Value a tween produced on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Still running; the eased intermediate value.
    Running(Vec3),
    /// Reached its duration; the exact target value.
    Finished(Vec3),
}

impl TweenStep {
    /// The value to write, whichever state the tween is in.
    #[must_use]
    pub const fn value(self) -> Vec3 {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }
}

impl Tween {
    /// Start a tween at elapsed zero.
    #[must_use]
    pub fn new(
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Source captured when the tween started.
    #[must_use]
    pub fn from(&self) -> Vec3 {
        self.from
    }

    /// Value the tween ends on.
    #[must_use]
    pub fn to(&self) -> Vec3 {
        self.to
    }

    /// Total length of the tween.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Raw progress in `[0, 1]`. Zero-length tweens are always complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
                as f32
        }
    }

    /// Value at the current elapsed time.
    #[must_use]
    pub fn sample(&self) -> Vec3 {
        if self.elapsed >= self.duration {
            return self.to;
        }
        let eased = self.easing.evaluate(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by `dt` and report the value to write.
    pub fn advance(&mut self, dt: Duration) -> TweenStep {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            TweenStep::Finished(self.to)
        } else {
            TweenStep::Running(self.sample())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(ms: u64) -> Tween {
        Tween::new(
            Vec3::ZERO,
            Vec3::new(100.0, -50.0, 10.0),
            Duration::from_millis(ms),
            EasingFunction::ExponentialInOut,
        )
    }

    #[test]
    fn halfway_is_the_midpoint() {
        let mut t = tween(1000);
        let step = t.advance(Duration::from_millis(500));
        assert!(matches!(step, TweenStep::Running(_)));
        assert!((step.value() - Vec3::new(50.0, -25.0, 5.0)).length() < 1e-3);
    }

    #[test]
    fn finishing_writes_exact_target() {
        let mut t = tween(1000);
        let _ = t.advance(Duration::from_millis(999));
        let step = t.advance(Duration::from_millis(1));
        assert_eq!(step, TweenStep::Finished(Vec3::new(100.0, -50.0, 10.0)));
    }

    #[test]
    fn overshooting_clamps_to_target() {
        let mut t = tween(300);
        let step = t.advance(Duration::from_secs(5));
        assert_eq!(step.value(), t.to());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut t = tween(0);
        assert_eq!(t.progress(), 1.0);
        assert!(matches!(t.advance(Duration::ZERO), TweenStep::Finished(_)));
    }

    #[test]
    fn elapsed_accumulates() {
        let mut t = tween(1000);
        for _ in 0..4 {
            let _ = t.advance(Duration::from_millis(100));
        }
        assert_eq!(t.elapsed(), Duration::from_millis(400));
        assert!((t.progress() - 0.4).abs() < 1e-6);
    }
}
