//! Frame clock: tick deltas, smoothed FPS and an optional rate cap.

use web_time::{Duration, Instant};

/// Per-frame clock: delta time between ticks, smoothed FPS, and optional
/// frame limiting.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Timestamp of the previous accepted tick (None before the first one)
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last accepted tick to run
    /// another one at `now`.
    #[must_use]
    pub fn should_tick(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.is_none_or(|last| {
            now.saturating_duration_since(last) >= self.min_frame_duration
        })
    }

    /// Accept a tick at `now` and return the real time elapsed since the
    /// previous one. The first tick has a zero delta.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0)
    }
}
