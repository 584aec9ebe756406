//! Cancel-then-schedule logic for layout morphs and item focus.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;
use web_time::Duration;

use super::scheduler::{RenderDriver, TickReport, TransitionScheduler};
use super::tween::{Channel, Tween};
use crate::error::ConfigError;
use crate::layout::Transform;
use crate::store::ItemTransformStore;
use crate::util::easing::EasingFunction;

/// Focus move length relative to the table-settle base duration.
pub const FOCUS_MOVE_FACTOR: u32 = 4;

/// Turns morph requests into per-item tweens with jittered durations.
///
/// Every request is a hard reset: whatever was in flight is dropped and new
/// tweens start from the live transform, so an item caught mid-move picks up
/// from where it currently is.
#[derive(Debug, Clone)]
pub struct TransitionOrchestrator {
    scheduler: TransitionScheduler,
    rng: StdRng,
    easing: EasingFunction,
}

impl TransitionOrchestrator {
    /// Orchestrator for `items` items drawing jitter from `rng`.
    #[must_use]
    pub fn new(items: usize, rng: StdRng) -> Self {
        Self {
            scheduler: TransitionScheduler::new(items),
            rng,
            easing: EasingFunction::default(),
        }
    }

    /// Use a different easing curve for subsequently scheduled tweens.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// The active-transition set.
    #[must_use]
    pub fn scheduler(&self) -> &TransitionScheduler {
        &self.scheduler
    }

    /// Morph every item toward `target`.
    ///
    /// Each item gets a position tween and an orientation tween, each with
    /// its own duration drawn from `[base, 2 * base)`. A render driver keeps
    /// frames coming for `2 * base`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LengthMismatch`] if `target` is not index-aligned with
    /// `store`. Nothing is cancelled in that case.
    pub fn transition(
        &mut self,
        store: &ItemTransformStore,
        target: &[Transform],
        base: Duration,
    ) -> Result<(), ConfigError> {
        if target.len() != store.len() {
            return Err(ConfigError::LengthMismatch {
                what: "target table",
                expected: store.len(),
                actual: target.len(),
            });
        }

        self.scheduler.cancel_all();
        for (index, (live, goal)) in
            store.transforms().iter().zip(target).enumerate()
        {
            let position = self.tween(live.position, goal.position, base);
            self.scheduler.schedule(index, Channel::Position, position);
            let orientation =
                self.tween(live.orientation, goal.orientation, base);
            self.scheduler
                .schedule(index, Channel::Orientation, orientation);
        }
        self.scheduler
            .schedule_driver(RenderDriver::new(base.saturating_mul(2)));

        log::debug!(
            "transition: {} items, base {}ms",
            target.len(),
            base.as_millis()
        );
        Ok(())
    }

    /// Settle every item into `table` over `base`, and send item `index` to
    /// `focus_point` over a separately jittered `4 * base`.
    ///
    /// The focused item's orientation still settles with the table. Returns
    /// `Ok(false)` without touching anything if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Same as [`transition`](Self::transition).
    pub fn focus(
        &mut self,
        store: &ItemTransformStore,
        table: &[Transform],
        index: usize,
        base: Duration,
        focus_point: Vec3,
    ) -> Result<bool, ConfigError> {
        let Some(live) = store.get(index) else {
            log::warn!(
                "ignoring focus on item {index}: only {} items",
                store.len()
            );
            return Ok(false);
        };
        let from = live.position;

        self.transition(store, table, base)?;

        let move_base = base.saturating_mul(FOCUS_MOVE_FACTOR);
        let focus = self.tween(from, focus_point, move_base);
        self.scheduler.schedule(index, Channel::Position, focus);
        self.scheduler
            .schedule_driver(RenderDriver::new(move_base.saturating_mul(2)));

        log::info!("focus on item {index}");
        Ok(true)
    }

    /// Advance all scheduled work by `dt`.
    pub fn advance(
        &mut self,
        dt: Duration,
        store: &mut ItemTransformStore,
    ) -> TickReport {
        let was_busy = !self.scheduler.is_idle();
        let report = self.scheduler.advance(dt, store);
        if was_busy && self.scheduler.is_idle() {
            log::debug!("all transitions settled");
        }
        report
    }

    /// Drop everything in flight.
    pub fn cancel_all(&mut self) {
        self.scheduler.cancel_all();
    }

    fn tween(&mut self, from: Vec3, to: Vec3, base: Duration) -> Tween {
        Tween::new(from, to, self.jittered(base), self.easing)
    }

    /// `base + uniform(0, base)`.
    fn jittered(&mut self, base: Duration) -> Duration {
        base.mul_f64(1.0 + self.rng.random::<f64>())
    }
}
