//! The active-transition set and the per-tick advance over it.

use glam::Vec3;
use web_time::Duration;

use super::tween::{Channel, Tween, TweenStep};
use crate::store::ItemTransformStore;

/// Keeps rendering alive for a fixed window without touching any transform.
///
/// Per-item tweens are jittered, so some finish early and some late; the
/// driver covers the nominal window of a whole transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDriver {
    duration: Duration,
    elapsed: Duration,
}

impl RenderDriver {
    /// Driver lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Window this driver keeps rendering for.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Advance by `dt`; returns whether the driver has run its course.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.elapsed >= self.duration
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tweens that wrote an intermediate value.
    pub updated: usize,
    /// Tweens that wrote their exact target and were retired.
    pub completed: usize,
    /// Render drivers that were live this tick.
    pub drivers_fired: usize,
}

impl TickReport {
    /// Whether the store changed or a driver asked for a frame.
    #[must_use]
    pub fn wants_render(&self) -> bool {
        self.updated > 0 || self.completed > 0 || self.drivers_fired > 0
    }
}

/// Active tweens, at most one per (item, channel), plus render drivers.
#[derive(Debug, Clone, Default)]
pub struct TransitionScheduler {
    position: Vec<Option<Tween>>,
    orientation: Vec<Option<Tween>>,
    drivers: Vec<RenderDriver>,
}

impl TransitionScheduler {
    /// Empty scheduler with a slot pair for each of `items` items.
    #[must_use]
    pub fn new(items: usize) -> Self {
        Self {
            position: vec![None; items],
            orientation: vec![None; items],
            drivers: Vec::new(),
        }
    }

    /// Number of item slots.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.position.len()
    }

    /// Drop every tween and driver, whatever its progress.
    pub fn cancel_all(&mut self) {
        self.position.iter_mut().for_each(|slot| *slot = None);
        self.orientation.iter_mut().for_each(|slot| *slot = None);
        self.drivers.clear();
    }

    /// Install `tween` for `index`, superseding any tween already on that
    /// channel. Out-of-range indices are ignored.
    pub fn schedule(&mut self, index: usize, channel: Channel, tween: Tween) {
        if let Some(slot) = self.slots_mut(channel).get_mut(index) {
            *slot = Some(tween);
        }
    }

    /// Add a render driver.
    pub fn schedule_driver(&mut self, driver: RenderDriver) {
        self.drivers.push(driver);
    }

    /// Active tween on `channel` for `index`.
    #[must_use]
    pub fn tween(&self, index: usize, channel: Channel) -> Option<&Tween> {
        self.slots(channel).get(index).and_then(Option::as_ref)
    }

    /// Number of live tweens across both channels.
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.position
            .iter()
            .chain(&self.orientation)
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Number of live render drivers.
    #[must_use]
    pub fn active_drivers(&self) -> usize {
        self.drivers.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.drivers.is_empty() && self.active_tweens() == 0
    }

    /// Advance everything by `dt`, writing into `store`.
    ///
    /// Running tweens write their eased value; tweens that reach their
    /// duration write the exact target and are retired. Drivers count as
    /// fired on every tick they are live, including their last.
    pub fn advance(
        &mut self,
        dt: Duration,
        store: &mut ItemTransformStore,
    ) -> TickReport {
        let mut report = TickReport::default();

        for (index, slot) in self.position.iter_mut().enumerate() {
            if let Some(value) = step_slot(slot, dt, &mut report) {
                store.set_position(index, value);
            }
        }
        for (index, slot) in self.orientation.iter_mut().enumerate() {
            if let Some(value) = step_slot(slot, dt, &mut report) {
                store.set_orientation(index, value);
            }
        }

        report.drivers_fired = self.drivers.len();
        self.drivers.retain_mut(|driver| !driver.advance(dt));

        report
    }

    fn slots(&self, channel: Channel) -> &[Option<Tween>] {
        match channel {
            Channel::Position => &self.position,
            Channel::Orientation => &self.orientation,
        }
    }

    fn slots_mut(&mut self, channel: Channel) -> &mut [Option<Tween>] {
        match channel {
            Channel::Position => &mut self.position,
            Channel::Orientation => &mut self.orientation,
        }
    }
}

fn step_slot(
    slot: &mut Option<Tween>,
    dt: Duration,
    report: &mut TickReport,
) -> Option<Vec3> {
    let tween = slot.as_mut()?;
    match tween.advance(dt) {
        TweenStep::Running(value) => {
            report.updated += 1;
            Some(value)
        }
        TweenStep::Finished(value) => {
            report.completed += 1;
            *slot = None;
            Some(value)
        }
    }
}
