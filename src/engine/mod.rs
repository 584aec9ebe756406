//! Session wiring: layout tables, live transforms and the orchestrator.

mod command;

pub use command::FieldCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::{Duration, Instant};

use crate::animation::{
    TickReport, TransitionOrchestrator, TransitionScheduler,
};
use crate::error::{CardfieldError, ConfigError};
use crate::layout::{Layout, LayoutTargets, Transform};
use crate::options::Options;
use crate::store::{ItemDescriptor, ItemTransformStore};
use crate::util::frame_timing::FrameTiming;

/// Result of one frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// What the scheduler did.
    pub report: TickReport,
    /// Whether the host should render this frame.
    pub render: bool,
    /// The tick was dropped by the frame limiter.
    pub skipped: bool,
}

/// One morphing card field.
///
/// Owns the immutable layout tables, the live item transforms and the
/// transition orchestrator. All mutation happens from [`execute`] and the
/// tick methods, which the host calls from a single execution context.
///
/// [`execute`]: Self::execute
pub struct FieldEngine {
    options: Options,
    targets: LayoutTargets,
    store: ItemTransformStore,
    orchestrator: TransitionOrchestrator,
    timing: FrameTiming,
    render_pending: bool,
    layout: Option<Layout>,
}

impl FieldEngine {
    /// Build a field with one item per record, scattered at random.
    ///
    /// Records are opaque here; only their count matters.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTotal`] for an empty record set,
    /// [`ConfigError::InvalidOption`] if `options` fail
    /// [`Options::validate`].
    pub fn new<R>(
        records: &[R],
        options: Options,
    ) -> Result<Self, CardfieldError> {
        options.validate()?;
        let mut rng = Self::rng(&options);
        let store = ItemTransformStore::scattered(
            records.len(),
            options.scene.scatter_extent,
            &mut rng,
        )?;
        Self::assemble(records.len(), store, rng, options)
    }

    /// Build a field around transforms the host already created.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTotal`] for zero records,
    /// [`ConfigError::LengthMismatch`] if `store` does not hold exactly one
    /// item per record, [`ConfigError::InvalidOption`] if `options` fail
    /// [`Options::validate`].
    pub fn from_parts(
        record_count: usize,
        store: ItemTransformStore,
        options: Options,
    ) -> Result<Self, CardfieldError> {
        options.validate()?;
        let rng = Self::rng(&options);
        Self::assemble(record_count, store, rng, options)
    }

    fn assemble(
        record_count: usize,
        store: ItemTransformStore,
        rng: StdRng,
        options: Options,
    ) -> Result<Self, CardfieldError> {
        let targets = LayoutTargets::build(record_count)?;
        if store.len() != record_count {
            return Err(ConfigError::LengthMismatch {
                what: "item store",
                expected: record_count,
                actual: store.len(),
            }
            .into());
        }
        targets.check_aligned(store.len())?;

        let orchestrator = TransitionOrchestrator::new(store.len(), rng)
            .with_easing(options.animation.easing);
        let timing = FrameTiming::new(options.scene.target_fps);

        log::info!("card field ready: {record_count} items");
        Ok(Self {
            options,
            targets,
            store,
            orchestrator,
            timing,
            render_pending: true,
            layout: None,
        })
    }

    fn rng(options: &Options) -> StdRng {
        options
            .animation
            .jitter_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Run the intro: morph from the initial scatter into the table.
    pub fn start(&mut self) {
        let base = self.options.animation.intro_duration();
        self.transition(Layout::Table, base);
    }

    /// Morph every item into `layout` with per-item durations in
    /// `[base, 2 * base)`. Cancels everything in flight first.
    pub fn transition(&mut self, layout: Layout, base: Duration) {
        let target = self.targets.get(layout);
        match self.orchestrator.transition(&self.store, target, base) {
            Ok(()) => {
                log::debug!("morphing into {layout}");
                self.layout = Some(layout);
            }
            Err(e) => log::error!("{layout} transition rejected: {e}"),
        }
    }

    /// Morph toward an arbitrary index-aligned target table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LengthMismatch`] if `target` has the wrong length;
    /// nothing in flight is cancelled then.
    pub fn transition_to(
        &mut self,
        target: &[Transform],
        base: Duration,
    ) -> Result<(), ConfigError> {
        self.orchestrator.transition(&self.store, target, base)?;
        self.layout = None;
        Ok(())
    }

    /// Settle into the table over `base` while item `index` flies to the
    /// focus point. Out-of-range indices are ignored; returns whether the
    /// focus was applied.
    pub fn focus(&mut self, index: usize, base: Duration) -> bool {
        let table = self.targets.get(Layout::Table);
        let focus_point = self.options.scene.focus_point();
        match self
            .orchestrator
            .focus(&self.store, table, index, base, focus_point)
        {
            Ok(applied) => {
                if applied {
                    self.layout = Some(Layout::Table);
                }
                applied
            }
            Err(e) => {
                log::error!("focus on item {index} rejected: {e}");
                false
            }
        }
    }

    /// Perform a command with the configured durations.
    ///
    /// Tweens scheduled here start at elapsed zero and receive the whole `dt`
    /// of the next tick, including the part of that frame interval that
    /// passed before the command arrived. A morph can therefore lead the wall
    /// clock by up to one frame.
    pub fn execute(&mut self, command: FieldCommand) {
        match command {
            FieldCommand::ShowLayout(layout) => {
                let base = self.options.animation.layout_duration();
                self.transition(layout, base);
            }
            FieldCommand::FocusItem(item) => {
                let base = self.options.animation.focus_duration();
                let _ = self.focus(item.index(), base);
            }
            FieldCommand::Render => self.request_render(),
        }
    }

    /// Ask for one frame regardless of transition state.
    pub fn request_render(&mut self) {
        self.render_pending = true;
    }

    /// Tick at frame time `now`, advancing by the real time since the last
    /// accepted tick.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if !self.timing.should_tick(now) {
            return TickOutcome {
                skipped: true,
                ..TickOutcome::default()
            };
        }
        let dt = self.timing.tick(now);
        self.advance(dt)
    }

    /// Advance every transition by `dt`.
    pub fn advance(&mut self, dt: Duration) -> TickOutcome {
        let report = self.orchestrator.advance(dt, &mut self.store);
        let render = report.wants_render() || self.render_pending;
        self.render_pending = false;
        TickOutcome {
            report,
            render,
            skipped: false,
        }
    }

    /// Live transforms, for the renderer.
    #[must_use]
    pub fn store(&self) -> &ItemTransformStore {
        &self.store
    }

    /// The four target tables.
    #[must_use]
    pub fn targets(&self) -> &LayoutTargets {
        &self.targets
    }

    /// The active-transition set.
    #[must_use]
    pub fn scheduler(&self) -> &TransitionScheduler {
        self.orchestrator.scheduler()
    }

    /// One descriptor per item, for wiring click surfaces.
    pub fn descriptors(&self) -> impl Iterator<Item = ItemDescriptor> {
        self.store.descriptors()
    }

    /// Layout most recently requested, if the last request named one.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// Whether no transition is in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.orchestrator.scheduler().is_idle()
    }

    /// Smoothed tick rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl std::fmt::Debug for FieldEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldEngine")
            .field("items", &self.store.len())
            .field("layout", &self.layout)
            .field("active_tweens", &self.scheduler().active_tweens())
            .field("render_pending", &self.render_pending)
            .finish_non_exhaustive()
    }
}
