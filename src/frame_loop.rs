//! Cooperative per-frame driver.
//!
//! The host owns the frame signal ([`FrameSource`]) and the renderer
//! ([`RenderSink`]). [`FrameLoop::run`] applies the events that arrived with
//! each frame, ticks the engine, and renders when anything asked for it. The
//! loop only ends when the source does.

use web_time::{Duration, Instant};

use crate::engine::{FieldCommand, FieldEngine};
use crate::store::ItemTransformStore;

/// One frame signal from the host, with the events queued since the last.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSignal {
    /// Frame timestamp.
    pub at: Instant,
    /// Commands to apply before ticking, in arrival order.
    pub events: Vec<FieldCommand>,
}

impl FrameSignal {
    /// A frame with no pending events.
    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self {
            at,
            events: Vec::new(),
        }
    }
}

/// The host's frame scheduler.
pub trait FrameSource {
    /// Block until the next frame. `None` ends the session.
    fn next_frame(&mut self) -> Option<FrameSignal>;
}

/// The external renderer.
pub trait RenderSink {
    /// Draw the current transforms. May defer the actual draw.
    fn render(&mut self, items: &ItemTransformStore);
}

impl<F: FnMut(&ItemTransformStore)> RenderSink for F {
    fn render(&mut self, items: &ItemTransformStore) {
        self(items);
    }
}

/// Frame source with a fixed step and a script of events keyed by frame
/// number. Used for headless runs and tests.
#[derive(Debug, Clone)]
pub struct SteppedFrames {
    now: Instant,
    step: Duration,
    frame: usize,
    frames: usize,
    script: Vec<(usize, FieldCommand)>,
}

impl SteppedFrames {
    /// `frames` frames spaced `step` apart.
    #[must_use]
    pub fn new(step: Duration, frames: usize) -> Self {
        Self {
            now: Instant::now(),
            step,
            frame: 0,
            frames,
            script: Vec::new(),
        }
    }

    /// Deliver `command` with frame number `frame`.
    #[must_use]
    pub fn with_event(mut self, frame: usize, command: FieldCommand) -> Self {
        self.script.push((frame, command));
        self
    }

    /// Number of frames delivered so far.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.frame
    }
}

impl FrameSource for SteppedFrames {
    fn next_frame(&mut self) -> Option<FrameSignal> {
        if self.frame >= self.frames {
            return None;
        }
        if self.frame > 0 {
            self.now += self.step;
        }
        let events = self
            .script
            .iter()
            .filter(|(at, _)| *at == self.frame)
            .map(|&(_, command)| command)
            .collect();
        self.frame += 1;
        Some(FrameSignal {
            at: self.now,
            events,
        })
    }
}

/// Totals from a finished [`FrameLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStats {
    /// Frame signals received.
    pub frames: usize,
    /// Frames that were rendered.
    pub renders: usize,
    /// Frames dropped by the frame limiter.
    pub skipped: usize,
}

/// Runs the engine against a host frame source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLoop;

impl FrameLoop {
    /// Drive `engine` until `source` runs dry.
    pub fn run(
        engine: &mut FieldEngine,
        source: &mut impl FrameSource,
        sink: &mut impl RenderSink,
    ) -> LoopStats {
        let mut stats = LoopStats::default();
        while let Some(signal) = source.next_frame() {
            stats.frames += 1;
            for command in signal.events {
                engine.execute(command);
            }
            let outcome = engine.tick(signal.at);
            if outcome.skipped {
                stats.skipped += 1;
            }
            if outcome.render {
                sink.render(engine.store());
                stats.renders += 1;
            }
        }
        log::debug!(
            "frame loop ended after {} frames ({} rendered)",
            stats.frames,
            stats.renders
        );
        stats
    }
}
