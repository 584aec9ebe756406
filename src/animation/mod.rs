//! Transition scheduling for layout morphs.
//!
//! - [`Tween`]: one jittered interpolation of one transform component
//! - [`TransitionScheduler`]: the active set, at most one tween per item and
//!   channel, plus [`RenderDriver`]s
//! - [`TransitionOrchestrator`]: cancel-then-schedule for whole-field morphs
//!   and single-item focus

mod orchestrator;
mod scheduler;
mod tween;

pub use orchestrator::{TransitionOrchestrator, FOCUS_MOVE_FACTOR};
pub use scheduler::{RenderDriver, TickReport, TransitionScheduler};
pub use tween::{Channel, Tween, TweenStep};
