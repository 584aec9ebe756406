// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Layout generation and staggered transition engine for a field of record
//! cards in 3D space.
//!
//! Every record becomes an item with a live position and orientation. Four
//! layouts (table, sphere, helix, grid) are precomputed once; switching
//! layouts cancels whatever is in flight and morphs each item toward its new
//! target with its own randomly jittered duration, so the field ripples into
//! place instead of moving in lockstep. Clicking an item settles the field
//! into the table while flying that item up to the camera.
//!
//! # Key entry points
//!
//! - [`engine::FieldEngine`] - owns the tables, live transforms and
//!   orchestrator; accepts [`engine::FieldCommand`]s
//! - [`layout`] - the four placement functions and their target tables
//! - [`animation`] - tweens, the active-transition set, render drivers
//! - [`frame_loop::FrameLoop`] - cooperative driver over a host frame source
//! - [`options::Options`] - durations, easing and scene settings (TOML)
//!
//! # Concurrency
//!
//! Single-threaded by construction. Commands and ticks run on the same
//! execution context, so a command's cancel-then-schedule is always complete
//! before the next tick observes it.

pub mod animation;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod layout;
pub mod options;
pub mod store;
pub mod util;

pub use engine::{FieldCommand, FieldEngine};
pub use error::{CardfieldError, ConfigError};
pub use layout::{Layout, Transform};
