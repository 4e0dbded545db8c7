//! exec
//!
//! Subprocess orchestration: one-shot shell execution, concurrent batch
//! dispatch, and output screening.
//!
//! # Modules
//!
//! - [`runner`] - Synchronous single-command execution
//! - [`dispatch`] - Bounded worker pool for unordered command batches
//! - [`scan`] - URL extraction from captured output
//!
//! # Error Policy
//!
//! A non-zero exit code is data, not an error: it travels in the
//! [`runner::CommandResult`] for the caller to interpret. Spawn failures
//! and per-task timeouts are the typed errors at this layer, and in a
//! dispatched batch they are reported per command without cancelling
//! siblings.

pub mod dispatch;
pub mod runner;
pub mod scan;

pub use dispatch::{BatchOutcome, DispatchError, Dispatcher};
pub use runner::{run, CommandResult, RunError};
pub use scan::extract_urls;
