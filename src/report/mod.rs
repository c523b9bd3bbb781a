//! Operator-facing output: the evaluation narrative, JSON, and table summaries.
//!
//! Formatting lives here so the evaluation code stays free of presentation.

pub mod format;

pub use format::*;
