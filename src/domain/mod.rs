//! Domain types used throughout the evaluator.
//!
//! This module defines:
//!
//! - the evaluation request (`EvaluationRequest`)
//! - the fallback chain vocabulary (`Algorithm`, `EvalFailure`, `Escalation`)
//! - the final outcome (`Evaluation`) and run configuration (`EvalConfig`)

pub mod types;

pub use types::*;
