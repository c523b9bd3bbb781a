//! Shared domain types.
//!
//! These types are small and `Copy`/`Clone` where possible so they can be
//! threaded through the algorithms and reported without ceremony.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::table::TableSlot;

/// The three input scalars of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationRequest {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EvaluationRequest {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for EvaluationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

/// One step of the fallback chain, from most to least demanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Algorithm {
    /// `fun`: the full nested formula with strict domain guards.
    Primary,
    /// `fun_algorithm2`: relaxed guards, still table-driven.
    Secondary,
    /// `fun_algorithm3`: closed form, cannot fail.
    Tertiary,
}

impl Algorithm {
    /// Operator-facing number (1, 2 or 3).
    pub fn number(self) -> u8 {
        match self {
            Algorithm::Primary => 1,
            Algorithm::Secondary => 2,
            Algorithm::Tertiary => 3,
        }
    }
}

impl From<Algorithm> for u8 {
    fn from(value: Algorithm) -> Self {
        value.number()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Algorithm {}", self.number())
    }
}

/// Why an algorithm gave up on a request.
///
/// Both variants carry the caller's original request, never an intermediate
/// value from inside the formula, so the next algorithm always starts from
/// what the user asked for.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalFailure {
    /// A domain guard (`Gold`, `Glr`, ...) rejected its arguments.
    #[error("{guard} precondition failed for {request}: {detail}")]
    Precondition {
        request: EvaluationRequest,
        guard: &'static str,
        detail: String,
    },
    /// A lookup table needed by T/U could not be loaded.
    #[error("table '{slot}' unavailable for {request}: {detail}")]
    TableUnavailable {
        request: EvaluationRequest,
        slot: TableSlot,
        detail: String,
    },
}

impl EvalFailure {
    pub fn request(&self) -> EvaluationRequest {
        match self {
            EvalFailure::Precondition { request, .. } | EvalFailure::TableUnavailable { request, .. } => *request,
        }
    }

    pub fn is_table_unavailable(&self) -> bool {
        matches!(self, EvalFailure::TableUnavailable { .. })
    }

    /// Short machine-readable tag used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalFailure::Precondition { .. } => "precondition",
            EvalFailure::TableUnavailable { .. } => "table-unavailable",
        }
    }
}

/// A recorded transition in the fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Escalation {
    pub from: Algorithm,
    pub to: Algorithm,
    pub failure: EvalFailure,
}

/// Final outcome of the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub request: EvaluationRequest,
    pub value: f64,
    pub algorithm: Algorithm,
    /// Empty when Algorithm 1 succeeded outright.
    pub escalations: Vec<Escalation>,
}

/// How the `eval` report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A run's configuration as understood by the app layer.
///
/// This is derived from CLI flags, the environment, and defaults.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Directory holding the three `dat_X*.dat` table sources.
    pub table_dir: PathBuf,
    pub output: OutputFormat,
}
