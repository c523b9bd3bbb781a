//! Text and JSON rendering.

use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::domain::{Algorithm, Escalation, EvalFailure, Evaluation};
use crate::error::AppError;
use crate::table::TableSlot;

/// Render the step-by-step narrative for an evaluation.
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    out.push_str("=== Trying Algorithm 1 ===\n");

    for step in &evaluation.escalations {
        out.push_str(&format_escalation(step));
        out.push('\n');
    }

    out.push_str(&format!(
        "SUCCESS: {} completed successfully!\n",
        evaluation.algorithm
    ));
    match evaluation.algorithm {
        Algorithm::Primary => out.push_str(&format!("Result fun(x,y,z) = {}", evaluation.value)),
        other => out.push_str(&format!("{other} result = {}", evaluation.value)),
    }
    out
}

fn format_escalation(step: &Escalation) -> String {
    match (&step.failure, step.from) {
        (EvalFailure::TableUnavailable { .. }, from) => {
            format!("{from} failed due to file loading error, switching to {}...", step.to)
        }
        (EvalFailure::Precondition { .. }, Algorithm::Primary) => {
            format!("{} failed, switching to {}...", step.from, step.to)
        }
        (EvalFailure::Precondition { .. }, from) => format!("{from} also failed, switching to {}...", step.to),
    }
}

#[derive(Debug, Serialize)]
struct EvaluationJson {
    x: f64,
    y: f64,
    z: f64,
    #[serde(serialize_with = "number_or_label")]
    value: f64,
    algorithm: Algorithm,
    escalations: Vec<EscalationJson>,
}

#[derive(Debug, Serialize)]
struct EscalationJson {
    from: Algorithm,
    to: Algorithm,
    kind: &'static str,
    reason: String,
}

/// JSON has no inf/NaN; those are written as the strings `"inf"`, `"-inf"`, `"NaN"`.
fn number_or_label<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

/// Render an evaluation as pretty-printed JSON.
pub fn format_evaluation_json(evaluation: &Evaluation) -> Result<String, AppError> {
    let doc = EvaluationJson {
        x: evaluation.request.x,
        y: evaluation.request.y,
        z: evaluation.request.z,
        value: evaluation.value,
        algorithm: evaluation.algorithm,
        escalations: evaluation
            .escalations
            .iter()
            .map(|step| EscalationJson {
                from: step.from,
                to: step.to,
                kind: step.failure.kind(),
                reason: step.failure.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| AppError::unexpected(format!("Failed to encode JSON: {e}")))
}

/// A single point probed through T and U.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReport {
    pub x: f64,
    pub slot: TableSlot,
    pub query: f64,
    pub t: f64,
    pub u: f64,
}

pub fn format_lookup(report: &LookupReport) -> String {
    format!(
        "x = {}\ntable: {} ({})\nquery x: {}\nT = {}\nU = {}",
        report.x,
        report.slot,
        report.slot.file_name(),
        report.query,
        report.t,
        report.u
    )
}

/// Load status of one table slot.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub slot: TableSlot,
    pub path: PathBuf,
    pub status: TableStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableStatus {
    Loaded {
        samples: usize,
        x_range: Option<(f64, f64)>,
        ordered: bool,
    },
    Unavailable(String),
}

pub fn format_table_summaries(rows: &[TableSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:<32} {:>8}  {:<24} {}\n",
        "slot", "file", "samples", "x-range", "ordered"
    ));
    for row in rows {
        let path = row.path.display().to_string();
        match &row.status {
            TableStatus::Loaded {
                samples,
                x_range,
                ordered,
            } => {
                let range = match x_range {
                    Some((lo, hi)) => format!("[{lo}, {hi}]"),
                    None => "-".to_string(),
                };
                let ordered = if *ordered { "yes" } else { "NO" };
                out.push_str(&format!(
                    "{:<16} {:<32} {:>8}  {:<24} {}\n",
                    row.slot.id(),
                    path,
                    samples,
                    range,
                    ordered
                ));
            }
            TableStatus::Unavailable(reason) => {
                out.push_str(&format!("{:<16} {:<32} unavailable: {}\n", row.slot.id(), path, reason));
            }
        }
    }
    out.trim_end().to_string()
}
