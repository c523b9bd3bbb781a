//! Formula evaluation and the fallback chain.
//!
//! Three algorithms of decreasing strictness share the table lookups:
//!
//! - `primary::fun` rejects inputs through the `Gold` / `Glr` guards
//! - `secondary::fun_algorithm2` only fails when a table is missing
//! - `tertiary::fun_algorithm3` is closed form and always succeeds
//!
//! `evaluate` walks them in order. A guard failure in Algorithm 1 moves on to
//! Algorithm 2; a missing table anywhere goes straight to Algorithm 3.

use tracing::info;

use crate::domain::{Algorithm, Escalation, EvalFailure, Evaluation, EvaluationRequest};
use crate::table::{TableSlot, TableStore};

pub(crate) mod lookup;
pub mod primary;
pub mod secondary;
pub mod tertiary;

pub use primary::fun;
pub use secondary::fun_algorithm2;
pub use tertiary::fun_algorithm3;

/// Failure raised deep inside a formula, before the request is attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Fault {
    Precondition { guard: &'static str, detail: String },
    TableUnavailable { slot: TableSlot, detail: String },
}

impl Fault {
    pub(crate) fn precondition(guard: &'static str, detail: String) -> Self {
        Fault::Precondition { guard, detail }
    }

    /// Attach the top-level request this fault aborted.
    pub(crate) fn at(self, request: EvaluationRequest) -> EvalFailure {
        match self {
            Fault::Precondition { guard, detail } => EvalFailure::Precondition { request, guard, detail },
            Fault::TableUnavailable { slot, detail } => EvalFailure::TableUnavailable { request, slot, detail },
        }
    }
}

/// Next algorithm after `current` failed with `failure`.
fn escalate(current: Algorithm, failure: &EvalFailure) -> Algorithm {
    match (current, failure) {
        (Algorithm::Primary, EvalFailure::Precondition { .. }) => Algorithm::Secondary,
        _ => Algorithm::Tertiary,
    }
}

/// Evaluate `request`, falling back until an algorithm succeeds.
///
/// Never fails: Algorithm 3 is the terminus. The returned `Evaluation` records
/// every escalation taken on the way.
pub fn evaluate(store: &TableStore, request: EvaluationRequest) -> Evaluation {
    let mut escalations = Vec::new();
    let mut current = Algorithm::Primary;
    let mut pending = request;

    loop {
        let attempt = match current {
            Algorithm::Primary => primary::fun(store, pending),
            Algorithm::Secondary => secondary::fun_algorithm2(store, pending),
            Algorithm::Tertiary => Ok(tertiary::fun_algorithm3(pending)),
        };

        match attempt {
            Ok(value) => {
                return Evaluation {
                    request,
                    value,
                    algorithm: current,
                    escalations,
                };
            }
            Err(failure) => {
                let next = escalate(current, &failure);
                info!(from = %current, to = %next, "{failure}");
                pending = failure.request();
                escalations.push(Escalation {
                    from: current,
                    to: next,
                    failure,
                });
                current = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::table::store::fixtures::{MemorySource, reciprocal_tables};

    #[test]
    fn primary_success_has_no_escalations() {
        let store = TableStore::new(reciprocal_tables());
        let request = EvaluationRequest::new(2.0, 3.0, 0.5);
        let out = evaluate(&store, request);
        assert_eq!(out.algorithm, Algorithm::Primary);
        assert!(out.escalations.is_empty());
        assert_eq!(out.value, fun(&store, request).unwrap());
    }

    #[test]
    fn zero_request_lands_on_algorithm_two() {
        let store = TableStore::new(reciprocal_tables());
        let out = evaluate(&store, EvaluationRequest::new(0.0, 0.0, 0.0));
        assert_eq!(out.algorithm, Algorithm::Secondary);
        assert_eq!(out.value, 0.0);
        assert_eq!(out.escalations.len(), 1);
        assert_eq!(out.escalations[0].from, Algorithm::Primary);
        assert_eq!(out.escalations[0].to, Algorithm::Secondary);
    }

    #[test]
    fn guard_failure_escalates_with_original_request() {
        let store = TableStore::new(reciprocal_tables());
        for request in [
            EvaluationRequest::new(1.0, 1.0, 1.0),
            EvaluationRequest::new(0.0, 4.0, 4.0),
            EvaluationRequest::new(-2.0, 0.0, 7.0),
        ] {
            let out = evaluate(&store, request);
            assert_eq!(out.algorithm, Algorithm::Secondary, "{request}");
            assert_eq!(out.value, fun_algorithm2(&store, request).unwrap());
            assert_eq!(out.escalations[0].failure.request(), request);
        }
    }

    #[test]
    fn missing_tables_skip_algorithm_two() {
        let store = TableStore::new(MemorySource::default());
        let request = EvaluationRequest::new(0.5, 2.0, 3.0);
        let out = evaluate(&store, request);
        assert_eq!(out.algorithm, Algorithm::Tertiary);
        assert_eq!(out.value, fun_algorithm3(request));
        assert_eq!(out.escalations.len(), 1);
        assert_eq!(out.escalations[0].from, Algorithm::Primary);
        assert_eq!(out.escalations[0].to, Algorithm::Tertiary);
        assert!(out.escalations[0].failure.is_table_unavailable());
    }

    #[test]
    fn guard_then_missing_table_takes_both_steps() {
        let store = TableStore::new(MemorySource::default());
        let request = EvaluationRequest::new(0.0, 0.0, 0.0);
        let out = evaluate(&store, request);
        assert_eq!(out.algorithm, Algorithm::Tertiary);
        assert_eq!(out.value, 0.0);
        let steps: Vec<_> = out.escalations.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            steps,
            vec![
                (Algorithm::Primary, Algorithm::Secondary),
                (Algorithm::Secondary, Algorithm::Tertiary)
            ]
        );
    }

    #[test]
    fn tables_are_loaded_once_across_evaluations() {
        let source = reciprocal_tables();
        let loads = source.load_counter();
        let store = TableStore::new(source);
        for _ in 0..5 {
            evaluate(&store, EvaluationRequest::new(2.0, 3.0, 0.5));
        }
        assert!(loads.get() <= 3);
    }

    #[test]
    fn every_request_terminates_with_consistent_trail() {
        let mut rng = StdRng::seed_from_u64(42);
        let with_tables = TableStore::new(reciprocal_tables());
        let without_tables = TableStore::new(MemorySource::default());

        for _ in 0..500 {
            let request = EvaluationRequest::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            for store in [&with_tables, &without_tables] {
                let out = evaluate(store, request);
                assert_eq!(out.request, request);
                assert!(out.escalations.len() <= 2);
                match out.escalations.last() {
                    Some(last) => assert_eq!(last.to, out.algorithm),
                    None => assert_eq!(out.algorithm, Algorithm::Primary),
                }
            }
            assert_eq!(evaluate(&without_tables, request).algorithm, Algorithm::Tertiary);
        }
    }
}
