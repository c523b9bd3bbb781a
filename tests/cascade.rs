use std::path::PathBuf;

use cascade_eval::domain::{Algorithm, EvaluationRequest};
use cascade_eval::eval::{evaluate, fun, fun_algorithm2, fun_algorithm3};
use cascade_eval::report::{format_evaluation, format_evaluation_json};
use cascade_eval::table::{Field, TableSlot, TableStore};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn missing_dir() -> PathBuf {
    fixture_dir().join("does-not-exist")
}

#[test]
fn fixture_tables_load_in_order() {
    let store = TableStore::from_dir(fixture_dir());
    assert_eq!(store.table(TableSlot::Mid).unwrap().len(), 5);
    assert_eq!(store.table(TableSlot::NegativeOuter).unwrap().len(), 3);
    assert_eq!(store.table(TableSlot::PositiveOuter).unwrap().len(), 3);
    for slot in TableSlot::ALL {
        assert!(store.table(slot).unwrap().is_ordered(), "{slot}");
    }
}

#[test]
fn fixture_mid_table_interpolates() {
    let store = TableStore::from_dir(fixture_dir());
    let mid = store.table(TableSlot::Mid).unwrap();
    assert!((mid.interpolate(0.25, Field::T) - 0.125).abs() < 1e-12);
    assert!((mid.interpolate(0.25, Field::U) - 0.475).abs() < 1e-12);
}

#[test]
fn well_conditioned_request_uses_algorithm_one() {
    let store = TableStore::from_dir(fixture_dir());
    let request = EvaluationRequest::new(2.0, 3.0, 0.5);
    let out = evaluate(&store, request);
    assert_eq!(out.algorithm, Algorithm::Primary);
    assert!(out.escalations.is_empty());
    assert_eq!(out.value, fun(&store, request).unwrap());

    let text = format_evaluation(&out);
    assert!(text.contains("SUCCESS: Algorithm 1 completed successfully!"));
}

#[test]
fn zero_request_escalates_to_algorithm_two() {
    let store = TableStore::from_dir(fixture_dir());
    let request = EvaluationRequest::new(0.0, 0.0, 0.0);
    let out = evaluate(&store, request);
    assert_eq!(out.algorithm, Algorithm::Secondary);
    assert_eq!(out.value, fun_algorithm2(&store, request).unwrap());

    let text = format_evaluation(&out);
    assert!(text.contains("Algorithm 1 failed, switching to Algorithm 2..."));
    assert!(text.contains("Algorithm 2 result = "));
}

#[test]
fn absent_tables_fall_through_to_closed_form() {
    let store = TableStore::from_dir(missing_dir());
    let request = EvaluationRequest::new(0.5, 2.0, 3.0);
    let out = evaluate(&store, request);
    assert_eq!(out.algorithm, Algorithm::Tertiary);
    assert_eq!(out.escalations.len(), 1);
    assert_eq!(out.escalations[0].from, Algorithm::Primary);

    let expected = 1.3498 * 3.0 + 2.2362 * 2.0 - 2.348 * 0.5 * 2.0;
    assert!((out.value - expected).abs() < 1e-12);
    assert_eq!(out.value, fun_algorithm3(request));

    let json = format_evaluation_json(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["algorithm"], 3);
    assert_eq!(parsed["escalations"][0]["to"], 3);
}

#[test]
fn overflow_in_closed_form_is_a_result_not_an_error() {
    let store = TableStore::from_dir(missing_dir());
    let request = EvaluationRequest::new(1e200, 1e200, 1e200);
    let out = evaluate(&store, request);
    assert_eq!(out.algorithm, Algorithm::Tertiary);
    assert_eq!(out.value, f64::NEG_INFINITY);

    let text = format_evaluation(&out);
    assert!(text.contains("SUCCESS: Algorithm 3 completed successfully!"));
    assert!(text.ends_with("Algorithm 3 result = -inf"));

    let parsed: serde_json::Value = serde_json::from_str(&format_evaluation_json(&out).unwrap()).unwrap();
    assert_eq!(parsed["value"], "-inf");
}
