//! Algorithm 3: the unconditional closed-form fallback.

use crate::domain::EvaluationRequest;

/// `1.3498·z + 2.2362·y − 2.348·x·y`. Never fails.
pub fn fun_algorithm3(request: EvaluationRequest) -> f64 {
    let EvaluationRequest { x, y, z } = request;
    1.3498 * z + 2.2362 * y - 2.348 * x * y
}
