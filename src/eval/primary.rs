//! Algorithm 1: `fun` with the strict `Gold` / `Glr` guards.

use tracing::debug;

use crate::domain::{EvalFailure, EvaluationRequest};
use crate::eval::Fault;
use crate::eval::lookup::Lookup;
use crate::table::TableStore;

/// Smallest magnitude accepted as a `Gold` denominator.
const GOLD_EPS: f64 = 1e-10;

/// `Glr` needs `x² + y² - 4` strictly above this.
const GLR_MIN_RADICAND: f64 = 0.1;

/// `fun(x, y, z) = x²·Grs(y, z) + y²·Grs(x, z) + 0.33·x·y·Grs(x, z)`.
///
/// Any guard or table failure aborts the whole evaluation and is reported
/// against `request`.
pub fn fun(store: &TableStore, request: EvaluationRequest) -> Result<f64, EvalFailure> {
    let lookup = Lookup::new(store);
    let EvaluationRequest { x, y, z } = request;
    fun_terms(&lookup, x, y, z).map_err(|fault| fault.at(request))
}

fn fun_terms(lookup: &Lookup<'_>, x: f64, y: f64, z: f64) -> Result<f64, Fault> {
    let term1 = x * x * grs(lookup, y, z)?;
    let term2 = y * y * grs(lookup, x, z)?;
    let term3 = 0.33 * x * y * grs(lookup, x, z)?;
    Ok(term1 + term2 + term3)
}

pub(crate) fn gold(x: f64, y: f64) -> Result<f64, Fault> {
    if x > y && y.abs() > GOLD_EPS {
        Ok(x / y)
    } else if x < y && x.abs() > GOLD_EPS {
        Ok(y / x)
    } else {
        debug!(x, y, "Gold failed: division by zero or invalid condition");
        Err(Fault::precondition("Gold", format!("no usable denominator (x={x}, y={y})")))
    }
}

pub(crate) fn glr(x: f64, y: f64) -> Result<f64, Fault> {
    if x.abs() < 1.0 {
        return Ok(x);
    }
    if y.abs() < 1.0 {
        return Ok(y);
    }

    let radicand = x * x + y * y - 4.0;
    if radicand > GLR_MIN_RADICAND {
        Ok(y / radicand.sqrt())
    } else {
        debug!(radicand, "Glr failed: radicand too small");
        Err(Fault::precondition("Glr", format!("radicand too small ({radicand})")))
    }
}

/// Weighted sum of three `Srz` terms over shifted `Gold` / `Glr` arguments.
pub(crate) fn grs(lookup: &Lookup<'_>, x: f64, y: f64) -> Result<f64, Fault> {
    let term1 = 0.1389 * lookup.srz(x + y, gold(x, y)?, glr(x, x * y)?)?;
    let term2 = 1.8389 * lookup.srz(x - y, gold(y, x / 5.0)?, glr(5.0 * x, x * y)?)?;
    let term3 = 0.83 * lookup.srz(x - 0.9, glr(y, x / 5.0)?, gold(5.0 * y, y)?)?;
    Ok(term1 + term2 + term3)
}
