//! Algorithm 2: `fun_algorithm2` with relaxed guards.
//!
//! `Gold1` and `Glr1` never reject their arguments, so the only way this
//! algorithm fails is a missing lookup table.

use crate::domain::{EvalFailure, EvaluationRequest};
use crate::eval::Fault;
use crate::eval::lookup::Lookup;
use crate::table::TableStore;

/// `fun_algorithm2(x, y, z) = x·Grs1(x, y) + y·Grs1(y, z) + z·Grs1(z, x)`.
pub fn fun_algorithm2(store: &TableStore, request: EvaluationRequest) -> Result<f64, EvalFailure> {
    let lookup = Lookup::new(store);
    let EvaluationRequest { x, y, z } = request;
    fun_terms(&lookup, x, y, z).map_err(|fault| fault.at(request))
}

fn fun_terms(lookup: &Lookup<'_>, x: f64, y: f64, z: f64) -> Result<f64, Fault> {
    Ok(x * grs1(lookup, x, y)? + y * grs1(lookup, y, z)? + z * grs1(lookup, z, x)?)
}

pub(crate) fn gold1(x: f64, y: f64) -> f64 {
    if x > y && y.abs() > 0.1 {
        x / y
    } else if x <= y && x.abs() > 0.1 {
        y / x
    } else if x < y && x.abs() <= 0.1 {
        0.15
    } else if y.abs() <= 1e-10 {
        0.1
    } else {
        0.0
    }
}

pub(crate) fn glr1(x: f64, y: f64) -> f64 {
    if x.abs() < 1.0 { x } else { y }
}

pub(crate) fn grs1(lookup: &Lookup<'_>, x: f64, y: f64) -> Result<f64, Fault> {
    let term1 = 0.14 * lookup.srz(x + y, gold1(x, y), glr1(x, x * y))?;
    let term2 = 1.83 * lookup.srz(x - y, gold1(y, x / 5.0), glr1(4.0 * x, x * y))?;
    let term3 = 0.83 * lookup.srz(x, glr1(y, x / 4.0), gold1(4.0 * y, y))?;
    Ok(term1 + term2 + term3)
}
