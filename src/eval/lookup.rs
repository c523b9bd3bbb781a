//! Table-driven transforms `T`, `U` and the shared combinator `Srz`.

use crate::eval::Fault;
use crate::table::{Field, TableStore, range_transform};

/// Borrowed view of the table store used while one algorithm runs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lookup<'a> {
    store: &'a TableStore,
}

impl<'a> Lookup<'a> {
    pub(crate) fn new(store: &'a TableStore) -> Self {
        Self { store }
    }

    pub(crate) fn t(&self, x: f64) -> Result<f64, Fault> {
        self.compute(x, Field::T)
    }

    pub(crate) fn u(&self, x: f64) -> Result<f64, Fault> {
        self.compute(x, Field::U)
    }

    fn compute(&self, x: f64, field: Field) -> Result<f64, Fault> {
        let (query, slot) = range_transform(x);
        let table = self.store.table(slot).map_err(|e| Fault::TableUnavailable {
            slot,
            detail: e.to_string(),
        })?;
        Ok(table.interpolate(query, field))
    }

    pub(crate) fn srz(&self, x: f64, y: f64, z: f64) -> Result<f64, Fault> {
        if x > y {
            Ok(self.t(x)? + self.u(z)? - self.t(y)?)
        } else {
            Ok(self.t(y)? + self.u(y)? - self.u(z)?)
        }
    }
}
