//! Lookup tables and piecewise-linear interpolation.
//!
//! A table is an ordered list of `(x, t, u)` samples. Queries pick either the
//! `t` or the `u` column and interpolate linearly between the two samples that
//! bracket the query, clamping to the first/last sample outside the x-range.
//!
//! Tables are expected in non-decreasing `x` order. That is not enforced: the
//! bracket search scans in stored order, so an unordered source gives
//! scan-order results. `Table::is_ordered` lets callers flag such data.

pub mod slot;
pub mod store;

pub use slot::*;
pub use store::*;

/// One `(x, t, u)` row of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSample {
    pub x: f64,
    pub t: f64,
    pub u: f64,
}

impl TableSample {
    pub fn new(x: f64, t: f64, u: f64) -> Self {
        Self { x, t, u }
    }

    pub fn field(&self, field: Field) -> f64 {
        match field {
            Field::T => self.t,
            Field::U => self.u,
        }
    }
}

/// Which value column a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    T,
    U,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    samples: Vec<TableSample>,
}

impl Table {
    pub fn new(samples: Vec<TableSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TableSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(first.x, last.x)` in stored order, or `None` for an empty table.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.x, last.x))
    }

    /// True when samples are in non-decreasing `x` order.
    pub fn is_ordered(&self) -> bool {
        self.samples.windows(2).all(|pair| pair[0].x <= pair[1].x)
    }

    pub fn interpolate(&self, x: f64, field: Field) -> f64 {
        interpolate(&self.samples, x, field)
    }
}

impl FromIterator<TableSample> for Table {
    fn from_iter<I: IntoIterator<Item = TableSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Piecewise-linear interpolation of `field` at `x`.
///
/// - empty table: `0.0`
/// - `x <= first.x`: first sample's value (clamp)
/// - `x >= last.x`: last sample's value (clamp)
/// - otherwise the first sample with `x <= sample.x` closes the bracket, so a
///   query equal to a knot resolves to the earlier bracket
///
/// A bracket with duplicate `x` returns its lower value instead of dividing
/// by zero.
pub fn interpolate(samples: &[TableSample], x: f64, field: Field) -> f64 {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return 0.0;
    };

    if x <= first.x {
        return first.field(field);
    }
    if x >= last.x {
        return last.field(field);
    }

    for pair in samples.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if x <= hi.x {
            let y0 = lo.field(field);
            let y1 = hi.field(field);
            if hi.x != lo.x {
                return y0 + (y1 - y0) * (x - lo.x) / (hi.x - lo.x);
            }
            return y0;
        }
    }

    // The last window closes at `last.x > x`, so only a NaN query gets here.
    0.0
}
