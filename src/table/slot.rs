//! Input ranges and the table slot serving each one.

use std::fmt;

/// One of the three lookup tables, keyed by the range of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSlot {
    /// `|x| <= 1`, queried with `x` itself.
    Mid,
    /// `x < -1`, queried with `1/x`.
    NegativeOuter,
    /// `x > 1`, queried with `1/x`.
    PositiveOuter,
}

impl TableSlot {
    pub const ALL: [TableSlot; 3] = [TableSlot::Mid, TableSlot::NegativeOuter, TableSlot::PositiveOuter];

    pub fn id(self) -> &'static str {
        match self {
            TableSlot::Mid => "mid",
            TableSlot::NegativeOuter => "negative-outer",
            TableSlot::PositiveOuter => "positive-outer",
        }
    }

    /// File name of the slot's source inside the table directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TableSlot::Mid => "dat_X_1_1.dat",
            TableSlot::NegativeOuter => "dat_X00_1.dat",
            TableSlot::PositiveOuter => "dat_X1_00.dat",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TableSlot::Mid => 0,
            TableSlot::NegativeOuter => 1,
            TableSlot::PositiveOuter => 2,
        }
    }
}

impl fmt::Display for TableSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Map `x` onto the table that covers it and the abscissa to query there.
///
/// Outer ranges are folded into `(-1, 0)` / `(0, 1)` by taking the reciprocal.
/// NaN lands in `PositiveOuter` and stays NaN.
pub fn range_transform(x: f64) -> (f64, TableSlot) {
    if x.abs() <= 1.0 {
        (x, TableSlot::Mid)
    } else if x < -1.0 {
        (1.0 / x, TableSlot::NegativeOuter)
    } else {
        (1.0 / x, TableSlot::PositiveOuter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_is_identity() {
        for x in [-1.0, -0.25, 0.0, 0.75, 1.0] {
            assert_eq!(range_transform(x), (x, TableSlot::Mid));
        }
    }

    #[test]
    fn outer_ranges_use_reciprocal() {
        assert_eq!(range_transform(-4.0), (-0.25, TableSlot::NegativeOuter));
        assert_eq!(range_transform(2.0), (0.5, TableSlot::PositiveOuter));
        let (t, slot) = range_transform(1.0 + 1e-12);
        assert_eq!(slot, TableSlot::PositiveOuter);
        assert!(t < 1.0);
    }

    #[test]
    fn slots_have_distinct_indices_and_files() {
        let mut seen = [false; 3];
        for slot in TableSlot::ALL {
            assert!(!seen[slot.index()]);
            seen[slot.index()] = true;
            assert!(slot.file_name().ends_with(".dat"));
        }
    }
}
