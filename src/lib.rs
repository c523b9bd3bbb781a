//! `cascade-eval` library crate.
//!
//! Evaluates a nested formula over `(x, y, z)` backed by three interpolation
//! tables, falling back to simpler algorithms when the inputs or the data
//! rule the stricter ones out.
//!
//! The binary (`cascade`) is a thin wrapper around this library so that:
//!
//! - the evaluation chain is testable without spawning processes
//! - table loading can be swapped out through `table::TableSource`

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod eval;
pub mod io;
pub mod report;
pub mod table;
