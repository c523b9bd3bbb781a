//! Command-line parsing for the `cascade` evaluator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! evaluation code. Request values stay strings here; `io::request` owns the
//! rules for what counts as a valid number.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "cascade",
    version,
    about = "Evaluate fun(x, y, z) with table lookups, falling back to simpler algorithms"
)]
pub struct Cli {
    /// Directory holding dat_X_1_1.dat, dat_X00_1.dat and dat_X1_00.dat.
    ///
    /// Defaults to $CASCADE_TABLE_DIR (a .env file is honored), then the
    /// current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub tables: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one request (default when no subcommand is given).
    Eval(EvalArgs),
    /// Show which table serves a point and its interpolated T and U.
    Lookup(LookupArgs),
    /// Try to load every table and summarize what was found.
    Tables,
}

#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    /// x, y and z. Read from stdin when omitted.
    #[arg(value_name = "VALUE", num_args = 0..=3, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Print a JSON report instead of the text narrative.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct LookupArgs {
    /// Point to probe.
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
}

/// Subcommand names recognized by `app::rewrite_args`.
pub const SUBCOMMANDS: [&str; 4] = ["eval", "lookup", "tables", "help"];
