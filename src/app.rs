//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging and resolves the table directory
//! - reads the request (argv or stdin)
//! - runs the fallback chain
//! - prints the report

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use crate::cli::{Command, EvalArgs, LookupArgs, SUBCOMMANDS};
use crate::domain::OutputFormat;
use crate::error::{AppError, EXIT_INPUT};
use crate::report::{LookupReport, TableStatus, TableSummary};
use crate::table::{DirSource, TableSlot, TableStore, range_transform};

pub mod config;
pub mod logging;

/// Entry point for the `cascade` binary.
pub fn run() -> Result<(), AppError> {
    // `cascade 1 2 3` and bare `cascade` should behave like `cascade eval ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    logging::init(cli.verbose);
    let table_dir = config::resolve_table_dir(cli.tables);

    match cli.command {
        Command::Eval(args) => handle_eval(&args, table_dir),
        Command::Lookup(args) => handle_lookup(&args, table_dir),
        Command::Tables => handle_tables(table_dir),
    }
}

fn handle_eval(args: &EvalArgs, table_dir: PathBuf) -> Result<(), AppError> {
    let config = config::eval_config_from_args(args, table_dir);

    let request = if args.values.is_empty() {
        if config.output == OutputFormat::Text {
            print!("Enter values x, y, z: ");
            std::io::stdout()
                .flush()
                .map_err(|e| AppError::unexpected(format!("Failed to write prompt: {e}")))?;
        }
        crate::io::read_request(std::io::stdin().lock())?
    } else {
        crate::io::parse_request(args.values.as_slice())?
    };

    let store = TableStore::from_dir(&config.table_dir);
    let evaluation = crate::eval::evaluate(&store, request);

    match config.output {
        OutputFormat::Text => println!("{}", crate::report::format_evaluation(&evaluation)),
        OutputFormat::Json => println!("{}", crate::report::format_evaluation_json(&evaluation)?),
    }
    Ok(())
}

fn handle_lookup(args: &LookupArgs, table_dir: PathBuf) -> Result<(), AppError> {
    let (query, slot) = range_transform(args.x);
    let store = TableStore::from_dir(table_dir);
    let table = store
        .table(slot)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Table '{slot}' unavailable: {e}")))?;

    let report = LookupReport {
        x: args.x,
        slot,
        query,
        t: table.interpolate(query, crate::table::Field::T),
        u: table.interpolate(query, crate::table::Field::U),
    };
    println!("{}", crate::report::format_lookup(&report));
    Ok(())
}

fn handle_tables(table_dir: PathBuf) -> Result<(), AppError> {
    let source = DirSource::new(table_dir);
    let paths: Vec<PathBuf> = TableSlot::ALL.iter().map(|&slot| source.path_for(slot)).collect();
    let store = TableStore::new(source);

    let rows: Vec<TableSummary> = TableSlot::ALL
        .iter()
        .zip(paths)
        .map(|(&slot, path)| {
            let status = match store.table(slot) {
                Ok(table) => TableStatus::Loaded {
                    samples: table.len(),
                    x_range: table.x_range(),
                    ordered: table.is_ordered(),
                },
                Err(e) => TableStatus::Unavailable(e.to_string()),
            };
            TableSummary { slot, path, status }
        })
        .collect();

    if rows.iter().any(|r| matches!(r.status, TableStatus::Loaded { ordered: false, .. })) {
        warn!("unordered tables interpolate in stored order; sort them by x to get monotone brackets");
    }

    println!("{}", crate::report::format_table_summaries(&rows));
    Ok(())
}

/// Rewrite argv so `cascade` defaults to `cascade eval`.
///
/// Rules:
/// - `cascade`                         -> `cascade eval`
/// - `cascade 1 2 3`                   -> `cascade eval 1 2 3`
/// - `cascade -v -1 2 3`               -> `cascade eval -v -1 2 3`
/// - first positional is a subcommand  -> unchanged
/// - `cascade --help/--version/-h/-V`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("eval".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version");
    if is_top_level_help_or_version {
        return argv;
    }

    let has_subcommand = first_positional(&argv[1..]).is_some_and(|a| SUBCOMMANDS.contains(&a));
    if has_subcommand {
        return argv;
    }

    argv.insert(1, "eval".to_string());
    argv
}

/// First token that is neither a flag nor the value of `--tables`.
fn first_positional(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--tables" {
            iter.next();
        } else if !arg.starts_with('-') {
            return Some(arg.as_str());
        }
    }
    None
}
