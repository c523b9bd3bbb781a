//! Run configuration: CLI flags first, then the environment, then defaults.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::EvalArgs;
use crate::domain::{EvalConfig, OutputFormat};

/// Environment variable naming the table directory.
pub const TABLE_DIR_ENV: &str = "CASCADE_TABLE_DIR";

/// Resolve the table directory, loading `.env` if present.
pub fn resolve_table_dir(flag: Option<PathBuf>) -> PathBuf {
    if flag.is_none() {
        dotenvy::dotenv().ok();
    }
    table_dir_from(flag, std::env::var_os(TABLE_DIR_ENV))
}

fn table_dir_from(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn eval_config_from_args(args: &EvalArgs, table_dir: PathBuf) -> EvalConfig {
    EvalConfig {
        table_dir,
        output: if args.json { OutputFormat::Json } else { OutputFormat::Text },
    }
}
