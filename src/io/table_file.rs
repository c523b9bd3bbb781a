//! Table source format: whitespace-separated `x t u` triples.
//!
//! Reading stops at end of input or at the first token that is not a finite
//! number; an incomplete trailing triple is dropped. Bytes that are not UTF-8
//! count as such a token. An empty source is a valid (empty) table. Only an
//! unopenable or unreadable source is an error.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::table::{Table, TableSample};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn parse_table(text: &str) -> Table {
    let mut samples = Vec::new();
    let mut row = [0.0_f64; 3];
    let mut filled = 0;

    for token in text.split_whitespace() {
        let Some(value) = token.parse::<f64>().ok().filter(|v| v.is_finite()) else {
            debug!(token, samples = samples.len(), "stopped reading table at non-numeric token");
            break;
        };
        row[filled] = value;
        filled += 1;
        if filled == 3 {
            samples.push(TableSample::new(row[0], row[1], row[2]));
            filled = 0;
        }
    }

    if filled != 0 {
        debug!(dropped = filled, "discarded incomplete trailing table record");
    }
    Table::new(samples)
}

pub fn load_table_file(path: &Path) -> Result<Table, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_table(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_regardless_of_layout() {
        let table = parse_table("0 1 2\n2 3\n4\n");
        assert_eq!(
            table.samples(),
            &[TableSample::new(0.0, 1.0, 2.0), TableSample::new(2.0, 3.0, 4.0)]
        );
    }

    #[test]
    fn stops_at_first_bad_token() {
        let table = parse_table("0 1 2\n1 x 3\n2 3 4\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn drops_incomplete_tail() {
        let table = parse_table("0 1 2 3 4");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_source_is_empty_table() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("  \n\t").is_empty());
    }

    #[test]
    fn non_utf8_trailer_keeps_earlier_rows() {
        let dir = std::env::temp_dir().join(format!("cascade-eval-cp1251-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dat_X_1_1.dat");
        let mut bytes = b"-1 0 1\n0 0.5 0.5\n1 1 0\n".to_vec();
        bytes.extend_from_slice(b"\xcf\xf0\xe8\xec 2 2\n");
        std::fs::write(&path, &bytes).unwrap();

        let table = load_table_file(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.x_range(), Some((-1.0, 1.0)));
    }

    #[test]
    fn missing_file_is_open_error() {
        let path = std::env::temp_dir().join("cascade-eval-missing").join("dat_X_1_1.dat");
        let err = load_table_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().starts_with("Cannot open file"));
    }
}
