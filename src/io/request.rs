//! Parsing of the `(x, y, z)` request.
//!
//! Input problems are their own error class: they are reported to the operator
//! and no algorithm runs.

use std::io::BufRead;

use thiserror::Error;

use crate::domain::EvaluationRequest;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("expected 3 values (x, y, z), found {found}")]
    WrongArity { found: usize },
    #[error("'{token}' is not a number")]
    NotANumber { token: String },
    #[error("'{token}' is not a finite number")]
    NonFinite { token: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn parse_value(token: &str) -> Result<f64, RequestError> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|_| RequestError::NotANumber { token: token.to_string() })?;
    if !value.is_finite() {
        return Err(RequestError::NonFinite { token: token.to_string() });
    }
    Ok(value)
}

/// Parse exactly three tokens into a request.
///
/// Tokens are parsed in order, so a malformed token is reported before a
/// missing one.
pub fn parse_request<S: AsRef<str>>(tokens: &[S]) -> Result<EvaluationRequest, RequestError> {
    let values = tokens
        .iter()
        .take(3)
        .map(|t| parse_value(t.as_ref()))
        .collect::<Result<Vec<f64>, _>>()?;

    match (tokens.len(), values.as_slice()) {
        (3, &[x, y, z]) => Ok(EvaluationRequest::new(x, y, z)),
        (found, _) => Err(RequestError::WrongArity { found }),
    }
}

/// Read the first three whitespace-separated values from `reader`.
///
/// Values may span lines. Anything after the third value is ignored.
pub fn read_request<R: BufRead>(reader: R) -> Result<EvaluationRequest, RequestError> {
    let mut tokens: Vec<String> = Vec::with_capacity(3);
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
        if tokens.len() >= 3 {
            tokens.truncate(3);
            break;
        }
    }
    parse_request(tokens.as_slice())
}
