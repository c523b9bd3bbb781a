//! Application-level error type.
//!
//! Library code reports problems through small `thiserror` enums
//! (`RequestError`, `LoadError`, `EvalFailure`). Only the ones that reach the
//! operator are converted into an `AppError`, which carries the exit code used
//! by the binary.

use crate::io::RequestError;

/// Exit code for malformed input or invalid configuration.
pub const EXIT_INPUT: u8 = 2;

/// Exit code for anything not classified as an input problem.
pub const EXIT_UNEXPECTED: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Malformed request input; no computation was attempted.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(EXIT_UNEXPECTED, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Io(e) => AppError::unexpected(format!("Failed to read input: {e}")),
            other => AppError::input(format!(
                "Input error: invalid numeric input ({other}). Please enter valid numbers."
            )),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
