//! Error types.
//!
//! The fitting engine surfaces typed failures (`FitError`) so callers can
//! choose their own user-facing message; it never logs or prints on its own.
//! The CLI layer wraps everything in `AppError`, which carries the process
//! exit code.

use thiserror::Error;

/// Errors produced by the fitting engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Fewer than two samples, or mismatched x/y lengths.
    #[error("insufficient data: x has {x_len} value(s), y has {y_len} (need at least 2 matching pairs)")]
    InsufficientData { x_len: usize, y_len: usize },

    /// No suitable curve: the optimizer failed to converge, or the linear
    /// solve was too ill-conditioned to accept.
    #[error("no suitable {family} curve could be fitted to the data")]
    FitNotFound { family: &'static str },

    /// Non-finite values, out-of-range degree, or unparseable input.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Exit codes:
/// - 2: bad input/configuration (malformed CSV, invalid flags)
/// - 3: not enough data to fit
/// - 4: fit/computation failure
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

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::MalformedInput(_) => 2,
            FitError::InsufficientData { .. } => 3,
            FitError::FitNotFound { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_error_maps_to_exit_codes() {
        let e: AppError = FitError::MalformedInput("bad cell".into()).into();
        assert_eq!(e.exit_code(), 2);

        let e: AppError = FitError::InsufficientData { x_len: 1, y_len: 1 }.into();
        assert_eq!(e.exit_code(), 3);

        let e: AppError = FitError::FitNotFound {
            family: "exponential",
        }
        .into();
        assert_eq!(e.exit_code(), 4);
    }
}
