//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use modeler_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Referenced model does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::NotFound(_) => 66,  // EX_NOINPUT
            Self::Database(_) => 73,  // EX_CANTCREAT (closest fit)
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(RepositoryError::Constraint(msg)) => Self::Arguments(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

/// Exit code for a failed command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_usage_error() {
        let err = CliError::from(CoreError::Validation("empty name".into()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_model_is_not_found() {
        let err = CliError::from(CoreError::Repository(RepositoryError::NotFound(
            "Model 7".into(),
        )));
        assert!(matches!(err, CliError::NotFound(_)));
    }

    #[test]
    fn anyhow_errors_fall_back_to_general_failure() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
        assert_eq!(
            exit_code_for(&anyhow::Error::new(CliError::Config("bad".into()))),
            78
        );
    }
}
