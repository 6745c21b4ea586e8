//! Error types for the CLI

use core_types::{LiteralError, RuntimeError};
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Fatal error raised by a builtin call
    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    /// An `--arg` literal could not be read
    #[error("Invalid argument literal '{literal}': {source}")]
    Literal {
        /// The literal as given
        literal: String,
        /// Reader error
        #[source]
        source: LiteralError,
    },

    /// No fixture exists for the requested function
    #[error("No fixture for function '{0}'")]
    UnknownFixture(String),

    /// Report file could not be written
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Report error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether this error is a fatal runtime error, printed as `Fatal error: ...`.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Runtime(_))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
