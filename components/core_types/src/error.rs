//! Unrecoverable runtime errors.
//!
//! Recoverable argument mismatches never become a `RuntimeError`; they are
//! reported as diagnostics alongside a null result. Only conditions that stop
//! the call chain travel through this type.

use thiserror::Error;

/// A fatal error raised while calling a builtin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An object's string-conversion hook failed.
    #[error("{class}::__toString(): {message}")]
    ConversionHook {
        /// Class of the object whose hook failed
        class: String,
        /// Message reported by the hook
        message: String,
    },

    /// An argument was rejected by a fatal coercion rule.
    #[error("{0}")]
    TypeError(String),

    /// A builtin was called with too few or too many arguments.
    #[error("{0}")]
    ArgumentCount(String),

    /// A value with no scalar string form reached the strict stringifier.
    #[error("{0} has no string form")]
    NotStringifiable(&'static str),

    /// No builtin is registered under this name.
    #[error("Call to undefined function {0}()")]
    UnknownFunction(String),
}

/// Result type for builtin calls
pub type RuntimeResult<T> = Result<T, RuntimeError>;
