//! Error types for Trestle operations.
//!
//! This module defines [`TrestleError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TrestleError` for failures that abort a command before or outside
//!   the check sequence (no interpreter, broken embedded asset, IO)
//! - Use `anyhow::Error` (via `TrestleError::Other`) for unexpected errors
//! - Failures *inside* a check never surface here: each check converts its
//!   own failure into a diagnostic and the run continues

use thiserror::Error;

/// Core error type for Trestle operations.
#[derive(Debug, Error)]
pub enum TrestleError {
    /// No usable Python interpreter could be located.
    #[error("Python interpreter not found: {message}")]
    InterpreterNotFound { message: String },

    /// An embedded check snippet is missing from the binary.
    #[error("Embedded snippet not available: {name}")]
    SnippetNotFound { name: String },

    /// External command could not be launched or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Trestle operations.
pub type Result<T> = std::result::Result<T, TrestleError>;
