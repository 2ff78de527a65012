//! Error types for nbenv operations.
//!
//! This module defines [`NbenvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NbenvError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `NbenvError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nbenv operations.
#[derive(Debug, Error)]
pub enum NbenvError {
    /// No usable base Python interpreter could be located.
    #[error("No Python interpreter found: {message}")]
    PythonNotFound { message: String },

    /// An invoked tool exited non-zero (or could not be spawned).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The virtual environment directory does not exist.
    #[error("Virtual environment not found at {path}")]
    VenvMissing { path: PathBuf },

    /// The kernelspec listing returned by Jupyter could not be parsed.
    #[error("Failed to parse kernelspec listing: {message}")]
    KernelspecParse { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NbenvError {
    /// Process exit code for this error.
    ///
    /// A failed subprocess propagates its own exit code when it fits in the
    /// 1..=255 range; everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            NbenvError::CommandFailed {
                code: Some(code), ..
            } if (1..=255).contains(code) => *code as u8,
            _ => 1,
        }
    }
}

/// Result type alias for nbenv operations.
pub type Result<T> = std::result::Result<T, NbenvError>;
