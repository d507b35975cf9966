//! Error types for cmdkit operations.
//!
//! This module defines [`CmdKitError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation failures inside a prompt never surface here; they are
//!   retried by the prompt loop
//! - Exhausting a prompt's attempt budget is reported as
//!   [`CmdKitError::AttemptsExhausted`] and the entry point decides the exit code
//! - Use `anyhow::Error` (via `CmdKitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cmdkit operations.
#[derive(Debug, Error)]
pub enum CmdKitError {
    /// A validated prompt was answered incorrectly too many times.
    #[error("Entered incorrect information {attempts} times")]
    AttemptsExhausted { attempts: usize },

    /// The input stream was closed before an answer was read.
    #[error("Aborted: no input available")]
    MissingInput,

    /// A prompt without a default was reached in non-interactive mode.
    #[error("Cannot ask '{question}' in non-interactive mode (no default value)")]
    NonInteractive { question: String },

    /// Hidden input was requested on a terminal that cannot hide it.
    #[error("Unable to hide the response on this terminal")]
    HiddenInputUnavailable,

    /// A choice default does not match any of the choices.
    #[error("Value \"{value}\" is invalid")]
    InvalidChoice { value: String },

    /// Color name in a style definition is not recognised.
    #[error("Unknown color '{name}'")]
    UnknownColor { name: String },

    /// Settings file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CmdKitError {
    /// Whether the error ends an interactive exchange that cannot be resumed.
    pub fn is_prompt_abort(&self) -> bool {
        matches!(self, Self::AttemptsExhausted { .. } | Self::MissingInput)
    }
}

/// Result type alias for cmdkit operations.
pub type Result<T> = std::result::Result<T, CmdKitError>;
