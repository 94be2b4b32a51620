//! Error types for Skyforge operations.
//!
//! This module defines [`SkyforgeError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation failures that the user can fix at a prompt are handled in
//!   local reprompt loops and never become a `SkyforgeError`
//! - Console, account and environment failures propagate unchanged
//! - Use `anyhow::Error` (via `SkyforgeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Skyforge operations.
#[derive(Debug, Error)]
pub enum SkyforgeError {
    /// Configuration or manifest file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration, manifest or state file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The account has nothing to choose from for a selection.
    #[error("no {kind} found.\n{remediation}")]
    NoCandidates { kind: String, remediation: String },

    /// A prompt could not be answered.
    #[error("Cannot prompt for '{key}': {message}")]
    Prompt { key: String, message: String },

    /// The operation was cancelled by the user.
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkyforgeError {
    /// Whether this error came from a cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            _ => false,
        }
    }
}

/// Result type alias for Skyforge operations.
pub type Result<T> = std::result::Result<T, SkyforgeError>;
