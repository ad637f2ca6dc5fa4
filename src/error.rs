//! Error types for installer operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Steps return `SetupError` when they fail; whether that failure aborts
//!   the run is decided by the step's [`FailurePolicy`](crate::steps::FailurePolicy)
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The interpreter is older than the supported minimum.
    #[error("Python {minimum} or higher is required (current version: {found})")]
    UnsupportedPython { found: String, minimum: String },

    /// The interpreter could not report a usable version.
    #[error("Could not determine Python version from '{interpreter}': {message}")]
    PythonVersionUnreadable {
        interpreter: String,
        message: String,
    },

    /// A required package failed to install.
    #[error("Failed to install package '{package}': {message}")]
    PackageInstallFailed { package: String, message: String },

    /// One or more browser downloads failed.
    #[error("Failed to install browsers: {}", browsers.join(", "))]
    BrowserInstallFailed { browsers: Vec<String> },

    /// An optional tool is not on PATH.
    #[error("{tool} not found - install with: {hint}")]
    ToolNotFound { tool: String, hint: String },

    /// A working directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Post-install verification failed.
    #[error("Installation test failed: {message}")]
    VerificationFailed { message: String },

    /// A process could not be started at all.
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Whether the error means the program itself was missing from PATH.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Spawn { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::ToolNotFound { .. } => true,
            _ => false,
        }
    }
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, SetupError>;
