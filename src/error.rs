//! Error types and Result aliases for the autopilot launcher

use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the launcher
#[derive(Debug, ThisError)]
pub enum Error {
    // === Terminal resolution errors ===
    /// The availability probe itself failed (not the same as "not installed")
    #[error("Failed to probe for '{name}': {reason}")]
    ProbeFailed { name: String, reason: String },

    // === Launch errors ===
    /// The operating system refused to create the process
    #[error("Failed to spawn '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The resolved terminal has no strategy for interpreter payloads
    #[error("Terminal '{terminal}' cannot launch interpreter payloads")]
    NoInterpreterStrategy { terminal: String },

    /// Payload path is empty or otherwise unusable
    #[error("Invalid payload path: {reason}")]
    InvalidPayload { reason: String },

    // === Configuration errors ===
    /// Failed to read a configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file was read but is not valid
    #[error("Failed to parse config '{}': {reason}", path.display())]
    ConfigParseFailed { path: PathBuf, reason: String },

    /// Explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A well-known directory (home, config, cwd) could not be determined
    #[error("Could not determine {what} directory")]
    DirectoryUnavailable { what: String },

    // === Dashboard errors ===
    /// Dashboard was pointed at a project root that does not exist
    #[error("Project root not found: {}", path.display())]
    ProjectRootNotFound { path: PathBuf },

    /// File watcher could not be set up
    #[error("Failed to watch progress files: {reason}")]
    WatchFailed { reason: String },

    /// Pause marker could not be created or removed
    #[error("Failed to update pause marker '{}': {reason}", path.display())]
    PauseToggleFailed { path: PathBuf, reason: String },

    // === Wrapped errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short machine-friendly category name, logged as the `category` field
    pub fn category(&self) -> &'static str {
        match self {
            Error::ProbeFailed { .. } => "probe",
            Error::SpawnFailed { .. }
            | Error::NoInterpreterStrategy { .. }
            | Error::InvalidPayload { .. } => "launch",
            Error::ConfigLoadFailed { .. }
            | Error::ConfigParseFailed { .. }
            | Error::ConfigNotFound { .. }
            | Error::DirectoryUnavailable { .. } => "config",
            Error::ProjectRootNotFound { .. }
            | Error::WatchFailed { .. }
            | Error::PauseToggleFailed { .. } => "dashboard",
            Error::Io(_) => "io",
        }
    }
}
