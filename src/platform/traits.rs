//! Platform-specific operation traits
//!
//! These traits sit at the seams where the launcher touches the host: the
//! executable search path, process creation, and well-known directories.
//! Tests substitute their own implementations instead of touching process-wide
//! state.

use crate::error::Result;
use crate::launch::SpawnSpec;
use std::path::PathBuf;

/// Availability probe for terminal emulators
pub trait CommandProbe: Send + Sync {
    /// Check whether `name` resolves to an executable on the search path.
    ///
    /// `Ok(false)` means "not installed". An `Err` means the probe mechanism
    /// itself failed; callers treat both the same way.
    fn probe(&self, name: &str) -> Result<bool>;
}

/// Detached process creation
pub trait Spawner: Send + Sync {
    /// Create the process described by `spec` and release it immediately.
    ///
    /// Returns the child's pid. Never waits on the child.
    fn spawn_detached(&self, spec: &SpawnSpec) -> Result<u32>;
}

/// Platform-specific path operations
pub trait PathOps: Send + Sync {
    /// Get configuration directory
    fn config_dir(&self) -> Result<PathBuf>;

    /// Get the user's home directory
    fn home_dir(&self) -> Result<PathBuf>;
}
