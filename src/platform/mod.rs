//! Platform abstraction layer
//!
//! This module names the host platforms the launcher knows about and provides
//! the host-backed implementations of the probe, spawn, and path traits.

mod probe;
mod spawn;
mod traits;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use probe::PathProbe;
pub use spawn::DetachedSpawner;
pub use traits::*;

/// Host platform identifier
///
/// Selects which row of the terminal registry applies. Fixed for the lifetime
/// of the process unless overridden on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    /// All platforms, in registry order
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// The platform this binary was compiled for.
    ///
    /// Unix-likes other than macOS (the BSDs, illumos) run the same X11/Wayland
    /// terminals as Linux and share its row.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Human-readable name for user-facing text
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Whether native paths use drive letters and backslashes
    pub fn uses_drive_letters(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" => Ok(Platform::Windows),
            "macos" | "darwin" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(format!("unknown platform '{}'", other)),
        }
    }
}

/// Host implementation factory
pub struct Host;

impl Host {
    /// Probe against the real executable search path
    pub fn probe() -> Box<dyn CommandProbe> {
        Box::new(PathProbe::new())
    }

    /// Spawner that creates real detached processes
    pub fn spawner() -> Box<dyn Spawner> {
        Box::new(DetachedSpawner::new())
    }

    /// Get the platform-specific path operations
    pub fn paths() -> Box<dyn PathOps> {
        #[cfg(unix)]
        {
            Box::new(unix::UnixPaths::new())
        }

        #[cfg(windows)]
        {
            Box::new(windows::WindowsPaths::new())
        }

        #[cfg(not(any(unix, windows)))]
        {
            compile_error!("Unsupported platform");
        }
    }
}
