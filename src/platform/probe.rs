//! Executable search path probing

use crate::error::{Error, Result};
use crate::platform::traits::CommandProbe;

/// Probe backed by the `which` crate, honoring `PATH` (and `PATHEXT` on Windows)
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl PathProbe {
    pub fn new() -> Self {
        Self
    }
}

impl CommandProbe for PathProbe {
    fn probe(&self, name: &str) -> Result<bool> {
        match which::which(name) {
            Ok(path) => {
                trace!("{} resolved to {}", name, path.display());
                Ok(true)
            }
            Err(which::Error::CannotFindBinaryPath) => Ok(false),
            Err(e) => Err(Error::ProbeFailed {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
