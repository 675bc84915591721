//! Windows path operations

use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::path::PathBuf;

pub struct WindowsPaths;

impl WindowsPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for WindowsPaths {
    fn config_dir(&self) -> Result<PathBuf> {
        // AppData\Roaming
        dirs::config_dir().ok_or_else(|| Error::DirectoryUnavailable {
            what: "config".to_string(),
        })
    }

    fn home_dir(&self) -> Result<PathBuf> {
        dirs::home_dir().ok_or_else(|| Error::DirectoryUnavailable {
            what: "home".to_string(),
        })
    }
}
