//! Configuration file loading
//!
//! Search order, first existing file wins:
//!
//! 1. an explicit path (`--config`), which must exist
//! 2. `<config dir>/autopilot-launcher/config.toml`
//! 3. `~/.autopilot-launcher.toml`
//! 4. `./.planning/launcher.toml`
//!
//! No file at all means defaults.

use super::Config;
use crate::error::{Error, Result};
use crate::platform::PathOps;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file loader
pub struct ConfigLoader {
    /// Path given on the command line, if any
    explicit: Option<PathBuf>,
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
    /// File the last successful load came from
    current_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader with the default search paths
    pub fn new(paths: &dyn PathOps, cwd: &Path) -> Self {
        Self::with_search_paths(Self::default_search_paths(paths, cwd))
    }

    /// Loader with a custom search list
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            explicit: None,
            search_paths,
            current_path: None,
        }
    }

    /// Use `path` and nothing else
    pub fn explicit(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Where the loaded configuration came from, `None` for defaults
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Find and load the configuration
    pub fn load(&mut self) -> Result<Config> {
        if let Some(path) = self.explicit.clone() {
            if !path.exists() {
                return Err(Error::ConfigNotFound { path });
            }
            let config = Self::load_file(&path)?;
            self.current_path = Some(path);
            return Ok(config);
        }

        for path in &self.search_paths {
            if path.is_file() {
                let config = Self::load_file(path)?;
                debug!("Loaded configuration from {}", path.display());
                self.current_path = Some(path.clone());
                return Ok(config);
            }
        }

        debug!("No configuration file found, using defaults");
        self.current_path = None;
        Ok(Config::default())
    }

    /// Load a specific configuration file
    pub fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn default_search_paths(paths: &dyn PathOps, cwd: &Path) -> Vec<PathBuf> {
        let mut search_paths = Vec::new();

        match paths.config_dir() {
            Ok(dir) => search_paths.push(dir.join("autopilot-launcher").join("config.toml")),
            Err(e) => debug!("Skipping config dir: {}", e),
        }

        match paths.home_dir() {
            Ok(home) => search_paths.push(home.join(".autopilot-launcher.toml")),
            Err(e) => debug!("Skipping home config: {}", e),
        }

        search_paths.push(cwd.join(".planning").join("launcher.toml"));
        search_paths
    }
}
