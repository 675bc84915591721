//! Configuration for the autopilot launcher
//!
//! A TOML file (see [`loader`]) describes what to launch. The loaded
//! [`Config`] is resolved once into an immutable [`LaunchPlan`] with absolute
//! paths, which is what the orchestrator receives.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::launch::LaunchRequest;
use crate::platform::PathOps;

pub use loader::ConfigLoader;

/// Worker script location relative to the home directory
pub const DEFAULT_WORKER_SCRIPT: &str = ".claude/get-shit-done/bin/ralph.sh";

/// Interpreter used for a dashboard `script` when none is configured
pub const DEFAULT_DASHBOARD_INTERPRETER: &str = "node";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub worker: WorkerConfig,
    pub dashboard: DashboardConfig,
    pub project: ProjectConfig,
}

/// The long-running automation script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Script path; `~/` is expanded, relative paths are taken from the project root
    pub script: Option<PathBuf>,

    /// Window title
    pub title: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            script: None,
            title: "GSD Ralph".to_string(),
        }
    }
}

/// The optional progress dashboard opened next to the worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub enabled: bool,
    pub title: String,

    /// Interpreter for `script`; ignored when `script` is unset
    pub interpreter: Option<PathBuf>,

    /// Arguments placed between the interpreter and the script
    pub interpreter_args: Vec<String>,

    /// External dashboard script. Unset means the built-in `watch` command.
    pub script: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "GSD Progress".to_string(),
            interpreter: None,
            interpreter_args: Vec::new(),
            script: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root; defaults to the invoking working directory
    pub root: Option<PathBuf>,
}

/// Everything the orchestrator launches, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Working directory of both windows
    pub project_root: PathBuf,
    pub worker: LaunchRequest,
    pub dashboard: Option<LaunchRequest>,
}

impl LaunchPlan {
    /// Same plan with the dashboard switched off
    pub fn without_dashboard(mut self) -> Self {
        self.dashboard = None;
        self
    }
}

impl Config {
    /// Resolve into a [`LaunchPlan`].
    ///
    /// `cwd` anchors a relative project root; `self_exe` is the binary that
    /// provides the built-in dashboard.
    pub fn to_plan(&self, paths: &dyn PathOps, cwd: &Path, self_exe: &Path) -> Result<LaunchPlan> {
        let project_root = match &self.project.root {
            Some(root) => resolve_path(root, cwd, paths)?,
            None => cwd.to_path_buf(),
        };

        let worker_script = match &self.worker.script {
            Some(script) => resolve_path(script, &project_root, paths)?,
            None => paths.home_dir()?.join(DEFAULT_WORKER_SCRIPT),
        };
        let worker = LaunchRequest::script(worker_script, self.worker.title.clone());

        let dashboard = if self.dashboard.enabled {
            Some(self.dashboard_request(paths, &project_root, self_exe)?)
        } else {
            None
        };

        Ok(LaunchPlan {
            project_root,
            worker,
            dashboard,
        })
    }

    fn dashboard_request(
        &self,
        paths: &dyn PathOps,
        project_root: &Path,
        self_exe: &Path,
    ) -> Result<LaunchRequest> {
        let dashboard = &self.dashboard;
        let request = match &dashboard.script {
            Some(script) => {
                let interpreter = dashboard
                    .interpreter
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DASHBOARD_INTERPRETER));
                LaunchRequest::interpreted(
                    resolve_path(script, project_root, paths)?,
                    dashboard.title.clone(),
                    interpreter,
                    dashboard.interpreter_args.clone(),
                )
            }
            None => LaunchRequest::interpreted(
                project_root,
                dashboard.title.clone(),
                self_exe,
                vec!["watch".to_string()],
            ),
        };
        Ok(request)
    }
}

/// Expand a leading `~/` and anchor relative paths at `base`.
///
/// An empty path is rejected: it would launch the shell itself.
fn resolve_path(path: &Path, base: &Path, paths: &dyn PathOps) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPayload {
            reason: "path is empty".to_string(),
        });
    }

    if let Ok(rest) = path.strip_prefix("~") {
        return Ok(paths.home_dir()?.join(rest));
    }

    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base.join(path))
    }
}
