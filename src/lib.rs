//! Autopilot Launcher - open a long-running script in its own terminal window
//!
//! The launcher finds a terminal emulator on the host, starts the worker
//! script in a new window of it, detached from the calling process, and then
//! opens a progress dashboard next to it. When no terminal can be used, it
//! prints the exact commands to run by hand instead.
//!
//! ## Module Organization
//!
//! ### Launching
//!
//! - [`terminal`] - Terminal registry, first-fit resolver, path translation, quoting
//! - [`launch`] - Launch requests and the per-terminal command strategies
//! - [`orchestrator`] - Resolve, launch worker, launch dashboard, report
//! - [`instructions`] - Manual fallback instructions
//! - [`platform`] - Host probing, detached spawning, well-known directories
//!
//! ### Supporting
//!
//! - [`config`] - TOML configuration and the resolved launch plan
//! - [`dashboard`] - Live progress view over the worker's `.planning/` files
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use autopilot_launcher::{prepare, Platform};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let launcher = prepare(Platform::current(), None)?;
//! let outcome = launcher.launch_worker(&mut std::io::stdout());
//! std::process::exit(outcome.exit_code());
//! # }
//! ```
//!
//! ## Failure model
//!
//! Only the worker launch decides success. A missing terminal or a failed
//! worker spawn yields [`LaunchOutcome::Failure`] plus manual instructions; a
//! failed dashboard spawn is logged and leaves the outcome a success. Nothing
//! is retried.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod dashboard;
pub mod error;
pub mod instructions;
pub mod launch;
pub mod orchestrator;
pub mod platform;
pub mod terminal;

use std::path::Path;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader, LaunchPlan};
pub use error::{Error, Result};
pub use instructions::ManualInstructions;
pub use launch::{LaunchContext, LaunchRequest, PayloadKind, SpawnSpec};
pub use orchestrator::{FailureReason, LaunchOutcome, LaunchReport, Launcher};
pub use platform::{CommandProbe, Host, PathOps, Platform, Spawner};
pub use terminal::{Registry, Resolver, TerminalCandidate, TerminalKind};

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load configuration and build a host-backed [`Launcher`].
///
/// `config_path` replaces the search list when given. The working directory
/// and the running executable anchor the plan.
///
/// # Errors
///
/// - the explicit config file is missing, unreadable, or invalid
/// - the working directory, executable, or home directory cannot be determined
/// - a configured payload path is empty
pub fn prepare(platform: Platform, config_path: Option<&Path>) -> Result<Launcher> {
    let cwd = std::env::current_dir()?;
    let self_exe = std::env::current_exe()?;
    let paths = Host::paths();

    let mut loader = ConfigLoader::new(paths.as_ref(), &cwd);
    if let Some(path) = config_path {
        loader = loader.explicit(path);
    }
    let config = loader.load()?;
    if let Some(path) = loader.current_path() {
        info!("Using configuration from {}", path.display());
    }

    let plan = config.to_plan(paths.as_ref(), &cwd, &self_exe)?;
    debug!("Launch plan: {:?}", plan);

    Ok(Launcher::for_host(platform, plan))
}
