//! Launch orchestration
//!
//! Resolve a terminal once, open the worker in it, then try the dashboard in
//! the same terminal. The worker result decides the outcome. A dashboard
//! failure is logged and otherwise ignored. Nothing is retried.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::config::LaunchPlan;
use crate::error::{Error, Result};
use crate::instructions::ManualInstructions;
use crate::launch::{LaunchContext, LaunchRequest};
use crate::platform::{CommandProbe, Host, Platform, Spawner};
use crate::terminal::{Registry, Resolver, TerminalCandidate};

/// Why the worker is not running in a new window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    NoTerminalFound,
    LaunchFailed,
}

/// Result of one launch attempt, as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LaunchOutcome {
    Success {
        /// Probe name of the terminal used
        terminal: String,
        /// Pid of the process that opened the worker window
        pid: u32,
        /// `None` when the dashboard was disabled or failed to open
        dashboard_pid: Option<u32>,
    },
    Failure {
        reason: FailureReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl LaunchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// The two launches against one resolved terminal, kept apart
#[derive(Debug)]
pub struct LaunchReport {
    pub terminal: TerminalCandidate,
    /// Worker spawn
    pub primary: Result<u32>,
    /// Dashboard spawn; `None` when it was not attempted
    pub secondary: Option<Result<u32>>,
}

impl LaunchReport {
    /// Fold into the caller-facing outcome. Only `primary` can fail it.
    pub fn into_outcome(self) -> LaunchOutcome {
        match self.primary {
            Ok(pid) => LaunchOutcome::Success {
                terminal: self.terminal.probe_name.to_string(),
                pid,
                dashboard_pid: self.secondary.and_then(|r| r.ok()),
            },
            Err(e) => LaunchOutcome::Failure {
                reason: FailureReason::LaunchFailed,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Orchestrates resolution, worker launch, and dashboard launch.
///
/// All collaborators are injected at construction and never change.
pub struct Launcher {
    platform: Platform,
    registry: Registry,
    probe: Box<dyn CommandProbe>,
    spawner: Box<dyn Spawner>,
    plan: LaunchPlan,
}

impl Launcher {
    pub fn new(
        platform: Platform,
        registry: Registry,
        probe: Box<dyn CommandProbe>,
        spawner: Box<dyn Spawner>,
        plan: LaunchPlan,
    ) -> Self {
        Self {
            platform,
            registry,
            probe,
            spawner,
            plan,
        }
    }

    /// Launcher backed by the real search path and process creation
    pub fn for_host(platform: Platform, plan: LaunchPlan) -> Self {
        Self::new(
            platform,
            Registry::builtin(),
            Host::probe(),
            Host::spawner(),
            plan,
        )
    }

    /// Same launcher, worker window only
    pub fn without_dashboard(mut self) -> Self {
        self.plan = self.plan.without_dashboard();
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn plan(&self) -> &LaunchPlan {
        &self.plan
    }

    /// First available terminal for this platform
    pub fn resolve(&self) -> Option<TerminalCandidate> {
        Resolver::new(&self.registry, self.probe.as_ref()).resolve(self.platform)
    }

    /// What to do by hand if launching fails
    pub fn instructions(&self) -> ManualInstructions {
        ManualInstructions::new(
            self.platform,
            &self.plan.project_root,
            &self.plan.worker.payload,
            &self.registry,
        )
    }

    /// Open the worker (and dashboard) windows.
    ///
    /// User-facing notes and, on failure, manual instructions go to `out`.
    pub fn launch_worker(&self, out: &mut dyn Write) -> LaunchOutcome {
        let terminal = match self.resolve() {
            Some(terminal) => terminal,
            None => {
                emit(out, &self.instructions().to_string());
                return LaunchOutcome::Failure {
                    reason: FailureReason::NoTerminalFound,
                    error: None,
                };
            }
        };

        let report = self.launch_in(terminal);

        match &report.primary {
            Ok(pid) => {
                info!("Worker launched in {} (pid {})", terminal.probe_name, pid);
                emit(
                    out,
                    &format!(
                        "\nLaunched {} in new {} window\n\
                         You can now close this session - the worker will continue running.\n",
                        file_name(&self.plan.worker.payload),
                        terminal.probe_name
                    ),
                );
            }
            Err(e) => {
                error!(
                    category = e.category(),
                    "Failed to launch {}: {}",
                    terminal.probe_name,
                    e
                );
                emit(out, &self.instructions().to_string());
            }
        }

        if let Some(Err(e)) = &report.secondary {
            warn!(category = e.category(), "Dashboard did not open: {}", e);
        }

        report.into_outcome()
    }

    /// Both spawns against `terminal`. The dashboard is only attempted once
    /// the worker spawn returned a pid.
    pub fn launch_in(&self, terminal: TerminalCandidate) -> LaunchReport {
        let ctx = LaunchContext::new(self.platform, self.plan.project_root.clone());

        let primary = self.spawn(&terminal, &ctx, &self.plan.worker);
        let secondary = match (&primary, &self.plan.dashboard) {
            (Ok(_), Some(dashboard)) => Some(self.spawn(&terminal, &ctx, dashboard)),
            _ => None,
        };

        LaunchReport {
            terminal,
            primary,
            secondary,
        }
    }

    fn spawn(
        &self,
        terminal: &TerminalCandidate,
        ctx: &LaunchContext,
        req: &LaunchRequest,
    ) -> Result<u32> {
        let spec = terminal
            .build(ctx, req)
            .ok_or_else(|| Error::NoInterpreterStrategy {
                terminal: terminal.probe_name.to_string(),
            })?;
        debug!("Spawning: {}", spec.display_command());
        self.spawner.spawn_detached(&spec)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// User-facing text is best effort; a closed stdout must not change the outcome
fn emit(out: &mut dyn Write, text: &str) {
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        debug!("Could not write to output: {}", e);
    }
}
