//! Terminal registry
//!
//! Ordered, per-platform table of terminal candidates. Order is preference:
//! the resolver takes the first candidate whose probe succeeds.

use serde::Serialize;
use std::fmt;

use crate::launch::strategies::{linux, macos, windows, LaunchFn};
use crate::launch::{LaunchContext, LaunchRequest, PayloadKind, SpawnSpec};
use crate::platform::Platform;

/// Closed set of terminal emulators the launcher knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalKind {
    WindowsTerminal,
    CommandPrompt,
    PowerShell,
    GitBash,
    TerminalApp,
    GnomeTerminal,
    Xterm,
    XTerminalEmulator,
}

/// One row of the registry
#[derive(Clone, Copy)]
pub struct TerminalCandidate {
    pub kind: TerminalKind,
    /// Executable name checked against the search path
    pub probe_name: &'static str,
    /// Name shown in manual instructions
    pub display_name: &'static str,
    /// Strategy for directly executable payloads
    pub script: LaunchFn,
    /// Strategy for interpreter payloads, if the terminal has one
    pub interpreted: Option<LaunchFn>,
}

impl TerminalCandidate {
    /// Pick the strategy matching the request's payload kind
    pub fn strategy_for(&self, kind: &PayloadKind) -> Option<LaunchFn> {
        match kind {
            PayloadKind::RawScript => Some(self.script),
            PayloadKind::Interpreted { .. } => self.interpreted,
        }
    }

    /// Build the spawn spec for `req`, or `None` when no strategy fits
    pub fn build(&self, ctx: &LaunchContext, req: &LaunchRequest) -> Option<SpawnSpec> {
        self.strategy_for(&req.kind).map(|launch| launch(ctx, req))
    }
}

impl fmt::Debug for TerminalCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalCandidate")
            .field("kind", &self.kind)
            .field("probe_name", &self.probe_name)
            .field("interpreted", &self.interpreted.is_some())
            .finish()
    }
}

impl PartialEq for TerminalCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.probe_name == other.probe_name
    }
}

const WINDOWS_TERMINALS: &[TerminalCandidate] = &[
    TerminalCandidate {
        kind: TerminalKind::WindowsTerminal,
        probe_name: "wt.exe",
        display_name: "Windows Terminal (wt.exe)",
        script: windows::windows_terminal_script,
        interpreted: Some(windows::windows_terminal_interpreted),
    },
    TerminalCandidate {
        kind: TerminalKind::CommandPrompt,
        probe_name: "cmd.exe",
        display_name: "Command Prompt (cmd.exe)",
        script: windows::command_prompt_script,
        interpreted: Some(windows::command_prompt_interpreted),
    },
    TerminalCandidate {
        kind: TerminalKind::PowerShell,
        probe_name: "powershell.exe",
        display_name: "PowerShell",
        script: windows::powershell_script,
        interpreted: Some(windows::powershell_interpreted),
    },
    TerminalCandidate {
        kind: TerminalKind::GitBash,
        probe_name: "bash.exe",
        display_name: "Git Bash",
        script: windows::git_bash_script,
        interpreted: Some(windows::git_bash_interpreted),
    },
];

const MACOS_TERMINALS: &[TerminalCandidate] = &[TerminalCandidate {
    kind: TerminalKind::TerminalApp,
    probe_name: "osascript",
    display_name: "Terminal.app",
    script: macos::terminal_app_script,
    interpreted: Some(macos::terminal_app_interpreted),
}];

const LINUX_TERMINALS: &[TerminalCandidate] = &[
    TerminalCandidate {
        kind: TerminalKind::GnomeTerminal,
        probe_name: "gnome-terminal",
        display_name: "gnome-terminal",
        script: linux::gnome_terminal_script,
        interpreted: Some(linux::gnome_terminal_interpreted),
    },
    TerminalCandidate {
        kind: TerminalKind::Xterm,
        probe_name: "xterm",
        display_name: "xterm",
        script: linux::xterm_script,
        interpreted: Some(linux::xterm_interpreted),
    },
    TerminalCandidate {
        kind: TerminalKind::XTerminalEmulator,
        probe_name: "x-terminal-emulator",
        display_name: "x-terminal-emulator",
        script: linux::x_terminal_emulator_script,
        interpreted: Some(linux::x_terminal_emulator_interpreted),
    },
];

/// Read-only mapping from platform to its ordered candidates
#[derive(Debug, Clone)]
pub struct Registry {
    rows: Vec<(Platform, Vec<TerminalCandidate>)>,
}

impl Registry {
    /// The terminals this crate ships strategies for
    pub fn builtin() -> Self {
        Self {
            rows: vec![
                (Platform::Windows, WINDOWS_TERMINALS.to_vec()),
                (Platform::MacOs, MACOS_TERMINALS.to_vec()),
                (Platform::Linux, LINUX_TERMINALS.to_vec()),
            ],
        }
    }

    /// Custom table, mostly for tests that need a fake terminal
    pub fn from_rows(rows: Vec<(Platform, Vec<TerminalCandidate>)>) -> Self {
        Self { rows }
    }

    /// Candidates for `platform` in preference order (empty if unknown)
    pub fn candidates(&self, platform: Platform) -> &[TerminalCandidate] {
        self.rows
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, candidates)| candidates.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
