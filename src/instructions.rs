//! Manual fallback instructions
//!
//! Printed whenever the worker could not be put in a window of its own, so the
//! user can start it by hand.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::terminal::dialect::shell_path_for;
use crate::terminal::quoting::sh_single_quote;
use crate::terminal::Registry;

const RULE: &str = "==========================================";

/// How to start the worker without the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualInstructions {
    platform: Platform,
    cwd: PathBuf,
    payload: PathBuf,
    terminals: Vec<&'static str>,
}

impl ManualInstructions {
    /// Instructions for `payload` on `platform`, listing the terminals `registry`
    /// knows for it
    pub fn new(platform: Platform, cwd: &Path, payload: &Path, registry: &Registry) -> Self {
        Self {
            platform,
            cwd: cwd.to_path_buf(),
            payload: payload.to_path_buf(),
            terminals: registry
                .candidates(platform)
                .iter()
                .map(|c| c.display_name)
                .collect(),
        }
    }

    /// The exact command to type in the new window.
    ///
    /// Quoted for a POSIX shell; on drive-letter hosts that shell is Git Bash,
    /// so the path is given in its dialect.
    pub fn command(&self) -> String {
        let payload = sh_single_quote(&shell_path_for(self.platform, &self.payload));
        if self.platform.uses_drive_letters() {
            format!("bash {}", payload)
        } else {
            payload
        }
    }

    /// `cd` into the project root, quoted like [`command`](Self::command)
    pub fn cd_command(&self) -> String {
        format!(
            "cd {}",
            sh_single_quote(&shell_path_for(self.platform, &self.cwd))
        )
    }

    pub fn terminals(&self) -> &[&'static str] {
        &self.terminals
    }
}

impl fmt::Display for ManualInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, " TERMINAL LAUNCH UNAVAILABLE")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "Could not detect a supported terminal emulator.")?;
        writeln!(f)?;
        writeln!(f, "To run autopilot manually:")?;
        writeln!(f)?;
        writeln!(f, "  1. Open a new terminal window")?;
        writeln!(f, "  2. {}", self.cd_command())?;
        writeln!(f, "  3. {}", self.command())?;
        writeln!(f)?;
        writeln!(f, "Supported terminals on {}:", self.platform.display_name())?;
        for name in &self.terminals {
            writeln!(f, "  - {}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", RULE)
    }
}
