//! Launch requests, spawn specifications, and per-terminal strategies
//!
//! A strategy is a pure function from a [`LaunchContext`] and a
//! [`LaunchRequest`] to a [`SpawnSpec`]. Building the spec never fails; only
//! handing it to a [`Spawner`](crate::platform::Spawner) can.

mod command;
pub mod strategies;

use serde::Serialize;
use std::path::PathBuf;

use crate::platform::Platform;

/// How the payload is started inside the new window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadKind {
    /// Executed directly by the terminal's shell (the worker script)
    RawScript,
    /// Passed to an explicit interpreter: `<interpreter> <args>... <payload>`
    Interpreted {
        interpreter: PathBuf,
        args: Vec<String>,
    },
}

/// One thing to open a window for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Absolute native path of the payload
    pub payload: PathBuf,
    /// Window title, applied where the terminal supports it
    pub title: String,
    pub kind: PayloadKind,
}

impl LaunchRequest {
    /// Request for a directly executable script
    pub fn script(payload: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            title: title.into(),
            kind: PayloadKind::RawScript,
        }
    }

    /// Request for a payload run through `interpreter`
    pub fn interpreted(
        payload: impl Into<PathBuf>,
        title: impl Into<String>,
        interpreter: impl Into<PathBuf>,
        args: Vec<String>,
    ) -> Self {
        Self {
            payload: payload.into(),
            title: title.into(),
            kind: PayloadKind::Interpreted {
                interpreter: interpreter.into(),
                args,
            },
        }
    }

    pub fn is_interpreted(&self) -> bool {
        matches!(self.kind, PayloadKind::Interpreted { .. })
    }
}

/// Facts about the invoking session that every strategy needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    pub platform: Platform,
    /// Directory the new window starts in (native form)
    pub cwd: PathBuf,
}

impl LaunchContext {
    pub fn new(platform: Platform, cwd: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            cwd: cwd.into(),
        }
    }
}

/// Everything needed to create the terminal process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpawnSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Child must outlive and ignore the parent
    pub detached: bool,
    /// stdin/stdout/stderr go to the null device
    pub discard_output: bool,
}

impl SpawnSpec {
    /// Detached spec with discarded standard streams and no arguments yet
    pub fn detached(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            detached: true,
            discard_output: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program and arguments joined with spaces, for logs and diagnostics only
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
