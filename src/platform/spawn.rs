//! Detached process creation
//!
//! The child gets null standard streams and its own process group so that
//! neither a full pipe buffer nor the parent's exit can reach it. The `Child`
//! handle is dropped as soon as the pid is known; dropping a `Child` neither
//! waits on nor kills the process.

use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::launch::SpawnSpec;
use crate::platform::traits::Spawner;

/// Spawner that creates real, fully detached OS processes
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

impl DetachedSpawner {
    pub fn new() -> Self {
        Self
    }

    fn build_command(spec: &SpawnSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).current_dir(&spec.cwd);

        if spec.discard_output {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        if spec.detached {
            #[cfg(unix)]
            super::unix::detach(&mut command);

            #[cfg(windows)]
            super::windows::detach(&mut command);
        }

        command
    }
}

impl Spawner for DetachedSpawner {
    fn spawn_detached(&self, spec: &SpawnSpec) -> Result<u32> {
        debug!("Spawning {} {:?} in {}", spec.program, spec.args, spec.cwd.display());

        let child = Self::build_command(spec)
            .spawn()
            .map_err(|e| Error::SpawnFailed {
                program: spec.program.clone(),
                reason: e.to_string(),
            })?;

        let pid = child.id();
        drop(child);

        Ok(pid)
    }
}
