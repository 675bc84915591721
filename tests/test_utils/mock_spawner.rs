//! Recording spawner

use autopilot_launcher::{Error, Result, SpawnSpec, Spawner};
use std::sync::{Arc, Mutex};

/// Captures every spec it is given and hands out fake pids starting at 4242.
///
/// Clones share the record, so a test can keep one and give one away.
#[derive(Clone, Default)]
pub struct RecordingSpawner {
    specs: Arc<Mutex<Vec<SpawnSpec>>>,
    fail_on: Option<usize>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `n`th spawn (1-based) fail
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::default()
        }
    }

    pub fn specs(&self) -> Vec<SpawnSpec> {
        self.specs.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.specs.lock().unwrap().len()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn_detached(&self, spec: &SpawnSpec) -> Result<u32> {
        let mut specs = self.specs.lock().unwrap();
        specs.push(spec.clone());
        let n = specs.len();

        if self.fail_on == Some(n) {
            return Err(Error::SpawnFailed {
                program: spec.program.clone(),
                reason: "No such file or directory (os error 2)".to_string(),
            });
        }
        Ok(4241 + n as u32)
    }
}
