//! Terminal resolution
//!
//! First fit: walk the platform's candidates in order and return the first
//! one whose probe succeeds. No scoring, no retries.

use crate::platform::{CommandProbe, Platform};
use crate::terminal::registry::{Registry, TerminalCandidate};

/// Resolves a terminal for a platform against a registry and a probe
pub struct Resolver<'a> {
    registry: &'a Registry,
    probe: &'a dyn CommandProbe,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, probe: &'a dyn CommandProbe) -> Self {
        Self { registry, probe }
    }

    /// First available candidate for `platform`, or `None`.
    ///
    /// A probe that errors counts as "not available" and resolution moves on.
    pub fn resolve(&self, platform: Platform) -> Option<TerminalCandidate> {
        for candidate in self.registry.candidates(platform) {
            match self.probe.probe(candidate.probe_name) {
                Ok(true) => {
                    info!("Using terminal: {}", candidate.probe_name);
                    return Some(*candidate);
                }
                Ok(false) => {
                    debug!("{} not found on PATH", candidate.probe_name);
                }
                Err(e) => {
                    debug!(
                        category = e.category(),
                        "Probe for {} failed, skipping: {}",
                        candidate.probe_name,
                        e
                    );
                }
            }
        }

        warn!("No supported terminal found for {}", platform);
        None
    }
}
