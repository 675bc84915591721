//! Launch strategies, one pair per terminal emulator
//!
//! Every terminal exposes a `*_script` function for directly executable
//! payloads and a `*_interpreted` function for payloads that need an
//! interpreter. Both build the same window; they differ only in how the payload
//! is invoked inside it.

pub mod linux;
pub mod macos;
pub mod windows;

use super::{LaunchContext, LaunchRequest, SpawnSpec};

/// Signature shared by every strategy
pub type LaunchFn = fn(&LaunchContext, &LaunchRequest) -> SpawnSpec;
