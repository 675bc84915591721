//! Unix process detachment

use std::os::unix::process::CommandExt;
use std::process::Command;

/// Put the child in a new process group.
///
/// Terminal-generated signals (SIGINT, SIGHUP on session teardown) go to the
/// foreground process group, so the child no longer receives them when the
/// invoking shell exits.
pub(crate) fn detach(command: &mut Command) {
    command.process_group(0);
}
