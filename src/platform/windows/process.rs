//! Windows process detachment

use std::os::windows::process::CommandExt;
use std::process::Command;
use windows_sys::Win32::System::Threading::{CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS};

/// Run the child without our console and outside our Ctrl+C group.
///
/// The terminal the child opens allocates its own console, so losing ours is
/// harmless.
pub(crate) fn detach(command: &mut Command) {
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}
