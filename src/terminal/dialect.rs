//! Path dialect translation
//!
//! Git for Windows ships an MSYS bash that expects `/c/Users/...` instead of
//! `C:\Users\...`. Every Windows launch strategy runs its payload through that
//! bash, so native paths are rewritten before they are embedded in a command.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::platform::Platform;

/// Single ASCII drive letter followed by a forward slash, after normalization
static DRIVE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]):/").expect("drive prefix pattern is valid"));

/// Convert a Windows path into the form MSYS/Git Bash understands.
///
/// `C:\Users\a b` becomes `/c/Users/a b`. Paths without a drive prefix
/// (relative, UNC, `\\?\` extended-length) only get their separators flipped.
/// The result contains no backslashes and no drive prefix, so translating it
/// again is a no-op.
pub fn to_posix_shell_path(native: &str) -> String {
    let normalized = native.replace('\\', "/");

    match DRIVE_PREFIX.captures(&normalized) {
        Some(caps) => {
            let drive = caps[1].to_ascii_lowercase();
            // keep the slash after the colon: "C:/x" -> "/c" + "/x"
            format!("/{}{}", drive, &normalized[2..])
        }
        None => normalized,
    }
}

/// Translate `path` for a shell running on `platform`.
///
/// Only drive-letter platforms need rewriting; on POSIX hosts a backslash is a
/// legal filename character and must be left alone.
pub fn shell_path_for(platform: Platform, path: &Path) -> String {
    let native = path.to_string_lossy();
    if platform.uses_drive_letters() {
        to_posix_shell_path(&native)
    } else {
        native.into_owned()
    }
}
