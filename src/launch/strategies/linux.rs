//! X11/Wayland terminals
//!
//! Each of these takes an argv after `-e`/`--`, so the `bash -c` body is a
//! single argument and only needs POSIX double quoting inside it.

use crate::launch::command::{cd_and_run, Family};
use crate::launch::{LaunchContext, LaunchRequest, SpawnSpec};
use crate::terminal::quoting::sh_double_quote;

/// Keeps the window open with an interactive shell after the payload exits
const KEEP_OPEN: &str = "; exec bash";

fn gnome_terminal(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    let body = cd_and_run(ctx, req, family, sh_double_quote);
    SpawnSpec::detached("gnome-terminal", &ctx.cwd).args([
        "--window".to_string(),
        format!("--title={}", req.title),
        "--".to_string(),
        "bash".to_string(),
        "-c".to_string(),
        format!("{}{}", body, KEEP_OPEN),
    ])
}

pub fn gnome_terminal_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    gnome_terminal(ctx, req, Family::Script)
}

pub fn gnome_terminal_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    gnome_terminal(ctx, req, Family::Interpreter)
}

// -hold keeps the window after the payload exits
fn xterm(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    let body = cd_and_run(ctx, req, family, sh_double_quote);
    SpawnSpec::detached("xterm", &ctx.cwd).args([
        "-hold".to_string(),
        "-title".to_string(),
        req.title.clone(),
        "-e".to_string(),
        "bash".to_string(),
        "-c".to_string(),
        body,
    ])
}

pub fn xterm_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    xterm(ctx, req, Family::Script)
}

pub fn xterm_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    xterm(ctx, req, Family::Interpreter)
}

/// Debian alternatives entry. Policy only guarantees `-e` and `-T`, so no
/// `-hold`; the trailing shell keeps the window instead.
fn x_terminal_emulator(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    let body = cd_and_run(ctx, req, family, sh_double_quote);
    SpawnSpec::detached("x-terminal-emulator", &ctx.cwd).args([
        "-T".to_string(),
        req.title.clone(),
        "-e".to_string(),
        "bash".to_string(),
        "-c".to_string(),
        format!("{}{}", body, KEEP_OPEN),
    ])
}

pub fn x_terminal_emulator_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    x_terminal_emulator(ctx, req, Family::Script)
}

pub fn x_terminal_emulator_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    x_terminal_emulator(ctx, req, Family::Interpreter)
}
