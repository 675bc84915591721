//! Terminal.app, driven through AppleScript
//!
//! Two quoting layers: the shell command is built with POSIX double quotes,
//! then the whole command becomes an AppleScript string literal.

use crate::launch::command::{cd_and_run, Family};
use crate::launch::{LaunchContext, LaunchRequest, SpawnSpec};
use crate::terminal::quoting::{applescript_quote, sh_double_quote};

fn apple_script(shell_command: &str, title: &str) -> String {
    format!(
        "tell application \"Terminal\"\n\
         \tset launchedTab to do script {}\n\
         \tset custom title of launchedTab to {}\n\
         \tactivate\n\
         end tell",
        applescript_quote(shell_command),
        applescript_quote(title),
    )
}

fn terminal_app(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    let body = cd_and_run(ctx, req, family, sh_double_quote);
    SpawnSpec::detached("osascript", &ctx.cwd)
        .arg("-e")
        .arg(apple_script(&body, &req.title))
}

pub fn terminal_app_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    terminal_app(ctx, req, Family::Script)
}

pub fn terminal_app_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    terminal_app(ctx, req, Family::Interpreter)
}
