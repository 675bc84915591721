//! Windows terminals, all running the payload through Git Bash
//!
//! Paths are translated to the MSYS dialect and every word of the bash body
//! is single quoted. The bash body is never wrapped in double quotes of its
//! own: Windows argument quoting belongs to `std::process::Command`, and a
//! body free of `"` passes through it, `cmd.exe`, and `wt.exe` unchanged.
//! NTFS forbids `"` in file names, so dropping it loses nothing real.

use crate::launch::command::{cd_and_run, Family};
use crate::launch::{LaunchContext, LaunchRequest, SpawnSpec};
use crate::terminal::quoting::{
    osc_title_command, powershell_single_quote, sh_single_quote, strip_double_quotes, wt_escape,
};

fn quote(s: &str) -> String {
    sh_single_quote(&strip_double_quotes(s))
}

fn bash_body(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> String {
    cd_and_run(ctx, req, family, quote)
}

/// Body prefixed with an OSC title sequence, for hosts with no title flag
fn titled_bash_body(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> String {
    format!(
        "{}; {}",
        osc_title_command(&strip_double_quotes(&req.title)),
        bash_body(ctx, req, family)
    )
}

/// Windows Terminal: `wt.exe --title T bash -c BODY`
fn windows_terminal(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    SpawnSpec::detached("wt.exe", &ctx.cwd).args([
        "--title".to_string(),
        wt_escape(&strip_double_quotes(&req.title)),
        "bash".to_string(),
        "-c".to_string(),
        wt_escape(&bash_body(ctx, req, family)),
    ])
}

pub fn windows_terminal_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    windows_terminal(ctx, req, Family::Script)
}

pub fn windows_terminal_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    windows_terminal(ctx, req, Family::Interpreter)
}

/// Command Prompt: `cmd.exe /c start "" cmd /k bash -c BODY`
///
/// The empty argument is `start`'s window title slot; the real title is set
/// from inside bash.
fn command_prompt(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    SpawnSpec::detached("cmd.exe", &ctx.cwd).args([
        "/c".to_string(),
        "start".to_string(),
        String::new(),
        "cmd".to_string(),
        "/k".to_string(),
        "bash".to_string(),
        "-c".to_string(),
        titled_bash_body(ctx, req, family),
    ])
}

pub fn command_prompt_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    command_prompt(ctx, req, Family::Script)
}

pub fn command_prompt_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    command_prompt(ctx, req, Family::Interpreter)
}

/// PowerShell: the outer instance starts a new `-NoExit` window whose script
/// sets the title, enters the native cwd, then hands off to bash.
///
/// Each level is a PowerShell single-quoted literal, so the inner script is
/// quoted once for itself and once more as an `-ArgumentList` element.
fn powershell(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    let native_cwd = strip_double_quotes(&ctx.cwd.to_string_lossy());
    let inner = format!(
        "$Host.UI.RawUI.WindowTitle = {}; Set-Location -LiteralPath {}; bash -c {}",
        powershell_single_quote(&strip_double_quotes(&req.title)),
        powershell_single_quote(&native_cwd),
        powershell_single_quote(&bash_body(ctx, req, family)),
    );
    let outer = format!(
        "Start-Process powershell -ArgumentList '-NoExit','-Command',{}",
        powershell_single_quote(&inner)
    );

    SpawnSpec::detached("powershell.exe", &ctx.cwd).args([
        "-NoProfile".to_string(),
        "-Command".to_string(),
        outer,
    ])
}

pub fn powershell_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    powershell(ctx, req, Family::Script)
}

pub fn powershell_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    powershell(ctx, req, Family::Interpreter)
}

/// Git Bash's own mintty window, opened via `start` so it gets a console:
/// `cmd.exe /c start "" bash --login -i -c BODY`
fn git_bash(ctx: &LaunchContext, req: &LaunchRequest, family: Family) -> SpawnSpec {
    SpawnSpec::detached("cmd.exe", &ctx.cwd).args([
        "/c".to_string(),
        "start".to_string(),
        String::new(),
        "bash".to_string(),
        "--login".to_string(),
        "-i".to_string(),
        "-c".to_string(),
        titled_bash_body(ctx, req, family),
    ])
}

pub fn git_bash_script(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    git_bash(ctx, req, Family::Script)
}

pub fn git_bash_interpreted(ctx: &LaunchContext, req: &LaunchRequest) -> SpawnSpec {
    git_bash(ctx, req, Family::Interpreter)
}
