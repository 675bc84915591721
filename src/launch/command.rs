//! Shell command lines shared by all strategies

use super::{LaunchContext, LaunchRequest, PayloadKind};
use crate::terminal::dialect::shell_path_for;

/// Which of a terminal's two strategies is building the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    /// Payload is executable on its own
    Script,
    /// Payload goes through the request's interpreter
    Interpreter,
}

/// The words that start the payload, quoted with `quote`.
///
/// Paths go through the dialect translator first. On drive-letter hosts a raw
/// script is handed to `bash` explicitly since NTFS has no executable bit. A
/// raw request passed to the interpreter family has no interpreter to use and
/// degrades to the script form.
pub(crate) fn invocation(
    ctx: &LaunchContext,
    req: &LaunchRequest,
    family: Family,
    quote: fn(&str) -> String,
) -> String {
    let payload = quote(&shell_path_for(ctx.platform, &req.payload));

    match (family, &req.kind) {
        (Family::Interpreter, PayloadKind::Interpreted { interpreter, args }) => {
            let mut words = Vec::with_capacity(args.len() + 2);
            words.push(quote(&shell_path_for(ctx.platform, interpreter)));
            words.extend(args.iter().map(|a| quote(a)));
            words.push(payload);
            words.join(" ")
        }
        _ if ctx.platform.uses_drive_letters() => format!("bash {}", payload),
        _ => payload,
    }
}

/// `cd <cwd> && <invocation>`, the body every terminal runs under `bash -c`
pub(crate) fn cd_and_run(
    ctx: &LaunchContext,
    req: &LaunchRequest,
    family: Family,
    quote: fn(&str) -> String,
) -> String {
    let cwd = shell_path_for(ctx.platform, &ctx.cwd);
    format!("cd {} && {}", quote(&cwd), invocation(ctx, req, family, quote))
}
