//! Property-based tests for quote-injection safety of built commands

use autopilot_launcher::launch::strategies::{linux, macos};
use autopilot_launcher::terminal::quoting::{applescript_quote, sh_double_quote, sh_single_quote};
use autopilot_launcher::{LaunchContext, LaunchRequest, Platform, Registry};
use proptest::prelude::*;

/// Read back a POSIX double-quoted word the way the shell does
fn unquote_sh_double(word: &str) -> Option<String> {
    let inner = word.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let next = chars.next()?;
                if !matches!(next, '\\' | '"' | '$' | '`') {
                    out.push('\\');
                }
                out.push(next);
            }
            // an unescaped quote would end the word early
            '"' | '$' | '`' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

/// Read back a POSIX single-quoted word made of `'...'` and `\'` pieces
fn unquote_sh_single(word: &str) -> Option<String> {
    let mut out = String::new();
    let mut rest = word;
    while !rest.is_empty() {
        if let Some(r) = rest.strip_prefix("\\'") {
            out.push('\'');
            rest = r;
        } else {
            let r = rest.strip_prefix('\'')?;
            let end = r.find('\'')?;
            out.push_str(&r[..end]);
            rest = &r[end + 1..];
        }
    }
    Some(out)
}

fn unquote_applescript(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?),
            '"' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

proptest! {
    #[test]
    fn test_double_quoted_words_read_back(s in "\\PC{0,60}") {
        prop_assert_eq!(unquote_sh_double(&sh_double_quote(&s)), Some(s));
    }

    #[test]
    fn test_single_quoted_words_read_back(s in "\\PC{0,60}") {
        prop_assert_eq!(unquote_sh_single(&sh_single_quote(&s)), Some(s));
    }

    #[test]
    fn test_applescript_literals_read_back(s in "\\PC{0,60}") {
        prop_assert_eq!(unquote_applescript(&applescript_quote(&s)), Some(s));
    }

    #[test]
    fn test_linux_body_keeps_hostile_paths_inside_quotes(
        cwd in "/[a-z\"$`\\\\ ]{1,20}",
        payload in "/[a-z\"$`\\\\ ;&|]{1,20}",
    ) {
        let ctx = LaunchContext::new(Platform::Linux, cwd.clone());
        let spec = linux::xterm_script(&ctx, &LaunchRequest::script(payload.clone(), "t"));
        let expected = format!("cd {} && {}", sh_double_quote(&cwd), sh_double_quote(&payload));
        prop_assert_eq!(&spec.args[6], &expected);
    }

    #[test]
    fn test_macos_title_cannot_break_out(title in "\\PC{0,40}") {
        let ctx = LaunchContext::new(Platform::MacOs, "/tmp");
        let spec = macos::terminal_app_script(&ctx, &LaunchRequest::script("/tmp/r.sh", title.clone()));
        let expected = format!("set custom title of launchedTab to {}\n", applescript_quote(&title));
        prop_assert!(spec.args[1].contains(&expected));
    }

    #[test]
    fn test_windows_rows_never_carry_double_quotes(
        title in "[a-zA-Z \"';&]{0,20}",
        name in "[a-zA-Z \"';&]{1,20}",
    ) {
        let ctx = LaunchContext::new(Platform::Windows, r"C:\Users\me\proj");
        let req = LaunchRequest::script(format!(r"C:\scripts\{}.sh", name), title);
        for candidate in Registry::builtin().candidates(Platform::Windows) {
            let spec = (candidate.script)(&ctx, &req);
            prop_assert!(
                spec.args.iter().all(|a| !a.contains('"')),
                "{} args: {:?}", candidate.probe_name, spec.args
            );
        }
    }

    #[test]
    fn test_windows_interpreter_words_never_carry_double_quotes(
        title in "[a-zA-Z \"';&]{0,20}",
        interpreter in "[a-zA-Z \"';&]{1,20}",
        args in prop::collection::vec("[a-zA-Z \"';&-]{0,12}", 0..4),
    ) {
        let ctx = LaunchContext::new(Platform::Windows, r"C:\Users\me\proj");
        let req = LaunchRequest::interpreted(
            r"C:\Users\me\proj",
            title,
            format!(r"C:\Program Files\{}.exe", interpreter),
            args,
        );
        for candidate in Registry::builtin().candidates(Platform::Windows) {
            let build = candidate.interpreted;
            prop_assert!(build.is_some(), "{} has no interpreter strategy", candidate.probe_name);
            if let Some(build) = build {
                let spec = build(&ctx, &req);
                prop_assert!(
                    spec.args.iter().all(|a| !a.contains('"')),
                    "{} args: {:?}", candidate.probe_name, spec.args
                );
            }
        }
    }
}
