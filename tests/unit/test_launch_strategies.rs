//! Unit tests for per-terminal command construction

use autopilot_launcher::launch::strategies::{linux, macos, windows};
use autopilot_launcher::{LaunchContext, LaunchRequest, Platform, Registry};

fn worker() -> LaunchRequest {
    LaunchRequest::script("/home/me/.claude/get-shit-done/bin/ralph.sh", "GSD Ralph")
}

fn dashboard(root: &str) -> LaunchRequest {
    LaunchRequest::interpreted(
        root,
        "GSD Progress",
        "/usr/local/bin/autopilot-launcher",
        vec!["watch".to_string()],
    )
}

#[cfg(test)]
mod linux_tests {
    use super::*;

    fn ctx() -> LaunchContext {
        LaunchContext::new(Platform::Linux, "/home/me/proj")
    }

    #[test]
    fn test_xterm_worker_command() {
        let spec = linux::xterm_script(&ctx(), &worker());
        assert_eq!(spec.program, "xterm");
        assert_eq!(
            spec.args,
            vec![
                "-hold",
                "-title",
                "GSD Ralph",
                "-e",
                "bash",
                "-c",
                r#"cd "/home/me/proj" && "/home/me/.claude/get-shit-done/bin/ralph.sh""#,
            ]
        );
        assert!(spec.detached);
        assert!(spec.discard_output);
        assert_eq!(spec.cwd, std::path::PathBuf::from("/home/me/proj"));
    }

    #[test]
    fn test_gnome_terminal_keeps_shell_open() {
        let spec = linux::gnome_terminal_script(&ctx(), &worker());
        assert_eq!(spec.program, "gnome-terminal");
        assert_eq!(&spec.args[..5], &["--window", "--title=GSD Ralph", "--", "bash", "-c"]);
        assert!(spec.args[5].ends_with("; exec bash"));
    }

    #[test]
    fn test_x_terminal_emulator_uses_short_title_flag() {
        let spec = linux::x_terminal_emulator_script(&ctx(), &worker());
        assert_eq!(spec.program, "x-terminal-emulator");
        assert_eq!(&spec.args[..2], &["-T", "GSD Ralph"]);
        assert!(!spec.args.contains(&"-hold".to_string()));
    }

    #[test]
    fn test_dashboard_runs_interpreter_with_args() {
        let spec = linux::xterm_interpreted(&ctx(), &dashboard("/home/me/proj"));
        assert_eq!(
            spec.args[6],
            r#"cd "/home/me/proj" && "/usr/local/bin/autopilot-launcher" "watch" "/home/me/proj""#
        );
        assert_eq!(spec.args[2], "GSD Progress");
    }

    #[test]
    fn test_shell_metacharacters_in_paths_are_inert() {
        let ctx = LaunchContext::new(Platform::Linux, "/tmp/$(rm -rf ~)");
        let spec = linux::xterm_script(&ctx, &LaunchRequest::script("/tmp/`id`.sh", "t"));
        assert_eq!(
            spec.args[6],
            r#"cd "/tmp/\$(rm -rf ~)" && "/tmp/\`id\`.sh""#
        );
    }
}

#[cfg(test)]
mod macos_tests {
    use super::*;

    #[test]
    fn test_terminal_app_dashboard() {
        let ctx = LaunchContext::new(Platform::MacOs, "/Users/me/proj");
        let spec = macos::terminal_app_interpreted(&ctx, &dashboard("/Users/me/proj"));
        assert_eq!(spec.program, "osascript");
        assert!(spec.args[1].contains(
            r#"do script "cd \"/Users/me/proj\" && \"/usr/local/bin/autopilot-launcher\" \"watch\" \"/Users/me/proj\"""#
        ));
        assert!(spec.args[1].contains(r#"set custom title of launchedTab to "GSD Progress""#));
    }
}

#[cfg(test)]
mod windows_tests {
    use super::*;

    fn ctx() -> LaunchContext {
        LaunchContext::new(Platform::Windows, r"C:\Users\me\proj")
    }

    fn windows_worker() -> LaunchRequest {
        LaunchRequest::script(r"C:\Users\me\.claude\get-shit-done\bin\ralph.sh", "GSD Ralph")
    }

    #[test]
    fn test_every_windows_row_translates_paths() {
        // PowerShell doubles the quotes around them, so match the bare paths
        for candidate in Registry::builtin().candidates(Platform::Windows) {
            let spec = (candidate.script)(&ctx(), &windows_worker());
            let joined = spec.args.join(" ");
            assert!(
                joined.contains("/c/Users/me/.claude/get-shit-done/bin/ralph.sh"),
                "{}: {}",
                candidate.probe_name,
                joined
            );
            assert!(
                joined.contains("/c/Users/me/proj"),
                "{}: {}",
                candidate.probe_name,
                joined
            );
        }
    }

    #[test]
    fn test_windows_terminal_title_flag() {
        let spec = windows::windows_terminal_script(&ctx(), &windows_worker());
        assert_eq!(&spec.args[..2], &["--title", "GSD Ralph"]);
    }

    #[test]
    fn test_start_rows_set_title_from_bash() {
        for spec in [
            windows::command_prompt_script(&ctx(), &windows_worker()),
            windows::git_bash_script(&ctx(), &windows_worker()),
        ] {
            assert_eq!(spec.program, "cmd.exe");
            assert_eq!(spec.args[2], "");
            assert!(spec.args[7].starts_with(r"printf '\033]0;%s\007' 'GSD Ralph'; "));
        }
    }

    #[test]
    fn test_single_quote_in_title_survives_both_powershell_layers() {
        let spec = windows::powershell_script(&ctx(), &LaunchRequest::script(r"C:\r.sh", "Bob's run"));
        // quoted once for the inner script, then again as an argument
        assert!(spec.args[2].contains("WindowTitle = ''Bob''''s run''"));
    }
}
