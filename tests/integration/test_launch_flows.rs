//! Integration tests for the full launch flow against fake host seams

#[path = "../test_utils/mod.rs"]
mod test_utils;

use autopilot_launcher::{FailureReason, LaunchOutcome, Launcher, Platform, Registry};
use test_utils::{sample_plan, FailingProbe, RecordingSpawner, StaticProbe};

fn launcher(platform: Platform, probe: StaticProbe, spawner: &RecordingSpawner) -> Launcher {
    Launcher::new(
        platform,
        Registry::builtin(),
        Box::new(probe),
        Box::new(spawner.clone()),
        sample_plan("/home/me/proj", "/home/me/.claude/get-shit-done/bin/ralph.sh"),
    )
}

fn run(launcher: &Launcher) -> (LaunchOutcome, String) {
    let mut out = Vec::new();
    let outcome = launcher.launch_worker(&mut out);
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_linux_with_only_xterm() {
    let spawner = RecordingSpawner::new();
    let (outcome, out) = run(&launcher(
        Platform::Linux,
        StaticProbe::with(&["xterm"]),
        &spawner,
    ));

    assert_eq!(
        outcome,
        LaunchOutcome::Success {
            terminal: "xterm".to_string(),
            pid: 4242,
            dashboard_pid: Some(4243),
        }
    );
    assert_eq!(outcome.exit_code(), 0);

    let specs = spawner.specs();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].program, "xterm");
    assert_eq!(&specs[0].args[..4], &["-hold", "-title", "GSD Ralph", "-e"]);
    assert_eq!(
        specs[0].args[6],
        r#"cd "/home/me/proj" && "/home/me/.claude/get-shit-done/bin/ralph.sh""#
    );
    // dashboard goes to the same terminal
    assert_eq!(specs[1].program, "xterm");
    assert_eq!(specs[1].args[2], "GSD Progress");

    assert!(out.contains("Launched ralph.sh in new xterm window"));
    assert!(!out.contains("TERMINAL LAUNCH UNAVAILABLE"));
}

#[test]
fn test_linux_with_nothing_installed() {
    let spawner = RecordingSpawner::new();
    let (outcome, out) = run(&launcher(Platform::Linux, StaticProbe::none(), &spawner));

    assert_eq!(
        outcome,
        LaunchOutcome::Failure {
            reason: FailureReason::NoTerminalFound,
            error: None,
        }
    );
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(spawner.count(), 0);

    assert!(out.contains("TERMINAL LAUNCH UNAVAILABLE"));
    assert!(out.contains("  2. cd '/home/me/proj'"));
    assert!(out.contains("  3. '/home/me/.claude/get-shit-done/bin/ralph.sh'"));
    assert!(out.contains("Supported terminals on Linux:"));
    for name in ["gnome-terminal", "xterm", "x-terminal-emulator"] {
        assert!(out.contains(&format!("  - {}\n", name)), "missing {}", name);
    }
}

#[test]
fn test_worker_spawn_failure_never_tries_dashboard() {
    let spawner = RecordingSpawner::failing_on(1);
    let (outcome, out) = run(&launcher(
        Platform::Linux,
        StaticProbe::with(&["gnome-terminal"]),
        &spawner,
    ));

    match outcome {
        LaunchOutcome::Failure { reason, error } => {
            assert_eq!(reason, FailureReason::LaunchFailed);
            assert!(error.unwrap().contains("gnome-terminal"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(spawner.count(), 1);
    assert!(out.contains("TERMINAL LAUNCH UNAVAILABLE"));
}

#[test]
fn test_dashboard_failure_keeps_success() {
    let spawner = RecordingSpawner::failing_on(2);
    let (outcome, out) = run(&launcher(
        Platform::MacOs,
        StaticProbe::with(&["osascript"]),
        &spawner,
    ));

    assert_eq!(
        outcome,
        LaunchOutcome::Success {
            terminal: "osascript".to_string(),
            pid: 4242,
            dashboard_pid: None,
        }
    );
    assert_eq!(spawner.count(), 2);
    assert!(!out.contains("TERMINAL LAUNCH UNAVAILABLE"));
}

#[test]
fn test_no_dashboard_spawns_once() {
    let spawner = RecordingSpawner::new();
    let launcher = launcher(
        Platform::Linux,
        StaticProbe::with(&["xterm"]),
        &spawner,
    )
    .without_dashboard();
    let (outcome, _) = run(&launcher);

    assert!(matches!(
        outcome,
        LaunchOutcome::Success {
            dashboard_pid: None,
            ..
        }
    ));
    assert_eq!(spawner.count(), 1);
}

#[test]
fn test_windows_prefers_windows_terminal() {
    let spawner = RecordingSpawner::new();
    let launcher = Launcher::new(
        Platform::Windows,
        Registry::builtin(),
        Box::new(StaticProbe::with(&["cmd.exe", "wt.exe"])),
        Box::new(spawner.clone()),
        sample_plan(r"C:\Users\me\proj", r"C:\Users\me\.claude\get-shit-done\bin\ralph.sh"),
    );
    let (outcome, _) = run(&launcher);

    assert!(outcome.is_success());
    let specs = spawner.specs();
    assert_eq!(specs[0].program, "wt.exe");
    assert_eq!(
        specs[0].args[4],
        "cd '/c/Users/me/proj' && bash '/c/Users/me/.claude/get-shit-done/bin/ralph.sh'"
    );
}

#[test]
fn test_probe_errors_fall_through_to_manual_instructions() {
    let spawner = RecordingSpawner::new();
    let launcher = Launcher::new(
        Platform::Windows,
        Registry::builtin(),
        Box::new(FailingProbe::except(&[])),
        Box::new(spawner.clone()),
        sample_plan(r"C:\proj", r"C:\ralph.sh"),
    );
    let (outcome, out) = run(&launcher);

    assert_eq!(
        outcome,
        LaunchOutcome::Failure {
            reason: FailureReason::NoTerminalFound,
            error: None,
        }
    );
    assert!(out.contains("  2. cd '/c/proj'"));
    assert!(out.contains("  3. bash '/c/ralph.sh'"));
    assert!(out.contains("  - Windows Terminal (wt.exe)\n"));
}

#[test]
fn test_outcome_json() {
    let spawner = RecordingSpawner::new();
    let (outcome, _) = run(&launcher(
        Platform::Linux,
        StaticProbe::with(&["xterm"]),
        &spawner,
    ));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "outcome": "success",
            "terminal": "xterm",
            "pid": 4242,
            "dashboard_pid": 4243
        })
    );
}
