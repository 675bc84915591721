//! Integration tests for configuration files and launch plan resolution

use autopilot_launcher::{Config, ConfigLoader, Error, PathOps, PayloadKind, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Home and config dirs inside a temp directory
struct TempPaths {
    home: PathBuf,
}

impl PathOps for TempPaths {
    fn config_dir(&self) -> Result<PathBuf> {
        Ok(self.home.join(".config"))
    }

    fn home_dir(&self) -> Result<PathBuf> {
        Ok(self.home.clone())
    }
}

struct Fixture {
    _dir: TempDir,
    paths: TempPaths,
    project: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let home = dir.path().join("home");
    let project = dir.path().join("project");
    fs::create_dir_all(home.join(".config")).unwrap();
    fs::create_dir_all(project.join(".planning")).unwrap();
    Fixture {
        paths: TempPaths { home },
        project,
        _dir: dir,
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_search_order() {
    let f = fixture();
    let loader = ConfigLoader::new(&f.paths, &f.project);
    assert_eq!(
        loader.search_paths(),
        &[
            f.paths.home.join(".config/autopilot-launcher/config.toml"),
            f.paths.home.join(".autopilot-launcher.toml"),
            f.project.join(".planning/launcher.toml"),
        ]
    );
}

#[test]
fn test_defaults_without_files() {
    let f = fixture();
    let mut loader = ConfigLoader::new(&f.paths, &f.project);
    assert_eq!(loader.load().unwrap(), Config::default());
    assert!(loader.current_path().is_none());
}

#[test]
fn test_user_config_beats_project_config() {
    let f = fixture();
    write(
        &f.paths.home.join(".autopilot-launcher.toml"),
        "[worker]\ntitle = \"from home\"\n",
    );
    write(
        &f.project.join(".planning/launcher.toml"),
        "[worker]\ntitle = \"from project\"\n",
    );

    let mut loader = ConfigLoader::new(&f.paths, &f.project);
    assert_eq!(loader.load().unwrap().worker.title, "from home");
}

#[test]
fn test_project_config_and_plan() {
    let f = fixture();
    write(
        &f.project.join(".planning/launcher.toml"),
        r#"
[worker]
script = "scripts/ralph.sh"

[dashboard]
title = "Watch"
script = "~/tools/progress-watcher.js"
interpreter_args = ["--no-warnings"]
"#,
    );

    let mut loader = ConfigLoader::new(&f.paths, &f.project);
    let config = loader.load().unwrap();
    let plan = config
        .to_plan(&f.paths, &f.project, Path::new("/usr/bin/autopilot-launcher"))
        .unwrap();

    assert_eq!(plan.project_root, f.project);
    assert_eq!(plan.worker.payload, f.project.join("scripts/ralph.sh"));
    assert_eq!(plan.worker.title, "GSD Ralph");

    let dashboard = plan.dashboard.unwrap();
    assert_eq!(dashboard.title, "Watch");
    assert_eq!(
        dashboard.payload,
        f.paths.home.join("tools/progress-watcher.js")
    );
    assert_eq!(
        dashboard.kind,
        PayloadKind::Interpreted {
            interpreter: PathBuf::from("node"),
            args: vec!["--no-warnings".to_string()],
        }
    );
}

#[test]
fn test_default_worker_lives_under_home() {
    let f = fixture();
    let plan = Config::default()
        .to_plan(&f.paths, &f.project, Path::new("/bin/x"))
        .unwrap();
    assert_eq!(
        plan.worker.payload,
        f.paths.home.join(".claude/get-shit-done/bin/ralph.sh")
    );
}

#[test]
fn test_invalid_toml_reports_path() {
    let f = fixture();
    let bad = f.project.join(".planning/launcher.toml");
    write(&bad, "[worker\ntitle = 1\n");

    let mut loader = ConfigLoader::new(&f.paths, &f.project);
    match loader.load() {
        Err(Error::ConfigParseFailed { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected parse failure, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let f = fixture();
    let file = f.project.join("custom.toml");
    write(&file, "[dashboard]\nenabled = \"yes\"\n");

    let mut loader = ConfigLoader::new(&f.paths, &f.project).explicit(&file);
    assert!(matches!(loader.load(), Err(Error::ConfigParseFailed { .. })));
}

#[test]
fn test_explicit_path_skips_search() {
    let f = fixture();
    write(
        &f.paths.home.join(".autopilot-launcher.toml"),
        "[worker]\ntitle = \"home\"\n",
    );
    let file = f.project.join("custom.toml");
    write(&file, "[dashboard]\nenabled = false\n");

    let mut loader = ConfigLoader::new(&f.paths, &f.project).explicit(&file);
    let config = loader.load().unwrap();
    assert!(!config.dashboard.enabled);
    assert_eq!(config.worker.title, "GSD Ralph");
    assert_eq!(loader.current_path(), Some(file.as_path()));
}
