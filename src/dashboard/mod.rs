//! Progress dashboard
//!
//! Live view of the worker's progress, opened in the second window. It reads
//! two files the worker writes under `.planning/` and owns the zero-byte pause
//! marker the worker polls between iterations.

pub mod log;
pub mod render;
pub mod state;
pub mod watcher;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use self::log::LogEntry;
use self::state::StateSummary;

pub use render::{render, Palette};
pub use watcher::run;

pub const PLANNING_DIR: &str = ".planning";
pub const STATE_FILE: &str = "STATE.md";
pub const LOG_FILE: &str = "ralph.log";
pub const PAUSE_FILE: &str = ".pause";

/// Locations of the progress files for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressFiles {
    pub root: PathBuf,
    pub planning: PathBuf,
    pub state: PathBuf,
    pub log: PathBuf,
    pub pause: PathBuf,
}

impl ProgressFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let planning = root.join(PLANNING_DIR);
        Self {
            state: planning.join(STATE_FILE),
            log: planning.join(LOG_FILE),
            pause: planning.join(PAUSE_FILE),
            planning,
            root,
        }
    }

    /// Whether `name` is one of the files a redraw depends on
    pub fn is_tracked(name: &str) -> bool {
        matches!(name, STATE_FILE | LOG_FILE | PAUSE_FILE)
    }

    pub fn is_paused(&self) -> bool {
        self.pause.exists()
    }

    /// Create the pause marker (and `.planning/` if needed)
    pub fn pause(&self) -> Result<()> {
        fs::create_dir_all(&self.planning)
            .and_then(|_| fs::write(&self.pause, b""))
            .map_err(|e| Error::PauseToggleFailed {
                path: self.pause.clone(),
                reason: e.to_string(),
            })
    }

    /// Remove the pause marker; already absent is fine
    pub fn resume(&self) -> Result<()> {
        match fs::remove_file(&self.pause) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::PauseToggleFailed {
                path: self.pause.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Raw log content, if the log exists and is readable
    pub fn read_log(&self) -> Option<String> {
        fs::read_to_string(&self.log).ok()
    }
}

/// A file as seen at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileView<T> {
    Missing,
    Unreadable(String),
    Loaded(T),
}

impl<T> FileView<T> {
    fn read(path: &Path, parse: impl FnOnce(&str) -> T) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => FileView::Loaded(parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => FileView::Missing,
            Err(e) => FileView::Unreadable(e.to_string()),
        }
    }
}

/// Everything one frame shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: FileView<StateSummary>,
    pub log: FileView<Vec<LogEntry>>,
    pub paused: bool,
}

impl Snapshot {
    pub fn read(files: &ProgressFiles) -> Self {
        Self {
            state: FileView::read(&files.state, StateSummary::parse),
            log: FileView::read(&files.log, log::parse_log),
            paused: files.is_paused(),
        }
    }
}
