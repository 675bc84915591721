//! `ralph.log` iteration parsing
//!
//! The log is a sequence of blocks separated by `---` lines. Each block is a
//! set of `Key: value` lines describing one iteration of the worker.

use serde::Serialize;
use std::time::Duration;

const BLOCK_SEPARATOR: &str = "---\n";

/// Refresh period while an iteration is running
pub const FAST_REFRESH: Duration = Duration::from_secs(2);

/// Refresh period otherwise
pub const SLOW_REFRESH: Duration = Duration::from_secs(10);

/// Known iteration statuses, compared case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IterationStatus {
    Success,
    Failure,
    Retry,
    Running,
    Skipped,
}

impl IterationStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SUCCESS" => Some(Self::Success),
            "FAILURE" => Some(Self::Failure),
            "RETRY" => Some(Self::Retry),
            "RUNNING" => Some(Self::Running),
            "SKIPPED" => Some(Self::Skipped),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Self::Success => '✓',
            Self::Failure => '✗',
            Self::Retry => '⟳',
            Self::Running => '▸',
            Self::Skipped => '⊘',
        }
    }
}

/// One block of the log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub iteration: String,
    pub timestamp: Option<String>,
    pub task: Option<String>,
    /// Status as written in the log
    pub status: Option<String>,
    pub duration: Option<String>,
    pub summary: Option<String>,
}

impl LogEntry {
    pub fn status_kind(&self) -> Option<IterationStatus> {
        self.status.as_deref().and_then(IterationStatus::parse)
    }

    pub fn is_running(&self) -> bool {
        self.status_kind() == Some(IterationStatus::Running)
    }

    /// Parse one block. Blocks without an `Iteration:` line are not entries.
    fn from_block(block: &str) -> Option<Self> {
        let mut iteration = None;
        let mut entry = Self::default();

        for line in block.lines() {
            if let Some(v) = line.strip_prefix("Iteration:") {
                iteration = Some(v.trim().to_string());
            } else if let Some(v) = line.strip_prefix("Timestamp:") {
                entry.timestamp = Some(v.trim().to_string());
            } else if let Some(v) = line.strip_prefix("Task:") {
                entry.task = Some(v.trim().to_string());
            } else if let Some(v) = line.strip_prefix("Status:") {
                entry.status = Some(v.trim().to_string());
            } else if let Some(v) = line.strip_prefix("Duration:") {
                entry.duration = Some(v.trim().to_string());
            } else if let Some(v) = line.strip_prefix("Summary:") {
                entry.summary = Some(v.trim().to_string());
            }
        }

        entry.iteration = iteration.filter(|i| !i.is_empty())?;
        Some(entry)
    }
}

fn blocks(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
}

/// All entries, oldest first
pub fn parse_log(content: &str) -> Vec<LogEntry> {
    blocks(content).filter_map(LogEntry::from_block).collect()
}

/// Up to `limit` most recent entries that have finished, oldest first
pub fn recent_completed(entries: &[LogEntry], limit: usize) -> Vec<&LogEntry> {
    let completed: Vec<&LogEntry> = entries
        .iter()
        .filter(|e| e.status.is_some() && !e.is_running())
        .collect();
    let skip = completed.len().saturating_sub(limit);
    completed.into_iter().skip(skip).collect()
}

/// Whether the final block reports a running iteration
pub fn last_block_running(content: &str) -> bool {
    blocks(content)
        .last()
        .map(|block| block.contains("Status: RUNNING"))
        .unwrap_or(false)
}

/// Redraw period for the given log content (`None` when there is no log)
pub fn refresh_interval(content: Option<&str>) -> Duration {
    match content {
        Some(content) if last_block_running(content) => FAST_REFRESH,
        _ => SLOW_REFRESH,
    }
}
