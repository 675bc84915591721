//! Frame rendering
//!
//! Produces the whole screen as one string. Color and screen clearing are
//! both switched off by `NO_COLOR`.

use chrono::{DateTime, Local};
use std::fmt::Write;

use super::log::{recent_completed, IterationStatus, LogEntry};
use super::{FileView, Snapshot};

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────────────";
const RECENT_LIMIT: usize = 5;

/// ANSI escape set; every field is empty when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub cyan: &'static str,
    pub bold: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
    /// Clear screen and home the cursor
    pub clear: &'static str,
}

impl Palette {
    pub const COLOR: Palette = Palette {
        red: "\x1b[31m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        cyan: "\x1b[36m",
        bold: "\x1b[1m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
        clear: "\x1b[2J\x1b[H",
    };

    pub const PLAIN: Palette = Palette {
        red: "",
        green: "",
        yellow: "",
        cyan: "",
        bold: "",
        dim: "",
        reset: "",
        clear: "",
    };

    /// `PLAIN` whenever `NO_COLOR` is set, whatever its value
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::PLAIN
        } else {
            Self::COLOR
        }
    }

    fn status(&self, status: &str) -> String {
        let color = match IterationStatus::parse(status) {
            Some(IterationStatus::Success) => self.green,
            Some(IterationStatus::Failure) => self.red,
            Some(IterationStatus::Retry) | Some(IterationStatus::Skipped) => self.yellow,
            Some(IterationStatus::Running) => self.cyan,
            None => return status.to_string(),
        };
        let glyph = IterationStatus::parse(status).map(|s| s.glyph()).unwrap_or(' ');
        format!("{}{} {}{}", color, glyph, status, self.reset)
    }
}

/// `Nm Ss` past one minute, `Ns` below
pub fn format_elapsed(seconds: i64) -> String {
    if seconds > 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

fn elapsed_since(timestamp: Option<&str>, now: DateTime<Local>) -> String {
    timestamp
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|start| format_elapsed(now.signed_duration_since(start).num_seconds().max(0)))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Render one full frame
pub fn render(snapshot: &Snapshot, palette: &Palette, now: DateTime<Local>) -> String {
    let p = palette;
    let mut out = String::new();

    // fmt::Write into a String cannot fail
    let _ = write_frame(&mut out, snapshot, p, now);
    out
}

fn write_frame(
    out: &mut String,
    snapshot: &Snapshot,
    p: &Palette,
    now: DateTime<Local>,
) -> std::fmt::Result {
    out.push_str(p.clear);
    writeln!(out, "{}{}{}{}", p.bold, p.cyan, HEAVY_RULE, p.reset)?;
    writeln!(
        out,
        "{}{}  GSD Progress Watcher{}                        {}{}{}",
        p.bold,
        p.cyan,
        p.reset,
        p.dim,
        now.format("%H:%M:%S"),
        p.reset
    )?;
    writeln!(out, "{}{}{}{}\n", p.bold, p.cyan, HEAVY_RULE, p.reset)?;

    match &snapshot.state {
        FileView::Loaded(state) => {
            writeln!(out, "{}Current Position:{}", p.bold, p.reset)?;
            writeln!(out, "  Phase:  {}", state.phase)?;
            writeln!(out, "  Plan:   {}", state.plan)?;
            writeln!(out, "  Status: {}", state.status)?;
            if !state.last_activity.is_empty() {
                writeln!(out, "  Last:   {}{}{}", p.dim, state.last_activity, p.reset)?;
            }
            writeln!(out)?;

            if !state.progress.is_empty() {
                writeln!(out, "{}Progress:{}", p.bold, p.reset)?;
                writeln!(out, "  {}", state.progress)?;
                writeln!(out)?;
            }
        }
        FileView::Unreadable(reason) => {
            writeln!(out, "{}Error reading STATE.md: {}{}\n", p.red, reason, p.reset)?;
        }
        FileView::Missing => {
            writeln!(out, "{}Waiting for STATE.md...{}\n", p.dim, p.reset)?;
        }
    }

    match &snapshot.log {
        FileView::Loaded(entries) => write_log(out, entries, p, now)?,
        FileView::Unreadable(reason) => {
            writeln!(out, "{}Error reading ralph.log: {}{}\n", p.red, reason, p.reset)?;
        }
        FileView::Missing => {}
    }

    writeln!(out, "{}{}{}", p.dim, LIGHT_RULE, p.reset)?;

    let (mode_color, mode) = if snapshot.paused {
        (p.yellow, "PAUSED")
    } else {
        (p.green, "RUNNING")
    };
    writeln!(out, "Mode: {}{}[{}]{}", mode_color, p.bold, mode, p.reset)?;
    writeln!(out, "{}Keys: [p]ause  [r]esume  [q]uit{}", p.dim, p.reset)
}

fn write_log(
    out: &mut String,
    entries: &[LogEntry],
    p: &Palette,
    now: DateTime<Local>,
) -> std::fmt::Result {
    if let Some(current) = entries.last().filter(|e| e.is_running()) {
        writeln!(out, "{}{}▸ Currently Running:{}", p.bold, p.cyan, p.reset)?;
        writeln!(
            out,
            "  {}Task {}{} (iteration #{})",
            p.bold,
            current.task.as_deref().unwrap_or(""),
            p.reset,
            current.iteration
        )?;
        writeln!(
            out,
            "  {}Elapsed: {}{}",
            p.dim,
            elapsed_since(current.timestamp.as_deref(), now),
            p.reset
        )?;
        writeln!(out)?;
    }

    let recent = recent_completed(entries, RECENT_LIMIT);
    if recent.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}Recent Iterations:{}", p.bold, p.reset)?;
    for entry in recent {
        let status = entry.status.as_deref().unwrap_or("");
        writeln!(out, "  {}#{}{} {}", p.cyan, entry.iteration, p.reset, p.status(status))?;
        writeln!(
            out,
            "      Task: {}{}{}",
            p.dim,
            entry.task.as_deref().unwrap_or(""),
            p.reset
        )?;
        if let Some(summary) = entry.summary.as_deref().filter(|s| !s.is_empty()) {
            writeln!(out, "      {}", summary)?;
        }
        if let Some(duration) = entry.duration.as_deref().filter(|d| !d.is_empty() && *d != "-") {
            writeln!(out, "      {}Duration: {}{}", p.dim, duration, p.reset)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
