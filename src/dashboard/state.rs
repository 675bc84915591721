//! `STATE.md` summary parsing

use serde::Serialize;

/// The lines of `STATE.md` the dashboard shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub phase: String,
    pub plan: String,
    pub status: String,
    pub last_activity: String,
    pub progress: String,
}

impl StateSummary {
    /// Pick out `Phase:`, `Plan:`, `Status:`, `Last activity:` and `Progress:`
    /// lines. Keys must start the line; a repeated key overwrites the earlier
    /// value. Everything else is ignored.
    pub fn parse(content: &str) -> Self {
        let mut summary = Self::default();

        for line in content.lines() {
            let field = if let Some(v) = line.strip_prefix("Phase:") {
                (&mut summary.phase, v)
            } else if let Some(v) = line.strip_prefix("Plan:") {
                (&mut summary.plan, v)
            } else if let Some(v) = line.strip_prefix("Status:") {
                (&mut summary.status, v)
            } else if let Some(v) = line.strip_prefix("Last activity:") {
                (&mut summary.last_activity, v)
            } else if let Some(v) = line.strip_prefix("Progress:") {
                (&mut summary.progress, v)
            } else {
                continue;
            };

            *field.0 = field.1.trim().to_string();
        }

        summary
    }
}
