//! Output formatting for membership checks

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::text::truncate;

/// Result of searching a sequence
#[derive(Debug, Clone, Serialize)]
pub struct ContainsReport {
    pub needle: String,
    pub source: String,
    pub matched: bool,
    /// Elements read before the search stopped
    pub pulled: usize,
}

/// Format a search result as human-readable text
pub fn format_contains(report: &ContainsReport) -> String {
    let needle = truncate(&report.needle, super::MAX_CELL_WIDTH);
    if report.matched {
        format!(
            "{} {} in {} after {} item(s)\n",
            "found".green().bold(),
            needle.bold(),
            report.source.blue(),
            report.pulled
        )
    } else {
        format!(
            "{} {} in {} ({} item(s) searched)\n",
            "missing".yellow().bold(),
            needle.bold(),
            report.source.blue(),
            report.pulled
        )
    }
}

/// Format a search result as JSON
pub fn format_contains_json(report: &ContainsReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
