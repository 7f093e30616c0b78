//! Output formatting for transformed JSON objects

use owo_colors::OwoColorize;
use serde_json::{Map, Value};
use tabled::{Table, Tabled};

use crate::text::truncate;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format an object as a key/value table
pub fn format_map(object: &Map<String, Value>) -> String {
    if object.is_empty() {
        return format!("{}\n", "(empty object)".dimmed());
    }

    let rows: Vec<EntryRow> = object
        .iter()
        .map(|(key, value)| EntryRow {
            key: truncate(key, super::MAX_CELL_WIDTH),
            value: truncate(&cell_text(value), super::MAX_CELL_WIDTH),
        })
        .collect();

    format!("{}\n", Table::new(rows))
}

/// Format an object as pretty-printed JSON
pub fn format_map_json(object: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(object).unwrap_or_else(|_| "{}".to_string())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
