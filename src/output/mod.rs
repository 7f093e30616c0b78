mod contains;
mod map;

use std::path::Path;

use owo_colors::OwoColorize;

pub use contains::{ContainsReport, format_contains, format_contains_json};
pub use map::{format_map, format_map_json};

/// Widest a value cell may get in text tables
pub(crate) const MAX_CELL_WIDTH: usize = 60;

/// Print a diagnostic line to stderr when verbose output is enabled
pub fn note(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", message.dimmed());
    }
}

/// Path for display, with the home directory shortened to `~`
pub fn display_path(path: &Path) -> String {
    let shown = path.to_string_lossy().to_string();
    match dirs::home_dir() {
        Some(home) => {
            let home = home.to_string_lossy().to_string();
            match shown.strip_prefix(&home) {
                Some(rest) if !home.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
                    format!("~{}", rest)
                }
                _ => shown,
            }
        }
        None => shown,
    }
}
