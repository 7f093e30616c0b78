//! String helpers shared by the command handlers and output formatting

mod basename;
mod truncate;

pub use basename::{DEFAULT_DELIMITER, basename, basename_by};
pub use truncate::{ELLIPSIS, truncate};
