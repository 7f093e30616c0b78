pub mod cli;
pub mod collections;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod text;
pub mod transform;

pub use collections::{Equals, Matcher, contains_value, generator_contains, map_object};
pub use error::{Error, Result};
pub use text::{basename, basename_by, truncate};
