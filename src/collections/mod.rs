//! Generic helpers over mappings and lazy sequences

mod contains;
mod map_object;

pub use contains::{Equals, Matcher, contains_value, generator_contains};
pub use map_object::map_object;
