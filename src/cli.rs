use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::transform::MapTransform;

#[derive(Parser, Debug)]
#[command(name = "shared-utils")]
#[command(author, version, about = "Small string, mapping and sequence helpers")]
#[command(
    long_about = "Exposes a handful of shared helpers on the command line: path \
    basenames, display truncation, JSON object transforms and short-circuiting \
    membership checks over lines or directory entries."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print everything after the last delimiter of a path
    Basename {
        #[arg(value_name = "PATH")]
        path: String,

        /// Delimiter to split on (may be more than one character)
        #[arg(short, long, default_value = "/", allow_hyphen_values = true)]
        delimiter: String,

        /// Expand a leading ~ before splitting
        #[arg(long)]
        expand: bool,
    },

    /// Shorten text to a maximum length, ending in an ellipsis
    Truncate {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,

        #[arg(value_name = "MAX_LENGTH")]
        max_length: usize,
    },

    /// Transform every entry of a JSON object
    Map {
        /// Read the object from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Swap keys and values
        #[arg(long)]
        swap: bool,

        /// Wrap each value in an object under FIELD
        #[arg(long, value_name = "FIELD")]
        wrap: Option<String>,
    },

    /// Check whether a sequence contains an item, stopping at the first match
    Contains {
        #[arg(value_name = "NEEDLE")]
        needle: String,

        /// Treat NEEDLE as a regular expression
        #[arg(short, long)]
        regex: bool,

        /// Search the lines of a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Search entry names below a directory
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Map { swap, wrap, .. } => {
                if *swap && wrap.is_some() {
                    return Err("--swap cannot be used with --wrap".to_string());
                }
                if !*swap && wrap.is_none() {
                    return Err("map requires --swap or --wrap FIELD".to_string());
                }
                if let Some(field) = wrap
                    && field.is_empty()
                {
                    return Err("--wrap requires a non-empty field name".to_string());
                }
            }
            Command::Contains { file, dir, .. } => {
                if file.is_some() && dir.is_some() {
                    return Err("--file cannot be used with --dir".to_string());
                }
            }
            Command::Basename { .. } | Command::Truncate { .. } => {}
        }

        Ok(())
    }
}

impl Command {
    /// The transform selected for `map`, once arguments are validated
    pub fn map_transform(&self) -> Option<MapTransform> {
        match self {
            Command::Map { swap: true, .. } => Some(MapTransform::Swap),
            Command::Map {
                wrap: Some(field), ..
            } => Some(MapTransform::Wrap(field.clone())),
            _ => None,
        }
    }
}
