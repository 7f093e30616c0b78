//! Command handlers behind the `shared-utils` binary

use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::cli::{Args, Command, OutputFormat};
use crate::collections::{Equals, generator_contains};
use crate::error::{Error, Result};
use crate::input::{self, Sequence};
use crate::output::{
    ContainsReport, display_path, format_contains, format_contains_json, format_map,
    format_map_json, note,
};
use crate::text::{basename_by, truncate};
use crate::transform::{self, MapTransform};

/// What a command printed and whether it should exit successfully
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Run the parsed (and validated) command
pub fn run(args: &Args) -> Result<Outcome> {
    match &args.command {
        Command::Basename {
            path,
            delimiter,
            expand,
        } => {
            let path = if *expand {
                shellexpand::tilde(path).into_owned()
            } else {
                path.clone()
            };
            note(args.verbose, &format!("splitting {:?} on {:?}", path, delimiter));
            Ok(Outcome::ok(format_text(basename_by(&path, delimiter), args.format)))
        }
        Command::Truncate { text, max_length } => Ok(Outcome::ok(format_text(
            &truncate(text, *max_length),
            args.format,
        ))),
        Command::Map { file, .. } => {
            let Some(transform) = args.command.map_transform() else {
                return Ok(Outcome::ok(String::new()));
            };
            run_map(file.as_deref(), &transform, args)
        }
        Command::Contains {
            needle,
            regex,
            file,
            dir,
        } => run_contains(needle, *regex, file.as_deref(), dir.as_deref(), args),
    }
}

fn run_map(file: Option<&Path>, transform: &MapTransform, args: &Args) -> Result<Outcome> {
    let text = match file {
        Some(path) => {
            note(args.verbose, &format!("reading {}", display_path(path)));
            std::fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::io("standard input", e))?;
            buf
        }
    };

    let object = transform::parse_object(&text)?;
    note(
        args.verbose,
        &format!("transforming {} entries with {:?}", object.len(), transform),
    );
    let result = transform::apply(&object, transform)?;

    let output = match args.format {
        OutputFormat::Text => format_map(&result),
        OutputFormat::Json => format!("{}\n", format_map_json(&result)),
    };
    Ok(Outcome::ok(output))
}

fn run_contains(
    needle: &str,
    use_regex: bool,
    file: Option<&Path>,
    dir: Option<&Path>,
    args: &Args,
) -> Result<Outcome> {
    let pattern = if use_regex {
        Some(Regex::new(needle)?)
    } else {
        None
    };

    let (matched, pulled, source) = match dir {
        Some(dir) => {
            let source = display_path(dir);
            note(args.verbose, &format!("walking {}", source));
            let (matched, pulled) = search(input::entry_names(dir), needle, pattern.as_ref())?;
            (matched, pulled, source)
        }
        None => {
            let source = file.map_or_else(|| "standard input".to_string(), display_path);
            note(args.verbose, &format!("reading lines from {}", source));
            let (matched, pulled) = search(input::lines(file)?, needle, pattern.as_ref())?;
            (matched, pulled, source)
        }
    };
    note(args.verbose, &format!("stopped after {} item(s)", pulled));

    let report = ContainsReport {
        needle: needle.to_string(),
        source,
        matched,
        pulled,
    };
    let output = match args.format {
        OutputFormat::Text => format_contains(&report),
        OutputFormat::Json => format!("{}\n", format_contains_json(&report)),
    };

    Ok(Outcome {
        output,
        success: matched,
    })
}

/// Search a source, returning whether it matched and how many items were read
fn search<I>(mut seq: Sequence<I>, needle: &str, pattern: Option<&Regex>) -> Result<(bool, usize)>
where
    I: Iterator<Item = Result<String>>,
{
    let matched = match pattern {
        Some(re) => generator_contains(&mut seq, |item: &String| re.is_match(item)),
        None => generator_contains(&mut seq, Equals(needle.to_string())),
    };

    // A read error after a match doesn't matter; before one it does
    if matched {
        Ok((true, seq.pulled()))
    } else {
        seq.finish().map(|pulled| (false, pulled))
    }
}

fn format_text(value: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", value),
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
        ),
    }
}
