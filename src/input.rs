//! Lazy element sources for `contains`
//!
//! Every source is pulled one element at a time; nothing is buffered ahead of
//! the consumer, so stopping early also stops reading input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::text::basename;

/// Wraps a fallible element iterator, counting pulls and parking the first error
///
/// Iteration ends at the first error; [`Sequence::finish`] reports it.
pub struct Sequence<I> {
    inner: I,
    pulled: usize,
    error: Option<Error>,
}

impl<I> Sequence<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            pulled: 0,
            error: None,
        }
    }

    /// Number of elements handed out so far
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Consume the sequence, returning the pull count or the read error
    pub fn finish(self) -> Result<usize> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.pulled),
        }
    }
}

impl<I, T> Iterator for Sequence<I>
where
    I: Iterator<Item = Result<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.error.is_some() {
            return None;
        }
        match self.inner.next()? {
            Ok(item) => {
                self.pulled += 1;
                Some(item)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

/// Lines of a file, or of standard input when `file` is `None`
pub fn lines(
    file: Option<&Path>,
) -> Result<Sequence<impl Iterator<Item = Result<String>>>> {
    let (reader, context): (Box<dyn BufRead>, String) = match file {
        Some(path) => {
            let context = path.display().to_string();
            let f = File::open(path).map_err(|e| Error::io(context.clone(), e))?;
            (Box::new(BufReader::new(f)), context)
        }
        None => (
            Box::new(BufReader::new(io::stdin())),
            "standard input".to_string(),
        ),
    };

    Ok(lines_from(reader, context))
}

fn lines_from<R: BufRead>(
    reader: R,
    context: String,
) -> Sequence<impl Iterator<Item = Result<String>>> {
    Sequence::new(
        reader
            .lines()
            .map(move |line| line.map_err(|e| Error::io(context.clone(), e))),
    )
}

/// Basenames of everything below `dir`, in walk order (the root is skipped)
pub fn entry_names(dir: &Path) -> Sequence<impl Iterator<Item = Result<String>>> {
    let root: PathBuf = dir.to_path_buf();
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .map(move |entry| -> Result<String> {
            let entry = entry.map_err(|source| Error::Walk {
                path: root.clone(),
                source,
            })?;
            let path = entry.path().to_string_lossy();
            Ok(basename(&path).to_string())
        });
    Sequence::new(entries)
}
