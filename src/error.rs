use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the command handlers
///
/// The helpers in [`crate::text`] and [`crate::collections`] are total and
/// never produce these; only input handling around them does.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("value of '{key}' is {kind} and cannot be used as a key")]
    UnusableKey { key: String, kind: &'static str },

    #[error("swapping produces duplicate key '{0}'")]
    DuplicateKey(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}
