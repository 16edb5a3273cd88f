//! Error types for ere-reader.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for corpus operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem failure while reading the corpus.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while walking a corpus directory.
    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// The corpus root exists but the expected layout does not.
    #[error("corpus root {root:?} is missing its {missing}/ directory")]
    CorpusLayout { root: PathBuf, missing: &'static str },

    /// Input that could not be parsed as XML fragments at all.
    #[error("markup error at byte {offset}: {reason}")]
    Markup { offset: usize, reason: String },
}
