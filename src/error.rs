//! Error types for everything outside the index itself.
//!
//! The tree and the metric are total and never fail; these cover turning
//! user input into calls on them.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    WordList(#[from] WordListError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("word is empty")]
    EmptyWord,

    #[error("max distance must be a whole number, got {0:?}")]
    InvalidMaxDistance(String),

    #[error("max distance must not be negative, got {0}")]
    NegativeMaxDistance(i64),

    #[error("unknown command {0:?}, try 'help'")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}
