use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the feeder can hit. None of them are recovered.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("missing input file argument")]
    MissingPath,

    #[error("invalid option {option}: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("cannot open {path}: {source}")]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("input is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("line {line}: character {ch:?} at column {column} is not ASCII")]
    Encoding { line: usize, column: usize, ch: char },

    #[error("transport error: {0}")]
    Transport(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl FeedError {
    pub fn invalid_option(option: &str, reason: impl Into<String>) -> Self {
        FeedError::InvalidOption { option: option.to_string(), reason: reason.into() }
    }
}
