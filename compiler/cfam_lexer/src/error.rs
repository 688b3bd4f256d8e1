use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain characters from the input.
///
/// Malformed source text is never an error here; it comes back as
/// [`TokenKind::Error`](crate::TokenKind::Error) tokens.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input is not valid UTF-8 (line {line})")]
    Encoding { line: usize },

    #[error("error reading input: {0}")]
    Io(#[from] io::Error),
}

/// Invalid keyword-set configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read keyword list '{}': {source}", .path.display())]
    ReadKeywords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("keyword list '{}' contains no words", .path.display())]
    EmptyKeywordList { path: PathBuf },

    #[error("invalid {what} spelling '{spelling}': expected a single identifier")]
    InvalidLiteralSpelling {
        what: &'static str,
        spelling: String,
    },
}
