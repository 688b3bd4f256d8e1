//! Command handlers for the `cfam` CLI.

use std::io;

use cfam_lexer::{ConfigError, LexError};
use thiserror::Error;

mod keywords;
mod lex;
mod options;

pub use keywords::run_keywords;
pub use lex::run_lex;
pub use options::{parse_keywords_options, parse_lex_options, Input, LexOptions, UsageError};

/// Failure of a command after its arguments were accepted.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("error writing output: {0}")]
    Output(#[source] io::Error),

    #[error("{count} malformed token(s) in input")]
    MalformedTokens { count: usize },
}
