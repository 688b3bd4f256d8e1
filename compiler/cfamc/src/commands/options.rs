//! Hand-rolled argument parsing for `lex` and `keywords`.

use std::path::PathBuf;

use cfam_lexer::LexConfig;
use thiserror::Error;

/// Where `lex` reads from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct LexOptions {
    pub input: Input,
    pub config: LexConfig,
    /// Print per-kind counts instead of the token stream.
    pub summary: bool,
    /// Exit with failure if any malformed token was produced.
    pub deny_errors: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing input file (use '-' for stdin)")]
    MissingInput,

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' expects a value")]
    MissingValue(&'static str),

    #[error("--booleans expects two comma-separated words, got '{0}'")]
    Booleans(String),
}

/// Parse the arguments following `cfam lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, UsageError> {
    let mut input = None;
    let mut config = LexConfig::default();
    let mut summary = false;
    let mut deny_errors = false;

    for arg in args {
        if parse_config_option(arg, &mut config)? {
            continue;
        }
        match arg.as_str() {
            "--summary" => summary = true,
            "--deny-errors" => deny_errors = true,
            "-" if input.is_none() => input = Some(Input::Stdin),
            a if a.starts_with("--") => return Err(UsageError::UnknownOption(arg.clone())),
            _ if input.is_none() => input = Some(Input::File(PathBuf::from(arg))),
            _ => return Err(UsageError::UnexpectedArgument(arg.clone())),
        }
    }

    Ok(LexOptions {
        input: input.ok_or(UsageError::MissingInput)?,
        config,
        summary,
        deny_errors,
    })
}

/// Parse the arguments following `cfam keywords`.
pub fn parse_keywords_options(args: &[String]) -> Result<LexConfig, UsageError> {
    let mut config = LexConfig::default();
    for arg in args {
        if !parse_config_option(arg, &mut config)? {
            return Err(if arg.starts_with("--") {
                UsageError::UnknownOption(arg.clone())
            } else {
                UsageError::UnexpectedArgument(arg.clone())
            });
        }
    }
    Ok(config)
}

/// Apply a keyword-set option to `config`. Returns `false` if `arg` is not
/// one.
fn parse_config_option(arg: &str, config: &mut LexConfig) -> Result<bool, UsageError> {
    if let Some(path) = arg.strip_prefix("--keywords=") {
        config.keywords_path = Some(PathBuf::from(non_empty(path, "--keywords")?));
    } else if let Some(word) = arg.strip_prefix("--null=") {
        config.null_literal = Some(non_empty(word, "--null")?.to_owned());
    } else if let Some(words) = arg.strip_prefix("--booleans=") {
        let (truthy, falsy) = words
            .split_once(',')
            .filter(|(t, f)| !t.is_empty() && !f.is_empty() && !f.contains(','))
            .ok_or_else(|| UsageError::Booleans(words.to_owned()))?;
        config.boolean_literals = Some((truthy.to_owned(), falsy.to_owned()));
    } else {
        return Ok(false);
    }
    Ok(true)
}

fn non_empty<'a>(value: &'a str, option: &'static str) -> Result<&'a str, UsageError> {
    if value.is_empty() {
        Err(UsageError::MissingValue(option))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
