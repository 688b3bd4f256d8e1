//! Keyword-set configuration.
//!
//! The subject language's reserved words and literal spellings are an input
//! to the scan. By default the built-in word list is used; a word-list file
//! and custom `null` / boolean spellings can replace it.

use std::fs;
use std::path::PathBuf;

use cfam_lexer_core::char_class::{is_ident_continue, is_ident_start};

use crate::{ConfigError, KeywordSet};

/// Sources for the [`KeywordSet`] of a scan.
#[derive(Clone, Debug, Default)]
pub struct LexConfig {
    /// Word-list file replacing the built-in reserved words.
    pub keywords_path: Option<PathBuf>,
    /// Spelling of the null literal (default `null`).
    pub null_literal: Option<String>,
    /// Spellings of the boolean literals (default `true`, `false`).
    pub boolean_literals: Option<(String, String)>,
}

impl LexConfig {
    /// Assemble the keyword set described by this configuration.
    pub fn keyword_set(&self) -> Result<KeywordSet, ConfigError> {
        let mut set = match &self.keywords_path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| {
                    ConfigError::ReadKeywords {
                        path: path.clone(),
                        source,
                    }
                })?;
                let set = KeywordSet::parse_word_list(&text);
                if set.is_empty() {
                    return Err(ConfigError::EmptyKeywordList { path: path.clone() });
                }
                tracing::debug!(path = %path.display(), words = set.len(), "loaded keyword list");
                set
            }
            None => KeywordSet::default(),
        };

        if let Some(null) = &self.null_literal {
            check_spelling("null", null)?;
            set = set.with_null_literal(null.clone());
        }
        if let Some((truthy, falsy)) = &self.boolean_literals {
            check_spelling("boolean", truthy)?;
            check_spelling("boolean", falsy)?;
            set = set.with_boolean_literals(truthy.clone(), falsy.clone());
        }
        Ok(set)
    }
}

/// A literal spelling is only reachable if it scans as one identifier.
fn check_spelling(what: &'static str, spelling: &str) -> Result<(), ConfigError> {
    let mut chars = spelling.chars();
    let valid = chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue);
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidLiteralSpelling {
            what,
            spelling: spelling.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
