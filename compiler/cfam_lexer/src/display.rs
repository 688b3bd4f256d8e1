//! Printing tokens.
//!
//! A token prints as `(KIND lexeme)`. Line breaks inside a lexeme are shown
//! as the two-character spellings `\r` and `\n` so each token stays on one
//! output line; the token itself is never modified.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::{Token, TokenKind};

/// Render `\r` and `\n` as their escaped spellings.
pub fn escape_line_breaks(lexeme: &str) -> Cow<'_, str> {
    if !lexeme.contains(['\r', '\n']) {
        return Cow::Borrowed(lexeme);
    }
    let mut out = String::with_capacity(lexeme.len() + 4);
    for c in lexeme.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Displays a token as `(KIND lexeme)`.
#[derive(Clone, Copy, Debug)]
pub struct TokenLine<'a>(pub &'a Token);

impl fmt::Display for TokenLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {})",
            self.0.kind(),
            escape_line_breaks(self.0.lexeme())
        )
    }
}

/// Number of tokens seen per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    counts: BTreeMap<TokenKind, usize>,
}

impl KindCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, token: &Token) {
        *self.counts.entry(token.kind()).or_insert(0) += 1;
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<'a> Extend<&'a Token> for KindCounts {
    fn extend<I: IntoIterator<Item = &'a Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.record(token);
        }
    }
}

/// One `KIND count` line per kind present, in [`TokenKind::ALL`] order.
impl fmt::Display for KindCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in TokenKind::ALL {
            let count = self.get(kind);
            if count > 0 {
                writeln!(f, "{:<12}{count}", kind.name())?;
            }
        }
        Ok(())
    }
}
