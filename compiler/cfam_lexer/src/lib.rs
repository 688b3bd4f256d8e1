//! Stream driver for the cfam scanner.
//!
//! Reads characters from a [`BufRead`] (or a file), feeds them to a
//! [`Scanner`] one at a time, and hands out the emitted tokens. The scanner
//! itself never fails; everything that can go wrong here is I/O or encoding.
//!
//! Input is decoded as UTF-8 one line at a time, so tokens are delivered as
//! soon as their boundary is known even when the input never ends.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub use cfam_lexer_core::{KeywordSet, ScanState, Scanner, Token, TokenKind};

mod config;
mod display;
mod error;

pub use config::LexConfig;
pub use display::{escape_line_breaks, KindCounts, TokenLine};
pub use error::{ConfigError, LexError};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Scan `reader` to completion, calling `sink` with each token in order.
pub fn lex_stream<R, F>(mut reader: R, keywords: &KeywordSet, mut sink: F) -> Result<(), LexError>
where
    R: BufRead,
    F: FnMut(Token),
{
    let mut scanner = Scanner::new(keywords);
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                LexError::Encoding {
                    line: line_number + 1,
                }
            } else {
                LexError::Io(e)
            }
        })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let text = if line_number == 1 {
            line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&line)
        } else {
            &line
        };
        for c in text.chars() {
            scanner.feed(c);
        }
        scanner.drain().for_each(&mut sink);
    }

    scanner.finish().into_iter().for_each(&mut sink);
    tracing::debug!(lines = line_number, "input exhausted");
    Ok(())
}

/// Scan `reader` to completion and collect the tokens.
pub fn lex_reader<R: BufRead>(reader: R, keywords: &KeywordSet) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    lex_stream(reader, keywords, |tok| tokens.push(tok))?;
    Ok(tokens)
}

/// Open `path` for [`lex_stream`].
pub fn open_source(path: &Path) -> Result<BufReader<File>, LexError> {
    let file = File::open(path).map_err(|source| LexError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "scanning file");
    Ok(BufReader::new(file))
}

/// Scan the file at `path`.
pub fn lex_file(path: &Path, keywords: &KeywordSet) -> Result<Vec<Token>, LexError> {
    lex_reader(open_source(path)?, keywords)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
