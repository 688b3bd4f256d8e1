//! `cfam lex`: print the token stream of a file or stdin.

use std::io::{self, BufWriter, Write};

use cfam_lexer::{lex_stream, open_source, KindCounts, Token, TokenKind, TokenLine};

use super::{CommandError, Input, LexOptions};

/// Scan the input and write one `(KIND lexeme)` line per token to `out`,
/// or the per-kind counts with `--summary`.
pub fn run_lex<W: Write>(options: &LexOptions, out: W) -> Result<(), CommandError> {
    let keywords = options.config.keyword_set()?;
    let mut out = BufWriter::new(out);
    let mut counts = KindCounts::new();
    let mut write_error = None;

    let mut sink = |token: Token| {
        counts.record(&token);
        if !options.summary && write_error.is_none() {
            if let Err(e) = writeln!(out, "{}", TokenLine(&token)) {
                write_error = Some(e);
            }
        }
    };
    match &options.input {
        Input::Stdin => lex_stream(io::stdin().lock(), &keywords, &mut sink)?,
        Input::File(path) => lex_stream(open_source(path)?, &keywords, &mut sink)?,
    }

    if let Some(e) = write_error {
        return Err(CommandError::Output(e));
    }
    if options.summary {
        write!(out, "{counts}")
            .and_then(|()| writeln!(out, "{:<12}{}", "TOTAL", counts.total()))
            .map_err(CommandError::Output)?;
    }
    out.flush().map_err(CommandError::Output)?;

    let count = counts.get(TokenKind::Error);
    if count > 0 {
        tracing::debug!(count, "input contains malformed tokens");
        if options.deny_errors {
            return Err(CommandError::MalformedTokens { count });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
