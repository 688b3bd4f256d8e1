//! `cfam keywords`: print the active word list.

use std::io::{BufWriter, Write};

use cfam_lexer::LexConfig;

use super::CommandError;

/// Write the reserved words one per line, preceded by the literal spellings
/// as comments. The output is itself a valid `--keywords` file.
pub fn run_keywords<W: Write>(config: &LexConfig, out: W) -> Result<(), CommandError> {
    let keywords = config.keyword_set()?;
    let mut out = BufWriter::new(out);
    let [truthy, falsy] = keywords.boolean_literals();

    let mut write_all = || -> std::io::Result<()> {
        writeln!(out, "// null: {}", keywords.null_literal())?;
        writeln!(out, "// booleans: {truthy} {falsy}")?;
        for word in keywords.iter() {
            writeln!(out, "{word}")?;
        }
        out.flush()
    };
    write_all().map_err(CommandError::Output)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests {
    use cfam_lexer::KeywordSet;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn output_round_trips_as_word_list() {
        let mut out = Vec::new();
        run_keywords(&LexConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("// null: null\n// booleans: true false\n"));
        assert_eq!(KeywordSet::parse_word_list(&text), KeywordSet::default());
    }

    #[test]
    fn words_are_sorted() {
        let mut out = Vec::new();
        run_keywords(&LexConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let words: Vec<&str> = text.lines().filter(|l| !l.starts_with("//")).collect();
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(words, sorted);
        assert!(words.contains(&"class"));
    }
}
