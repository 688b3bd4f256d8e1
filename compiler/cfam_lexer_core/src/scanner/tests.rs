use super::*;
use pretty_assertions::assert_eq;
use TokenKind as K;

/// Helper: scan with the default keyword set and return `(kind, lexeme)` pairs.
fn lex(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .into_iter()
        .map(|t| (t.kind(), t.into_lexeme()))
        .collect()
}

fn toks(pairs: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    pairs
        .iter()
        .map(|&(kind, lexeme)| (kind, lexeme.to_owned()))
        .collect()
}

/// Helper: scan `a{op}b` and return the middle token.
fn between_identifiers(op: &str) -> Vec<(TokenKind, String)> {
    lex(&format!("a{op}b"))
}

// ─── Basic Properties ──────────────────────────────────────────

#[test]
fn empty_source() {
    assert!(lex("").is_empty());
}

#[test]
fn lexemes_reconstruct_source() {
    let sources = [
        "int x = 42;",
        "class Foo { public static void Main() { } }",
        "a >>>= b; c <<= d; e >>= f;",
        "\"unterminated",
        "'x",
        "/* open",
        "..x ..5 ... .",
        "#@`\\",
        "0xGG 09 1.2.3 12abc",
        "\"a\\q\" rest",
        "// trailing comment",
        "  \t\r\n  ",
    ];
    for source in sources {
        let rebuilt: String = scan(source).iter().map(Token::lexeme).collect();
        assert_eq!(rebuilt, source, "lexemes must reconstruct {source:?}");
    }
}

#[test]
fn no_empty_tokens() {
    for source in ["a..b", "x=>y", "'\n'", "\"\"", "''", "/**/"] {
        for tok in scan(source) {
            assert!(!tok.is_empty(), "empty token in {source:?}");
        }
    }
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn whitespace_run_is_one_token() {
    assert_eq!(lex(" \t\r\n  \n"), toks(&[(K::Whitespace, " \t\r\n  \n")]));
}

#[test]
fn whitespace_between_words() {
    assert_eq!(
        lex("a  b\r\nc"),
        toks(&[
            (K::Identifier, "a"),
            (K::Whitespace, "  "),
            (K::Identifier, "b"),
            (K::Whitespace, "\r\n"),
            (K::Identifier, "c"),
        ])
    );
}

// ─── Identifiers & Keywords ────────────────────────────────────

#[test]
fn keywords_and_literal_words() {
    assert_eq!(
        lex("null true false while foo"),
        toks(&[
            (K::Null, "null"),
            (K::Whitespace, " "),
            (K::Boolean, "true"),
            (K::Whitespace, " "),
            (K::Boolean, "false"),
            (K::Whitespace, " "),
            (K::Keyword, "while"),
            (K::Whitespace, " "),
            (K::Identifier, "foo"),
        ])
    );
}

#[test]
fn keyword_at_end_of_input() {
    assert_eq!(lex("return"), toks(&[(K::Keyword, "return")]));
}

#[test]
fn identifier_shapes() {
    for ident in ["_", "_x1", "$ref", "camelCase", "snake_case2", "größe", "λ"] {
        assert_eq!(lex(ident), toks(&[(K::Identifier, ident)]), "{ident}");
    }
}

#[test]
fn identifier_ends_at_separator_and_operator() {
    assert_eq!(
        lex("foo(bar)+baz.qux"),
        toks(&[
            (K::Identifier, "foo"),
            (K::Separator, "("),
            (K::Identifier, "bar"),
            (K::Separator, ")"),
            (K::Operator, "+"),
            (K::Identifier, "baz"),
            (K::Separator, "."),
            (K::Identifier, "qux"),
        ])
    );
}

#[test]
fn identifier_with_hash_is_error() {
    assert_eq!(
        lex("a#b"),
        toks(&[(K::Error, "a#"), (K::Identifier, "b")])
    );
}

#[test]
fn identifier_followed_by_quote_is_error() {
    assert_eq!(
        lex("a\"b"),
        toks(&[(K::Error, "a\""), (K::Identifier, "b")])
    );
}

#[test]
fn custom_keyword_set() {
    let keywords = KeywordSet::from_words(["fn", "let"]).with_null_literal("nil");
    let kinds: Vec<TokenKind> = scan_with("fn let nil while", &keywords)
        .iter()
        .map(Token::kind)
        .filter(|k| !k.is_trivia())
        .collect();
    assert_eq!(
        kinds,
        vec![K::Keyword, K::Keyword, K::Null, K::Identifier]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn decimal_int() {
    assert_eq!(lex("123"), toks(&[(K::Int, "123")]));
}

#[test]
fn hex_with_separators() {
    assert_eq!(lex("0x1A_2B"), toks(&[(K::Int, "0x1A_2B")]));
}

#[test]
fn bare_radix_prefix_is_an_int() {
    assert_eq!(lex("0x"), toks(&[(K::Int, "0x")]));
    assert_eq!(lex("0b;"), toks(&[(K::Int, "0b"), (K::Separator, ";")]));
    assert_eq!(lex("0X)"), toks(&[(K::Int, "0X"), (K::Separator, ")")]));
}

#[test]
fn float_with_suffix() {
    assert_eq!(lex("3.14f"), toks(&[(K::Float, "3.14f")]));
}

#[test]
fn int_forms() {
    for source in ["0", "7", "10L", "0l", "0b1010_1", "0B1L", "0XFFl", "0x_ff"] {
        assert_eq!(lex(source), toks(&[(K::Int, source)]), "{source}");
    }
}

#[test]
fn float_forms() {
    for source in ["0.5", "5.", ".5", "2f", "1.5d", "1.5D", "0.0F", "0b1f"] {
        assert_eq!(lex(source), toks(&[(K::Float, source)]), "{source}");
    }
}

#[test]
fn number_ends_at_separator() {
    assert_eq!(
        lex("f(1,2.5);"),
        toks(&[
            (K::Identifier, "f"),
            (K::Separator, "("),
            (K::Int, "1"),
            (K::Separator, ","),
            (K::Float, "2.5"),
            (K::Separator, ")"),
            (K::Separator, ";"),
        ])
    );
}

#[test]
fn leading_zero_digits_are_errors() {
    assert_eq!(lex("09"), toks(&[(K::Error, "09")]));
    assert_eq!(lex("007"), toks(&[(K::Error, "00"), (K::Int, "7")]));
}

#[test]
fn malformed_number_resynchronizes() {
    assert_eq!(
        lex("12abc"),
        toks(&[(K::Error, "12a"), (K::Identifier, "bc")])
    );
    assert_eq!(
        lex("1.2.3"),
        toks(&[(K::Error, "1.2."), (K::Int, "3")])
    );
    assert_eq!(lex("0xFFg"), toks(&[(K::Error, "0xFFg")]));
    assert_eq!(
        lex("10Lx y"),
        toks(&[(K::Error, "10Lx"), (K::Whitespace, " "), (K::Identifier, "y")])
    );
}

// ─── Char Literals ─────────────────────────────────────────────

#[test]
fn char_literals() {
    for source in ["'a'", "' '", "'\t'", "'\\n'", "'\\''", "'\\\\'", "'\"'"] {
        assert_eq!(lex(source), toks(&[(K::Char, source)]), "{source:?}");
    }
}

#[test]
fn char_literal_with_invalid_escape() {
    assert_eq!(
        lex("'\\q'"),
        toks(&[(K::Error, "'\\q"), (K::Error, "'")])
    );
}

#[test]
fn char_literal_broken_by_newline() {
    assert_eq!(
        lex("'\nx"),
        toks(&[(K::Error, "'"), (K::Whitespace, "\n"), (K::Identifier, "x")])
    );
}

#[test]
fn multi_char_literal_is_error() {
    assert_eq!(
        lex("'ab' x"),
        toks(&[(K::Error, "'ab"), (K::Error, "' x")])
    );
}

// ─── String Literals ───────────────────────────────────────────

#[test]
fn string_literal() {
    assert_eq!(
        lex("\"hello, world\";"),
        toks(&[(K::String, "\"hello, world\""), (K::Separator, ";")])
    );
}

#[test]
fn string_with_escaped_quote_keeps_escape() {
    assert_eq!(lex("\"ab\\\"cd\""), toks(&[(K::String, "\"ab\\\"cd\"")]));
}

#[test]
fn escaped_backslash_before_closing_quote() {
    assert_eq!(
        lex("\"a\\\\\" b"),
        toks(&[
            (K::String, "\"a\\\\\""),
            (K::Whitespace, " "),
            (K::Identifier, "b"),
        ])
    );
}

#[test]
fn quote_after_escaped_backslash_closes_string() {
    // `"a\\"` ends at its last quote; the trailing `b"` is not string content.
    assert_eq!(
        lex("\"a\\\\\" b\""),
        toks(&[
            (K::String, "\"a\\\\\""),
            (K::Whitespace, " "),
            (K::Error, "b\""),
        ])
    );
}

#[test]
fn string_with_invalid_escape() {
    assert_eq!(
        lex("\"a\\q\""),
        toks(&[(K::Error, "\"a\\q"), (K::Error, "\"")])
    );
}

#[test]
fn empty_string() {
    assert_eq!(lex("\"\""), toks(&[(K::String, "\"\"")]));
}

#[test]
fn unterminated_string_is_error() {
    assert_eq!(lex("\"abc"), toks(&[(K::Error, "\"abc")]));
    assert_eq!(lex("\"abc\\"), toks(&[(K::Error, "\"abc\\")]));
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_then_newline() {
    assert_eq!(
        lex("// comment\n"),
        toks(&[(K::Comment, "// comment"), (K::Whitespace, "\n")])
    );
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(
        lex("x // end"),
        toks(&[
            (K::Identifier, "x"),
            (K::Whitespace, " "),
            (K::Comment, "// end"),
        ])
    );
}

#[test]
fn line_comment_keeps_tabs() {
    assert_eq!(
        lex("//\ta b\r\n"),
        toks(&[(K::Comment, "//\ta b"), (K::Whitespace, "\r\n")])
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        lex("/* a\n * b */x"),
        toks(&[(K::Comment, "/* a\n * b */"), (K::Identifier, "x")])
    );
}

#[test]
fn block_comment_with_doubled_stars() {
    assert_eq!(lex("/** doc **/"), toks(&[(K::Comment, "/** doc **/")]));
    assert_eq!(lex("/**/"), toks(&[(K::Comment, "/**/")]));
}

#[test]
fn unterminated_block_comment_is_error() {
    assert_eq!(lex("/* open"), toks(&[(K::Error, "/* open")]));
    assert_eq!(lex("/* open *"), toks(&[(K::Error, "/* open *")]));
}

// ─── Operators ─────────────────────────────────────────────────

#[test]
fn shift_right_assign_is_one_operator() {
    assert_eq!(lex(">>="), toks(&[(K::Operator, ">>=")]));
}

#[test]
fn operators_between_identifiers() {
    let operators = [
        "+", "-", "*", "/", "%", "^", "!", "=", "<", ">", "&", "|", "?", "~", ":", "++", "--",
        "+=", "-=", "*=", "/=", "%=", "^=", "!=", "==", "<=", ">=", "<>", "<<", "<<=", ">>",
        ">>=", ">>>", ">>>=", "&&", "&=", "||", "|=",
    ];
    for op in operators {
        assert_eq!(
            between_identifiers(op),
            toks(&[(K::Identifier, "a"), (K::Operator, op), (K::Identifier, "b")]),
            "operator {op:?}"
        );
    }
}

#[test]
fn double_colon_is_separator() {
    assert_eq!(
        between_identifiers("::"),
        toks(&[(K::Identifier, "a"), (K::Separator, "::"), (K::Identifier, "b")])
    );
}

#[test]
fn operator_at_end_of_input() {
    for op in ["+", "/", "<", ">", ">>", "&", "|", ":", "++", "+=", "<<"] {
        assert_eq!(lex(op), toks(&[(K::Operator, op)]), "{op}");
    }
}

#[test]
fn operator_followed_by_number() {
    assert_eq!(
        lex("-1"),
        toks(&[(K::Operator, "-"), (K::Int, "1")])
    );
}

#[test]
fn invalid_operator_runs_are_errors() {
    assert_eq!(
        lex("a=-1"),
        toks(&[(K::Identifier, "a"), (K::Error, "=-"), (K::Int, "1")])
    );
    assert_eq!(
        lex("a+-b"),
        toks(&[(K::Identifier, "a"), (K::Error, "+-"), (K::Identifier, "b")])
    );
    assert_eq!(lex("==="), toks(&[(K::Error, "===")]));
    assert_eq!(
        lex("x/-y"),
        toks(&[(K::Identifier, "x"), (K::Error, "/-"), (K::Identifier, "y")])
    );
}

#[test]
fn adjacent_operators_do_not_merge_through_whitespace() {
    assert_eq!(
        lex("+ +"),
        toks(&[(K::Operator, "+"), (K::Whitespace, " "), (K::Operator, "+")])
    );
}

// ─── Separators & Dots ─────────────────────────────────────────

#[test]
fn separators() {
    assert_eq!(
        lex("(){}[];,"),
        toks(&[
            (K::Separator, "("),
            (K::Separator, ")"),
            (K::Separator, "{"),
            (K::Separator, "}"),
            (K::Separator, "["),
            (K::Separator, "]"),
            (K::Separator, ";"),
            (K::Separator, ","),
        ])
    );
}

#[test]
fn ellipsis_is_one_separator() {
    assert_eq!(lex("..."), toks(&[(K::Separator, "...")]));
    assert_eq!(
        lex("...."),
        toks(&[(K::Separator, "..."), (K::Separator, ".")])
    );
}

#[test]
fn double_dot_is_two_separators() {
    assert_eq!(lex(".."), toks(&[(K::Separator, "."), (K::Separator, ".")]));
    assert_eq!(
        lex("..x"),
        toks(&[
            (K::Separator, "."),
            (K::Separator, "."),
            (K::Identifier, "x"),
        ])
    );
}

#[test]
fn double_dot_before_digit() {
    assert_eq!(lex("..5"), toks(&[(K::Separator, "."), (K::Float, ".5")]));
}

// ─── Errors ────────────────────────────────────────────────────

#[test]
fn hash_alone_is_error() {
    assert_eq!(lex("#"), toks(&[(K::Error, "#")]));
}

#[test]
fn unrecognized_symbols_are_single_errors() {
    for source in ["@", "`", "\\", "\u{0}"] {
        assert_eq!(lex(source), toks(&[(K::Error, source)]), "{source:?}");
    }
    assert_eq!(lex("##"), toks(&[(K::Error, "#"), (K::Error, "#")]));
}

#[test]
fn error_resynchronizes_on_next_character() {
    assert_eq!(
        lex("@Override"),
        toks(&[(K::Error, "@"), (K::Identifier, "Override")])
    );
    assert_eq!(
        lex("int #x = 1;"),
        toks(&[
            (K::Keyword, "int"),
            (K::Whitespace, " "),
            (K::Error, "#"),
            (K::Identifier, "x"),
            (K::Whitespace, " "),
            (K::Operator, "="),
            (K::Whitespace, " "),
            (K::Int, "1"),
            (K::Separator, ";"),
        ])
    );
}

// ─── Incremental API ───────────────────────────────────────────

#[test]
fn feed_tracks_state_and_buffer() {
    let keywords = KeywordSet::default();
    let mut scanner = Scanner::new(&keywords);
    assert_eq!(scanner.state(), ScanState::Initial);

    scanner.feed('a');
    assert_eq!(scanner.state(), ScanState::Identifier);
    assert_eq!(scanner.buffered(), "a");
    assert!(scanner.tokens().is_empty());

    scanner.feed(' ');
    assert_eq!(scanner.state(), ScanState::Whitespace);
    assert_eq!(scanner.buffered(), " ");
    assert_eq!(scanner.tokens(), &[Token::new(K::Identifier, "a")]);

    scanner.feed('>');
    scanner.feed('>');
    assert_eq!(scanner.state(), ScanState::DoubleGreater);
    scanner.feed('=');
    assert_eq!(scanner.state(), ScanState::OperatorAndEqual);
    assert_eq!(scanner.buffered(), ">>=");
}

#[test]
fn separator_emits_immediately() {
    let keywords = KeywordSet::default();
    let mut scanner = Scanner::new(&keywords);
    scanner.feed(';');
    assert_eq!(scanner.state(), ScanState::Initial);
    assert_eq!(scanner.buffered(), "");
    assert_eq!(scanner.tokens(), &[Token::new(K::Separator, ";")]);
}

#[test]
fn drain_hands_out_tokens_incrementally() {
    let keywords = KeywordSet::default();
    let mut scanner = Scanner::new(&keywords);
    let mut seen = Vec::new();
    for c in "x = 1;".chars() {
        scanner.feed(c);
        seen.extend(scanner.drain());
    }
    assert!(scanner.tokens().is_empty());
    seen.extend(scanner.finish());
    assert_eq!(seen, scan("x = 1;"));
}

#[test]
fn finish_closes_open_token() {
    let keywords = KeywordSet::default();
    let mut scanner = Scanner::new(&keywords);
    for c in "while".chars() {
        scanner.feed(c);
    }
    assert!(scanner.tokens().is_empty());
    assert_eq!(scanner.finish(), vec![Token::new(K::Keyword, "while")]);
}

#[test]
fn scan_chars_accepts_any_iterator() {
    let tokens = scan_chars("a;".chars().rev(), &KeywordSet::default());
    assert_eq!(
        tokens,
        vec![Token::new(K::Separator, ";"), Token::new(K::Identifier, "a")]
    );
}

// ─── Realistic Input ───────────────────────────────────────────

#[test]
fn realistic_method() {
    let source = "public int Sum(int[] xs) {\n    int total = 0; // acc\n    foreach (var x in xs) total += x;\n    return total;\n}\n";
    let significant: Vec<(TokenKind, String)> = lex(source)
        .into_iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .collect();
    assert_eq!(
        significant,
        toks(&[
            (K::Keyword, "public"),
            (K::Keyword, "int"),
            (K::Identifier, "Sum"),
            (K::Separator, "("),
            (K::Keyword, "int"),
            (K::Separator, "["),
            (K::Separator, "]"),
            (K::Identifier, "xs"),
            (K::Separator, ")"),
            (K::Separator, "{"),
            (K::Keyword, "int"),
            (K::Identifier, "total"),
            (K::Operator, "="),
            (K::Int, "0"),
            (K::Separator, ";"),
            (K::Keyword, "foreach"),
            (K::Separator, "("),
            (K::Identifier, "var"),
            (K::Identifier, "x"),
            (K::Keyword, "in"),
            (K::Identifier, "xs"),
            (K::Separator, ")"),
            (K::Identifier, "total"),
            (K::Operator, "+="),
            (K::Identifier, "x"),
            (K::Separator, ";"),
            (K::Keyword, "return"),
            (K::Identifier, "total"),
            (K::Separator, ";"),
            (K::Separator, "}"),
        ])
    );
    let comments: Vec<String> = lex(source)
        .into_iter()
        .filter(|(kind, _)| *kind == K::Comment)
        .map(|(_, lexeme)| lexeme)
        .collect();
    assert_eq!(comments, vec!["// acc".to_owned()]);
}

// ─── Property Tests ────────────────────────────────────────────

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::*;
    use crate::DEFAULT_KEYWORDS;
    use proptest::prelude::*;

    /// Fragments that start and end on a token boundary no neighbour can
    /// extend.
    const FRAGMENTS: &[&str] = &[
        "x = 1;",
        "foo(a, b);",
        "\"s\\n\";",
        "'c';",
        "/* c */",
        "// line\n",
        "a >>= 2;",
        "0x1F;",
        "3.5f;",
        "if (a && b) { }",
        "#",
        "{",
        "}",
    ];

    const TERMINATORS: &[&str] = &[" ", ";", "(", "+", ""];

    fn rebuild(source: &str) -> String {
        scan(source).iter().map(Token::lexeme).collect()
    }

    proptest! {
        #[test]
        fn lexemes_reconstruct_any_input(source in any::<String>()) {
            prop_assert_eq!(rebuild(&source), source);
        }

        #[test]
        fn lexemes_reconstruct_c_like_input(
            source in "[a-z0-9_ \t\r\n'\"\\\\./*+=<>&|:;(){}#?!%^~,-]{0,64}"
        ) {
            let tokens = scan(&source);
            prop_assert!(tokens.iter().all(|t| !t.is_empty()));
            prop_assert_eq!(rebuild(&source), source);
        }

        #[test]
        fn whitespace_run_yields_one_token(source in "[ \t\r\n]{1,32}") {
            prop_assert_eq!(
                lex(&source),
                vec![(K::Whitespace, source.clone())]
            );
        }

        #[test]
        fn keywords_never_classify_as_identifier(
            kw in prop::sample::select(DEFAULT_KEYWORDS),
            sep in prop::sample::select(TERMINATORS),
        ) {
            let tokens = scan(&format!("{kw}{sep}"));
            prop_assert_eq!(tokens[0].kind(), K::Keyword);
            prop_assert_eq!(tokens[0].lexeme(), kw);
        }

        #[test]
        fn non_keyword_words_are_identifiers(word in "[a-z_][a-z0-9_]{0,10}") {
            let set = KeywordSet::default();
            prop_assume!(set.classify(&word) == K::Identifier);
            prop_assert_eq!(lex(&word), vec![(K::Identifier, word.clone())]);
        }

        #[test]
        fn fragments_scan_independently(
            picks in proptest::collection::vec(prop::sample::select(FRAGMENTS), 1..8)
        ) {
            let joined: String = picks.concat();
            let separately: Vec<Token> = picks.iter().flat_map(|f| scan(f)).collect();
            prop_assert_eq!(scan(&joined), separately);
        }
    }
}
