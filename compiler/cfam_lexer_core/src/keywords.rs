//! Keyword and literal-word resolution.
//!
//! Identifier-shaped lexemes are classified in a fixed order:
//! 1. the null spelling → [`TokenKind::Null`]
//! 2. either boolean spelling → [`TokenKind::Boolean`]
//! 3. a reserved word → [`TokenKind::Keyword`]
//! 4. anything else → [`TokenKind::Identifier`]
//!
//! All comparisons are exact and case-sensitive.

use rustc_hash::FxHashSet;

use crate::TokenKind;

/// Reserved words of the default subject language.
///
/// The literal spellings `true`, `false` and `null` are not listed here;
/// they classify as [`TokenKind::Boolean`] / [`TokenKind::Null`].
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "abstract",
    "as",
    "base",
    "bool",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "checked",
    "class",
    "const",
    "continue",
    "decimal",
    "default",
    "delegate",
    "do",
    "double",
    "else",
    "enum",
    "event",
    "explicit",
    "extern",
    "finally",
    "fixed",
    "float",
    "for",
    "foreach",
    "goto",
    "if",
    "implicit",
    "in",
    "int",
    "interface",
    "internal",
    "is",
    "lock",
    "long",
    "namespace",
    "new",
    "object",
    "operator",
    "out",
    "override",
    "params",
    "private",
    "protected",
    "public",
    "readonly",
    "ref",
    "return",
    "sbyte",
    "sealed",
    "short",
    "sizeof",
    "stackalloc",
    "static",
    "string",
    "struct",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "uint",
    "ulong",
    "unchecked",
    "unsafe",
    "ushort",
    "using",
    "virtual",
    "void",
    "volatile",
    "while",
];

/// The configured word list plus the null and boolean literal spellings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: FxHashSet<String>,
    null_literal: String,
    boolean_literals: [String; 2],
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSet {
    /// Build a set from the given reserved words, with the default literal
    /// spellings `null`, `true` and `false`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: words.into_iter().map(Into::into).collect(),
            null_literal: "null".to_owned(),
            boolean_literals: ["true".to_owned(), "false".to_owned()],
        }
    }

    /// Parse a word list: whitespace-separated words, with `//` starting a
    /// comment that runs to the end of the line.
    pub fn parse_word_list(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.split_once("//").map_or(line, |(words, _)| words))
            .flat_map(str::split_whitespace);
        Self::from_words(words)
    }

    #[must_use]
    pub fn with_null_literal(mut self, spelling: impl Into<String>) -> Self {
        self.null_literal = spelling.into();
        self
    }

    #[must_use]
    pub fn with_boolean_literals(
        mut self,
        truthy: impl Into<String>,
        falsy: impl Into<String>,
    ) -> Self {
        self.boolean_literals = [truthy.into(), falsy.into()];
        self
    }

    /// Classify a finalized identifier-shaped lexeme.
    pub fn classify(&self, lexeme: &str) -> TokenKind {
        if lexeme == self.null_literal {
            TokenKind::Null
        } else if self.boolean_literals.iter().any(|b| b == lexeme) {
            TokenKind::Boolean
        } else if self.is_keyword(lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn null_literal(&self) -> &str {
        &self.null_literal
    }

    pub fn boolean_literals(&self) -> [&str; 2] {
        [&self.boolean_literals[0], &self.boolean_literals[1]]
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Reserved words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut words: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        words.sort_unstable();
        words.into_iter()
    }
}
