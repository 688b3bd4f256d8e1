//! Token kinds.

use std::fmt;

/// Category assigned to a lexeme.
///
/// `Error` covers every kind of lexical non-conformance; the lexeme itself is
/// the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Comment,
    Whitespace,
    Identifier,
    Operator,
    Separator,
    Int,
    Float,
    Char,
    String,
    Boolean,
    Null,
    Keyword,
    Error,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Char,
        TokenKind::String,
        TokenKind::Boolean,
        TokenKind::Null,
        TokenKind::Keyword,
        TokenKind::Error,
    ];

    /// Upper-case name used when printing token streams.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Error => "ERROR",
        }
    }

    /// Comments and whitespace carry no meaning for a parser.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
