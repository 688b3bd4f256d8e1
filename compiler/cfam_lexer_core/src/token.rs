use crate::TokenKind;

/// A classified lexeme.
///
/// Built exactly once, when the scanner proves a token boundary, and never
/// mutated afterwards. The lexeme is the exact input text, control characters
/// included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}
