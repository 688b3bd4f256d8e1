use crate::TokenKind;

/// Lexical context of the scanner.
///
/// Exactly one state is active at a time. Every state except `Initial`
/// owns a non-empty accumulation buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
    /// Between tokens; the buffer is empty.
    #[default]
    Initial,
    /// A malformed run; ends at the next character.
    Error,
    Whitespace,
    /// `/` seen.
    Slash,
    Identifier,
    /// Number starting with `0`.
    ZeroFirst,
    NonZeroDigit,
    /// After the opening `'`.
    CharLiteral,
    /// After `'\`.
    PossibleEscapeSequenceChar,
    /// Char literal content seen; only the closing `'` may follow.
    ExpectEndOfChar,
    StringLiteral,
    /// After `\` inside a string literal.
    PossibleEscapeSequence,
    Dot,
    DoubleDot,
    Greater,
    DoubleGreater,
    Less,
    Ampersand,
    Pipe,
    Colon,
    /// One of `^ ! * = %`, or a completed `++`, `--`, `<<`, `>>>`: only `=`
    /// may extend it.
    SingleOperator,
    Plus,
    Minus,
    /// An operator ending in `=`; nothing may extend it.
    OperatorAndEqual,
    SingleLineComment,
    MultiLineComment,
    StarInMultiLineComment,
    BinaryDigits,
    HexDigits,
    IntegerSuffix,
    FloatSuffix,
    /// Fractional part after `.`.
    PointInDigit,
}

impl ScanState {
    /// Kind of the token the buffer would form if the input ended now.
    ///
    /// `Identifier` is resolved against the keyword set by the caller; states
    /// that still need a closing delimiter report `Error`. `Initial` has no
    /// pending token.
    pub fn pending_kind(self) -> Option<TokenKind> {
        let kind = match self {
            ScanState::Initial => return None,
            ScanState::Whitespace => TokenKind::Whitespace,
            ScanState::Identifier => TokenKind::Identifier,
            ScanState::ZeroFirst
            | ScanState::NonZeroDigit
            | ScanState::BinaryDigits
            | ScanState::HexDigits
            | ScanState::IntegerSuffix => TokenKind::Int,
            ScanState::PointInDigit | ScanState::FloatSuffix => TokenKind::Float,
            ScanState::Slash
            | ScanState::Greater
            | ScanState::DoubleGreater
            | ScanState::Less
            | ScanState::Ampersand
            | ScanState::Pipe
            | ScanState::Colon
            | ScanState::SingleOperator
            | ScanState::Plus
            | ScanState::Minus
            | ScanState::OperatorAndEqual => TokenKind::Operator,
            ScanState::Dot | ScanState::DoubleDot => TokenKind::Separator,
            ScanState::SingleLineComment => TokenKind::Comment,
            ScanState::Error
            | ScanState::CharLiteral
            | ScanState::PossibleEscapeSequenceChar
            | ScanState::ExpectEndOfChar
            | ScanState::StringLiteral
            | ScanState::PossibleEscapeSequence
            | ScanState::MultiLineComment
            | ScanState::StarInMultiLineComment => TokenKind::Error,
        };
        Some(kind)
    }

    /// States that only close on an explicit delimiter (`'`, `"`, `*/`).
    pub fn is_unterminated_at_eof(self) -> bool {
        matches!(
            self,
            ScanState::CharLiteral
                | ScanState::PossibleEscapeSequenceChar
                | ScanState::ExpectEndOfChar
                | ScanState::StringLiteral
                | ScanState::PossibleEscapeSequence
                | ScanState::MultiLineComment
                | ScanState::StarInMultiLineComment
        )
    }
}
