//! Character-at-a-time scanning engine.
//!
//! The scanner owns an accumulation buffer and a current [`ScanState`]. Each
//! fed character is appended to the buffer *before* the state examines it, and
//! the state then does one of:
//!
//! - keep accumulating (possibly moving to another state),
//! - [`emit`](Scanner::emit) the whole buffer and return to `Initial`,
//! - [`emit_previous`](Scanner::emit_previous): emit everything except the
//!   character just fed, then re-dispatch that character through `Initial`.
//!
//! The last case is the one-character lookahead: a multi-character token is
//! only known to have ended when the next character cannot extend it, and
//! that character must start the next token rather than be lost.
//!
//! # End of input
//!
//! Tokens that are still open when input ends are closed by [`Scanner::finish`]
//! as if a terminator followed. Constructs that need an explicit closing
//! delimiter (`'`, `"`, `*/`) become a single `Error` token, so the emitted
//! lexemes always concatenate back to the input.
//!
//! # Escapes
//!
//! A `\` inside a char or string literal always consumes the next character
//! as an escape, so `"a\\"` is closed by its last quote. Scanners that only
//! look one character back before a quote would treat that quote as escaped
//! and keep the string open; this one does not.

use std::mem;
use std::vec::Drain;

use crate::char_class::{
    is_binary_digit, is_digit, is_escape, is_float_suffix, is_hex_digit, is_ident_continue,
    is_ident_start, is_line_break, is_long_suffix, is_operator, is_separator, is_whitespace,
};
use crate::{KeywordSet, ScanState, Token, TokenKind};

/// Explicit state-machine scanner.
///
/// One instance scans one stream; create a new scanner per input.
#[derive(Debug)]
pub struct Scanner<'k> {
    keywords: &'k KeywordSet,
    state: ScanState,
    buffer: String,
    tokens: Vec<Token>,
}

impl<'k> Scanner<'k> {
    pub fn new(keywords: &'k KeywordSet) -> Self {
        Self {
            keywords,
            state: ScanState::Initial,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Current lexical context.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Characters accumulated toward the next token.
    #[inline]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Tokens emitted so far and not yet drained.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take the tokens emitted so far, leaving the scan in progress.
    ///
    /// Lets a consumer of an unbounded stream process tokens as soon as their
    /// boundary is known.
    pub fn drain(&mut self) -> Drain<'_, Token> {
        self.tokens.drain(..)
    }

    /// Feed one character.
    pub fn feed(&mut self, c: char) {
        self.buffer.push(c);
        match self.state {
            ScanState::Initial => self.initial(c),
            ScanState::Error => self.emit_previous(TokenKind::Error, c),
            ScanState::Whitespace => self.whitespace(c),
            ScanState::Slash => self.slash(c),
            ScanState::Identifier => self.identifier(c),
            ScanState::ZeroFirst => self.zero_first(c),
            ScanState::NonZeroDigit => self.non_zero_digit(c),
            ScanState::CharLiteral => self.char_literal(c),
            ScanState::PossibleEscapeSequenceChar => {
                self.escape(c, ScanState::ExpectEndOfChar);
            }
            ScanState::ExpectEndOfChar => self.expect_end_of_char(c),
            ScanState::StringLiteral => self.string_literal(c),
            ScanState::PossibleEscapeSequence => self.escape(c, ScanState::StringLiteral),
            ScanState::Dot => self.dot(c),
            ScanState::DoubleDot => self.double_dot(c),
            ScanState::Greater => self.greater(c),
            ScanState::DoubleGreater => self.double_greater(c),
            ScanState::Less => self.less(c),
            ScanState::Ampersand => self.doubled_or_assign(c, '&'),
            ScanState::Pipe => self.doubled_or_assign(c, '|'),
            ScanState::Colon => self.colon(c),
            ScanState::SingleOperator => self.single_operator(c),
            ScanState::Plus => self.increment(c, '+'),
            ScanState::Minus => self.increment(c, '-'),
            ScanState::OperatorAndEqual => self.end_operator(c),
            ScanState::SingleLineComment => self.single_line_comment(c),
            ScanState::MultiLineComment => self.multi_line_comment(c),
            ScanState::StarInMultiLineComment => self.star_in_multi_line_comment(c),
            ScanState::BinaryDigits => self.radix_digits(c, is_binary_digit),
            ScanState::HexDigits => self.radix_digits(c, is_hex_digit),
            ScanState::IntegerSuffix => self.end_number(TokenKind::Int, c),
            ScanState::FloatSuffix => self.end_number(TokenKind::Float, c),
            ScanState::PointInDigit => self.point_in_digit(c),
        }
    }

    /// Close whatever token is still open and return the remaining tokens.
    pub fn finish(mut self) -> Vec<Token> {
        self.flush();
        self.tokens
    }

    fn flush(&mut self) {
        let Some(kind) = self.state.pending_kind() else {
            return;
        };
        match self.state {
            ScanState::Identifier => {
                let kind = self.keywords.classify(&self.buffer);
                self.emit(kind);
            }
            ScanState::DoubleDot => {
                self.emit_first_dot();
                self.emit(TokenKind::Separator);
            }
            state => {
                if state.is_unterminated_at_eof() {
                    tracing::debug!(
                        ?state,
                        lexeme = %self.buffer.escape_debug(),
                        "input ended inside an unterminated construct"
                    );
                }
                self.emit(kind);
            }
        }
    }

    // ─── Emission ──────────────────────────────────────────────────

    /// Emit the whole buffer as one token and return to `Initial`.
    fn emit(&mut self, kind: TokenKind) {
        let lexeme = mem::take(&mut self.buffer);
        if kind == TokenKind::Error {
            tracing::trace!(lexeme = %lexeme.escape_debug(), "malformed run");
        }
        self.tokens.push(Token::new(kind, lexeme));
        self.state = ScanState::Initial;
    }

    /// Previous-data emission: emit all but the trailing `c`, then start the
    /// next token with `c`.
    fn emit_previous(&mut self, kind: TokenKind, c: char) {
        let last = self.buffer.pop();
        debug_assert_eq!(last, Some(c));
        self.emit(kind);
        self.redispatch(c);
    }

    fn redispatch(&mut self, c: char) {
        self.buffer.push(c);
        self.state = ScanState::Initial;
        self.initial(c);
    }

    /// Split a leading `.` off the buffer and emit it as a separator.
    fn emit_first_dot(&mut self) {
        let rest = self.buffer.split_off(1);
        self.emit(TokenKind::Separator);
        self.buffer = rest;
    }

    /// An operator run that no compound form extends: a further operator
    /// symbol makes the run malformed, anything else ends it.
    fn end_operator(&mut self, c: char) {
        if is_operator(c) {
            self.state = ScanState::Error;
        } else {
            self.emit_previous(TokenKind::Operator, c);
        }
    }

    /// A complete number: identifier characters may not be glued onto it.
    fn end_number(&mut self, kind: TokenKind, c: char) {
        if is_ident_continue(c) {
            self.state = ScanState::Error;
        } else {
            self.emit_previous(kind, c);
        }
    }

    // ─── Dispatch ──────────────────────────────────────────────────

    fn initial(&mut self, c: char) {
        self.state = match c {
            '/' => ScanState::Slash,
            c if is_whitespace(c) => ScanState::Whitespace,
            c if is_ident_start(c) => ScanState::Identifier,
            '0' => ScanState::ZeroFirst,
            c if is_digit(c) => ScanState::NonZeroDigit,
            '\'' => ScanState::CharLiteral,
            '"' => ScanState::StringLiteral,
            '.' => ScanState::Dot,
            c if is_separator(c) => {
                self.emit(TokenKind::Separator);
                return;
            }
            '>' => ScanState::Greater,
            '<' => ScanState::Less,
            '&' => ScanState::Ampersand,
            '^' | '!' | '*' | '=' | '%' => ScanState::SingleOperator,
            ':' => ScanState::Colon,
            '+' => ScanState::Plus,
            '-' => ScanState::Minus,
            '?' | '~' => {
                self.emit(TokenKind::Operator);
                return;
            }
            '|' => ScanState::Pipe,
            // `#` and anything unrecognised
            _ => ScanState::Error,
        };
    }

    fn whitespace(&mut self, c: char) {
        if !is_whitespace(c) {
            self.emit_previous(TokenKind::Whitespace, c);
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, c: char) {
        if is_ident_continue(c) {
            return;
        }
        if c != '#' && (is_whitespace(c) || is_operator(c) || is_separator(c)) {
            let word = &self.buffer[..self.buffer.len() - c.len_utf8()];
            let kind = self.keywords.classify(word);
            self.emit_previous(kind, c);
        } else {
            self.state = ScanState::Error;
        }
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn zero_first(&mut self, c: char) {
        match c {
            'b' | 'B' => self.state = ScanState::BinaryDigits,
            'x' | 'X' => self.state = ScanState::HexDigits,
            '.' => self.state = ScanState::PointInDigit,
            c if is_long_suffix(c) => self.state = ScanState::IntegerSuffix,
            // a further digit (no octal) or identifier character is malformed
            c => self.end_number(TokenKind::Int, c),
        }
    }

    fn non_zero_digit(&mut self, c: char) {
        match c {
            c if is_digit(c) => {}
            '.' => self.state = ScanState::PointInDigit,
            c if is_long_suffix(c) => self.state = ScanState::IntegerSuffix,
            'f' | 'F' => self.state = ScanState::FloatSuffix,
            c => self.end_number(TokenKind::Int, c),
        }
    }

    /// Digits after `0b` / `0x`. `_` separators are accepted anywhere, and a
    /// bare prefix (`0x` followed by a terminator) is still an `Int`.
    fn radix_digits(&mut self, c: char, is_radix_digit: fn(char) -> bool) {
        match c {
            c if is_radix_digit(c) || c == '_' => {}
            c if is_long_suffix(c) => self.state = ScanState::IntegerSuffix,
            'f' | 'F' => self.state = ScanState::FloatSuffix,
            c => self.end_number(TokenKind::Int, c),
        }
    }

    fn point_in_digit(&mut self, c: char) {
        match c {
            c if is_digit(c) => {}
            c if is_float_suffix(c) => self.state = ScanState::FloatSuffix,
            '.' => self.state = ScanState::Error,
            c => self.end_number(TokenKind::Float, c),
        }
    }

    // ─── Char & String Literals ────────────────────────────────────

    fn char_literal(&mut self, c: char) {
        if c == '\\' {
            self.state = ScanState::PossibleEscapeSequenceChar;
        } else if is_line_break(c) {
            self.emit_previous(TokenKind::Error, c);
        } else {
            self.state = ScanState::ExpectEndOfChar;
        }
    }

    /// Character after `\`; `resume` is the state a valid escape returns to.
    fn escape(&mut self, c: char, resume: ScanState) {
        self.state = if is_escape(c) { resume } else { ScanState::Error };
    }

    fn expect_end_of_char(&mut self, c: char) {
        if c == '\'' {
            self.emit(TokenKind::Char);
        } else {
            self.state = ScanState::Error;
        }
    }

    fn string_literal(&mut self, c: char) {
        match c {
            '"' => self.emit(TokenKind::String),
            '\\' => self.state = ScanState::PossibleEscapeSequence,
            _ => {}
        }
    }

    // ─── Dots ──────────────────────────────────────────────────────

    fn dot(&mut self, c: char) {
        match c {
            c if is_digit(c) => self.state = ScanState::PointInDigit,
            '.' => self.state = ScanState::DoubleDot,
            c => self.emit_previous(TokenKind::Separator, c),
        }
    }

    /// `..` seen: `...` is one separator, otherwise the first `.` stands
    /// alone and the second is rescanned together with `c`.
    fn double_dot(&mut self, c: char) {
        if c == '.' {
            self.emit(TokenKind::Separator);
        } else {
            self.emit_first_dot();
            self.state = ScanState::Dot;
            self.dot(c);
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn slash(&mut self, c: char) {
        match c {
            '/' => self.state = ScanState::SingleLineComment,
            '*' => self.state = ScanState::MultiLineComment,
            '=' => self.state = ScanState::OperatorAndEqual,
            c => self.end_operator(c),
        }
    }

    fn greater(&mut self, c: char) {
        match c {
            '=' => self.emit(TokenKind::Operator),
            '>' => self.state = ScanState::DoubleGreater,
            c => self.end_operator(c),
        }
    }

    fn double_greater(&mut self, c: char) {
        match c {
            // `>>>`, which may still take a trailing `=`
            '>' => self.state = ScanState::SingleOperator,
            '=' => self.state = ScanState::OperatorAndEqual,
            c => self.end_operator(c),
        }
    }

    fn less(&mut self, c: char) {
        match c {
            '=' | '>' => self.emit(TokenKind::Operator),
            // `<<`, which may still take a trailing `=`
            '<' => self.state = ScanState::SingleOperator,
            c => self.end_operator(c),
        }
    }

    /// `&` / `|`: doubled form is complete, `=` form may not be extended.
    fn doubled_or_assign(&mut self, c: char, symbol: char) {
        match c {
            c if c == symbol => self.emit(TokenKind::Operator),
            '=' => self.state = ScanState::OperatorAndEqual,
            c => self.end_operator(c),
        }
    }

    /// `+` / `-`: doubled form may still take `=`.
    fn increment(&mut self, c: char, symbol: char) {
        match c {
            c if c == symbol => self.state = ScanState::SingleOperator,
            '=' => self.state = ScanState::OperatorAndEqual,
            c => self.end_operator(c),
        }
    }

    fn colon(&mut self, c: char) {
        if c == ':' {
            self.emit(TokenKind::Separator);
        } else {
            self.end_operator(c);
        }
    }

    fn single_operator(&mut self, c: char) {
        if c == '=' {
            self.state = ScanState::OperatorAndEqual;
        } else {
            self.end_operator(c);
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn single_line_comment(&mut self, c: char) {
        if is_line_break(c) {
            self.emit_previous(TokenKind::Comment, c);
        }
    }

    fn multi_line_comment(&mut self, c: char) {
        if c == '*' {
            self.state = ScanState::StarInMultiLineComment;
        }
    }

    fn star_in_multi_line_comment(&mut self, c: char) {
        match c {
            '/' => self.emit(TokenKind::Comment),
            '*' => {}
            _ => self.state = ScanState::MultiLineComment,
        }
    }
}

/// Scan `source` with the default keyword set.
pub fn scan(source: &str) -> Vec<Token> {
    scan_with(source, &KeywordSet::default())
}

/// Scan `source` with the given keyword set.
pub fn scan_with(source: &str, keywords: &KeywordSet) -> Vec<Token> {
    scan_chars(source.chars(), keywords)
}

/// Scan a character stream to completion.
pub fn scan_chars<I>(chars: I, keywords: &KeywordSet) -> Vec<Token>
where
    I: IntoIterator<Item = char>,
{
    let mut scanner = Scanner::new(keywords);
    for c in chars {
        scanner.feed(c);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests;
