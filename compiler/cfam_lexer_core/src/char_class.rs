//! Character classification predicates.
//!
//! Pure, total queries over a single `char`. The scanner never inspects a
//! character class any other way, so swapping these predicates is the only
//! change needed to retarget the lexical grammar at a sibling language.

/// Separator punctuation: `( ) { } [ ] ; , .`
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.')
}

/// Operator symbols that may start or continue an operator run.
///
/// Note that `:` and `/` are members, so an operator run can be broken by
/// either of them.
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '=' | '>'
            | '<'
            | '!'
            | '~'
            | ':'
            | '?'
            | '&'
            | '|'
            | '+'
            | '-'
            | '*'
            | '/'
            | '^'
            | '%'
    )
}

#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Floating-point type suffix after a fractional part: `f F d D`.
#[inline]
pub fn is_float_suffix(c: char) -> bool {
    matches!(c, 'f' | 'F' | 'd' | 'D')
}

/// Integer size suffix: `l L`.
#[inline]
pub fn is_long_suffix(c: char) -> bool {
    matches!(c, 'l' | 'L')
}

/// Whitespace per the Unicode `White_Space` property.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Whitespace that ends a line comment or a char literal.
///
/// Everything in [`is_whitespace`] except space and horizontal tab.
#[inline]
pub fn is_line_break(c: char) -> bool {
    c != ' ' && c != '\t' && c.is_whitespace()
}

/// Identifier start: XID start characters, `_`, and currency symbols.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_currency_symbol(c) || unicode_ident::is_xid_start(c)
}

/// Identifier continuation: start set plus digits and combining marks.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_currency_symbol(c) || unicode_ident::is_xid_continue(c)
}

/// Character that may follow `\` in a char or string literal.
#[inline]
pub fn is_escape(c: char) -> bool {
    matches!(c, 'b' | 't' | 'n' | 'f' | 'r' | '\\' | '\'' | '"')
}

/// Unicode currency symbols (general category `Sc`).
fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '$' | '\u{A2}'..='\u{A5}'
            | '\u{58F}'
            | '\u{60B}'
            | '\u{7FE}'..='\u{7FF}'
            | '\u{9F2}'..='\u{9F3}'
            | '\u{9FB}'
            | '\u{AF1}'
            | '\u{BF9}'
            | '\u{E3F}'
            | '\u{17DB}'
            | '\u{20A0}'..='\u{20C0}'
            | '\u{A838}'
            | '\u{FDFC}'
            | '\u{FE69}'
            | '\u{FF04}'
            | '\u{FFE0}'..='\u{FFE1}'
            | '\u{FFE5}'..='\u{FFE6}'
    )
}
