//! Character-driven lexical scanner for a C-family language.
//!
//! The scanner is a single explicit state machine. It is fed one `char` at a
//! time, keeps the not-yet-emitted prefix of the input in an accumulation
//! buffer, and emits classified [`Token`]s as soon as a boundary is proven.
//!
//! # Architecture
//!
//! ```text
//! chars ──► Scanner (state + buffer)
//!              │  uses char_class predicates
//!              │  uses KeywordSet::classify
//!              ▼
//!           Vec<Token { kind, lexeme }>
//! ```
//!
//! Malformed input never fails the scan: each malformed run becomes a single
//! [`TokenKind::Error`] token and scanning resumes on the character that
//! proved the run malformed.

pub mod char_class;
mod keywords;
mod scanner;
mod state;
mod tag;
mod token;

pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use scanner::{scan, scan_chars, scan_with, Scanner};
pub use state::ScanState;
pub use tag::TokenKind;
pub use token::Token;
