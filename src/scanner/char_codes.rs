//! Character classification utilities for the scanner.
//!
//! All predicates operate on `char` so that identifiers and string contents
//! handle full Unicode, not just ASCII. Byte-level fast paths live in the
//! scanner itself (see the memchr-based comment scans).

/// Returns `true` for characters that may start an identifier.
///
/// JavaScript allows any Unicode letter plus `_` and `$` in the leading
/// position.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

/// Returns `true` for characters that may continue an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphanumeric()
}

/// Returns `true` for line terminators.
///
/// Covers `\n`, `\r`, and the Unicode LS/PS terminators, matching the
/// ECMAScript *LineTerminator* production.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for any whitespace character, including line terminators.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Returns `true` for the three string delimiter characters.
#[inline]
pub fn is_quote(ch: char) -> bool {
    matches!(ch, '\'' | '"' | '`')
}

/// Returns `true` for characters allowed in a regex flag run (`/re/gi`).
#[inline]
pub fn is_regex_flag(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns `true` when `ch` can follow `<` to open a JSX tag: a tag name
/// letter, an immediate `>` (fragment), or `/` (closing tag).
#[inline]
pub fn is_jsx_tag_start(ch: char) -> bool {
    ch == '>' || ch == '/' || ch.is_alphabetic()
}
