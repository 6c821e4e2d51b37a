//! Token categories and the token type itself.
//!
//! The category set is closed: nine variants with stable `u8` ids. Consumers
//! index into [`TOKEN_TYPE_NAMES`] by id, so both the discriminant values and
//! the name order are part of the public contract.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// The classification assigned to a span of source text.
///
/// `Class` is an intentionally overloaded bucket: it covers numeric literals
/// and identifiers whose first character is uppercase (or `_`), both styled
/// identically by consumers. This is a highlighting heuristic, not a type
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    /// Reserved word (`const`, `return`, ...).
    Keyword = 0,
    /// Plain identifier.
    Identifier = 1,
    /// Numeric literal or capitalized/underscore-leading identifier.
    Class = 2,
    /// Punctuation and operators.
    Sign = 3,
    /// String, template, and regex literal spans (shared bucket).
    Str = 4,
    /// Line or block comment.
    Comment = 5,
    /// Text content between JSX tags, line-trimmed and collapsed.
    JsxLiterals = 6,
    /// Whitespace run containing at least one newline.
    Break = 7,
    /// Inline whitespace run.
    Space = 8,
}

/// Stable id -> name mapping. Index order matches the `TokenType`
/// discriminants and must never be reordered.
pub const TOKEN_TYPE_NAMES: [&str; 9] = [
    "keyword",
    "identifier",
    "class",
    "sign",
    "string",
    "comment",
    "jsxliterals",
    "break",
    "space",
];

impl TokenType {
    /// The numeric id used on the wire.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// The stable category name.
    #[inline]
    pub fn name(self) -> &'static str {
        TOKEN_TYPE_NAMES[self as usize]
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A single `(category, text)` pair covering a contiguous span of source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classification of this span.
    pub ty: TokenType,
    /// The span text. Verbatim source except for the whitespace collapsing
    /// applied to `JsxLiterals`.
    pub text: String,
}

impl Token {
    /// Create a token from a category and its text.
    pub fn new(ty: TokenType, text: impl Into<String>) -> Self {
        Token {
            ty,
            text: text.into(),
        }
    }
}

// Tokens serialize as `[id, text]` pairs so a JS consumer can index
// `TokenTypes[token[0]]` directly.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.ty)?;
        tuple.serialize_element(&self.text)?;
        tuple.end()
    }
}

/// Closed reserved-word set. Used for category assignment only, never for
/// grammar validation.
const KEYWORDS: &[&str] = &[
    "abstract",
    "as",
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "from",
    "function",
    "get",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "of",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "set",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "undefined",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

static KEYWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Returns `true` when `text` is exactly a reserved word.
#[inline]
pub fn text_is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

/// Returns `true` for categories that participate in ambiguity resolution.
///
/// Whitespace (both kinds) and comments are transparent: the slash and JSX
/// disambiguators look through them at the last remembered token.
#[inline]
pub fn token_is_significant(ty: TokenType) -> bool {
    !matches!(ty, TokenType::Space | TokenType::Break | TokenType::Comment)
}
