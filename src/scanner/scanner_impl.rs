//! Scanner state machine: one rule per lexical construct, driven by the
//! mode stack.
//!
//! The scanner makes a single pass over the source. At each step the current
//! [`Mode`] selects a scanning rule; the rule consumes one maximal span,
//! emits one or more tokens, and updates the context. Ambiguities (`/` as
//! regex or division, `<` as JSX or relational) are resolved from the
//! previous significant token only, with no lookbehind into a parse tree and no
//! backtracking.
//!
//! Malformed input never fails: unterminated literals run to end of input
//! and the mode stack unwinds silently.

use memchr::{memchr, memmem};
use tracing::trace;

use super::char_codes::{
    is_identifier_part, is_identifier_start, is_jsx_tag_start, is_line_break, is_quote,
    is_regex_flag, is_whitespace,
};
use super::context::{ContextTracker, Mode};
use super::cursor::Cursor;
use super::token::{Token, TokenType, text_is_keyword};

/// Tokenize JavaScript/JSX source into an ordered `(category, text)`
/// sequence.
///
/// The concatenation of all token texts reproduces the input exactly, with
/// one documented exception: JSX children text is line-trimmed and its
/// interior whitespace collapsed.
pub fn tokenize(source: &str) -> Vec<Token> {
    ScannerState::new(source).scan_all()
}

/// Single-use scanner over one source string.
///
/// All state is call-local; nothing persists across invocations.
pub struct ScannerState<'src> {
    cursor: Cursor<'src>,
    context: ContextTracker,
    tokens: Vec<Token>,
}

impl<'src> ScannerState<'src> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        ScannerState {
            cursor: Cursor::new(source),
            context: ContextTracker::new(),
            tokens: Vec::new(),
        }
    }

    /// Run the scanner to end of input and return the token sequence.
    pub fn scan_all(mut self) -> Vec<Token> {
        trace!(len = self.cursor.source().len(), "tokenize");
        while !self.cursor.is_eof() {
            match self.context.current() {
                Mode::Normal { .. } => self.scan_normal(),
                Mode::JsxTag { .. } => self.scan_jsx_tag(),
                Mode::JsxChildren => self.scan_jsx_children(),
                Mode::Template => self.scan_template(),
            }
        }
        self.tokens
    }

    fn emit(&mut self, ty: TokenType, text: impl Into<String>) {
        let token = Token::new(ty, text);
        self.context.remember(&token);
        self.tokens.push(token);
    }

    // ── Plain code ──────────────────────────────────────────────────────

    fn scan_normal(&mut self) {
        let Some(ch) = self.cursor.peek() else {
            return;
        };
        match ch {
            c if is_whitespace(c) => self.scan_whitespace_run(),
            '/' => self.scan_slash(),
            '\'' | '"' => self.scan_string(ch),
            '`' => {
                self.cursor.advance();
                self.emit(TokenType::Str, "`");
                self.context.enter(Mode::Template);
            }
            '<' => self.scan_less_than(),
            '{' => {
                self.cursor.advance();
                if let Some(Mode::Normal { brace_depth }) = self.context.current_mut() {
                    *brace_depth += 1;
                }
                self.emit(TokenType::Sign, "{");
            }
            '}' => self.scan_close_brace(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_word(),
            c => {
                self.cursor.advance();
                self.emit(TokenType::Sign, c.to_string());
            }
        }
    }

    /// `}` either closes a block brace opened in this context or pops the
    /// context itself (template interpolation / JSX expression). Only the
    /// popping case counts as closing an expression for the division rule.
    /// A stray close brace at the base mode is a plain sign.
    fn scan_close_brace(&mut self) {
        self.cursor.advance();
        let closes_block = matches!(
            self.context.current(),
            Mode::Normal { brace_depth } if brace_depth > 0
        );
        let mut popped = false;
        if closes_block {
            if let Some(Mode::Normal { brace_depth }) = self.context.current_mut() {
                *brace_depth -= 1;
            }
        } else if self.context.depth() > 1 {
            self.context.leave();
            popped = true;
        }
        self.emit(TokenType::Sign, "}");
        if popped {
            self.context.mark_expression_close();
        }
    }

    fn scan_whitespace_run(&mut self) {
        let start = self.cursor.pos();
        let mut has_newline = false;
        while let Some(c) = self.cursor.peek() {
            if !is_whitespace(c) {
                break;
            }
            if is_line_break(c) {
                has_newline = true;
            }
            self.cursor.advance();
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        let ty = if has_newline {
            TokenType::Break
        } else {
            TokenType::Space
        };
        self.emit(ty, text);
    }

    // ── Comments, regex, division ───────────────────────────────────────

    fn scan_slash(&mut self) {
        match self.cursor.peek_nth(1) {
            Some('/') => self.scan_line_comment(),
            Some('*') => self.scan_block_comment(),
            _ => self.scan_regex_or_division(),
        }
    }

    /// `//` (any run of leading slashes) through end of line, newline
    /// excluded.
    fn scan_line_comment(&mut self) {
        let rest = self.cursor.rest();
        let bytes = rest.as_bytes();
        let mut len = memchr(b'\n', bytes).unwrap_or(bytes.len());
        if len > 0 && bytes[len - 1] == b'\r' {
            len -= 1;
        }
        self.cursor.advance_bytes(len);
        self.emit(TokenType::Comment, &rest[..len]);
    }

    /// `/*` through the first `*/` inclusive, or end of input. Not nested.
    fn scan_block_comment(&mut self) {
        let rest = self.cursor.rest();
        let len = match memmem::find(rest[2..].as_bytes(), b"*/") {
            Some(i) => i + 4,
            None => rest.len(),
        };
        self.cursor.advance_bytes(len);
        self.emit(TokenType::Comment, &rest[..len]);
    }

    fn scan_regex_or_division(&mut self) {
        if self.slash_is_division() {
            self.cursor.advance();
            self.emit(TokenType::Sign, "/");
            return;
        }
        let rest = self.cursor.rest();
        match regex_literal_len(rest) {
            Some(len) => {
                self.cursor.advance_bytes(len);
                self.emit(TokenType::Str, &rest[..len]);
            }
            // A newline inside the candidate body: regex literals do not
            // span lines, so the slash was division after all.
            None => {
                self.cursor.advance();
                self.emit(TokenType::Sign, "/");
            }
        }
    }

    /// `/` is division when the previous significant token could end an
    /// expression: an identifier, a `class` token, a string, `)`/`]`, or a
    /// `}` that closed an interpolation or JSX expression.
    fn slash_is_division(&self) -> bool {
        match self.context.previous() {
            None => false,
            Some(prev) => match prev.ty {
                TokenType::Identifier | TokenType::Class | TokenType::Str => true,
                TokenType::Sign => {
                    matches!(prev.text.as_str(), ")" | "]")
                        || (prev.text == "}" && prev.closed_expression)
                }
                _ => false,
            },
        }
    }

    // ── Strings ─────────────────────────────────────────────────────────

    /// Quoted string: the delimiters and every embedded quote character of
    /// another kind are individual `string` tokens; the runs between them
    /// are `string` tokens too. Escapes stay inside the current run.
    fn scan_string(&mut self, quote: char) {
        self.cursor.advance();
        self.emit(TokenType::Str, quote.to_string());
        let mut run_start = self.cursor.pos();
        loop {
            let Some(c) = self.cursor.peek() else {
                // Unterminated: emit what was scanned.
                self.flush_literal_run(run_start);
                return;
            };
            if c == '\\' {
                self.cursor.advance();
                self.cursor.advance();
            } else if c == quote {
                self.flush_literal_run(run_start);
                self.cursor.advance();
                self.emit(TokenType::Str, quote.to_string());
                return;
            } else if is_quote(c) {
                self.flush_literal_run(run_start);
                self.cursor.advance();
                self.emit(TokenType::Str, c.to_string());
                run_start = self.cursor.pos();
            } else {
                self.cursor.advance();
            }
        }
    }

    fn flush_literal_run(&mut self, start: usize) {
        if self.cursor.pos() > start {
            let text = self.cursor.slice(start, self.cursor.pos());
            self.emit(TokenType::Str, text);
        }
    }

    // ── Template literals ───────────────────────────────────────────────

    /// One step inside a template literal: a literal run up to the closing
    /// back-tick, an interpolation opener, or an embedded quote character.
    fn scan_template(&mut self) {
        let mut run_start = self.cursor.pos();
        loop {
            let Some(c) = self.cursor.peek() else {
                self.flush_literal_run(run_start);
                self.context.leave();
                return;
            };
            match c {
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                '`' => {
                    self.flush_literal_run(run_start);
                    self.cursor.advance();
                    self.emit(TokenType::Str, "`");
                    self.context.leave();
                    return;
                }
                '$' if self.cursor.peek_nth(1) == Some('{') => {
                    self.flush_literal_run(run_start);
                    self.cursor.advance_bytes(2);
                    self.emit(TokenType::Sign, "${");
                    self.context.enter(Mode::Normal { brace_depth: 0 });
                    return;
                }
                '\'' | '"' => {
                    self.flush_literal_run(run_start);
                    self.cursor.advance();
                    self.emit(TokenType::Str, c.to_string());
                    run_start = self.cursor.pos();
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    // ── Words and numbers ───────────────────────────────────────────────

    fn scan_word(&mut self) {
        let start = self.cursor.pos();
        while matches!(self.cursor.peek(), Some(c) if is_identifier_part(c)) {
            self.cursor.advance();
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        let ty = self.classify_word(text);
        self.emit(ty, text);
    }

    /// keyword -> class (uppercase or `_` first character) -> identifier.
    /// A word directly after `.` is a member name, never a keyword.
    fn classify_word(&self, text: &str) -> TokenType {
        let after_dot = self
            .context
            .previous()
            .is_some_and(|p| p.ty == TokenType::Sign && p.text == ".");
        if !after_dot && text_is_keyword(text) {
            return TokenType::Keyword;
        }
        match text.chars().next() {
            Some(c) if c.is_uppercase() || c == '_' => TokenType::Class,
            _ => TokenType::Identifier,
        }
    }

    /// Digits with at most one interior decimal point. Numbers share the
    /// `class` bucket with capitalized identifiers.
    fn scan_number(&mut self) {
        let start = self.cursor.pos();
        let mut seen_dot = false;
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                self.cursor.advance();
            } else if c == '.'
                && !seen_dot
                && matches!(self.cursor.peek_nth(1), Some(d) if d.is_ascii_digit())
            {
                seen_dot = true;
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        self.emit(TokenType::Class, text);
    }

    // ── JSX ─────────────────────────────────────────────────────────────

    /// `<` opens a JSX tag only in an expression-start position and only
    /// when a tag could actually follow; otherwise it is a relational sign.
    fn scan_less_than(&mut self) {
        let next = self.cursor.peek_nth(1);
        let can_open = matches!(next, Some(c) if is_jsx_tag_start(c));
        if can_open && self.less_than_starts_jsx() {
            if next == Some('/') {
                self.cursor.advance_bytes(2);
                self.emit(TokenType::Sign, "</");
                self.context.enter(Mode::JsxTag {
                    closing: true,
                    named: false,
                });
            } else {
                self.cursor.advance();
                self.emit(TokenType::Sign, "<");
                self.context.enter(Mode::JsxTag {
                    closing: false,
                    named: false,
                });
            }
        } else {
            self.cursor.advance();
            self.emit(TokenType::Sign, "<");
        }
    }

    fn less_than_starts_jsx(&self) -> bool {
        match self.context.previous() {
            None => true,
            Some(prev) => match prev.ty {
                TokenType::Keyword => true,
                // After a value-ending bracket `<` compares; after any
                // other sign an expression is expected.
                TokenType::Sign => !matches!(prev.text.as_str(), ")" | "]"),
                _ => false,
            },
        }
    }

    fn scan_jsx_tag(&mut self) {
        let Some(ch) = self.cursor.peek() else {
            return;
        };
        match ch {
            c if is_whitespace(c) => self.scan_whitespace_run(),
            '\'' | '"' => self.scan_string(ch),
            '`' => {
                self.cursor.advance();
                self.emit(TokenType::Str, "`");
                self.context.enter(Mode::Template);
            }
            '{' => {
                self.cursor.advance();
                self.emit(TokenType::Sign, "{");
                self.context.enter(Mode::Normal { brace_depth: 0 });
            }
            '>' => self.finish_jsx_tag(),
            '/' if self.cursor.peek_nth(1) == Some('>') => {
                self.cursor.advance_bytes(2);
                self.emit(TokenType::Sign, "/>");
                self.context.leave();
            }
            c if is_identifier_start(c) => {
                if let Some(Mode::JsxTag { named, .. }) = self.context.current_mut() {
                    *named = true;
                }
                let start = self.cursor.pos();
                while matches!(self.cursor.peek(), Some(c) if is_identifier_part(c)) {
                    self.cursor.advance();
                }
                let text = self.cursor.slice(start, self.cursor.pos());
                self.emit(TokenType::Identifier, text);
            }
            c => {
                self.cursor.advance();
                self.emit(TokenType::Sign, c.to_string());
            }
        }
    }

    /// `>` ends the tag. A named opening tag transitions into its children
    /// context; a fragment (`<>`) pops straight back; a closing tag also
    /// pops the children context it terminates.
    fn finish_jsx_tag(&mut self) {
        self.cursor.advance();
        let (closing, named) = match self.context.current() {
            Mode::JsxTag { closing, named } => (closing, named),
            _ => (false, false),
        };
        self.emit(TokenType::Sign, ">");
        self.context.leave();
        if closing {
            if matches!(self.context.current(), Mode::JsxChildren) {
                self.context.leave();
            }
        } else if named {
            self.context.enter(Mode::JsxChildren);
        }
    }

    /// One children-text run, up to the next `<`, `{`, or end of input,
    /// then the structural token that terminated it.
    fn scan_jsx_children(&mut self) {
        let start = self.cursor.pos();
        loop {
            match self.cursor.peek() {
                None | Some('<') | Some('{') => break,
                Some('\\') if matches!(self.cursor.peek_nth(1), Some('<' | '{')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        let run = self.cursor.slice(start, self.cursor.pos());
        let at_closing_tag =
            self.cursor.peek() == Some('<') && self.cursor.peek_nth(1) == Some('/');
        self.emit_jsx_text(run, at_closing_tag);
        match self.cursor.peek() {
            Some('<') if at_closing_tag => {
                self.cursor.advance_bytes(2);
                self.emit(TokenType::Sign, "</");
                self.context.enter(Mode::JsxTag {
                    closing: true,
                    named: false,
                });
            }
            Some('<') => {
                self.cursor.advance();
                self.emit(TokenType::Sign, "<");
                self.context.enter(Mode::JsxTag {
                    closing: false,
                    named: false,
                });
            }
            Some('{') => {
                self.cursor.advance();
                self.emit(TokenType::Sign, "{");
                self.context.enter(Mode::Normal { brace_depth: 0 });
            }
            _ => {}
        }
    }

    /// Children text is emitted per source line: each piece is trimmed and
    /// its interior whitespace collapsed, and empty pieces are kept as
    /// placeholders so sibling structure survives. A run that is pure
    /// whitespace in front of the closing tag is a structural gap, not
    /// content, and degrades to a `break`/`space` token.
    fn emit_jsx_text(&mut self, run: &str, before_closing_tag: bool) {
        if run.is_empty() {
            return;
        }
        if before_closing_tag && run.chars().all(is_whitespace) {
            let ty = if run.chars().any(is_line_break) {
                TokenType::Break
            } else {
                TokenType::Space
            };
            self.emit(ty, run);
            return;
        }
        for piece in run.split('\n') {
            self.emit(TokenType::JsxLiterals, collapse_jsx_text(piece));
        }
    }
}

/// Trim a JSX text line and collapse interior whitespace runs to single
/// spaces.
fn collapse_jsx_text(piece: &str) -> String {
    piece.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in bytes of the regex literal starting at `text` (which begins
/// with `/`), including delimiters and flags. Inside a `[...]` class `/` is
/// literal. Returns `None` when a line terminator appears before the
/// closing `/`; an unterminated literal at end of input keeps everything
/// scanned.
fn regex_literal_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    chars.next();
    let mut in_class = false;
    let mut escaped = false;
    let mut end = None;
    for (i, c) in &mut chars {
        if is_line_break(c) {
            return None;
        }
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '/' if !in_class => {
                end = Some(i + 1);
                break;
            }
            _ => {}
        }
    }
    let mut len = match end {
        Some(e) => e,
        None => return Some(text.len()),
    };
    len += text[len..]
        .chars()
        .take_while(|c| is_regex_flag(*c))
        .map(char::len_utf8)
        .sum::<usize>();
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_literal_len_simple() {
        assert_eq!(regex_literal_len("/abc/ rest"), Some(5));
        assert_eq!(regex_literal_len("/abc/gi + x"), Some(7));
    }

    #[test]
    fn test_regex_literal_len_class_and_escape() {
        assert_eq!(regex_literal_len("/[/]/"), Some(5));
        assert_eq!(regex_literal_len("/a\\/b/"), Some(6));
    }

    #[test]
    fn test_regex_literal_len_newline_aborts() {
        assert_eq!(regex_literal_len("/abc\ndef/"), None);
    }

    #[test]
    fn test_regex_literal_len_unterminated() {
        assert_eq!(regex_literal_len("/abc"), Some(4));
    }

    #[test]
    fn test_collapse_jsx_text() {
        assert_eq!(collapse_jsx_text("  Read   more "), "Read more");
        assert_eq!(collapse_jsx_text("    "), "");
        assert_eq!(collapse_jsx_text("this page! - "), "this page! -");
    }
}
