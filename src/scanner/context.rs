//! Lexical mode stack and previous-token memory.
//!
//! Every context-dependent decision in the scanner (regex vs division, `<`
//! as JSX vs relational, which `}` closes an interpolation) is answered
//! here. Nesting such as template-in-JSX-in-template composes by
//! construction because each nested construct pushes its own mode instead of
//! toggling flags.

use tracing::trace;

use super::token::{Token, TokenType, token_is_significant};

/// The lexical context the scanner is currently inside.
///
/// String, comment, and regex literals are consumed within a single rule
/// application and never appear on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain code. `brace_depth` counts `{` braces opened inside this
    /// context so that the `}` which pops the context (interpolation or JSX
    /// expression close) can be told apart from ordinary block braces.
    Normal { brace_depth: u32 },
    /// Between `<`/`</` and the closing `>` or `/>` of a JSX tag. `named`
    /// records whether any identifier was seen, which decides whether `>`
    /// opens a children context (fragments `<>` do not).
    JsxTag { closing: bool, named: bool },
    /// Text content between a JSX opening tag and its closing tag.
    JsxChildren,
    /// Inside a template literal, outside any interpolation.
    Template,
}

/// The last emitted significant token, kept for ambiguity resolution.
#[derive(Debug, Clone)]
pub struct PreviousToken {
    /// Category of the remembered token.
    pub ty: TokenType,
    /// Its text.
    pub text: String,
    /// `true` when this token was a `}` that popped an interpolation or JSX
    /// expression context (an expression-closing brace makes a following
    /// `/` a division sign).
    pub closed_expression: bool,
}

/// Mode stack plus previous-significant-token memory.
///
/// No operation fails: popping at the base mode is a no-op, consistent with
/// the never-fail policy for malformed input.
#[derive(Debug)]
pub struct ContextTracker {
    modes: Vec<Mode>,
    previous: Option<PreviousToken>,
}

impl ContextTracker {
    /// A fresh tracker in the base `Normal` mode.
    pub fn new() -> Self {
        ContextTracker {
            modes: vec![Mode::Normal { brace_depth: 0 }],
            previous: None,
        }
    }

    /// The current lexical mode.
    #[inline]
    pub fn current(&self) -> Mode {
        *self.modes.last().unwrap_or(&Mode::Normal { brace_depth: 0 })
    }

    /// Mutable access to the current mode, for in-place updates such as
    /// brace depth counting and tag naming.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut Mode> {
        self.modes.last_mut()
    }

    /// Push a nested mode.
    pub fn enter(&mut self, mode: Mode) {
        trace!(?mode, depth = self.modes.len(), "enter mode");
        self.modes.push(mode);
    }

    /// Pop the current mode. At the base mode this is a no-op so that
    /// unterminated constructs unwind silently.
    pub fn leave(&mut self) {
        if self.modes.len() > 1 {
            let mode = self.modes.pop();
            trace!(?mode, depth = self.modes.len(), "leave mode");
        }
    }

    /// Number of modes on the stack, including the base mode.
    #[inline]
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// Record `token` as the previous significant token. Whitespace and
    /// comment tokens are ignored.
    pub fn remember(&mut self, token: &Token) {
        if token_is_significant(token.ty) {
            self.previous = Some(PreviousToken {
                ty: token.ty,
                text: token.text.clone(),
                closed_expression: false,
            });
        }
    }

    /// Mark the most recently remembered token as an expression-closing
    /// brace.
    pub fn mark_expression_close(&mut self) {
        if let Some(prev) = self.previous.as_mut() {
            prev.closed_expression = true;
        }
    }

    /// The previous significant token, if any has been emitted.
    #[inline]
    pub fn previous(&self) -> Option<&PreviousToken> {
        self.previous.as_ref()
    }
}

impl Default for ContextTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_at_base_is_noop() {
        let mut ctx = ContextTracker::new();
        ctx.leave();
        ctx.leave();
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.current(), Mode::Normal { brace_depth: 0 });
    }

    #[test]
    fn test_enter_leave_nesting() {
        let mut ctx = ContextTracker::new();
        ctx.enter(Mode::Template);
        ctx.enter(Mode::Normal { brace_depth: 0 });
        assert_eq!(ctx.depth(), 3);
        ctx.leave();
        assert_eq!(ctx.current(), Mode::Template);
        ctx.leave();
        assert_eq!(ctx.current(), Mode::Normal { brace_depth: 0 });
    }

    #[test]
    fn test_remember_skips_whitespace_and_comments() {
        let mut ctx = ContextTracker::new();
        ctx.remember(&Token::new(TokenType::Identifier, "foo"));
        ctx.remember(&Token::new(TokenType::Space, " "));
        ctx.remember(&Token::new(TokenType::Break, "\n"));
        ctx.remember(&Token::new(TokenType::Comment, "// x"));
        let prev = ctx.previous().expect("previous token");
        assert_eq!(prev.ty, TokenType::Identifier);
        assert_eq!(prev.text, "foo");
    }

    #[test]
    fn test_mark_expression_close() {
        let mut ctx = ContextTracker::new();
        ctx.remember(&Token::new(TokenType::Sign, "}"));
        ctx.mark_expression_close();
        assert!(ctx.previous().expect("previous token").closed_expression);
    }
}
