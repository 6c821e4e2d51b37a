//! JavaScript/JSX scanner.
//!
//! This module contains the lexical analysis core:
//! - `TokenType` / `Token` - the closed category set and token values
//! - `Cursor` - explicit read position over the source
//! - `ContextTracker` - mode stack and previous-token memory
//! - `ScannerState` - the scanning rules and driver loop
//! - `char_codes` - character classification utilities

pub mod char_codes;
pub mod context;
pub mod cursor;
pub mod scanner_impl;
pub mod token;

pub use context::{ContextTracker, Mode, PreviousToken};
pub use cursor::Cursor;
pub use scanner_impl::{ScannerState, tokenize};
pub use token::{TOKEN_TYPE_NAMES, Token, TokenType, text_is_keyword, token_is_significant};
