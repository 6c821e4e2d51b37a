//! hilite: a JavaScript/JSX tokenizer for syntax-highlighted rendering.
//!
//! The crate converts raw source text into an ordered, lossless sequence of
//! classified tokens; a renderer maps each token's category id to a visual
//! style. Disambiguation (division vs regex, relational `<` vs JSX,
//! template interpolation nesting) is done in a single pass from local
//! context only, with no parse tree and no backtracking.
//!
//! ```
//! use hilite::{TokenType, tokenize};
//!
//! let tokens = tokenize("const x = 1;");
//! assert_eq!(tokens[0].ty, TokenType::Keyword);
//! assert_eq!(tokens[0].text, "const");
//! ```

// Initialize panic hook for WASM to prevent worker crashes
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_init() {
    // Set panic hook to log errors to console instead of crashing worker
    console_error_panic_hook::set_once();
}

// Scanner module - token definitions, scanning implementation, and character
// classification
pub mod scanner;
pub use scanner::char_codes;
pub use scanner::scanner_impl;
pub use scanner::{
    ContextTracker, Cursor, Mode, ScannerState, TOKEN_TYPE_NAMES, Token, TokenType,
    text_is_keyword, token_is_significant, tokenize,
};

// Tracing configuration - env-gated subscriber for debugging scans
pub mod tracing_config;
pub use tracing_config::init_tracing;

// WASM API surface
pub mod wasm_api;

#[cfg(test)]
#[path = "tests/scanner_impl_tests.rs"]
mod scanner_impl_tests;

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;

#[cfg(test)]
#[path = "tests/fixture_tests.rs"]
mod fixture_tests;
