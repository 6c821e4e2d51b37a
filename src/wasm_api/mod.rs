//! WASM bindings for the scanner.
//!
//! Tokens cross the boundary as `[id, text]` pairs (see the `Serialize`
//! impl on [`Token`](crate::scanner::Token)), so a JS consumer can resolve
//! categories with `tokenTypeNames()[token[0]]`. Passing a non-string
//! argument is rejected by wasm-bindgen at the boundary, the only failing
//! call contract; the tokenizer itself never fails on any string.

use wasm_bindgen::prelude::*;

use crate::scanner::{TOKEN_TYPE_NAMES, tokenize};

/// Tokenize JavaScript/JSX source and return an array of `[id, text]`
/// pairs.
#[wasm_bindgen(js_name = tokenize)]
pub fn tokenize_js(source: String) -> Result<JsValue, JsValue> {
    let tokens = tokenize(&source);
    serde_wasm_bindgen::to_value(&tokens).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// The stable category-id -> name table, as a JS array of strings.
#[wasm_bindgen(js_name = tokenTypeNames)]
pub fn token_type_names() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&TOKEN_TYPE_NAMES)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
