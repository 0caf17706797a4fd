//! WASM utility helpers: panic hook, console logging, argument coercion.

use js_sys::Array;
use kana_replace_core::KanaError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Global `String(value)`; `catch` covers objects whose toString throws.
    #[wasm_bindgen(js_name = String, catch)]
    fn js_string(value: &JsValue) -> Result<String, JsValue>;
}

/// Set panic hook for better error messages in the browser console.
pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, panics are
    // forwarded to `console.error` with a readable message.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Log a message to the browser console.
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Log a warning to the browser console.
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Coerce an arbitrary host value to a Rust string, the way JavaScript's
/// `String(value)` does (`undefined` -> `"undefined"`, `5` -> `"5"`).
///
/// A value whose conversion throws is reported as an invalid argument at
/// `position`, never treated as the empty string.
pub fn coerce_to_string(value: &JsValue, position: usize) -> Result<String, KanaError> {
    if let Some(s) = value.as_string() {
        return Ok(s);
    }
    js_string(value).map_err(|_| {
        console_warn(&format!("argument {} could not be converted to a string", position));
        KanaError::UncoercibleArgument { position }
    })
}

/// Coerce every element of a host argument list.
pub fn coerce_args(args: &Array) -> Result<Vec<String>, KanaError> {
    args.iter()
        .enumerate()
        .map(|(position, value)| coerce_to_string(&value, position))
        .collect()
}

/// Serialize an outcome record to a plain JS object.
pub fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        tracing::error!("serialisation error: {}", e);
        JsValue::NULL
    })
}
