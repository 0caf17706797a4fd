//! WASM bindings for `kana-replace-core`: kana validation and bounded
//! substitution in the browser.
//!
//! # Quick Start (JavaScript)
//!
//! ```js
//! import init, { validateKana, replaceText, JsKanaReplacer } from "kana-replace-wasm";
//!
//! await init();
//!
//! validateKana("ねこ");   // { isValid: true, message: "" }
//! replaceText("ねこ", "いぬ", "ねこがねこを見る");
//! // { displayText: "いぬがいぬを見る", error: "" }
//!
//! // init() also installs the variadic globals used by existing pages
//! window.validateKanaWasm("ネコ");
//! window.replaceTextWasm("a", "b");  // { displayText: "", error: "Invalid arguments" }
//!
//! // Custom bounds
//! const replacer = new JsKanaReplacer({ maxSearchChars: 5 });
//! replacer.validate("あいうえおか").message;
//! ```

mod utils;

use std::sync::Once;

use js_sys::{Array, Function, Reflect};
use kana_replace_core::{KanaError, KanaReplacer, Limits, SubstitutionOutcome, ValidationOutcome};
use wasm_bindgen::prelude::*;

use crate::utils::{coerce_args, coerce_to_string, console_log, set_panic_hook, to_js};

/// Global name of the variadic validate callable.
pub const VALIDATE_GLOBAL: &str = "validateKanaWasm";

/// Global name of the variadic replace callable.
pub const REPLACE_GLOBAL: &str = "replaceTextWasm";

static REGISTER: Once = Once::new();

#[wasm_bindgen(inline_js = "export function collect_args(f) { return (...args) => f(args); }")]
extern "C" {
    // Wraps a closure taking an argument array into a variadic JS function.
    fn collect_args(f: &Closure<dyn Fn(Array) -> JsValue>) -> Function;
}

// ---------------------------------------------------------------------------
// Module init
// ---------------------------------------------------------------------------

/// Called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    set_panic_hook();
    tracing_wasm::set_as_global_default();
    register_globals()?;
    console_log("kana-replace-wasm loaded");
    Ok(())
}

/// Return the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install `validateKanaWasm` and `replaceTextWasm` on `globalThis`.
///
/// Both accept any number of arguments; the arity guard reports
/// `"Invalid arguments"` instead of throwing. The closures are leaked so the
/// globals stay callable for the lifetime of the page, and only the first
/// call installs them.
#[wasm_bindgen(js_name = registerGlobals)]
pub fn register_globals() -> Result<(), JsValue> {
    let mut result = Ok(());
    REGISTER.call_once(|| result = install_globals());
    result
}

fn install_globals() -> Result<(), JsValue> {
    let global = js_sys::global();

    let validate = Closure::<dyn Fn(Array) -> JsValue>::new(|args: Array| {
        to_js(&validate_args(&KanaReplacer::default(), &args))
    });
    Reflect::set(&global, &VALIDATE_GLOBAL.into(), &collect_args(&validate))?;
    validate.forget();

    let replace = Closure::<dyn Fn(Array) -> JsValue>::new(|args: Array| {
        to_js(&replace_args(&KanaReplacer::default(), &args))
    });
    Reflect::set(&global, &REPLACE_GLOBAL.into(), &collect_args(&replace))?;
    replace.forget();

    tracing::debug!("registered {} and {}", VALIDATE_GLOBAL, REPLACE_GLOBAL);
    Ok(())
}

fn validate_args(replacer: &KanaReplacer, args: &Array) -> ValidationOutcome {
    match coerce_args(args) {
        Ok(args) => replacer.validate_entry(&args),
        Err(err) => ValidationOutcome::rejected(&err),
    }
}

fn replace_args(replacer: &KanaReplacer, args: &Array) -> SubstitutionOutcome {
    match coerce_args(args) {
        Ok(args) => replacer.replace_entry(&args),
        Err(err) => SubstitutionOutcome::failed(String::new(), &err),
    }
}

fn coerce_triple(
    search: &JsValue,
    replacement: &JsValue,
    source: &JsValue,
) -> Result<[String; 3], KanaError> {
    Ok([
        coerce_to_string(search, 0)?,
        coerce_to_string(replacement, 1)?,
        coerce_to_string(source, 2)?,
    ])
}

/// Validate a search term with the default bounds.
///
/// Returns `{ isValid, message }`.
#[wasm_bindgen(js_name = validateKana)]
pub fn validate_kana(input: JsValue) -> JsValue {
    JsKanaReplacer::default().validate(input)
}

/// Replace every occurrence of `search` in `source` with the default bounds.
///
/// Returns `{ displayText, error }`.
#[wasm_bindgen(js_name = replaceText)]
pub fn replace_text(search: JsValue, replacement: JsValue, source: JsValue) -> JsValue {
    JsKanaReplacer::default().replace(search, replacement, source)
}

// ---------------------------------------------------------------------------
// JsKanaReplacer
// ---------------------------------------------------------------------------

/// Validator/replacer handle with configurable bounds.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsKanaReplacer {
    inner: KanaReplacer,
}

#[wasm_bindgen]
impl JsKanaReplacer {
    /// Construct from an optional `{ maxSearchChars, maxReplacementChars }`
    /// object. Missing fields keep their defaults (10 and 30).
    ///
    /// # Errors
    ///
    /// Throws on a malformed object or a zero bound.
    #[wasm_bindgen(constructor)]
    pub fn new(limits: JsValue) -> Result<JsKanaReplacer, JsError> {
        let limits = if limits.is_undefined() || limits.is_null() {
            Limits::default()
        } else {
            serde_wasm_bindgen::from_value(limits)
                .map_err(|e| JsError::new(&format!("invalid limits: {}", e)))?
        };
        Self::with_limits(limits)
    }

    fn with_limits(limits: Limits) -> Result<JsKanaReplacer, JsError> {
        KanaReplacer::new(limits)
            .map(|inner| JsKanaReplacer { inner })
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Maximum codepoints accepted for the search term.
    #[wasm_bindgen(getter, js_name = maxSearchChars)]
    pub fn max_search_chars(&self) -> usize {
        self.inner.limits().max_search_chars
    }

    /// Maximum codepoints accepted for the replacement text.
    #[wasm_bindgen(getter, js_name = maxReplacementChars)]
    pub fn max_replacement_chars(&self) -> usize {
        self.inner.limits().max_replacement_chars
    }

    /// Set the search-term bound.
    #[wasm_bindgen(js_name = setMaxSearchChars)]
    pub fn set_max_search_chars(&mut self, max: usize) -> Result<(), JsError> {
        let limits = Limits {
            max_search_chars: max,
            ..self.inner.limits()
        };
        *self = Self::with_limits(limits)?;
        Ok(())
    }

    /// Set the replacement-text bound.
    #[wasm_bindgen(js_name = setMaxReplacementChars)]
    pub fn set_max_replacement_chars(&mut self, max: usize) -> Result<(), JsError> {
        let limits = Limits {
            max_replacement_chars: max,
            ..self.inner.limits()
        };
        *self = Self::with_limits(limits)?;
        Ok(())
    }

    /// Construct from a JSON string such as `{"maxSearchChars": 5}`.
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Throws on malformed JSON or a zero bound.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<JsKanaReplacer, JsError> {
        let limits = Limits::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Self::with_limits(limits)
    }

    /// Active bounds as a JSON string.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        self.inner
            .limits()
            .to_json()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Active bounds as a plain object.
    pub fn limits(&self) -> JsValue {
        to_js(&self.inner.limits())
    }

    /// Validate a search term. Returns `{ isValid, message }`.
    pub fn validate(&self, input: JsValue) -> JsValue {
        let outcome = match coerce_to_string(&input, 0) {
            Ok(input) => self.inner.validate(&input),
            Err(err) => ValidationOutcome::rejected(&err),
        };
        to_js(&outcome)
    }

    /// Substitute every occurrence of `search`. Returns `{ displayText, error }`.
    pub fn replace(&self, search: JsValue, replacement: JsValue, source: JsValue) -> JsValue {
        let outcome = match coerce_triple(&search, &replacement, &source) {
            Ok([search, replacement, source]) => self.inner.replace(&search, &replacement, &source),
            Err(err) => SubstitutionOutcome::failed(String::new(), &err),
        };
        to_js(&outcome)
    }
}
