//! WASM bindings for the token converter.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ css, tokens, unsupported }` or throws on error.

use tokencss_codegen::{CompileOptions, CompilerOutput};
use wasm_bindgen::prelude::*;

/// Compile a design token JSON document to CSS custom properties.
///
/// `options` is an optional object `{ selector?, indent?, color? }`.
/// Returns `{ css: string, tokens: number, unsupported: string[] }`.
/// Throws a JS error if the options or the document are malformed.
#[wasm_bindgen]
pub fn compile(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(options)?;
    let output = compile_native(source, &options)?;

    let unsupported = js_sys::Array::new();
    for key in &output.unsupported {
        unsupported.push(&JsValue::from_str(key));
    }

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"css".into(), &output.css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;
    let token_count = output.token_count as f64;
    js_sys::Reflect::set(&js_obj, &"tokens".into(), &token_count.into())
        .map_err(|_| JsError::new("Failed to set tokens property"))?;
    js_sys::Reflect::set(&js_obj, &"unsupported".into(), &unsupported.into())
        .map_err(|_| JsError::new("Failed to set unsupported property"))?;

    Ok(js_obj.into())
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_options(options: JsValue) -> Result<CompileOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(CompileOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {e}")))
}

fn compile_native(
    source: &str,
    options: &CompileOptions,
) -> Result<CompilerOutput, JsError> {
    tokencss_codegen::compile_str(source, options)
        .map_err(|e| JsError::new(&e.to_string()))
}
