//! WASM bindings for instructivo
//!
//! This module provides JavaScript-accessible functions for the browser
//! host: markup formatting, PDF viewer URLs and the content catalog.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{ContentCatalog, FormatOptions};

/// Result of a content check (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub has_errors: bool,
    /// Set when the content could not be parsed at all
    pub parse_error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format authored markup into HTML with the site's default classes
///
/// # Arguments
/// * `input` - markup text, `undefined` or empty yields `""`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatText")]
pub fn format_text_wasm(input: Option<String>) -> String {
    crate::format_text(input.as_deref())
}

/// Format authored markup with custom style classes
///
/// `options` is an object with any of `heading_class`, `paragraph_class`,
/// `list_class`, `list_item_class`; missing or invalid options fall back
/// to the defaults.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatTextWithOptions")]
pub fn format_text_with_options_wasm(input: Option<String>, options: JsValue) -> String {
    let opts: FormatOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    crate::format_text_with_options(input.as_deref(), &opts)
}

/// Google Docs viewer URL for a site-relative PDF path
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "googleViewerUrl")]
pub fn google_viewer_url_wasm(origin: Option<String>, pdf_url: &str) -> String {
    crate::google_viewer_url(origin.as_deref(), pdf_url)
}

/// The built-in content catalog as a plain object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "builtinContent")]
pub fn builtin_content_wasm() -> JsValue {
    match ContentCatalog::builtin() {
        Ok(catalog) => serde_wasm_bindgen::to_value(&catalog).unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    }
}

/// Render every step of the built-in catalog
///
/// # Arguments
/// * `origin` - `window.location.origin`, used for PDF viewer URLs
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderBuiltinContent")]
pub fn render_builtin_content_wasm(origin: Option<String>) -> JsValue {
    match ContentCatalog::builtin() {
        Ok(catalog) => {
            let steps = crate::render_catalog(&catalog, origin.as_deref());
            serde_wasm_bindgen::to_value(&steps).unwrap_or(JsValue::NULL)
        }
        Err(_) => JsValue::NULL,
    }
}

/// Check TOML content for authoring issues
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkContent")]
pub fn check_content_wasm(input: &str) -> JsValue {
    let summary = match ContentCatalog::from_toml_str(input) {
        Ok(catalog) => {
            let mut summary = CheckSummary::default();
            for issue in catalog.validate() {
                if issue.is_error() {
                    summary.errors.push(issue.to_string());
                } else {
                    summary.warnings.push(issue.to_string());
                }
            }
            summary.has_errors = !summary.errors.is_empty();
            summary
        }
        Err(e) => CheckSummary {
            has_errors: true,
            parse_error: Some(e.to_string()),
            ..CheckSummary::default()
        },
    };
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
