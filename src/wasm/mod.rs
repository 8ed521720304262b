//! WASM module: the support layer as seen from a browser page
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        bindings (JS API)                │
//! │  Logger, validateId, detectBrowser, ... │
//! └──────────┬──────────────────┬───────────┘
//!            │                  │
//! ┌──────────▼─────────┐ ┌──────▼───────────┐
//! │ ConsoleSink        │ │ BrowserEnvironment│
//! │ console.error/warn │ │ location,         │
//! │ /log, raw values   │ │ navigator,        │
//! └────────────────────┘ │ RTCRtpTransceiver │
//!                        └──────────────────┘
//! ```

mod bindings;
mod blob;
mod console;
mod environment;

pub use bindings::{blob_to_buffer, install_variadic_methods, join_buffers, JsLogLevel, JsLogger};
pub use blob::blob_to_array_buffer;
pub use console::{ConsoleSink, ValueSink};
pub use environment::BrowserEnvironment;

use crate::error::SupportError;
use wasm_bindgen::prelude::*;

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    install_variadic_methods();
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn js_error(value: JsValue) -> SupportError {
    SupportError::Js(describe_js(&value))
}

pub(crate) fn to_js_error(err: SupportError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
