//! JS-facing exports
//!
//! Level arguments from JS are resolved once here into a [`LevelSpec`]:
//! numbers and strings pass through, an object with a numeric `value`
//! (a named level token) contributes that value.
//!
//! `Logger.error/warn/log(...items)` hand the caller's values to the console
//! untouched, after the prefix. The Rust methods take one array
//! (`errorItems` etc.) and [`install_variadic_methods`] puts rest-parameter
//! wrappers on the class prototype.

use super::blob::blob_to_array_buffer;
use super::console::{ConsoleSink, ValueSink};
use super::environment::BrowserEnvironment;
use super::to_js_error;
use crate::core::browser::{self, detect_browser};
use crate::core::buffer::join_array_buffers;
use crate::core::level::LevelSpec;
use crate::core::logger::{Channel, Logger};
use crate::core::{random, validate};
use js_sys::{Array, ArrayBuffer, Object, Reflect, Uint8Array};
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::Blob;

#[wasm_bindgen(inline_js = r#"
export function spreadItems(proto) {
    for (const name of ["error", "warn", "log"]) {
        const write = proto[name + "Items"];
        proto[name] = function (...items) {
            return write.call(this, items);
        };
    }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = "spreadItems")]
    fn spread_items(proto: &Object);
}

#[wasm_bindgen(typescript_custom_section)]
const LOGGER_VARIADIC: &'static str = r#"
export interface Logger {
  error(...items: any[]): void;
  warn(...items: any[]): void;
  log(...items: any[]): void;
}
"#;

#[wasm_bindgen(js_name = "LogLevel")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsLogLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Full = 3,
}

fn level_spec_from_js(value: &JsValue) -> LevelSpec {
    if let Some(n) = value.as_f64() {
        return LevelSpec::Numeric(n);
    }
    if let Some(s) = value.as_string() {
        return LevelSpec::Text(s);
    }
    if value.is_object() {
        if let Some(n) = Reflect::get(value, &JsValue::from_str("value")).ok().and_then(|v| v.as_f64()) {
            return LevelSpec::Numeric(n);
        }
    }
    LevelSpec::Numeric(f64::NAN)
}

/// Give `Logger.prototype` the `error/warn/log(...items)` methods.
/// Idempotent; runs from the module start function.
pub fn install_variadic_methods() {
    let sample: JsValue = JsLogger::new().into();
    spread_items(&Object::get_prototype_of(&sample));
}

#[wasm_bindgen(js_name = "Logger")]
pub struct JsLogger {
    inner: Logger,
    values: Rc<dyn ValueSink>,
}

#[wasm_bindgen(js_class = "Logger")]
impl JsLogger {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsLogger {
        Self::with_value_sink(Rc::new(ConsoleSink))
    }

    /// 0: NONE, 1: ERROR, 2: WARN, 3: FULL. Anything else silences output.
    #[wasm_bindgen(js_name = "setLogLevel")]
    pub fn set_log_level(&self, level: JsValue) {
        self.inner.set_level(level_spec_from_js(&level));
    }

    #[wasm_bindgen(getter, js_name = "logLevel")]
    pub fn log_level(&self) -> u8 {
        self.inner.level().rank()
    }

    #[wasm_bindgen(js_name = "warnItems")]
    pub fn warn_items(&self, items: Array) {
        self.write(Channel::Warn, &items);
    }

    #[wasm_bindgen(js_name = "errorItems")]
    pub fn error_items(&self, items: Array) {
        self.write(Channel::Error, &items);
    }

    #[wasm_bindgen(js_name = "logItems")]
    pub fn log_items(&self, items: Array) {
        self.write(Channel::Info, &items);
    }
}

impl JsLogger {
    /// Logger whose gated output goes to `values` instead of the console.
    pub fn with_value_sink(values: Rc<dyn ValueSink>) -> Self {
        Self { inner: Logger::new(Arc::new(ConsoleSink)), values }
    }

    fn write(&self, channel: Channel, items: &Array) {
        self.inner.if_enabled(channel, |prefix| {
            let args = Array::of1(&JsValue::from_str(prefix));
            for item in items.iter() {
                args.push(&item);
            }
            self.values.write_values(channel, &args);
        });
    }
}

impl Default for JsLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_name = "validateId")]
pub fn validate_id(id: Option<String>) -> bool {
    validate::validate_id(id.as_deref().unwrap_or_default()).is_valid()
}

#[wasm_bindgen(js_name = "validateKey")]
pub fn validate_key(key: Option<String>) -> bool {
    validate::validate_key(key.as_deref().unwrap_or_default()).is_valid()
}

#[wasm_bindgen(js_name = "randomId")]
pub fn random_id() -> String {
    random::random_id()
}

#[wasm_bindgen(js_name = "randomToken")]
pub fn random_token() -> String {
    random::random_token()
}

/// Accepts ArrayBuffers or typed arrays.
#[wasm_bindgen(js_name = "joinArrayBuffers")]
pub fn join_buffers(buffers: Array) -> ArrayBuffer {
    let chunks: Vec<Vec<u8>> = buffers.iter().map(|b| Uint8Array::new(&b).to_vec()).collect();
    let joined = join_array_buffers(&chunks);
    Uint8Array::from(joined.as_slice()).buffer()
}

/// Resolves to an ArrayBuffer, or undefined when the read produced nothing.
#[wasm_bindgen(js_name = "blobToArrayBuffer")]
pub async fn blob_to_buffer(blob: Blob) -> Result<JsValue, JsValue> {
    match blob_to_array_buffer(&blob).await.map_err(to_js_error)? {
        Some(bytes) => Ok(Uint8Array::from(bytes.as_slice()).buffer().into()),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = "isSecure")]
pub fn is_secure() -> bool {
    BrowserEnvironment::new()
        .map(|env| browser::is_secure(&env))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = "detectBrowser")]
pub fn detect() -> Result<JsValue, JsValue> {
    let env = BrowserEnvironment::new().map_err(to_js_error)?;
    let info = detect_browser(&env).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = "isPlanBSafari")]
pub fn is_plan_b_safari() -> bool {
    BrowserEnvironment::new()
        .map(|env| browser::is_plan_b_safari(&env))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = "sdpSemantics")]
pub fn sdp_semantics() -> String {
    BrowserEnvironment::new()
        .map(|env| browser::sdp_semantics(&env))
        .unwrap_or(browser::SdpSemantics::UnifiedPlan)
        .as_str()
        .to_string()
}
