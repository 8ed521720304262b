use crate::core::logger::{Channel, LogSink};
use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes to the browser console, prefix first, like `console.warn(tag, msg)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, channel: Channel, prefix: &str, message: &str) {
        let prefix = JsValue::from_str(prefix);
        let message = JsValue::from_str(message);
        match channel {
            Channel::Error => console::error_2(&prefix, &message),
            Channel::Warn => console::warn_2(&prefix, &message),
            Channel::Info => console::log_2(&prefix, &message),
        }
    }
}

/// Destination for unconverted JS values. `values` starts with the prefix.
pub trait ValueSink {
    fn write_values(&self, channel: Channel, values: &Array);
}

impl ValueSink for ConsoleSink {
    fn write_values(&self, channel: Channel, values: &Array) {
        match channel {
            Channel::Error => console::error(values),
            Channel::Warn => console::warn(values),
            Channel::Info => console::log(values),
        }
    }
}
