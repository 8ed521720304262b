//! HostEnvironment backed by the live `window`.

use super::describe_js;
use crate::core::environment::HostEnvironment;
use crate::error::{SupportError, SupportResult};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

#[derive(Debug, Clone)]
pub struct BrowserEnvironment {
    window: Window,
}

impl BrowserEnvironment {
    pub fn new() -> SupportResult<Self> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(SupportError::NoWindow)
    }
}

impl HostEnvironment for BrowserEnvironment {
    fn protocol(&self) -> Option<String> {
        self.window
            .location()
            .protocol()
            .map_err(|e| tracing::warn!("location.protocol unavailable: {}", describe_js(&e)))
            .ok()
    }

    fn user_agent(&self) -> Option<String> {
        self.window
            .navigator()
            .user_agent()
            .map_err(|e| tracing::warn!("navigator.userAgent unavailable: {}", describe_js(&e)))
            .ok()
    }

    fn transceiver_has_current_direction(&self) -> bool {
        prototype_has_own("RTCRtpTransceiver", "currentDirection")
    }
}

/// `globalThis[ctor].prototype.hasOwnProperty(property)`, false if the
/// constructor does not exist.
fn prototype_has_own(ctor: &str, property: &str) -> bool {
    let global = js_sys::global();
    let constructor = match Reflect::get(&global, &JsValue::from_str(ctor)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return false,
    };
    match Reflect::get(&constructor, &JsValue::from_str("prototype")) {
        Ok(proto) if proto.is_object() => proto
            .unchecked_into::<Object>()
            .has_own_property(&JsValue::from_str(property)),
        _ => false,
    }
}
