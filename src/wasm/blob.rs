//! Blob -> bytes through a one-shot FileReader.

use super::{describe_js, js_error};
use crate::error::{SupportError, SupportResult};
use futures::channel::oneshot;
use js_sys::Uint8Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, FileReader};

type Completion = Rc<RefCell<Option<oneshot::Sender<Result<(), String>>>>>;

fn completion_handler(slot: &Completion, outcome: Result<(), String>) -> Closure<dyn FnMut(JsValue)> {
    let slot = slot.clone();
    let mut outcome = Some(outcome);
    Closure::new(move |_event: JsValue| {
        if let (Some(tx), Some(outcome)) = (slot.borrow_mut().take(), outcome.take()) {
            let _ = tx.send(outcome);
        }
    })
}

/// Read `blob` fully. Resolves once; `Ok(None)` when the reader produced no
/// result. The read cannot be cancelled once started.
pub async fn blob_to_array_buffer(blob: &Blob) -> SupportResult<Option<Vec<u8>>> {
    let reader = FileReader::new().map_err(js_error)?;
    let (tx, rx) = oneshot::channel();
    let slot: Completion = Rc::new(RefCell::new(Some(tx)));

    let on_load = completion_handler(&slot, Ok(()));
    let on_error = completion_handler(&slot, Err("FileReader error event".into()));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let outcome = match reader.read_as_array_buffer(blob) {
        Ok(()) => rx.await.unwrap_or_else(|_| Err("reader dropped before completion".into())),
        Err(e) => Err(describe_js(&e)),
    };

    // Handlers must not outlive their closures.
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);

    outcome.map_err(SupportError::BlobRead)?;

    let result = reader.result().map_err(js_error)?;
    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    Ok(Some(Uint8Array::new(&result).to_vec()))
}
