//! Conversion of thrown JS values into `PlumeError`.

use plume_core::PlumeError;
use wasm_bindgen::{JsCast, JsValue};

/// Human-readable description of a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        format!("{}: {}", exception.name(), exception.message())
    } else if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

/// Whether the value is the `AbortError` pickers reject with on dismissal.
pub(crate) fn is_abort(value: &JsValue) -> bool {
    value
        .dyn_ref::<web_sys::DomException>()
        .is_some_and(|exception| exception.name() == "AbortError")
}

/// Map a picker rejection: dismissal is a cancellation, anything else a host error.
pub(crate) fn picker_error(value: JsValue) -> PlumeError {
    if is_abort(&value) {
        PlumeError::PickerCancelled
    } else {
        PlumeError::Host(describe(&value))
    }
}

pub(crate) fn host_error(value: JsValue) -> PlumeError {
    PlumeError::Host(describe(&value))
}

pub(crate) fn read_error(value: JsValue) -> PlumeError {
    PlumeError::ReadFailure(describe(&value))
}

pub(crate) fn write_error(value: JsValue) -> PlumeError {
    PlumeError::WriteFailure(describe(&value))
}
