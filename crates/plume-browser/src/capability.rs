//! File System Access API detection.

use plume_core::FileAccessCapability;
use wasm_bindgen::JsValue;

/// Check whether the handle-based pickers are available.
///
/// Both `showOpenFilePicker` and `showSaveFilePicker` must be functions on
/// `window`. Not cached: call it wherever the decision is made.
pub fn detect_file_access_capability() -> FileAccessCapability {
    let Some(window) = web_sys::window() else {
        return FileAccessCapability::Fallback;
    };

    let has_function = |name: &str| {
        js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .map(|value| value.is_function())
            .unwrap_or(false)
    };

    if has_function("showOpenFilePicker") && has_function("showSaveFilePicker") {
        FileAccessCapability::Native
    } else {
        FileAccessCapability::Fallback
    }
}
