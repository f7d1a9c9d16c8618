//! Handle-based file access through the File System Access API.
//!
//! web-sys only exposes these types behind unstable flags and does not bind
//! the picker functions at all, so the handful of members used here are
//! bound directly.

use plume_core::{LoadedFile, PlumeError};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::js_error::{picker_error, read_error, write_error};

// === File System Access bindings ===

#[wasm_bindgen]
extern "C" {
    /// A file on disk the user granted access to through a picker.
    #[derive(Debug, Clone)]
    pub type FileSystemFileHandle;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &FileSystemFileHandle) -> String;

    #[wasm_bindgen(method, catch, js_name = getFile)]
    fn get_file(this: &FileSystemFileHandle) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = createWritable)]
    fn create_writable(this: &FileSystemFileHandle) -> Result<js_sys::Promise, JsValue>;

    /// Write stream returned by `createWritable()`. Nothing is committed until `close()`.
    type FileSystemWritableFileStream;

    #[wasm_bindgen(method, catch)]
    fn write(this: &FileSystemWritableFileStream, data: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &FileSystemWritableFileStream) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn abort(this: &FileSystemWritableFileStream) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = showOpenFilePicker)]
    fn show_open_file_picker(options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = showSaveFilePicker)]
    fn show_save_file_picker(options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavePickerOptions<'a> {
    suggested_name: &'a str,
}

// === Operations ===

/// Show the open picker and read the chosen file.
pub async fn open_file() -> Result<(FileSystemFileHandle, LoadedFile), PlumeError> {
    let options = js_sys::Object::new();
    let promise = show_open_file_picker(&options).map_err(picker_error)?;
    let picked = JsFuture::from(promise).await.map_err(picker_error)?;

    let handle = picked
        .dyn_into::<js_sys::Array>()
        .ok()
        .map(|handles| handles.get(0))
        .filter(|handle| !handle.is_undefined())
        .ok_or(PlumeError::PickerCancelled)?
        .unchecked_into::<FileSystemFileHandle>();

    let file = read_handle(&handle).await?;
    Ok((handle, file))
}

/// Read the full text behind a handle.
pub async fn read_handle(handle: &FileSystemFileHandle) -> Result<LoadedFile, PlumeError> {
    let promise = handle.get_file().map_err(read_error)?;
    let file: web_sys::File = JsFuture::from(promise)
        .await
        .map_err(read_error)?
        .unchecked_into();

    let text = read_file_text(&file).await?;
    Ok(LoadedFile {
        name: file.name(),
        text,
    })
}

/// Show the save picker, suggesting `suggested_name`.
pub async fn save_file(suggested_name: &str) -> Result<FileSystemFileHandle, PlumeError> {
    let options = serde_wasm_bindgen::to_value(&SavePickerOptions { suggested_name })
        .map_err(|e| PlumeError::Host(e.to_string()))?;
    let promise = show_save_file_picker(&options).map_err(picker_error)?;
    let handle = JsFuture::from(promise).await.map_err(picker_error)?;
    Ok(handle.unchecked_into())
}

/// Replace the file's contents with `content`.
///
/// Returns once `close()` has resolved, i.e. the data is on disk. A failed
/// write aborts the stream so the original file is left intact.
pub async fn write_to_file(handle: &FileSystemFileHandle, content: &str) -> Result<(), PlumeError> {
    let promise = handle.create_writable().map_err(write_error)?;
    let stream: FileSystemWritableFileStream = JsFuture::from(promise)
        .await
        .map_err(write_error)?
        .unchecked_into();

    let written = match stream.write(content) {
        Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        if let Ok(promise) = stream.abort() {
            let _ = JsFuture::from(promise).await;
        }
        return Err(write_error(e));
    }

    let promise = stream.close().map_err(write_error)?;
    JsFuture::from(promise).await.map_err(write_error)?;

    tracing::debug!(name = %handle.name(), bytes = content.len(), "Wrote file handle");
    Ok(())
}

/// Read a `File` as text.
pub async fn read_file_text(file: &web_sys::File) -> Result<String, PlumeError> {
    let text = JsFuture::from(file.text()).await.map_err(read_error)?;
    text.as_string()
        .ok_or_else(|| PlumeError::ReadFailure(format!("{} did not decode to text", file.name())))
}
