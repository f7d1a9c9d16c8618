//! Open and save for browsers without the File System Access API.
//!
//! Opening goes through a hidden `<input type="file">`, saving through a
//! Blob object URL and a synthesized anchor click.

use gloo_events::EventListener;
use plume_core::{LoadedFile, PlumeError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlInputElement, Url};

use crate::fs_access::read_file_text;
use crate::js_error::{host_error, write_error};

/// Prompt for a file with a hidden file input and read it.
///
/// Resolves with `PickerCancelled` when the input reports `cancel`. The
/// input is removed from the page once the picker settles.
pub async fn open_with_input() -> Result<LoadedFile, PlumeError> {
    let document = gloo_utils::document();
    let input: HtmlInputElement = document
        .create_element("input")
        .map_err(host_error)?
        .unchecked_into();
    input.set_type("file");
    input.set_hidden(true);
    gloo_utils::body().append_child(&input).map_err(host_error)?;

    let mut resolve_slot = None;
    let picked = js_sys::Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let Some(resolve) = resolve_slot else {
        input.remove();
        return Err(PlumeError::Host("file input promise never started".into()));
    };

    let _on_change = EventListener::once(&input, "change", {
        let input = input.clone();
        let resolve = resolve.clone();
        move |_| {
            let file = input.files().and_then(|files| files.get(0));
            let value = file.map(JsValue::from).unwrap_or(JsValue::NULL);
            if let Err(e) = resolve.call1(&JsValue::NULL, &value) {
                tracing::warn!("File input resolve failed: {:?}", e);
            }
        }
    });
    let _on_cancel = EventListener::once(&input, "cancel", move |_| {
        if let Err(e) = resolve.call1(&JsValue::NULL, &JsValue::NULL) {
            tracing::warn!("File input resolve failed: {:?}", e);
        }
    });

    input.click();
    let picked = JsFuture::from(picked).await;
    input.remove();

    let picked = picked.map_err(host_error)?;
    if picked.is_null() {
        return Err(PlumeError::PickerCancelled);
    }

    let file: web_sys::File = picked.unchecked_into();
    let text = read_file_text(&file).await?;
    Ok(LoadedFile {
        name: file.name(),
        text,
    })
}

/// Offer `content` as a `text/plain` download named `filename`.
///
/// The anchor and its object URL are discarded right after the click.
pub fn download_text(filename: &str, content: &str) -> Result<(), PlumeError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(write_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(write_error)?;

    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(write_error)?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = gloo_utils::body();
    let appended = body.append_child(&anchor);
    if appended.is_ok() {
        anchor.click();
        anchor.remove();
    }
    if let Err(e) = Url::revoke_object_url(&url) {
        tracing::debug!("Revoking download URL failed: {:?}", e);
    }
    appended.map_err(write_error)?;

    tracing::debug!(filename, bytes = content.len(), "Triggered download");
    Ok(())
}
