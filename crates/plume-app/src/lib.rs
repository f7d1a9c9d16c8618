//! Plain-text file editor for the browser.
//!
//! Loading the wasm module mounts the editor into the page: a CodeMirror
//! widget in `.editor` and file controls in `.toolbar` by default. The page
//! must load `codemirror_bridge.js` from plume-browser first.

pub mod app;
pub mod page_config;
pub mod telemetry;
pub mod toolbar;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use app::App;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = page_config::read();
    let level = config.as_ref().ok().and_then(|c| c.log_level.clone());
    telemetry::init(level.as_deref());

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid page config: {}", e);
        Default::default()
    });

    match app::mount(&config) {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => tracing::error!("Failed to mount editor: {}", e),
    }
}

/// Recent plume log lines, for bug reports.
#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> String {
    telemetry::recent_logs()
}
