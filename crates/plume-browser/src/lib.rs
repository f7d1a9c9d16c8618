//! Browser layer for the plume editor.
//!
//! This crate implements the platform traits from `plume-core` on top of
//! web-sys. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `capability`: File System Access API detection
//! - `fs_access`: handle-based open/save through the native pickers
//! - `fallback`: file-input open and anchor-click download
//! - `files`: `BrowserFileAccess`, the `FileAccess` implementation
//! - `widget`: `CodeMirrorBackend`, the `WidgetBackend` implementation
//! - `keyboard`: shortcut extraction from keydown events
//! - `dialog`: user-facing error reporting
//!
//! # Re-exports
//!
//! This crate re-exports `plume-core` for convenience, so consumers only
//! need to depend on `plume-browser`.

// Re-export core crate
pub use plume_core;
pub use plume_core::*;

pub mod capability;
pub mod dialog;
pub mod fallback;
pub mod files;
pub mod fs_access;
pub mod keyboard;
pub mod widget;

mod js_error;

pub use capability::detect_file_access_capability;
pub use dialog::report_error;
pub use files::BrowserFileAccess;
pub use fs_access::FileSystemFileHandle;
pub use keyboard::{chord_from_event, shortcut_from_event};
pub use widget::{CodeMirrorBackend, CodeMirrorInstance};

/// The shell as mounted in a browser page.
pub type BrowserShell = Shell<BrowserFileAccess, CodeMirrorBackend>;
