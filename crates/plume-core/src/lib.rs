//! plume-core: editor state and file workflow without browser dependencies.
//!
//! This crate provides:
//! - `LanguageMode` selection from a filename extension
//! - `Document` and `Session` - the editable state and its transitions
//! - `FileAccess` trait - the seam to the host's open/save capabilities
//! - `EditorHost<B>` - owner of the single live widget instance
//! - `Shell<F, B>` - async open/save/rename orchestration over both

pub mod config;
pub mod document;
pub mod error;
pub mod file_access;
pub mod host;
pub mod keymap;
pub mod language;
pub mod session;
pub mod shell;

pub use config::PlumeConfig;
pub use document::{DEFAULT_FILENAME, Document};
pub use error::{PlumeError, Result};
pub use file_access::{FileAccess, FileAccessCapability, LoadedFile};
pub use host::{ChangeSink, EditingSetup, EditorHost, WidgetBackend, WidgetConfig};
pub use keymap::{KeyChord, Shortcut};
pub use language::{Grammar, LanguageMode, extension_of, select_mode};
pub use session::{Session, ToolbarState};
pub use shell::{SaveOutcome, Shell};
pub use smol_str::SmolStr;
