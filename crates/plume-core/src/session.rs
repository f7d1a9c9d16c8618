//! Editable state and its transitions.
//!
//! A `Session` owns the document, the optional file handle and the language
//! mode derived from the filename. All transitions are synchronous; the
//! async picker/read/write work happens in `Shell`, which only commits here
//! once that work has succeeded.

use crate::document::Document;
use crate::error::{PlumeError, Result};
use crate::file_access::{FileAccessCapability, LoadedFile};
use crate::language::{LanguageMode, select_mode};

/// What the toolbar should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    pub filename: String,
    /// The filename field is read-only while a handle is bound.
    pub filename_read_only: bool,
    /// Show "Save As" + "Save" (handle capable) instead of "Download".
    pub show_handle_actions: bool,
    /// "Save" needs a bound handle.
    pub save_enabled: bool,
}

#[derive(Debug)]
pub struct Session<H> {
    document: Document,
    handle: Option<H>,
    mode: LanguageMode,
}

impl<H: Clone> Session<H> {
    pub fn new(document: Document) -> Self {
        let mode = select_mode(&document.filename);
        Self {
            document,
            handle: None,
            mode,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn mode(&self) -> LanguageMode {
        self.mode
    }

    pub fn filename_locked(&self) -> bool {
        self.handle.is_some()
    }

    /// Record the widget's new text.
    pub fn edit(&mut self, content: String) {
        self.document.content = content;
    }

    /// Change the filename from the filename field.
    ///
    /// Returns the new mode if the rename changed it.
    pub fn rename(&mut self, filename: &str) -> Result<Option<LanguageMode>> {
        if self.filename_locked() {
            return Err(PlumeError::FilenameLocked(self.document.filename.clone()));
        }
        self.document.filename = filename.to_string();
        Ok(self.recompute_mode())
    }

    /// Replace the document with a freshly opened file.
    ///
    /// The handle is replaced too; opening through the fallback picker
    /// passes `None` and unbinds any previous handle.
    pub fn load(&mut self, file: LoadedFile, handle: Option<H>) -> LanguageMode {
        self.document = Document::new(file.name, file.text);
        self.handle = handle;
        self.recompute_mode();
        self.mode
    }

    /// Bind a handle obtained from save-as, taking its filename.
    pub fn bind_handle(&mut self, handle: H, filename: String) -> Option<LanguageMode> {
        self.handle = Some(handle);
        self.document.filename = filename;
        self.recompute_mode()
    }

    pub fn toolbar(&self, capability: FileAccessCapability) -> ToolbarState {
        ToolbarState {
            filename: self.document.filename.clone(),
            filename_read_only: self.filename_locked(),
            show_handle_actions: capability == FileAccessCapability::Native,
            save_enabled: self.handle.is_some(),
        }
    }

    fn recompute_mode(&mut self) -> Option<LanguageMode> {
        let mode = select_mode(&self.document.filename);
        if mode == self.mode {
            None
        } else {
            tracing::debug!(filename = %self.document.filename, "Language mode changed");
            self.mode = mode;
            Some(mode)
        }
    }
}

impl<H: Clone> Default for Session<H> {
    fn default() -> Self {
        Self::new(Document::default())
    }
}
