//! Open/save/rename orchestration.
//!
//! `Shell` ties a `Session` to a `FileAccess` implementation and an
//! `EditorHost`. Every operation runs its picker/read/write steps first and
//! only then commits to the session, so a cancelled dialog or failed write
//! leaves the filename, content and handle exactly as they were.
//!
//! Session borrows are never held across an await point. Two overlapping
//! saves are not serialized; whichever write lands last wins.

use std::cell::RefCell;
use std::rc::Rc;

use crate::document::Document;
use crate::error::{PlumeError, Result};
use crate::file_access::{FileAccess, FileAccessCapability, LoadedFile};
use crate::host::{EditorHost, WidgetBackend};
use crate::keymap::Shortcut;
use crate::language::{LanguageMode, select_mode};
use crate::session::{Session, ToolbarState};

/// What a save action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content written to the already bound handle.
    Written { filename: String },
    /// A new location was picked, bound and written.
    SavedAs { filename: String },
    /// Content handed to the browser as a download.
    Downloaded { filename: String },
}

pub struct Shell<F: FileAccess, B: WidgetBackend> {
    files: F,
    session: Rc<RefCell<Session<F::Handle>>>,
    host: RefCell<EditorHost<B>>,
}

impl<F, B> Shell<F, B>
where
    F: FileAccess,
    F::Handle: 'static,
    B: WidgetBackend,
{
    pub fn new(files: F, backend: B, document: Document) -> Self {
        let session = Rc::new(RefCell::new(Session::new(document)));

        let sink_session = session.clone();
        let host = EditorHost::new(
            backend,
            Rc::new(move |text: String| match sink_session.try_borrow_mut() {
                Ok(mut session) => {
                    tracing::trace!(len = text.len(), "Editor content changed");
                    session.edit(text);
                }
                Err(_) => tracing::warn!("Dropped editor change while session was busy"),
            }),
        );

        Self {
            files,
            session,
            host: RefCell::new(host),
        }
    }

    /// Build the first widget for the initial document.
    pub fn mount(&self) -> Result<()> {
        let session = self.session.borrow();
        let content = session.document().content.clone();
        let mode = session.mode();
        drop(session);
        self.host.borrow_mut().rebuild(&mode, &content)
    }

    pub fn document(&self) -> Document {
        self.session.borrow().document().clone()
    }

    pub fn mode(&self) -> LanguageMode {
        self.session.borrow().mode()
    }

    pub fn handle(&self) -> Option<F::Handle> {
        self.session.borrow().handle().cloned()
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    /// Text currently shown by the widget.
    pub fn current_content(&self) -> String {
        self.host.borrow().current_content()
    }

    pub fn toolbar(&self) -> ToolbarState {
        self.session.borrow().toolbar(self.files.capability())
    }

    pub fn focus(&self) {
        self.host.borrow().focus();
    }

    /// Pick and load a file, replacing the document.
    ///
    /// The widget is always rebuilt so it shows the new text, even when the
    /// language mode did not change.
    pub async fn open(&self) -> Result<()> {
        let (file, handle) = match self.files.capability() {
            FileAccessCapability::Native => {
                let (handle, file) = self.files.open_file().await?;
                (file, Some(handle))
            }
            FileAccessCapability::Fallback => (self.files.open_fallback().await?, None),
        };

        let (filename, bytes) = (file.name.clone(), file.text.len());
        self.load(file, handle)?;
        tracing::info!(%filename, bytes, "Opened file");
        Ok(())
    }

    /// Show the file, then commit it.
    ///
    /// If the widget cannot be rebuilt the old document stays, matching the
    /// widget that is still mounted.
    fn load(&self, file: LoadedFile, handle: Option<F::Handle>) -> Result<()> {
        let mode = select_mode(&file.name);
        self.host.borrow_mut().rebuild(&mode, &file.text)?;
        self.session.borrow_mut().load(file, handle);
        Ok(())
    }

    /// Change the filename, rebuilding the widget if the mode changed.
    pub fn rename(&self, filename: &str) -> Result<()> {
        let changed = self.session.borrow_mut().rename(filename)?;
        match changed {
            Some(mode) => self.refresh_editor(mode),
            None => Ok(()),
        }
    }

    /// Dispatch a keyboard shortcut.
    pub async fn shortcut(&self, shortcut: Shortcut) -> Result<SaveOutcome> {
        match shortcut {
            Shortcut::Save => self.save().await,
            Shortcut::SaveAs => match self.files.capability() {
                FileAccessCapability::Native => self.save_as().await,
                FileAccessCapability::Fallback => self.download(),
            },
        }
    }

    /// Save to the bound handle without prompting.
    ///
    /// Without a handle this becomes a save-as; without handle support at
    /// all it becomes a download.
    pub async fn save(&self) -> Result<SaveOutcome> {
        if self.files.capability() == FileAccessCapability::Fallback {
            return self.download();
        }

        let Some(handle) = self.handle() else {
            return self.save_as().await;
        };

        let Document { filename, content } = self.document();
        self.files.write_to_file(&handle, &content).await?;
        tracing::info!(%filename, bytes = content.len(), "Saved file");
        Ok(SaveOutcome::Written { filename })
    }

    /// Pick a new save location, bind it and write the content there.
    ///
    /// The new handle and its filename are only committed once the write
    /// has succeeded.
    pub async fn save_as(&self) -> Result<SaveOutcome> {
        if self.files.capability() != FileAccessCapability::Native {
            return Err(PlumeError::Unsupported("save as"));
        }

        let suggested = self.document().filename;
        let handle = self.files.save_file(&suggested).await?;
        let filename = self.files.handle_name(&handle);

        // Read after the dialog closes so edits made meanwhile are included.
        let content = self.document().content;
        self.files.write_to_file(&handle, &content).await?;

        let changed = self
            .session
            .borrow_mut()
            .bind_handle(handle, filename.clone());
        if let Some(mode) = changed {
            // Already on disk and bound; only the highlighting is stale.
            if let Err(e) = self.refresh_editor(mode) {
                tracing::warn!(%filename, "Editor not rebuilt after save as: {}", e);
            }
        }

        tracing::info!(%filename, bytes = content.len(), "Saved file to new location");
        Ok(SaveOutcome::SavedAs { filename })
    }

    /// Hand the content to the browser as a download.
    pub fn download(&self) -> Result<SaveOutcome> {
        let document = self.document();
        let filename = document.download_name();
        self.files.download(&filename, &document.content)?;
        tracing::info!(%filename, bytes = document.content.len(), "Downloaded file");
        Ok(SaveOutcome::Downloaded { filename })
    }

    /// Rebuild the widget for a new mode, keeping the document.
    ///
    /// The seed is read back from the live widget so a change the sink
    /// dropped is not lost; the session is resynced with it first.
    fn refresh_editor(&self, mode: LanguageMode) -> Result<()> {
        let mut host = self.host.borrow_mut();
        if host.is_mounted() {
            self.session.borrow_mut().edit(host.current_content());
        }
        let content = self.session.borrow().document().content.clone();
        host.rebuild(&mode, &content)
    }
}
