//! `FileAccess` implementation for browsers.

use plume_core::{FileAccess, FileAccessCapability, LoadedFile, PlumeError};

use crate::capability::detect_file_access_capability;
use crate::fs_access::{self, FileSystemFileHandle};
use crate::fallback;

/// File access through the File System Access API, falling back to a file
/// input and downloads when the API is missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFileAccess;

impl BrowserFileAccess {
    pub fn new() -> Self {
        Self
    }
}

impl FileAccess for BrowserFileAccess {
    type Handle = FileSystemFileHandle;

    fn capability(&self) -> FileAccessCapability {
        detect_file_access_capability()
    }

    async fn open_file(&self) -> Result<(FileSystemFileHandle, LoadedFile), PlumeError> {
        if self.capability() != FileAccessCapability::Native {
            return Err(PlumeError::Unsupported("showOpenFilePicker"));
        }
        fs_access::open_file().await
    }

    async fn save_file(&self, suggested_name: &str) -> Result<FileSystemFileHandle, PlumeError> {
        if self.capability() != FileAccessCapability::Native {
            return Err(PlumeError::Unsupported("showSaveFilePicker"));
        }
        fs_access::save_file(suggested_name).await
    }

    fn handle_name(&self, handle: &FileSystemFileHandle) -> String {
        handle.name()
    }

    async fn write_to_file(
        &self,
        handle: &FileSystemFileHandle,
        content: &str,
    ) -> Result<(), PlumeError> {
        fs_access::write_to_file(handle, content).await
    }

    async fn open_fallback(&self) -> Result<LoadedFile, PlumeError> {
        fallback::open_with_input().await
    }

    fn download(&self, filename: &str, content: &str) -> Result<(), PlumeError> {
        fallback::download_text(filename, content)
    }
}
