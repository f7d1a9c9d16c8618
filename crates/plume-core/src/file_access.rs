//! File access abstraction.
//!
//! The host either offers handle-based file access (open/save pickers that
//! return a reusable handle) or it does not, in which case opening goes
//! through a plain file input and saving through a download. This trait is
//! the seam between the shell's workflow and the browser implementation.

/// Which file access strategy the host supports right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccessCapability {
    /// Open and save pickers returning reusable file handles.
    Native,
    /// File input for opening, synthesized download for saving.
    Fallback,
}

/// A file read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub name: String,
    pub text: String,
}

/// Platform file access operations.
///
/// Implementations must not have side effects on failure: a cancelled
/// picker returns `PickerCancelled` and nothing else happens.
#[allow(async_fn_in_trait)]
pub trait FileAccess {
    /// Opaque reference to an on-disk file.
    type Handle: Clone;

    /// Probe the host for handle support.
    ///
    /// Called at every action site rather than cached.
    fn capability(&self) -> FileAccessCapability;

    /// Prompt for a file to open and read it through the returned handle.
    async fn open_file(&self) -> crate::Result<(Self::Handle, LoadedFile)>;

    /// Prompt for a save location, suggesting `suggested_name`.
    async fn save_file(&self, suggested_name: &str) -> crate::Result<Self::Handle>;

    /// Name of the file a handle points at.
    fn handle_name(&self, handle: &Self::Handle) -> String;

    /// Replace the handle's file contents with `content`.
    ///
    /// Only returns `Ok` once the write has been committed.
    async fn write_to_file(&self, handle: &Self::Handle, content: &str) -> crate::Result<()>;

    /// Prompt for a file through the fallback picker and read it.
    async fn open_fallback(&self) -> crate::Result<LoadedFile>;

    /// Hand `content` to the host as a download named `filename`.
    fn download(&self, filename: &str, content: &str) -> crate::Result<()>;
}
