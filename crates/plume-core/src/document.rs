//! The document being edited.

/// Filename given to a fresh, never-saved document.
pub const DEFAULT_FILENAME: &str = "Untitled.txt";

/// A named text buffer.
///
/// `content` mirrors the live editor widget: it is updated on every change
/// event, replaced wholesale when a file is opened, and only read on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Filename used when downloading.
    ///
    /// Names without any `.` get `.txt` appended so the download lands
    /// with a usable extension.
    pub fn download_name(&self) -> String {
        if self.filename.contains('.') {
            self.filename.clone()
        } else {
            format!("{}.txt", self.filename)
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME, "")
    }
}
