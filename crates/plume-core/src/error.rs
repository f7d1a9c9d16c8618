//! Error types for plume file and editor operations.

use miette::Diagnostic;

/// Main error type for plume operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum PlumeError {
    /// The user dismissed a file picker without choosing anything.
    #[error("file selection was cancelled")]
    #[diagnostic(code(plume::picker_cancelled))]
    PickerCancelled,

    /// Reading the chosen file failed. The current document is untouched.
    #[error("could not read file: {0}")]
    #[diagnostic(code(plume::read_failure))]
    ReadFailure(String),

    /// Writing or closing the writable stream failed.
    #[error("could not write file: {0}")]
    #[diagnostic(
        code(plume::write_failure),
        help("the file on disk may be incomplete; try Save As to pick a new location")
    )]
    WriteFailure(String),

    /// The editor container element was not found when mounting.
    #[error("editor container `{0}` not found")]
    #[diagnostic(code(plume::dom_target_missing))]
    DomTargetMissing(String),

    /// A rename was attempted while a file handle pins the filename.
    #[error("filename is locked to the open file `{0}`")]
    #[diagnostic(code(plume::filename_locked))]
    FilenameLocked(String),

    /// A handle-based operation was requested where the host has no file handle API.
    #[error("{0} is not supported by this browser")]
    #[diagnostic(code(plume::unsupported))]
    Unsupported(&'static str),

    /// Any other exception thrown by the host environment.
    #[error("host error: {0}")]
    #[diagnostic(code(plume::host))]
    Host(String),
}

impl PlumeError {
    /// Whether this error is the user backing out of a dialog.
    ///
    /// Cancellations are not reported to the user.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PlumeError::PickerCancelled)
    }
}

pub type Result<T, E = PlumeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_picker_cancel_is_cancellation() {
        assert!(PlumeError::PickerCancelled.is_cancellation());
        assert!(!PlumeError::WriteFailure("disk full".into()).is_cancellation());
        assert!(!PlumeError::ReadFailure("gone".into()).is_cancellation());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = PlumeError::DomTargetMissing(".editor".into());
        assert_eq!(err.to_string(), "editor container `.editor` not found");
    }
}
