//! Keyboard shortcut recognition.

use smol_str::SmolStr;

/// A key press with its modifier state, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// The `KeyboardEvent.key` value.
    pub key: SmolStr,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<SmolStr>, ctrl: bool, shift: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            shift,
        }
    }
}

/// Application-level shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+S: write to the bound handle, or fall through to save-as/download.
    Save,
    /// Ctrl+Shift+S: always pick a new location.
    SaveAs,
}

impl Shortcut {
    /// Recognise a shortcut.
    ///
    /// Browsers report `"S"` rather than `"s"` while Shift is held, so the
    /// key is compared case-insensitively.
    pub fn from_chord(chord: &KeyChord) -> Option<Shortcut> {
        if !chord.ctrl || !chord.key.eq_ignore_ascii_case("s") {
            return None;
        }
        if chord.shift {
            Some(Shortcut::SaveAs)
        } else {
            Some(Shortcut::Save)
        }
    }
}
