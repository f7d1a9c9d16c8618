//! Keyboard event extraction.

use plume_core::{KeyChord, Shortcut};

/// Read the key and modifier state of a keydown event.
pub fn chord_from_event(event: &web_sys::KeyboardEvent) -> KeyChord {
    KeyChord::new(event.key(), event.ctrl_key(), event.shift_key())
}

/// Recognise an application shortcut in a keydown event.
///
/// Recognised shortcuts have their default browser action (the page save
/// dialog) suppressed.
pub fn shortcut_from_event(event: &web_sys::KeyboardEvent) -> Option<Shortcut> {
    let shortcut = Shortcut::from_chord(&chord_from_event(event))?;
    event.prevent_default();
    Some(shortcut)
}
