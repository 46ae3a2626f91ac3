//! src/core/keys.rs
//!
//! Key-combo translation
//!
//! A key-capture widget reports chords like "Meta+PgDown"; xdotool expects
//! "super+Page_Down". Every `+`-separated key name is run through the key
//! table in `core::tables` and the names are joined again with `+`.
//!
//! Nothing is validated here: modifier order and duplicate keys are passed
//! through as captured.

use crate::core::tables;

/// Translates a captured chord into an xdotool key combo
///
/// # Example
/// ```
/// use libinput_gestures_manager::core::keys::translate_key_combo;
///
/// assert_eq!(translate_key_combo("Meta+PgDown"), "super+Page_Down");
/// assert_eq!(translate_key_combo("Ctrl+A"), "ctrl+a");
/// assert_eq!(translate_key_combo(""), "");
/// ```
pub fn translate_key_combo(chord: &str) -> String {
    if chord.is_empty() {
        return String::new();
    }

    chord
        .split('+')
        .map(tables::daemon_key_name)
        .collect::<Vec<_>>()
        .join("+")
}

/// Translates the first sequence of a captured multi-sequence chord
///
/// Key-sequence editors report several chords separated by ", "
/// ("Ctrl+A, Ctrl+B"); xdotool gets one, so only the first is used.
pub fn translate_captured_sequence(sequence: &str) -> String {
    let first = sequence.split(',').next().unwrap_or_default().trim();
    translate_key_combo(first)
}
