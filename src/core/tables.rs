//! src/core/tables.rs
//!
//! Static translation tables
//!
//! - Gesture label ("Swipe LeftUp") ↔ config token ("gesture swipe left_up")
//! - Captured key name ("pgdown") → xdotool key name ("Page_Down")
//!
//! The forward gesture mappings are exhaustive matches, so the compiler
//! guarantees they are total. The reverse lookups search `Gesture::ALL`;
//! the tests in `core/tests/tables_tests.rs` check that both directions
//! invert each other.

use crate::core::types::Gesture;

/// Captured key names (lower-case) that xdotool spells differently.
///
/// Anything missing here (letters, digits, ctrl, shift, alt, ...) is passed
/// through lower-cased.
const KEY_TABLE: &[(&str, &str)] = &[
    ("meta", "super"),
    ("pgdown", "Page_Down"),
    ("pgup", "Page_Up"),
    ("right", "Right"),
    ("left", "Left"),
    ("up", "Up"),
    ("down", "Down"),
    ("f1", "F1"),
    ("f2", "F2"),
    ("f3", "F3"),
    ("f4", "F4"),
    ("f5", "F5"),
    ("f6", "F6"),
    ("f7", "F7"),
    ("f8", "F8"),
    ("f9", "F9"),
    ("f10", "F10"),
    ("f11", "F11"),
    ("f12", "F12"),
];

/// Human-readable label of a gesture
pub fn gesture_label(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::SwipeUp => "Swipe Up",
        Gesture::SwipeDown => "Swipe Down",
        Gesture::SwipeLeft => "Swipe Left",
        Gesture::SwipeLeftUp => "Swipe LeftUp",
        Gesture::SwipeLeftDown => "Swipe LeftDown",
        Gesture::SwipeRight => "Swipe Right",
        Gesture::SwipeRightUp => "Swipe RightUp",
        Gesture::SwipeRightDown => "Swipe RightDown",
        Gesture::PinchIn => "Pinch In",
        Gesture::PinchOut => "Pinch Out",
        Gesture::PinchClockwise => "Pinch Clockwise",
        Gesture::PinchAnticlockwise => "Pinch Anticlockwise",
    }
}

/// Config token of a gesture (the first three words of a binding line)
pub fn gesture_token(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::SwipeUp => "gesture swipe up",
        Gesture::SwipeDown => "gesture swipe down",
        Gesture::SwipeLeft => "gesture swipe left",
        Gesture::SwipeLeftUp => "gesture swipe left_up",
        Gesture::SwipeLeftDown => "gesture swipe left_down",
        Gesture::SwipeRight => "gesture swipe right",
        Gesture::SwipeRightUp => "gesture swipe right_up",
        Gesture::SwipeRightDown => "gesture swipe right_down",
        Gesture::PinchIn => "gesture pinch in",
        Gesture::PinchOut => "gesture pinch out",
        Gesture::PinchClockwise => "gesture pinch clockwise",
        Gesture::PinchAnticlockwise => "gesture pinch anticlockwise",
    }
}

/// Reverse lookup: "Swipe Up" → `Gesture::SwipeUp`
pub fn gesture_from_label(label: &str) -> Option<Gesture> {
    Gesture::ALL
        .into_iter()
        .find(|g| gesture_label(*g) == label)
}

/// Reverse lookup: "gesture swipe up" → `Gesture::SwipeUp`
///
/// The token must be in canonical form (single spaces).
pub fn gesture_from_token(token: &str) -> Option<Gesture> {
    Gesture::ALL
        .into_iter()
        .find(|g| gesture_token(*g) == token)
}

/// Reverse lookup from the already-split words of a binding line
pub fn gesture_from_words(keyword: &str, kind: &str, direction: &str) -> Option<Gesture> {
    Gesture::ALL.into_iter().find(|g| {
        let mut words = gesture_token(*g).split(' ');
        words.next() == Some(keyword)
            && words.next() == Some(kind)
            && words.next() == Some(direction)
    })
}

/// xdotool name for a captured key name
///
/// Lookup is case-insensitive; unknown keys come back lower-cased.
pub fn daemon_key_name(key: &str) -> String {
    let lowered = key.to_lowercase();

    KEY_TABLE
        .iter()
        .find(|(captured, _)| *captured == lowered)
        .map(|(_, daemon)| (*daemon).to_string())
        .unwrap_or(lowered)
}
