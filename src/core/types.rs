// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! src/core/types.rs
//!
//! Core type definitions for gesture binding management
//!
//! This module defines the fundamental types used throughout the application:
//! - `GestureKind`: Swipe or Pinch
//! - `Direction`: Where the fingers move (Up, LeftDown, In, Clockwise, ...)
//! - `Gesture`: One of the twelve legal kind/direction pairs
//! - `Action`: A keyboard shortcut (injected with xdotool) or a shell command
//! - `Binding`: A gesture + finger count mapped to an action
//!
//! Illegal kind/direction pairs (e.g. "swipe in") are unrepresentable:
//! `Gesture` enumerates exactly the pairs libinput-gestures understands.

use serde::Serialize;
use std::fmt;

use crate::core::tables;

/// Type of touchpad gesture
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum GestureKind {
    /// Several fingers sliding in one direction
    Swipe,
    /// Fingers moving together/apart or rotating
    Pinch,
}

impl GestureKind {
    /// Smallest finger count the daemon reports for this kind.
    ///
    /// The config format itself accepts any positive number; this floor is
    /// enforced when a binding is built from user input.
    pub fn min_fingers(self) -> u32 {
        match self {
            GestureKind::Swipe => 3,
            GestureKind::Pinch => 2,
        }
    }

    /// Token used in the config file (`swipe`, `pinch`)
    pub fn token(self) -> &'static str {
        match self {
            GestureKind::Swipe => "swipe",
            GestureKind::Pinch => "pinch",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureKind::Swipe => write!(f, "Swipe"),
            GestureKind::Pinch => write!(f, "Pinch"),
        }
    }
}

/// Gesture direction
///
/// Swipes use the eight compass directions, pinches use the last four.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    In,
    Out,
    Clockwise,
    Anticlockwise,
}

impl Direction {
    /// Token used in the config file (`up`, `left_up`, `anticlockwise`, ...)
    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::LeftUp => "left_up",
            Direction::LeftDown => "left_down",
            Direction::RightUp => "right_up",
            Direction::RightDown => "right_down",
            Direction::In => "in",
            Direction::Out => "out",
            Direction::Clockwise => "clockwise",
            Direction::Anticlockwise => "anticlockwise",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::LeftUp => "LeftUp",
            Direction::LeftDown => "LeftDown",
            Direction::RightUp => "RightUp",
            Direction::RightDown => "RightDown",
            Direction::In => "In",
            Direction::Out => "Out",
            Direction::Clockwise => "Clockwise",
            Direction::Anticlockwise => "Anticlockwise",
        };
        write!(f, "{}", name)
    }
}

/// A legal gesture: one of the twelve kind/direction pairs
///
/// Human-readable labels ("Swipe LeftUp") and config tokens
/// ("gesture swipe left_up") live in `core::tables`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Gesture {
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeLeftUp,
    SwipeLeftDown,
    SwipeRight,
    SwipeRightUp,
    SwipeRightDown,
    PinchIn,
    PinchOut,
    PinchClockwise,
    PinchAnticlockwise,
}

impl Gesture {
    /// All gestures in menu order (swipes first, then pinches)
    pub const ALL: [Gesture; 12] = [
        Gesture::SwipeUp,
        Gesture::SwipeDown,
        Gesture::SwipeLeft,
        Gesture::SwipeLeftUp,
        Gesture::SwipeLeftDown,
        Gesture::SwipeRight,
        Gesture::SwipeRightUp,
        Gesture::SwipeRightDown,
        Gesture::PinchIn,
        Gesture::PinchOut,
        Gesture::PinchClockwise,
        Gesture::PinchAnticlockwise,
    ];

    /// Builds a gesture from its parts, rejecting pairs like Swipe + In
    pub fn from_parts(kind: GestureKind, direction: Direction) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.kind() == kind && g.direction() == direction)
    }

    pub fn kind(self) -> GestureKind {
        match self {
            Gesture::PinchIn
            | Gesture::PinchOut
            | Gesture::PinchClockwise
            | Gesture::PinchAnticlockwise => GestureKind::Pinch,
            _ => GestureKind::Swipe,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Gesture::SwipeUp => Direction::Up,
            Gesture::SwipeDown => Direction::Down,
            Gesture::SwipeLeft => Direction::Left,
            Gesture::SwipeLeftUp => Direction::LeftUp,
            Gesture::SwipeLeftDown => Direction::LeftDown,
            Gesture::SwipeRight => Direction::Right,
            Gesture::SwipeRightUp => Direction::RightUp,
            Gesture::SwipeRightDown => Direction::RightDown,
            Gesture::PinchIn => Direction::In,
            Gesture::PinchOut => Direction::Out,
            Gesture::PinchClockwise => Direction::Clockwise,
            Gesture::PinchAnticlockwise => Direction::Anticlockwise,
        }
    }

    /// Human-readable label, e.g. "Swipe LeftUp"
    pub fn label(self) -> &'static str {
        tables::gesture_label(self)
    }

    /// Config token, e.g. "gesture swipe left_up"
    pub fn token(self) -> &'static str {
        tables::gesture_token(self)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Discriminant of `Action`, ordered alphabetically by its display name
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ActionKind {
    Command,
    Shortcut,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Command => write!(f, "command"),
            ActionKind::Shortcut => write!(f, "shortcut"),
        }
    }
}

/// What happens when a gesture fires
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Action {
    /// Key combo injected through `xdotool key`, e.g. "super+Page_Down"
    Shortcut(String),
    /// Arbitrary shell command text
    Command(String),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Shortcut(_) => ActionKind::Shortcut,
            Action::Command(_) => ActionKind::Command,
        }
    }

    /// The key combo or the command text, without the xdotool prefix
    pub fn value(&self) -> &str {
        match self {
            Action::Shortcut(combo) => combo,
            Action::Command(command) => command,
        }
    }
}

/// Renders the action the way it appears after the finger count
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shortcut(combo) => write!(f, "xdotool key {}", combo),
            Action::Command(command) => write!(f, "{}", command),
        }
    }
}

/// Identity of a binding in the config file
///
/// At most one binding per key survives in a saved config.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BindingKey {
    pub gesture: Gesture,
    pub fingers: u32,
}

impl BindingKey {
    /// Text every line for this key starts with once serialized,
    /// e.g. "gesture swipe up\t3 "
    pub fn line_prefix(&self) -> String {
        format!("{}\t{} ", self.gesture.token(), self.fingers)
    }
}

/// A complete gesture binding
///
/// # Example
/// ```
/// use libinput_gestures_manager::core::{Action, Binding, Gesture};
///
/// let binding = Binding {
///     gesture: Gesture::SwipeUp,
///     fingers: 3,
///     action: Action::Shortcut("super+Up".to_string()),
/// };
/// assert_eq!(binding.to_line(), "gesture swipe up\t3 xdotool key super+Up\n");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Binding {
    pub gesture: Gesture,
    pub fingers: u32,
    pub action: Action,
}

impl Binding {
    pub fn key(&self) -> BindingKey {
        BindingKey {
            gesture: self.gesture,
            fingers: self.fingers,
        }
    }

    /// Serializes the binding as one config line, newline included
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} {}", self.gesture.token(), self.fingers, self.action)
    }
}

/// The config file as an ordered list of raw lines
///
/// Each line keeps its own line terminator (the last one may have none),
/// so untouched lines are written back byte for byte.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigFile {
    lines: Vec<String>,
}

impl ConfigFile {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Splits file content into lines, keeping the `\n` terminators
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines back into file content
    ///
    /// A line that lost its terminator by being moved off the end of the
    /// file gets one back, so two lines never run together.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(line);
        }
        text
    }
}

impl FromIterator<String> for ConfigFile {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
