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


//! Line grammar and binding validation
//!
//! This module decides what a well-formed config line is. The same
//! classifier drives parsing (`core::parser`) and repair (`config::repair`),
//! so a line the parser accepts is exactly a line repair keeps.
//!
//! # Grammar
//! - `# ...` → comment, always kept
//! - `device X` / `swipe_threshold X` → directive, exactly two words
//! - `gesture <kind> <direction> <fingers> <action...>` → binding, where
//!   an action starting with `xdotool` must be exactly `xdotool key <combo>`
//! - blank lines are kept
//! - anything else is malformed
//!
//! It also validates bindings built from user input before they are
//! written, with one named error per field.

use thiserror::Error;

use crate::core::{
    keys,
    parser::parse_binding_line,
    tables,
    types::{Action, Binding},
};

/// Directive keywords passed through without interpretation
const DIRECTIVES: &[&str] = &["device", "swipe_threshold"];

/// Why a line is not well-formed
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LineError {
    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),

    #[error("'{keyword}' takes exactly one value, found {found}")]
    DirectiveArity { keyword: String, found: usize },

    #[error("unknown gesture '{0}'")]
    UnknownGesture(String),

    #[error("finger count '{0}' is not a positive integer")]
    InvalidFingerCount(String),

    #[error("missing action after finger count")]
    MissingAction,

    #[error("xdotool actions must have the form 'xdotool key <combo>'")]
    InvalidXdotool,
}

/// Classification of one raw line
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    Comment,
    Directive,
    Binding(Binding),
    Malformed(LineError),
}

impl LineKind {
    pub fn is_well_formed(&self) -> bool {
        !matches!(self, LineKind::Malformed(_))
    }
}

/// Classifies a raw line (with or without its trailing newline)
///
/// Tabs and runs of spaces are both word separators; the raw text is
/// never modified here.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }

    let words = line.split_whitespace().collect::<Vec<_>>();
    let Some(keyword) = words.first() else {
        return LineKind::Blank;
    };

    if *keyword == "gesture" {
        return match parse_binding_line(line) {
            Ok(binding) => LineKind::Binding(binding),
            Err(e) => LineKind::Malformed(e),
        };
    }

    if DIRECTIVES.contains(keyword) {
        return if words.len() == 2 {
            LineKind::Directive
        } else {
            LineKind::Malformed(LineError::DirectiveArity {
                keyword: keyword.to_string(),
                found: words.len() - 1,
            })
        };
    }

    LineKind::Malformed(LineError::UnknownKeyword(keyword.to_string()))
}

/// Returns true if the line is kept by repair and accepted by the parser
pub fn is_well_formed(line: &str) -> bool {
    classify_line(line).is_well_formed()
}

/// Errors for bindings that would not survive a save/parse cycle, and for
/// incomplete edit drafts
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("No gesture selected")]
    MissingGesture,

    /// Label not in the gesture table. The CLI only offers known labels,
    /// so this means a caller bypassed the catalogue.
    #[error("Unknown gesture '{0}'")]
    UnknownAction(String),

    #[error("No finger count given")]
    MissingFingerCount,

    #[error("{kind} gestures need at least {minimum} fingers, got {found}")]
    FingerCountBelowMinimum {
        kind: String,
        minimum: u32,
        found: u32,
    },

    #[error("Finger count must be at least 1")]
    ZeroFingers,

    #[error("No action given")]
    MissingAction,

    #[error("Keyboard shortcut is empty")]
    EmptyShortcut,

    #[error("Keyboard shortcut '{0}' contains whitespace")]
    ShortcutContainsWhitespace(String),

    #[error("Command is empty")]
    EmptyCommand,

    #[error("Command must fit on a single line")]
    MultiLineCommand,

    #[error("Command '{0}' has repeated or surrounding whitespace")]
    CommandWhitespace(String),

    #[error("Commands may not start with xdotool; use a keyboard shortcut instead")]
    XdotoolCommand,
}

/// Checks that a binding serializes to a line that parses back to itself
///
/// The per-kind finger minimum is not checked here; the config format
/// accepts any positive count. See `BindingDraft::validate`.
pub fn validate_binding(binding: &Binding) -> Result<(), ValidationError> {
    if binding.fingers == 0 {
        return Err(ValidationError::ZeroFingers);
    }

    match &binding.action {
        Action::Shortcut(combo) => {
            if combo.is_empty() {
                return Err(ValidationError::EmptyShortcut);
            }
            if combo.chars().any(char::is_whitespace) {
                return Err(ValidationError::ShortcutContainsWhitespace(combo.clone()));
            }
        }
        Action::Command(command) => validate_command(command)?,
    }

    Ok(())
}

fn validate_command(command: &str) -> Result<(), ValidationError> {
    if command.trim().is_empty() {
        return Err(ValidationError::EmptyCommand);
    }
    if command.contains('\n') || command.contains('\r') {
        return Err(ValidationError::MultiLineCommand);
    }
    if normalize_command(command) != command {
        return Err(ValidationError::CommandWhitespace(command.to_string()));
    }
    if command.split_whitespace().next() == Some("xdotool") {
        return Err(ValidationError::XdotoolCommand);
    }

    Ok(())
}

/// Collapses whitespace the way the parser reads a command back
pub fn normalize_command(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Action as entered by the user, before translation
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActionDraft {
    /// Chord as reported by a key-capture widget, e.g. "Meta+PgDown"
    Shortcut(String),
    /// Command text as typed
    Command(String),
}

/// A binding being edited, with every field optional
///
/// # Example
/// ```
/// use libinput_gestures_manager::core::validator::{ActionDraft, BindingDraft};
///
/// let draft = BindingDraft {
///     gesture: Some("Swipe Up".to_string()),
///     fingers: Some(3),
///     action: Some(ActionDraft::Shortcut("Meta+PgUp".to_string())),
/// };
/// let binding = draft.validate()?;
/// assert_eq!(binding.action.value(), "super+Page_Up");
/// # Ok::<(), libinput_gestures_manager::core::ValidationError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BindingDraft {
    /// Human-readable gesture label ("Swipe Up")
    pub gesture: Option<String>,
    pub fingers: Option<u32>,
    pub action: Option<ActionDraft>,
}

impl BindingDraft {
    /// Checks each field in turn and builds the binding
    ///
    /// Shortcut chords are translated to xdotool names and commands have
    /// their whitespace collapsed before the final `validate_binding` check.
    pub fn validate(&self) -> Result<Binding, ValidationError> {
        let label = self
            .gesture
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .ok_or(ValidationError::MissingGesture)?;

        let gesture = tables::gesture_from_label(label)
            .ok_or_else(|| ValidationError::UnknownAction(label.to_string()))?;

        let fingers = self.fingers.ok_or(ValidationError::MissingFingerCount)?;
        let minimum = gesture.kind().min_fingers();
        if fingers < minimum {
            return Err(ValidationError::FingerCountBelowMinimum {
                kind: gesture.kind().to_string(),
                minimum,
                found: fingers,
            });
        }

        let action = match self.action.as_ref().ok_or(ValidationError::MissingAction)? {
            ActionDraft::Shortcut(chord) => {
                Action::Shortcut(keys::translate_captured_sequence(chord.trim()))
            }
            ActionDraft::Command(text) => {
                if text.contains('\n') || text.contains('\r') {
                    return Err(ValidationError::MultiLineCommand);
                }
                Action::Command(normalize_command(text))
            }
        };

        let binding = Binding {
            gesture,
            fingers,
            action,
        };
        validate_binding(&binding)?;

        Ok(binding)
    }
}
