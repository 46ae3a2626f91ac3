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


//! src/core/parser.rs
//!
//! libinput-gestures configuration parser
//!
//! Turns the raw lines of a config file into `Binding`s. Line
//! classification comes from `core::validator`; this module owns the
//! structure of a single `gesture` line:
//!
//! ```text
//! gesture <kind> <direction> <fingers> <action...>
//! gesture swipe   up          3         xdotool key super+Up
//! gesture pinch   in          2         notify-send "pinch in"
//! ```
//!
//! # Architecture
//! The gesture header (keyword, kind, direction, finger count) is parsed
//! with nom combinators over whitespace-separated words. The action is
//! whatever words remain: `xdotool key <combo>` becomes a shortcut,
//! anything else a command with its whitespace collapsed.
//!
//! # Failure policy
//! Parsing is fail-fast. The first malformed line aborts the whole parse;
//! a partially understood config is never returned. Callers offer
//! `config::repair` instead.

use nom::{
    bytes::complete::take_till1,
    character::complete::multispace0,
    combinator::map_opt,
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;
use tracing::debug;

use crate::core::{
    tables,
    types::{Action, Binding, ConfigFile, Gesture},
    validator::{classify_line, LineError, LineKind},
};

/// Parse errors with line number context
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("Malformed line {line}: {reason} ('{text}')")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// Line content without its terminator
        text: String,
        reason: LineError,
    },
}

/// Parses every binding in a config file, in file order
///
/// Comments, directives and blank lines are skipped. Duplicate gestures
/// are returned as they appear; `BindingSet` resolves them.
///
/// # Example
/// ```
/// use libinput_gestures_manager::core::{parser::parse_config, ConfigFile};
///
/// let file = ConfigFile::from_text("# mine\ngesture swipe up 3 xdotool key super+Up\n");
/// let bindings = parse_config(&file)?;
/// assert_eq!(bindings.len(), 1);
/// # Ok::<(), libinput_gestures_manager::core::parser::ParseError>(())
/// ```
pub fn parse_config(file: &ConfigFile) -> Result<Vec<Binding>, ParseError> {
    let bindings = classify_config(file)?
        .into_iter()
        .filter_map(|kind| match kind {
            LineKind::Binding(binding) => Some(binding),
            _ => None,
        })
        .collect::<Vec<_>>();

    debug!(
        lines = file.len(),
        bindings = bindings.len(),
        "parsed gesture config"
    );

    Ok(bindings)
}

/// Classifies every line of a config file, stopping at the first
/// malformed one
///
/// The result has one entry per line, in file order.
pub fn classify_config(file: &ConfigFile) -> Result<Vec<LineKind>, ParseError> {
    file.lines()
        .iter()
        .enumerate()
        .map(|(index, line)| match classify_line(line) {
            LineKind::Malformed(reason) => Err(ParseError::MalformedLine {
                line: index + 1,
                text: line.trim_end_matches(['\n', '\r']).to_string(),
                reason,
            }),
            kind => Ok(kind),
        })
        .collect()
}

/// Parses a single `gesture` line into a binding
///
/// # Example
/// ```
/// use libinput_gestures_manager::core::{parser::parse_binding_line, Gesture};
///
/// let binding = parse_binding_line("gesture swipe left_up\t4 xdotool key super+Left").unwrap();
/// assert_eq!(binding.gesture, Gesture::SwipeLeftUp);
/// assert_eq!(binding.fingers, 4);
/// ```
pub fn parse_binding_line(line: &str) -> Result<Binding, LineError> {
    let (rest, gesture) =
        parse_gesture(line).map_err(|_| LineError::UnknownGesture(leading_words(line, 3)))?;

    let (rest, fingers) = parse_fingers(rest)
        .map_err(|_| LineError::InvalidFingerCount(leading_words(rest, 1)))?;

    let action = parse_action(rest)?;

    Ok(Binding {
        gesture,
        fingers,
        action,
    })
}

/// Parses one whitespace-delimited word, skipping leading whitespace
pub fn parse_word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(|c: char| c.is_whitespace())).parse(input)
}

/// Parses `gesture <kind> <direction>` into one of the twelve gestures
///
/// Unknown pairs such as `gesture swipe in` are rejected.
pub fn parse_gesture(input: &str) -> IResult<&str, Gesture> {
    map_opt(
        (parse_word, parse_word, parse_word),
        |(keyword, kind, direction)| tables::gesture_from_words(keyword, kind, direction),
    )
    .parse(input)
}

/// Parses a finger count: ASCII digits only, greater than zero
pub fn parse_fingers(input: &str) -> IResult<&str, u32> {
    map_opt(parse_word, |word: &str| {
        if word.bytes().all(|b| b.is_ascii_digit()) {
            word.parse::<u32>().ok().filter(|n| *n > 0)
        } else {
            None
        }
    })
    .parse(input)
}

/// Parses the action words that follow the finger count
///
/// - `xdotool key <combo>` (exactly three words) → `Action::Shortcut`
/// - any other `xdotool ...` → error
/// - anything else → `Action::Command`, words joined by single spaces
pub fn parse_action(input: &str) -> Result<Action, LineError> {
    let words = input.split_whitespace().collect::<Vec<_>>();

    match words.as_slice() {
        [] => Err(LineError::MissingAction),
        ["xdotool", "key", combo] => Ok(Action::Shortcut((*combo).to_string())),
        ["xdotool", ..] => Err(LineError::InvalidXdotool),
        _ => Ok(Action::Command(words.join(" "))),
    }
}

/// First `count` words of a line, for error messages
fn leading_words(input: &str, count: usize) -> String {
    input
        .split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}
