//! Config repair
//!
//! Drops every line the line grammar rejects and keeps the rest verbatim.
//! Dropped lines are gone for good unless the store keeps backups, so this
//! only runs when the user asks for it; parsing never repairs on its own.

use tracing::warn;

use crate::core::{
    validator::{classify_line, LineError, LineKind},
    ConfigFile,
};

/// A line removed by `repair`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DroppedLine {
    /// 1-based line number in the file before repair
    pub line: usize,
    /// Line content without its terminator
    pub text: String,
    pub reason: LineError,
}

/// Result of a repair: the cleaned config and what was removed
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RepairReport {
    pub config: ConfigFile,
    pub dropped: Vec<DroppedLine>,
}

impl RepairReport {
    /// True if repair removed nothing
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Keeps only well-formed lines (comments, blank lines, directives and
/// bindings), in their original order and byte for byte.
///
/// Repairing a repaired config changes nothing.
///
/// # Example
/// ```
/// use libinput_gestures_manager::config::repair;
/// use libinput_gestures_manager::core::ConfigFile;
///
/// let file = ConfigFile::from_text("device touchpad\ndevice touchpad extra\n");
/// let report = repair(&file);
/// assert_eq!(report.config.to_text(), "device touchpad\n");
/// assert_eq!(report.dropped[0].line, 2);
/// ```
pub fn repair(file: &ConfigFile) -> RepairReport {
    let mut kept = Vec::new();
    let mut dropped = Vec::new();

    for (index, line) in file.lines().iter().enumerate() {
        match classify_line(line) {
            LineKind::Malformed(reason) => {
                let text = line.trim_end_matches(['\n', '\r']).to_string();
                warn!(line = index + 1, %reason, text = %text, "dropping malformed line");
                dropped.push(DroppedLine {
                    line: index + 1,
                    text,
                    reason,
                });
            }
            _ => kept.push(line.clone()),
        }
    }

    RepairReport {
        config: ConfigFile::new(kept),
        dropped,
    }
}
