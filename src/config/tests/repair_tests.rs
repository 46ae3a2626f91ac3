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


//! Repair tests
//!
//! Repair keeps well-formed lines verbatim and reports the rest.

use crate::config::repair::*;
use crate::core::{parser::parse_config, validator::LineError, ConfigFile};

const BROKEN: &str = "# comment, preserved\n\
                      gesture swipe up 3 xdotool key super+Up\n\
                      gesture swipe sideways 3 xdotool key F1\n\
                      device touchpad\n\
                      device touchpad extra\n\
                      \n\
                      gesture pinch in 2 notify-send \"pinch in\"\n\
                      gesture swipe down 3 xdotool type oops\n\
                      random junk\n\
                      swipe_threshold 0";

#[test]
fn test_repair_drops_malformed_lines() {
    let report = repair(&ConfigFile::from_text(BROKEN));

    assert_eq!(
        report.config.to_text(),
        "# comment, preserved\n\
         gesture swipe up 3 xdotool key super+Up\n\
         device touchpad\n\
         \n\
         gesture pinch in 2 notify-send \"pinch in\"\n\
         swipe_threshold 0"
    );

    let dropped = report.dropped.iter().map(|d| d.line).collect::<Vec<_>>();
    assert_eq!(dropped, vec![3, 5, 8, 9]);
    assert!(!report.is_clean());
}

#[test]
fn test_repair_reports_reasons() {
    let report = repair(&ConfigFile::from_text(BROKEN));

    assert_eq!(
        report.dropped[0],
        DroppedLine {
            line: 3,
            text: "gesture swipe sideways 3 xdotool key F1".to_string(),
            reason: LineError::UnknownGesture("gesture swipe sideways".to_string()),
        }
    );
    assert_eq!(report.dropped[2].reason, LineError::InvalidXdotool);
    assert_eq!(
        report.dropped[3].reason,
        LineError::UnknownKeyword("random".to_string())
    );
}

#[test]
fn test_repaired_config_parses() {
    let report = repair(&ConfigFile::from_text(BROKEN));
    let bindings = parse_config(&report.config).unwrap();
    assert_eq!(bindings.len(), 2);
}

#[test]
fn test_repair_is_idempotent() {
    let inputs = [
        BROKEN,
        "",
        "junk",
        "gesture swipe up 3 xdotool key a\ngesture swipe up 3\n",
        "device\n#x\n  \ndevice a b\n",
    ];

    for input in inputs {
        let once = repair(&ConfigFile::from_text(input));
        let twice = repair(&once.config);
        assert_eq!(twice.config, once.config, "input: {:?}", input);
        assert!(twice.is_clean());
    }
}

#[test]
fn test_repair_clean_config_is_unchanged() {
    let clean = "# c\ndevice all\ngesture pinch out 2 echo out\n";
    let report = repair(&ConfigFile::from_text(clean));

    assert!(report.is_clean());
    assert_eq!(report.config.to_text(), clean);
}
