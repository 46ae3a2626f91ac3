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


//! Key-combo translation tests

use crate::core::keys::{translate_captured_sequence, translate_key_combo};

#[test]
fn test_translate_modifier_and_named_key() {
    assert_eq!(translate_key_combo("Meta+PgDown"), "super+Page_Down");
}

#[test]
fn test_unmapped_keys_are_lowered() {
    assert_eq!(translate_key_combo("Ctrl+A"), "ctrl+a");
    assert_eq!(translate_key_combo("Ctrl+Shift+Alt+T"), "ctrl+shift+alt+t");
}

#[test]
fn test_arrows_and_function_keys() {
    assert_eq!(translate_key_combo("Meta+Up"), "super+Up");
    assert_eq!(translate_key_combo("ctrl+right"), "ctrl+Right");
    assert_eq!(translate_key_combo("F12"), "F12");
}

#[test]
fn test_empty_chord() {
    assert_eq!(translate_key_combo(""), "");
    assert_eq!(translate_captured_sequence(""), "");
}

#[test]
fn test_duplicates_and_order_pass_through() {
    assert_eq!(translate_key_combo("A+Ctrl+A"), "a+ctrl+a");
}

#[test]
fn test_captured_sequence_uses_first_chord() {
    assert_eq!(
        translate_captured_sequence("Meta+PgUp, Ctrl+B"),
        "super+Page_Up"
    );
    assert_eq!(translate_captured_sequence("Ctrl+A"), "ctrl+a");
}
