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


//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the gesture binding engine:
//! - Type definitions for gestures, actions and bindings
//! - Translation tables (labels, config tokens, key names)
//! - Key-combo translation for captured shortcuts
//! - The line grammar shared by the parser and repair
//! - Configuration parsing and the editable binding set
//!
//! Nothing in here touches the filesystem, so all of it is unit-tested
//! without temp files.

pub mod binding_set;
pub mod keys;
pub mod parser;
pub mod tables;
pub mod types;
pub mod validator;

pub use binding_set::BindingSet;
pub use types::*;
pub use validator::{validate_binding, ValidationError};

#[cfg(test)]
mod tests;
