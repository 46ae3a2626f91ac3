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


//! libinput-gestures Manager
//!
//! Reads, edits and repairs the `libinput-gestures.conf` file that binds
//! touchpad swipes and pinches to keyboard shortcuts or shell commands.
//!
//! # Features
//!
//! - **Lossless Edits:** Comments and directives survive every save byte for byte
//! - **Identity Keys:** One binding per gesture and finger count, duplicates resolved
//! - **Repair:** Drops malformed lines on request, reporting each one
//! - **Key Translation:** Captured chords such as `Meta+PgDown` become `super+Page_Down`
//! - **Atomic Saves:** Temp file and rename, with optional timestamped backups
//!
//! # Architecture
//!
//! - **`core`:** Pure logic (types, tables, grammar, parser, binding set)
//! - **`config`:** File operations (load, atomic save, backups, repair)
//! - **`controller`:** Load/edit/save session over one config
//! - **`daemon`:** `libinput-gestures-setup` status/start/stop/restart
//!
//! # Examples
//!
//! ## Parsing a config
//!
//! ```
//! use libinput_gestures_manager::core::{BindingSet, ConfigFile};
//!
//! let file = ConfigFile::from_text(
//!     "# touchpad\n\
//!      gesture swipe up\t3 xdotool key super+Up\n\
//!      gesture pinch in\t2 notify-send pinch\n",
//! );
//! let set = BindingSet::from_config(file)?;
//! assert_eq!(set.len(), 2);
//! # Ok::<(), libinput_gestures_manager::core::parser::ParseError>(())
//! ```
//!
//! ## Adding a binding
//!
//! ```no_run
//! use libinput_gestures_manager::config::ConfigStore;
//! use libinput_gestures_manager::controller::Controller;
//! use libinput_gestures_manager::{Action, Binding, Gesture};
//! use std::path::PathBuf;
//!
//! let controller = Controller::new(ConfigStore::new(PathBuf::from(
//!     "/home/user/.config/libinput-gestures.conf",
//! )));
//! let binding = Binding {
//!     gesture: Gesture::SwipeLeft,
//!     fingers: 3,
//!     action: Action::Shortcut("super+Left".to_string()),
//! };
//! controller.upsert(controller.load()?, &binding)?;
//! # Ok::<(), libinput_gestures_manager::config::ConfigError>(())
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod daemon;

// Re-export commonly used types for convenience
pub use core::{Action, Binding, BindingKey, BindingSet, ConfigFile, Gesture};
