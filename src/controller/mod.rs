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


//! Editing session over one gesture config
//!
//! # Responsibilities
//!
//! - Load the config and build a `BindingSet`
//! - Persist upserts and deletes with a single save each
//! - Run repair when the caller explicitly asks for it
//!
//! # Lifecycle
//!
//! Every edit starts from a fresh `load()`. `upsert` and `delete` consume
//! the `BindingSet` they were given, so a stale set cannot be saved twice.
//! The controller never prompts: on a parse error the caller decides
//! whether to call `repair`.

use tracing::info;

use crate::config::{repair, ConfigError, ConfigStore, RepairReport};
use crate::core::{validate_binding, Binding, BindingKey, BindingSet};

/// Coordinates the config store and binding sets
pub struct Controller {
    store: ConfigStore,
}

impl Controller {
    /// Creates a controller for the given store
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libinput_gestures_manager::config::ConfigStore;
    /// use libinput_gestures_manager::controller::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::new(ConfigStore::new(
    ///     PathBuf::from("/home/user/.config/libinput-gestures.conf"),
    /// ));
    /// let set = controller.load()?;
    /// println!("{} gestures bound", set.len());
    /// # Ok::<(), libinput_gestures_manager::config::ConfigError>(())
    /// ```
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Loads and parses the config
    ///
    /// # Returns
    ///
    /// * `Ok(BindingSet)` - Every line is well-formed
    /// * `Err(ConfigError::Parse)` - A malformed line; nothing was changed
    /// * `Err(ConfigError::Io)` - The file exists but cannot be read
    pub fn load(&self) -> Result<BindingSet, ConfigError> {
        let file = self.store.load()?;
        Ok(BindingSet::from_config(file)?)
    }

    /// Adds `binding`, replacing any binding with the same gesture and
    /// finger count, and saves
    ///
    /// The binding is validated first; an invalid binding writes nothing.
    pub fn upsert(&self, set: BindingSet, binding: &Binding) -> Result<(), ConfigError> {
        validate_binding(binding)?;

        let replaced = set.get(binding.key()).is_some();
        let file = set.with_upsert(binding);
        self.store.save(&file)?;

        info!(
            gesture = binding.gesture.label(),
            fingers = binding.fingers,
            replaced,
            "saved binding"
        );
        Ok(())
    }

    /// Removes every binding for `key` and saves
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Bindings were removed and the file saved
    /// * `Ok(false)` - Nothing was bound to `key`; the file is untouched
    pub fn delete(&self, set: BindingSet, key: BindingKey) -> Result<bool, ConfigError> {
        let file = set.with_delete(key);
        if file == set.config() {
            return Ok(false);
        }

        self.store.save(&file)?;

        info!(
            gesture = key.gesture.label(),
            fingers = key.fingers,
            "deleted binding"
        );
        Ok(true)
    }

    /// Drops every malformed line from the config and saves the result
    ///
    /// Irreversible unless the store keeps backups. When nothing is
    /// malformed the file is not rewritten.
    pub fn repair(&self) -> Result<RepairReport, ConfigError> {
        let file = self.store.load()?;
        let report = repair(&file);

        if !report.is_clean() {
            self.store.save(&report.config)?;
            info!(dropped = report.dropped.len(), "repaired config");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests;
