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


//! Configuration transaction with optional backup
//!
//! Provides the all-or-nothing write behind `ConfigStore::save`.

use atomic_write_file::AtomicWriteFile;
use std::{fs, io::Write, path::{Path, PathBuf}};
use tracing::info;

use crate::config::{ConfigError, ConfigStore};
use crate::core::ConfigFile;

/// One atomic replacement of the config file.
///
/// # Lifecycle
///
/// 1. `begin()` - Creates a timestamped backup (if the store has backups on)
/// 2. `commit()` - Writes the new content atomically
///
/// Dropping a transaction without committing leaves the config untouched.
///
/// # Example
///
/// ```no_run
/// use libinput_gestures_manager::config::{ConfigStore, ConfigTransaction};
/// use libinput_gestures_manager::core::ConfigFile;
/// use std::path::PathBuf;
///
/// let store = ConfigStore::new(PathBuf::from("libinput-gestures.conf")).with_backups();
/// let tx = ConfigTransaction::begin(&store)?;
///
/// let new_content = ConfigFile::from_text("gesture swipe up 3 xdotool key super+Up\n");
/// tx.commit(&new_content)?;
/// # Ok::<(), libinput_gestures_manager::config::ConfigError>(())
/// ```
pub struct ConfigTransaction<'a> {
    store: &'a ConfigStore,
    backup_path: Option<PathBuf>,
}

impl<'a> ConfigTransaction<'a> {
    /// Begins a new transaction, backing up the current file first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup directory cannot be created or the
    /// backup cannot be written. No changes are made in that case.
    pub fn begin(store: &'a ConfigStore) -> Result<Self, ConfigError> {
        let backup_path = store.create_timestamped_backup()?;

        Ok(Self { store, backup_path })
    }

    /// Backup created by `begin()`, if any
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Commits the transaction by atomically writing `file` to the config path.
    ///
    /// The write is atomic at the filesystem level (temp file + rename).
    /// Consumes the transaction, so a transaction commits at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The temporary file cannot be created or written
    /// - The atomic rename fails
    ///
    /// On error the original config file is unchanged.
    pub fn commit(self, file: &ConfigFile) -> Result<(), ConfigError> {
        let path = self.store.path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Open file for atomic writing
        let mut handle = AtomicWriteFile::options().open(path).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        handle
            .write_all(file.to_text().as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        // Commit atomically
        handle.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        match &self.backup_path {
            Some(backup) => info!(
                path = %path.display(),
                backup = %backup.display(),
                lines = file.len(),
                "saved config"
            ),
            None => info!(path = %path.display(), lines = file.len(), "saved config"),
        }

        Ok(())
    }
}
