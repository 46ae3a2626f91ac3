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


//! Configuration file storage with atomic writes and optional backups.
//!
//! `ConfigStore` is the only code that touches the gesture config on disk:
//!
//! - **Missing file is empty**: loading a config that does not exist yet
//!   returns an empty `ConfigFile`
//! - **Atomic writes**: saves go through temp-file-then-rename, so the file
//!   is never half written
//! - **Optional backups**: a timestamped copy of the old file before each save
//! - **Symlink warnings**: symlinked configs are allowed but logged
//!
//! There is no locking. Edits made by another process between a load and
//! the following save are overwritten.
//!
//! # Example
//!
//! ```no_run
//! use libinput_gestures_manager::config::ConfigStore;
//!
//! let store = ConfigStore::new("/home/user/.config/libinput-gestures.conf".into())
//!     .with_backups();
//!
//! let config = store.load()?;
//! store.save(&config)?;
//! # Ok::<(), libinput_gestures_manager::config::ConfigError>(())
//! ```

use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::ConfigFile;

pub mod error;
pub mod repair;
pub mod transaction;

pub use error::ConfigError;
pub use repair::{repair, DroppedLine, RepairReport};
pub use transaction::ConfigTransaction;

/// Name of the directory, next to the config file, that holds backups.
const BACKUP_DIR_NAME: &str = "backups";

/// Reads and writes one gesture config file.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    /// Path to the libinput-gestures configuration file.
    config_path: PathBuf,
    /// Where backups go; `None` disables them.
    backup_dir: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates a store for the given path.
    ///
    /// The file does not have to exist; it is created on the first save.
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            backup_dir: None,
        }
    }

    /// Enables a timestamped backup before every save.
    ///
    /// Backups go to a `backups/` directory beside the config file,
    /// e.g. `~/.config/backups/libinput-gestures.conf.2025-10-10_221500`.
    pub fn with_backups(mut self) -> Self {
        let parent = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.backup_dir = Some(parent.join(BACKUP_DIR_NAME));
        self
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn backup_dir(&self) -> Option<&Path> {
        self.backup_dir.as_deref()
    }

    /// Reads the config file into raw lines.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file exists but cannot be read.
    /// A missing file is not an error.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        if self.config_path.read_link().is_ok() {
            warn!(path = %self.config_path.display(), "config file is a symlink");
        }

        match fs::read_to_string(&self.config_path) {
            Ok(content) => {
                let file = ConfigFile::from_text(&content);
                debug!(path = %self.config_path.display(), lines = file.len(), "loaded config");
                Ok(file)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "no config file yet");
                Ok(ConfigFile::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Replaces the config file with `file` in one atomic write.
    ///
    /// Creates the parent directory if needed. When backups are enabled
    /// the old content is copied first; if that fails nothing is written.
    pub fn save(&self, file: &ConfigFile) -> Result<(), ConfigError> {
        ConfigTransaction::begin(self)?.commit(file)
    }

    /// Copies the current config into the backup directory.
    ///
    /// Returns `Ok(None)` when backups are disabled or there is no config
    /// file to back up yet.
    pub(crate) fn create_timestamped_backup(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(backup_dir) = &self.backup_dir else {
            return Ok(None);
        };

        let content = match fs::read(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        fs::create_dir_all(backup_dir).map_err(|e| {
            ConfigError::BackupFailed(format!("{}: {}", backup_dir.display(), e))
        })?;

        let original_name = self
            .config_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConfigError::BackupFailed(format!(
                    "config path has no usable file name: {}",
                    self.config_path.display()
                ))
            })?;

        // Timestamp in YYYY-MM-DD_HHMMSS format, suffixed on collision
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let mut backup_path = backup_dir.join(format!("{}.{}", original_name, timestamp));
        let mut attempt = 1;
        while backup_path.exists() {
            backup_path = backup_dir.join(format!("{}.{}-{}", original_name, timestamp, attempt));
            attempt += 1;
        }

        fs::write(&backup_path, content)
            .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        Ok(Some(backup_path))
    }

    /// Lists backups of this config, oldest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let Some(backup_dir) = &self.backup_dir else {
            return Ok(Vec::new());
        };
        if !backup_dir.exists() {
            return Ok(Vec::new());
        }

        let prefix = self
            .config_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{}.", name))
            .unwrap_or_default();

        let mut backups = fs::read_dir(backup_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect::<Vec<_>>();

        backups.sort();
        Ok(backups)
    }
}

#[cfg(test)]
mod tests;
