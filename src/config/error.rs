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


use std::path::PathBuf;
use thiserror::Error;

use crate::core::{parser::ParseError, ValidationError};

/// Errors that can occur while loading, editing or saving the config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file or backup could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// The config contains a malformed line.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// A binding would not survive a save/parse cycle.
    #[error("Invalid binding: {0}")]
    Validation(#[from] ValidationError),
    /// The daemon setup tool is not on PATH.
    #[error("Cannot find {0}. Is libinput-gestures installed?")]
    DaemonNotInstalled(PathBuf),
    /// The setup tool ran but reported failure.
    #[error("Daemon command failed: {0}")]
    DaemonCommandFailed(String),
    /// The client mode forbids the requested command.
    #[error("Daemon client in read-only mode: cannot {0}")]
    DaemonReadOnly(String),
}
