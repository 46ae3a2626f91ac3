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


//! libinput-gestures daemon control
//!
//! Thin wrapper around `libinput-gestures-setup`. Edits to the config only
//! take effect once the daemon is restarted, so the CLI offers the setup
//! tool's `status`, `start`, `stop` and `restart` subcommands.
//!
//! # Safety Modes
//!
//! - **DryRun**: Never spawns a process (default for tests)
//! - **ReadOnly**: May run `status`, nothing else
//! - **Live**: Runs every subcommand
//!
//! # Example
//! ```
//! use libinput_gestures_manager::daemon::{ClientMode, DaemonClient, DaemonCommand};
//!
//! let client = DaemonClient::new(ClientMode::DryRun);
//! assert_eq!(client.run(DaemonCommand::Restart).unwrap(), "");
//! ```

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::config::ConfigError;

/// Setup tool shipped with libinput-gestures
pub const SETUP_PROGRAM: &str = "libinput-gestures-setup";

/// Daemon client operation mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientMode {
    /// Never spawns the setup tool
    DryRun,

    /// Can query the daemon but cannot start or stop it
    ReadOnly,

    /// Full access
    Live,
}

/// Subcommands of the setup tool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaemonCommand {
    Status,
    Start,
    Stop,
    Restart,
}

impl DaemonCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            DaemonCommand::Status => "status",
            DaemonCommand::Start => "start",
            DaemonCommand::Stop => "stop",
            DaemonCommand::Restart => "restart",
        }
    }

    /// True for subcommands that change daemon state
    pub fn modifies(self) -> bool {
        !matches!(self, DaemonCommand::Status)
    }
}

impl fmt::Display for DaemonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of `libinput-gestures-setup status`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DaemonStatus {
    pub installed: bool,
    pub running: bool,
    pub autostart: bool,
}

impl DaemonStatus {
    /// Summarises the status text printed by the setup tool
    ///
    /// The tool prints lines such as `libinput-gestures is installed as ...`,
    /// `libinput-gestures is running as ...` and
    /// `libinput-gestures is set to autostart ...`. Their negated forms
    /// (`is not running`) do not match.
    ///
    /// # Example
    /// ```
    /// use libinput_gestures_manager::daemon::DaemonStatus;
    ///
    /// let status = DaemonStatus::from_output(
    ///     "libinput-gestures is installed as /usr/bin/libinput-gestures\n\
    ///      libinput-gestures is not running\n",
    /// );
    /// assert!(status.installed);
    /// assert!(!status.running);
    /// ```
    pub fn from_output(output: &str) -> Self {
        Self {
            installed: output.contains("is installed"),
            running: output.contains("is running"),
            autostart: output.contains("is set to autostart"),
        }
    }
}

/// Runs the libinput-gestures setup tool
pub struct DaemonClient {
    mode: ClientMode,
    program: PathBuf,
}

impl DaemonClient {
    /// Creates a client for `libinput-gestures-setup` on `PATH`
    pub fn new(mode: ClientMode) -> Self {
        Self {
            mode,
            program: PathBuf::from(SETUP_PROGRAM),
        }
    }

    /// Uses another program in place of the setup tool
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn mode(&self) -> ClientMode {
        self.mode
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs one subcommand and returns its standard output
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Captured output; empty in DryRun mode
    /// * `Err(ConfigError::DaemonReadOnly)` - State change in ReadOnly mode
    /// * `Err(ConfigError::DaemonNotInstalled)` - The program is not on `PATH`
    /// * `Err(ConfigError::DaemonCommandFailed)` - Non-zero exit status
    pub fn run(&self, command: DaemonCommand) -> Result<String, ConfigError> {
        match self.mode {
            ClientMode::DryRun => {
                debug!(%command, "dry run, not spawning setup tool");
                Ok(String::new())
            }
            ClientMode::ReadOnly if command.modifies() => {
                Err(ConfigError::DaemonReadOnly(command.to_string()))
            }
            ClientMode::ReadOnly | ClientMode::Live => self.spawn(command),
        }
    }

    /// Runs `status` and summarises the output
    pub fn status(&self) -> Result<DaemonStatus, ConfigError> {
        let output = self.run(DaemonCommand::Status)?;
        Ok(DaemonStatus::from_output(&output))
    }

    fn spawn(&self, command: DaemonCommand) -> Result<String, ConfigError> {
        let output = Command::new(&self.program)
            .arg(command.as_str())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ConfigError::DaemonNotInstalled(self.program.clone()),
                _ => ConfigError::DaemonCommandFailed(format!(
                    "{} {}: {}",
                    self.program.display(),
                    command,
                    e
                )),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(ConfigError::DaemonCommandFailed(format!(
                "{} {} exited with {}: {}",
                self.program.display(),
                command,
                output.status,
                detail
            )));
        }

        info!(%command, "ran setup tool");
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests;
