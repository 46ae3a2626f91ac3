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


//! Daemon client tests
//!
//! Nothing here spawns the real setup tool: live tests point the client at
//! a program that does not exist or at a stock Unix utility.

use crate::{
    config::ConfigError,
    daemon::{ClientMode, DaemonClient, DaemonCommand, DaemonStatus, SETUP_PROGRAM},
};

const STATUS_RUNNING: &str = "\
libinput-gestures is installed as /usr/bin/libinput-gestures
libinput-gestures desktop file is installed at /usr/share/applications/
libinput-gestures is set to autostart as self
libinput-gestures is running as PID 1234
";

#[test]
fn test_dryrun_never_spawns() {
    let client = DaemonClient::new(ClientMode::DryRun).with_program("/nonexistent/setup-tool");

    for command in [
        DaemonCommand::Status,
        DaemonCommand::Start,
        DaemonCommand::Stop,
        DaemonCommand::Restart,
    ] {
        assert_eq!(client.run(command).unwrap(), "", "{} should be a no-op", command);
    }
}

#[test]
fn test_dryrun_status_is_all_false() {
    let client = DaemonClient::new(ClientMode::DryRun);
    assert_eq!(client.status().unwrap(), DaemonStatus::default());
}

#[test]
fn test_readonly_blocks_state_changes() {
    let client = DaemonClient::new(ClientMode::ReadOnly).with_program("/nonexistent/setup-tool");

    match client.run(DaemonCommand::Restart) {
        Err(ConfigError::DaemonReadOnly(command)) => assert_eq!(command, "restart"),
        other => panic!("Expected DaemonReadOnly, got: {:?}", other),
    }
}

#[test]
fn test_missing_program_is_not_installed() {
    let client = DaemonClient::new(ClientMode::ReadOnly).with_program("/nonexistent/setup-tool");

    match client.run(DaemonCommand::Status) {
        Err(ConfigError::DaemonNotInstalled(path)) => {
            assert_eq!(path.to_str(), Some("/nonexistent/setup-tool"))
        }
        other => panic!("Expected DaemonNotInstalled, got: {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_live_returns_stdout() {
    // `echo restart` prints the subcommand back
    let client = DaemonClient::new(ClientMode::Live).with_program("echo");
    assert_eq!(client.run(DaemonCommand::Restart).unwrap(), "restart\n");
}

#[cfg(unix)]
#[test]
fn test_live_failure_is_command_failed() {
    let client = DaemonClient::new(ClientMode::Live).with_program("false");
    assert!(matches!(
        client.run(DaemonCommand::Stop),
        Err(ConfigError::DaemonCommandFailed(_))
    ));
}

#[test]
fn test_default_program() {
    let client = DaemonClient::new(ClientMode::Live);
    assert_eq!(client.program().to_str(), Some(SETUP_PROGRAM));
    assert_eq!(client.mode(), ClientMode::Live);
}

#[test]
fn test_status_running() {
    let status = DaemonStatus::from_output(STATUS_RUNNING);
    assert_eq!(
        status,
        DaemonStatus {
            installed: true,
            running: true,
            autostart: true,
        }
    );
}

#[test]
fn test_status_not_running() {
    let status = DaemonStatus::from_output(
        "libinput-gestures is installed as /usr/bin/libinput-gestures\n\
         libinput-gestures is not set to autostart\n\
         libinput-gestures is not running\n",
    );
    assert!(status.installed);
    assert!(!status.running);
    assert!(!status.autostart);
}

#[test]
fn test_status_empty_output() {
    assert_eq!(DaemonStatus::from_output(""), DaemonStatus::default());
}

#[test]
fn test_command_names() {
    assert_eq!(DaemonCommand::Status.as_str(), "status");
    assert_eq!(DaemonCommand::Restart.to_string(), "restart");
    assert!(!DaemonCommand::Status.modifies());
    assert!(DaemonCommand::Start.modifies());
}
