//! Shared E2E test helpers for `juris` binary tests.

use std::time::Duration;

/// Default timeout for CLI tests.
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Build a Command for the `juris` binary.
pub fn juris_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("juris").expect("juris binary builds");
    cmd.timeout(TIMEOUT);
    cmd
}
