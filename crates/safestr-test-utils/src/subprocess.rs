// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::process::{Command, ExitStatus, Stdio};

/// Re-runs an ignored test of the current test binary in a subprocess and
/// returns how it exited.
///
/// Used for behaviour that takes the process down, such as the default
/// constraint handler.
pub fn run_test_as_subprocess(test_name: &str) -> ExitStatus {
    let exe = std::env::current_exe().expect("Failed to get current exe");
    Command::new(exe)
        .args(["--exact", test_name, "--ignored", "--test-threads=1"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("Failed to run subprocess")
}
