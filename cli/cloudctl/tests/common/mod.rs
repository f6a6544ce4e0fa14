// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for cloudctl integration tests

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated, clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;

/// Environment variables that would leak the developer's own setup into tests
const CLOUDCTL_ENV: &[&str] = &[
    "CLOUDCTL_PROFILE",
    "CLOUDCTL_URL",
    "CLOUDCTL_API_KEY",
    "CLOUDCTL_REGION",
    "CLOUDCTL_WAIT_TIMEOUT",
    "CLOUDCTL_WAIT_INTERVAL",
];

/// Get a Command for running the cloudctl binary
pub fn cloudctl_cmd() -> Command {
    Command::cargo_bin("cloudctl").expect("Failed to find cloudctl binary")
}

/// A cloudctl Command isolated to `config_dir` with no ambient profile
pub fn isolated_cmd(config_dir: &Path) -> Command {
    let mut cmd = cloudctl_cmd();
    for var in CLOUDCTL_ENV {
        cmd.env_remove(var);
    }
    cmd.env("CLOUDCTL_CONFIG_DIR", config_dir);
    cmd
}

/// Like [`isolated_cmd`], with an env profile pointing at a closed port
pub fn offline_cmd(config_dir: &Path) -> Command {
    let mut cmd = isolated_cmd(config_dir);
    cmd.env("CLOUDCTL_URL", "http://127.0.0.1:9")
        .env("CLOUDCTL_API_KEY", "test-key");
    cmd
}
