// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, etc.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated, clippy::expect_used)]

mod common;

use common::cloudctl_cmd;
use predicates::prelude::*;
use test_case::test_case;

#[test]
fn test_cloudctl_version() {
    cloudctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudctl"));
}

#[test]
fn test_cloudctl_help() {
    cloudctl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("instance"))
        .stdout(predicate::str::contains("--format"));
}

#[test_case(&["instance"]; "instance")]
#[test_case(&["instance", "list"]; "instance list")]
#[test_case(&["instance", "show"]; "instance show")]
#[test_case(&["instance", "create"]; "instance create")]
#[test_case(&["instance", "delete"]; "instance delete")]
#[test_case(&["instance", "resize"]; "instance resize")]
#[test_case(&["instance", "wait"]; "instance wait")]
#[test_case(&["instances"]; "instances shortcut")]
#[test_case(&["dns", "zone", "list"]; "dns zone list")]
#[test_case(&["dns", "zone", "show"]; "dns zone show")]
#[test_case(&["ddos", "profile", "list"]; "ddos profile list")]
fn test_subcommand_help(args: &[&str]) {
    cloudctl_cmd()
        .args(args)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_list_help_mentions_filter_syntax() {
    cloudctl_cmd()
        .args(["instance", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("property[:operator]=value"));
}

#[test]
fn test_alias_matches_canonical_help() {
    let canonical = cloudctl_cmd()
        .args(["instance", "list", "-h"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    cloudctl_cmd()
        .args(["instance", "ls", "-h"])
        .assert()
        .success()
        .stdout(predicates::ord::eq(canonical));
}

#[test]
fn test_json_conflicts_with_format() {
    cloudctl_cmd()
        .args(["--json", "--format", "csv", "instance", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
