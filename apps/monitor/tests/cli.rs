//! CLI 冒烟测试

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_monitor_options() {
    Command::cargo_bin("xense-monitor")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--interval-ms"))
        .stdout(predicate::str::contains("--mock"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn version_prints() {
    Command::cargo_bin("xense-monitor")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xense-monitor"));
}
