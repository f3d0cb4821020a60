//! Integration tests for the `tportal` CLI binary.
//!
//! Argument parsing, help output, completions and configuration errors,
//! all without a live Traffic Ops instance.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

const NONEXISTENT_HOME: &str = "/tmp/tportal-cli-test-nonexistent";

/// `tportal` with every `TPORTAL_*` variable cleared and config
/// directories pointed at `home`.
fn tportal_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tportal");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TPORTAL_PROFILE")
        .env_remove("TPORTAL_URL")
        .env_remove("TPORTAL_USERNAME")
        .env_remove("TPORTAL_PASSWORD")
        .env_remove("TPORTAL_OUTPUT")
        .env_remove("TPORTAL_INSECURE")
        .env_remove("TPORTAL_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

fn tportal_cmd() -> assert_cmd::Command {
    tportal_cmd_in(Path::new(NONEXISTENT_HOME))
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = tportal_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    tportal_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Traffic Ops")
            .and(predicate::str::contains("cdns"))
            .and(predicate::str::contains("servers"))
            .and(predicate::str::contains("ds")),
    );
}

#[test]
fn test_version_flag() {
    tportal_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tportal"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    tportal_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    tportal_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    tportal_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = tportal_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_cdns_list_without_profile() {
    tportal_cmd()
        .args(["cdns", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("profile"));
}

#[test]
fn test_invalid_output_format() {
    let output = tportal_cmd()
        .args(["--output", "invalid", "cdns", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_page_size() {
    let output = tportal_cmd()
        .args(["servers", "list", "--page-size", "10"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("possible values"));
}

#[test]
fn test_desc_requires_sort() {
    tportal_cmd()
        .args(["servers", "list", "--desc"])
        .assert()
        .code(2);
}

#[test]
fn test_global_flags_parsing() {
    // Flags parse; the failure is the missing profile, not the arguments.
    tportal_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "servers",
            "list",
            "--page-size",
            "all",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("profile"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    tportal_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_set_then_profiles() {
    let home = tempfile::tempdir().unwrap();

    tportal_cmd_in(home.path())
        .args(["--profile", "lab", "config", "set", "url", "https://to.lab.example.net"])
        .assert()
        .success();
    tportal_cmd_in(home.path())
        .args(["config", "use", "lab"])
        .assert()
        .success();

    tportal_cmd_in(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lab *"));
}

#[test]
fn test_config_set_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    tportal_cmd_in(home.path())
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_config_use_missing_profile() {
    let home = tempfile::tempdir().unwrap();
    tportal_cmd_in(home.path())
        .args(["config", "use", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_cdns_subcommands_exist() {
    tportal_cmd()
        .args(["cdns", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_servers_subcommands_exist() {
    tportal_cmd()
        .args(["servers", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("queue-updates"))
                .and(predicate::str::contains("clear-updates"))
                .and(predicate::str::contains("ssh"))
                .and(predicate::str::contains("monitor")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    tportal_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-password")),
        );
}
