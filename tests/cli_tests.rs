//! CLI integration tests
//!
//! Drives the `stdev-guide` binary with assert_cmd.

// Binaries are stubbed during coverage runs
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn guide() -> Command {
    let mut cmd = Command::cargo_bin("stdev-guide").unwrap();
    cmd.env_remove("STDEV_GUIDE_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    guide()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdev-guide"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    guide()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdev-guide"));
}

#[test]
fn test_super_button_help() {
    guide()
        .args(["super-button", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("single Excel file"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SHOW
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_show_plain() {
    guide()
        .args(["show", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User Guide: Standard Deviation"))
        .stdout(predicate::str::contains("## Input Structure"))
        .stdout(predicate::str::contains("Non-Numeric Columns → Numeric Columns"))
        .stdout(predicate::str::contains("[5. SUPER BUTTON]"))
        .stdout(predicate::str::contains("130,10%"))
        .stdout(predicate::str::contains("10.310"))
        .stdout(predicate::str::contains("youtu.be"));
}

#[test]
fn test_show_uses_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("guide.yaml");
    fs::write(
        &config,
        "video_url: https://example.com/video\nsuper_button:\n  default_sheets: [\"Bidder's Rank\"]\n",
    )
    .unwrap();

    guide()
        .args(["show", "--plain", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/video"))
        .stdout(predicate::str::contains("[x] Bidder's Rank"))
        .stdout(predicate::str::contains("[ ] Rank-1 Deviation (%)"));
}

#[test]
fn test_show_unknown_default_sheet_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("guide.yaml");
    fs::write(&config, "super_button:\n  default_sheets: [\"Histogram\"]\n").unwrap();

    guide()
        .args(["show", "--plain", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("default sheet 'Histogram'"));
}

#[test]
fn test_bad_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("guide.yaml");
    fs::write(&config, "no_such_key: 1\n").unwrap();

    guide()
        .args(["show", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ═══════════════════════════════════════════════════════════════════════════
// DOWNLOADS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_dummy_download() {
    let temp_dir = TempDir::new().unwrap();

    guide()
        .args(["dummy", "--preview", "-o"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dummy dataset ready"))
        .stdout(predicate::str::contains("Installation Services"));

    assert!(temp_dir
        .path()
        .join("Dummy Dataset - Standard Deviation.xlsx")
        .exists());
}

#[test]
fn test_super_button_download() {
    let temp_dir = TempDir::new().unwrap();

    guide()
        .args(["super-button", "-s", "Summary Deviation (%)", "-s", "Bidder's Rank", "-o"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Summary Deviation (%)"))
        .stdout(predicate::str::contains("2. Bidder's Rank"))
        .stdout(predicate::str::contains("Export Complete"));

    assert!(temp_dir
        .path()
        .join("Super Button - Standard Deviation.xlsx")
        .exists());
}

#[test]
fn test_super_button_unknown_sheet() {
    let temp_dir = TempDir::new().unwrap();

    guide()
        .args(["super-button", "-s", "Histogram", "-o"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sheet: 'Histogram'"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEETS AND FORMAT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheets_json() {
    let output = guide().args(["sheets", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(3));
    assert_eq!(json[0]["name"], "Bidder's Rank");
}

#[test]
fn test_sheets_listing() {
    guide()
        .arg("sheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank-1 Deviation (%)"))
        .stdout(predicate::str::contains("#,##0"));
}

#[test]
fn test_format_values() {
    guide()
        .args(["format", "10310", "1234.5", "Vendor A", "-1500"])
        .assert()
        .success()
        .stdout("10.310\n1.234,50\nVendor A\n-1.500\n");
}

#[test]
fn test_format_percent() {
    guide()
        .args(["format", "--percent", "27.35", "0"])
        .assert()
        .success()
        .stdout("27,35%\n0%\n");
}
