//! Integration tests for siterecon.
//!
//! These tests verify end-to-end behavior without relying on external
//! network services: targets point at unroutable local endpoints, so every
//! extractor exercises its failure-to-empty policy and the assertions stay
//! deterministic.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::str;

use tempfile::{tempdir, NamedTempFile};

/// An endpoint that refuses connections immediately on any sane host.
const UNREACHABLE_TARGET: &str = "http://127.0.0.1:1/";

/// Helper to get the path to the compiled binary
fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    if path.ends_with("deps") {
        path.pop(); // Remove "deps" directory
    }
    path.push("siterecon");
    path
}

/// Base command with short timeouts so failure paths settle quickly.
fn recon_command() -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.env("SITERECON_FETCH_TIMEOUT", "1")
        .env("SITERECON_WHOIS_TIMEOUT", "1");
    cmd
}

#[test]
fn missing_url_is_a_usage_error() {
    let output = recon_command().output().expect("Failed to execute binary");
    assert!(!output.status.success());
}

#[test]
fn unreachable_target_still_emits_complete_record() {
    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent")
        .arg("TestUA/1.0")
        .output()
        .expect("Failed to execute binary");

    // Swallowed per-extractor failures are normal completion.
    assert!(output.status.success(), "exit should be 0: {output:?}");

    let stdout = str::from_utf8(&output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout).expect("stdout must be JSON");
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 8, "exactly eight top-level keys: {object:?}");
    for key in [
        "target_url",
        "emails",
        "links",
        "authors",
        "phones",
        "creation_update_info",
        "servers",
        "locations",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }

    assert_eq!(value["target_url"], UNREACHABLE_TARGET);
    assert_eq!(value["emails"], serde_json::json!([]));
    assert_eq!(value["links"], serde_json::json!([]));
    assert_eq!(value["authors"], serde_json::Value::Null);
    assert_eq!(value["phones"], serde_json::json!([]));
    assert_eq!(value["locations"], serde_json::json!([]));
}

#[test]
fn output_flag_writes_file_instead_of_stdout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("record.json");

    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent")
        .arg("TestUA/1.0")
        .arg("--output")
        .arg(&path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(str::from_utf8(&output.stdout).unwrap().trim().is_empty());

    let contents = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["target_url"], UNREACHABLE_TARGET);

    // Pretty-printed with 4-space indentation.
    assert!(contents.contains("\n    \"target_url\""));
}

#[test]
fn random_mode_with_missing_list_file_fails() {
    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent-file")
        .arg("/nonexistent/useragents.txt")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("useragents.txt"),
        "stderr should name the list file: {stderr}"
    );
}

#[test]
fn random_mode_with_empty_list_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "\n\n").unwrap();

    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent-file")
        .arg(file.path())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("empty"), "stderr: {stderr}");
}

#[test]
fn random_mode_samples_from_provided_list() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "TestUA-A/1.0\nTestUA-B/1.0").unwrap();

    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent-file")
        .arg(file.path())
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(stdout).is_ok());
}

#[test]
fn warnings_reported_at_verbosity_two() {
    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent")
        .arg("TestUA/1.0")
        .arg("--verbose")
        .arg("2")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("degraded to empty"),
        "diagnostics expected on stderr: {stderr}"
    );
}

#[test]
fn silent_mode_keeps_stderr_clean() {
    let output = recon_command()
        .arg(UNREACHABLE_TARGET)
        .arg("--useragent")
        .arg("TestUA/1.0")
        .arg("--verbose")
        .arg("0")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(str::from_utf8(&output.stderr).unwrap().trim().is_empty());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let run = || {
        recon_command()
            .arg(UNREACHABLE_TARGET)
            .arg("--useragent")
            .arg("TestUA/1.0")
            .output()
            .expect("Failed to execute binary")
            .stdout
    };
    assert_eq!(run(), run());
}
