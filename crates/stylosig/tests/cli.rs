//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Signature of "A short bland text.".
const SHORT_SIGNATURE: &str = "3.75,1,1,18,1,18";

const SHORT_TEXT: &str = "A short bland text.";
const VERBOSE_TEXT: &str = "A verbose text with many many distinct long words indeed.";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write each text to `textN.txt` inside a fresh temp dir.
fn corpus(texts: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let tmp = TempDir::new().unwrap();
    let paths = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let path = tmp.path().join(format!("text{}.txt", i + 1));
            fs::write(&path, text).unwrap();
            path
        })
        .collect();
    (tmp, paths)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let tmp = TempDir::new().unwrap();
    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Signature Command
// =============================================================================

#[test]
fn signature_compact_prints_six_values() {
    let (_tmp, paths) = corpus(&[SHORT_TEXT]);
    cmd()
        .args(["signature", "--compact"])
        .arg(&paths[0])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "3.7500,1.0000,1.0000,18.0000,1.0000,18.0000\n",
        ));
}

#[test]
fn signature_json_reports_counts() {
    let (_tmp, paths) = corpus(&["The cat, the dog. A cat!"]);
    let output = cmd()
        .args(["--json", "signature"])
        .arg(&paths[0])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["clauses"], 3);
    assert_eq!(json["words"], 6);
    assert_eq!(json["signature"]["sac"], 1.5);
}

#[test]
fn signature_of_missing_file_fails() {
    cmd()
        .args(["signature", "/nonexistent/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn signature_respects_input_limit() {
    let (tmp, paths) = corpus(&[VERBOSE_TEXT]);
    let config = tmp.path().join("limits.toml");
    fs::write(&config, "max_input_bytes = 8\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("signature")
        .arg(&paths[0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Compare Command
// =============================================================================

#[test]
fn compare_exact_match_is_zero() {
    let (_tmp, paths) = corpus(&[SHORT_TEXT]);
    cmd()
        .args(["--color", "never", "compare", "--signature", SHORT_SIGNATURE])
        .arg(&paths[0])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0000 "));
}

#[test]
fn compare_without_reference_fails() {
    let (tmp, paths) = corpus(&[SHORT_TEXT]);
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "compare"])
        .arg(&paths[0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no reference signature"));
}

// =============================================================================
// Rank Command
// =============================================================================

#[test]
fn rank_picks_exact_match() {
    let (_tmp, paths) = corpus(&[SHORT_TEXT, VERBOSE_TEXT]);
    cmd()
        .args(["rank", "--index-only", "--signature", SHORT_SIGNATURE])
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn rank_picks_later_match() {
    let (_tmp, paths) = corpus(&[VERBOSE_TEXT, SHORT_TEXT]);
    cmd()
        .args(["rank", "--index-only", "--signature", SHORT_SIGNATURE])
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn rank_tie_goes_to_first_text() {
    let (_tmp, paths) = corpus(&["Hello there.", "Other thing."]);
    cmd()
        .args(["rank", "--index-only", "--signature", "0,0,0,0,0,0"])
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn rank_with_reference_text() {
    let (_tmp, paths) = corpus(&[SHORT_TEXT, VERBOSE_TEXT, VERBOSE_TEXT]);
    cmd()
        .args(["rank", "--index-only", "--reference-text"])
        .arg(&paths[2])
        .args(&paths[..2])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn rank_reads_texts_from_stdin() {
    cmd()
        .args(["rank", "--index-only", "--signature", SHORT_SIGNATURE])
        .write_stdin(format!("{VERBOSE_TEXT}\n{SHORT_TEXT}\n\n{SHORT_TEXT}\n"))
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn rank_with_empty_stdin_fails() {
    cmd()
        .args(["rank", "--signature", SHORT_SIGNATURE])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no candidate texts"));
}

#[test]
fn rank_text_output_names_closest_file() {
    let (_tmp, paths) = corpus(&[VERBOSE_TEXT, SHORT_TEXT]);
    cmd()
        .args(["--color", "never", "rank", "--signature", SHORT_SIGNATURE])
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::contains("Closest match: text 2"))
        .stdout(predicate::str::contains("text2.txt"));
}

#[test]
fn rank_json_lists_candidates() {
    let (_tmp, paths) = corpus(&[SHORT_TEXT, VERBOSE_TEXT]);
    let output = cmd()
        .args(["--json", "rank", "--signature", SHORT_SIGNATURE])
        .args(&paths)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["best"], 1);
    assert_eq!(json["candidates"].as_array().unwrap().len(), 2);
    assert_eq!(json["candidates"][0]["distance"], 0.0);
    assert_eq!(json["sources"].as_array().unwrap().len(), 2);
}

#[test]
fn rank_rejects_malformed_signature() {
    cmd()
        .args(["rank", "--signature", "1,2,three,4,5,6", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`three` is not a number"));
}

#[test]
fn rank_rejects_nan_signature() {
    let (_tmp, paths) = corpus(&[VERBOSE_TEXT, SHORT_TEXT]);
    cmd()
        .args(["rank", "--signature", "nan,0,0,0,0,0"])
        .args(&paths)
        .assert()
        .failure()
        .stderr(predicate::str::contains("`nan` is not a finite number"));
}

#[test]
fn rank_rejects_signature_with_wrong_arity() {
    cmd()
        .args(["rank", "--signature", "1,2,3,4,5", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 5"));
}
