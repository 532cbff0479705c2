//! Integration tests for memlog
//!
//! These tests verify end-to-end behavior of the store, search, and
//! retrieval operations against a real log file on disk.

use memlog::{MemlogError, MemoryLog};
use tempfile::TempDir;

fn fruit_log(temp: &TempDir) -> MemoryLog {
    let log = MemoryLog::open(temp.path().join("memory.log"));
    log.append("apples are red").unwrap();
    log.append("bananas are yellow").unwrap();
    log.append("grapes are purple").unwrap();
    log
}

// =============================================================================
// Append + read-back
// =============================================================================

#[test]
fn test_append_then_read_all_includes_new_final_line() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = fruit_log(&temp);

    let before = log.len().unwrap();
    log.append("kiwis are green").unwrap();

    let lines = log.read_all().unwrap();
    assert_eq!(lines.len(), before + 1);
    assert_eq!(lines.last().unwrap(), "kiwis are green");
}

#[test]
fn test_every_call_observes_current_file_state() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("memory.log");

    // Two handles over the same file see each other's appends
    let writer = MemoryLog::open(&path);
    let reader = MemoryLog::open(&path);

    writer.append("written by first handle").unwrap();
    assert_eq!(reader.len().unwrap(), 1);
    assert_eq!(reader.get(1).unwrap(), "written by first handle");
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_ranks_exact_above_fuzzy() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = fruit_log(&temp);
    log.append("appless are redd").unwrap();

    let matches = memlog::search(&log, "apples are red", None).unwrap();
    assert_eq!(matches[0].text, "apples are red");
    assert!(matches[0].score > matches.last().unwrap().score);
}

#[test]
fn test_search_typo_recalls_right_line() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = fruit_log(&temp);

    let matches = memlog::search(&log, "aple", None).unwrap();
    assert_eq!(matches[0].text, "apples are red");
    assert!(matches[0].score > 0.0);
}

#[test]
fn test_search_no_match_is_empty_success() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = fruit_log(&temp);

    let matches = memlog::search(&log, "zzzzqqqq", None).unwrap();
    assert!(matches.is_empty());
}

// =============================================================================
// Selector fetch
// =============================================================================

#[test]
fn test_fetch_range_clipped_to_log() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = fruit_log(&temp);

    let lines = memlog::fetch(&log, "2-10").unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line_number, 2);
    assert_eq!(lines[1].line_number, 3);
}

#[test]
fn test_fetch_error_kinds() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = fruit_log(&temp);

    assert!(matches!(
        memlog::fetch(&log, "50").unwrap_err(),
        MemlogError::NoneInRange { .. }
    ));
    assert!(matches!(
        memlog::fetch(&log, "abc").unwrap_err(),
        MemlogError::InvalidSelector { .. }
    ));
}

// =============================================================================
// Binary smoke test
// =============================================================================

#[test]
fn test_cli_append_search_show() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp.path().join("memory.log");

    Command::cargo_bin("ml")
        .unwrap()
        .args(["--log-file", log_file.to_str().unwrap(), "append", "the meeting is at noon"])
        .assert()
        .success();

    Command::cargo_bin("ml")
        .unwrap()
        .args(["--log-file", log_file.to_str().unwrap(), "search", "meeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the meeting is at noon"));

    Command::cargo_bin("ml")
        .unwrap()
        .args(["--log-file", log_file.to_str().unwrap(), "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the meeting is at noon"));
}

#[test]
fn test_cli_show_miss_is_plain_output_not_error() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp.path().join("memory.log");

    Command::cargo_bin("ml")
        .unwrap()
        .args(["--log-file", log_file.to_str().unwrap(), "append", "only line"])
        .assert()
        .success();

    // Out-of-range lookup is answered, not reported as a failure
    Command::cargo_bin("ml")
        .unwrap()
        .args(["--log-file", log_file.to_str().unwrap(), "show", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No lines in range"));

    // A selector with no line numbers at all is still an error
    Command::cargo_bin("ml")
        .unwrap()
        .args(["--log-file", log_file.to_str().unwrap(), "show", "abc"])
        .assert()
        .failure();
}
