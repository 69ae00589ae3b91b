//! Integration tests for wikicat


use assert_cmd::Command;
use harness::{TestDump, animals_dump, lines, run_wikicat};
use predicates::prelude::*;

#[test]
fn test_direct_children_by_default() {
    let dump = animals_dump();
    let (stdout, _stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals"]);
    assert!(success, "wikicat should succeed");
    assert_eq!(lines(&stdout), vec!["Mammals", "Birds"]);
}

#[test]
fn test_depth_limit() {
    let dump = animals_dump();
    let (stdout, _stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals", "-l", "2"]);
    assert!(success);
    assert_eq!(
        lines(&stdout),
        vec!["Mammals", "Cats", "Animals", "Birds", "Sparrows"]
    );
}

#[test]
fn test_loop_guard_emits_but_does_not_expand() {
    let dump = animals_dump();
    let (stdout, _stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals", "-l", "5"]);
    assert!(success);
    // Animals shows up once under Mammals and is not walked again
    assert_eq!(
        lines(&stdout),
        vec!["Mammals", "Cats", "Animals", "Birds", "Sparrows"]
    );
}

#[test]
fn test_loop_flag_expands_until_limit() {
    let dump = animals_dump();
    let (stdout, _stderr, success) =
        run_wikicat(&dump.path(), &["-t", "Animals", "-l", "3", "--loop"]);
    assert!(success);
    assert_eq!(
        lines(&stdout),
        vec![
            "Mammals", "Cats", "Animals", "Mammals", "Birds", "Birds", "Sparrows"
        ]
    );
}

#[test]
fn test_unique_flag() {
    let dump = animals_dump();
    let (stdout, _stderr, success) =
        run_wikicat(&dump.path(), &["-t", "Animals", "-l", "3", "--loop", "-u"]);
    assert!(success);
    // Birds is first found below the second Animals, so the root's own Birds
    // edge is a duplicate and Sparrows is never reached
    assert_eq!(lines(&stdout), vec!["Mammals", "Cats", "Animals", "Birds"]);
}

#[test]
fn test_exclude_prunes_subtree() {
    let dump = animals_dump();
    let (stdout, _stderr, success) =
        run_wikicat(&dump.path(), &["-t", "Animals", "-l", "3", "-e", "Mammals"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["Birds", "Sparrows"]);
}

#[test]
fn test_exclude_many() {
    let dump = animals_dump();
    let (stdout, _stderr, success) = run_wikicat(
        &dump.path(),
        &["-t", "Animals", "-l", "3", "-e", "Cats", "Sparrows"],
    );
    assert!(success);
    assert_eq!(lines(&stdout), vec!["Mammals", "Animals", "Birds"]);
}

#[test]
fn test_quiet_prints_nothing() {
    let dump = animals_dump();
    let (stdout, stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals", "-q"]);
    assert!(success);
    assert!(stdout.is_empty(), "quiet should not print: {}", stdout);
    assert!(!stderr.contains("INFO"), "quiet should not log info: {}", stderr);
}

#[test]
fn test_dev_logs_trace_lines() {
    let dump = animals_dump();
    let (_stdout, stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals", "-l", "2", "-d"]);
    assert!(success);
    assert!(
        stderr.contains("[2] Animals - Mammals - Cats"),
        "should log ancestor path: {}",
        stderr
    );
    assert!(stderr.contains("[1] Animals - Birds"));
}

#[test]
fn test_no_trace_lines_by_default() {
    let dump = animals_dump();
    let (_stdout, stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals"]);
    assert!(success);
    assert!(!stderr.contains("[1] Animals - Mammals"));
    assert!(stderr.contains("end: 2 categories"));
}

#[test]
fn test_pages_listed() {
    let dump = animals_dump();
    let (stdout, _stderr, success) =
        run_wikicat(&dump.path(), &["-t", "Animals", "-l", "2", "--pages"]);
    assert!(success);
    assert!(stdout.contains("  page: Zoo"), "{}", stdout);
    assert!(stdout.contains("  page: Lion"), "{}", stdout);
}

#[test]
fn test_json_output() {
    let dump = animals_dump();
    let (stdout, _stderr, success) = run_wikicat(&dump.path(), &["-t", "Animals", "--json"]);
    assert!(success);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["root"], "Animals");
    assert_eq!(json["categories"].as_array().unwrap().len(), 2);
    assert_eq!(json["categories"][1]["name"], "Birds");
}

#[test]
fn test_unknown_root_is_not_an_error() {
    let dump = animals_dump();
    let (stdout, _stderr, success) = run_wikicat(&dump.path(), &["-t", "Plants", "-l", "3"]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_target_is_used_as_given() {
    let dump = animals_dump();
    dump.add_subcat(" Animals", "Padded");
    let (stdout, _stderr, success) = run_wikicat(&dump.path(), &["-t", " Animals"]);
    assert!(success);
    assert_eq!(lines(&stdout), vec!["Padded"]);
}

#[test]
fn test_blank_target_rejected() {
    let dump = animals_dump();
    Command::cargo_bin("wikicat")
        .unwrap()
        .arg(dump.path())
        .args(["-t", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a root category is required"));
}

#[test]
fn test_deep_loop_completes() {
    let dump = TestDump::new();
    dump.add_subcat("Root", "A");
    dump.add_subcat("A", "Root");
    let (stdout, stderr, success) =
        run_wikicat(&dump.path(), &["-t", "Root", "-l", "50000", "--loop"]);
    assert!(success, "deep walk should finish: {}", stderr);
    assert_eq!(lines(&stdout).len(), 50_000);
}

#[test]
fn test_zero_limit_rejected() {
    let dump = animals_dump();
    Command::cargo_bin("wikicat")
        .unwrap()
        .arg(dump.path())
        .args(["-t", "Animals", "-l", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("depth limit must be at least 1"));
}

#[test]
fn test_missing_target_rejected() {
    let dump = animals_dump();
    Command::cargo_bin("wikicat")
        .unwrap()
        .arg(dump.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("a root category is required"));
}

#[test]
fn test_missing_dump_fails() {
    let dump = TestDump::new();
    Command::cargo_bin("wikicat")
        .unwrap()
        .arg(dump.dir().join("nope.db"))
        .args(["-t", "Animals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open dump"));
}

#[test]
fn test_dump_without_tables_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.db");
    create_empty_file(&path);

    Command::cargo_bin("wikicat")
        .unwrap()
        .arg(&path)
        .args(["-t", "Animals"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("subcat children of 'Animals'"));
}

/// An empty file is a valid, table-less SQLite database.
fn create_empty_file(path: &std::path::Path) {
    std::fs::write(path, b"").unwrap();
}
