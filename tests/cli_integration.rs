//! Integration tests for the dialeval binaries.
//!
//! Each test writes small JSONL fixtures to a temp dir and runs the real
//! binary against them.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn dialeval(gold: &Path, pred: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dialeval").unwrap();
    cmd.arg("--gold").arg(gold).arg("--pred").arg(pred);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_case_and_duplicates_ignored() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":1,"task_type":"targets","target":"battery life"}
"#,
    );
    let pred = write(
        &dir,
        "pred.jsonl",
        r#"{"sample_id":1,"task_type":"targets","target":"battery life"}
{"sample_id":1,"task_type":"targets","target":"battery life"}
{"sample_id":1,"task_type":"targets","target":"BATTERY LIFE "}
"#,
    );

    dialeval(&gold, &pred)
        .args(["--tasks", "targets"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "targets               1       0       0    1.0000    1.0000    1.0000",
        ));
}

#[test]
fn test_partial_quadruple_match() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"s1","task_type":"quadruples","target":[["screen","display","sharp","pos"],["battery","power","weak","neg"]]}"#,
    );
    let pred = write(
        &dir,
        "pred.jsonl",
        r#"{"sample_id":"s1","task_type":"quadruples","target":[["screen","display","sharp","pos"],["battery","power","great","pos"]]}"#,
    );

    dialeval(&gold, &pred)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "quadruples            1       1       1    0.5000    0.5000    0.5000",
        ));
}

#[test]
fn test_one_quadruple_per_record() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"s1","task_type":"quadruples","target":["screen","display","sharp","pos"]}
{"sample_id":"s1","task_type":"quadruples","target":["battery","power","weak","neg"]}
{"sample_id":"s1","task_type":"target-aspect","target":["screen","display"]}
"#,
    );
    let pred = write(
        &dir,
        "pred.jsonl",
        r#"{"sample_id":"s1","task_type":"quadruples","target":["Screen","display","sharp","POS"]}
{"sample_id":"s1","task_type":"quadruples","target":["battery","power","strong","pos"]}
{"sample_id":"s1","task_type":"target-aspect","target":["display","screen"]}
"#,
    );

    dialeval(&gold, &pred)
        .args(["--tasks", "quadruples,target-aspect"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "quadruples            1       1       1    0.5000    0.5000    0.5000",
        ))
        .stdout(predicate::str::contains(
            "target-aspect         0       1       1    0.0000    0.0000    0.0000",
        ));

    let out = stdout_of(dialeval(&gold, &pred).arg("--dump-quadruples"));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        json["gold"]["s1"],
        serde_json::json!([["battery", "power", "weak", "neg"], ["screen", "display", "sharp", "pos"]])
    );
}

#[test]
fn test_single_task_overall_equals_row() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"a","task_type":"targets","target":["screen","battery"]}
{"sample_id":"a","task_type":"aspects","target":"display"}
"#,
    );
    let pred = write(
        &dir,
        "pred.jsonl",
        r#"{"sample_id":"a","task_type":"targets","target":["screen","price"]}
"#,
    );

    let out = stdout_of(dialeval(&gold, &pred).args(["--tasks", "targets"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4, "header, rule, targets, overall:\n{out}");
    assert!(lines[2].starts_with("targets"));
    assert!(lines[3].starts_with("overall"));
    assert_eq!(lines[2]["targets".len()..], lines[3]["overall".len()..]);
}

#[test]
fn test_default_reports_every_task() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"a","task_type":"targets","target":"x"}"#,
    );

    let out = stdout_of(&mut dialeval(&gold, &gold));
    let tasks: Vec<&str> = out
        .lines()
        .skip(2)
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(
        tasks,
        [
            "targets",
            "aspects",
            "opinions",
            "quadruples",
            "target-aspect",
            "target-opinion",
            "aspect-opinion",
            "overall"
        ]
    );
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"a","task_type":"opinions","target":["great","slow"]}"#,
    );
    let pred = write(
        &dir,
        "pred.jsonl",
        r#"{"sample_id":"a","task_type":"opinions","target":"Great"}"#,
    );

    let out = stdout_of(dialeval(&gold, &pred).args(["--tasks", "opinions", "--json"]));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["tasks"][0]["task"], "opinions");
    assert_eq!(json["tasks"][0]["tp"], 1);
    assert_eq!(json["tasks"][0]["fn"], 1);
    assert_eq!(json["overall"]["precision"], 1.0);
}

#[test]
fn test_config_file_tasks() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"a","task_type":"aspects","target":"Price"}"#,
    );
    let config = write(
        &dir,
        "eval.toml",
        "tasks = [\"aspects\"]\n\n[normalize]\ncase_fold = false\n",
    );

    let out = stdout_of(dialeval(&gold, &gold).arg("--config").arg(&config));
    assert_eq!(out.lines().count(), 4);
    assert!(out.contains("aspects               1       0       0"));
}

// =============================================================================
// Dump mode
// =============================================================================

#[test]
fn test_dump_to_stdout() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"42","task_type":"targets","target":"screen"}"#,
    );
    let pred = write(
        &dir,
        "pred.jsonl",
        r#"{"sample_id":"42","task_type":"quadruples","target":[["Screen","display","sharp","POS"],["battery","power","weak","neg"]]}"#,
    );

    let out = stdout_of(dialeval(&gold, &pred).arg("--dump-quadruples"));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["gold"]["42"], serde_json::json!([]));
    assert_eq!(json["pred"]["42"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["pred"]["42"][1],
        serde_json::json!(["screen", "display", "sharp", "pos"])
    );
    assert!(!out.contains("overall"));
}

#[test]
fn test_dump_to_file() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        r#"{"sample_id":"1","task_type":"quadruples","target":[["a","b","c","pos"]]}"#,
    );
    let out_path = dir.path().join("dump.json");

    dialeval(&gold, &gold)
        .arg("--dump-quadruples")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["gold"], json["pred"]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_malformed_line_fails_with_line_number() {
    let dir = TempDir::new().unwrap();
    let gold = write(
        &dir,
        "gold.jsonl",
        "{\"sample_id\":\"a\",\"task_type\":\"targets\",\"target\":\"x\"}\n{oops\n",
    );

    dialeval(&gold, &gold)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("gold.jsonl"));
}

#[test]
fn test_missing_file_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let gold = write(&dir, "gold.jsonl", "");
    let missing = dir.path().join("nope.jsonl");

    dialeval(&gold, &missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.jsonl"));
}

#[test]
fn test_missing_required_argument() {
    Command::cargo_bin("dialeval")
        .unwrap()
        .args(["--gold", "gold.jsonl"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--pred"));
}

#[test]
fn test_unknown_task_lists_valid_options() {
    Command::cargo_bin("dialeval")
        .unwrap()
        .args(["--gold", "g", "--pred", "p", "--tasks", "reply"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target-opinion"));
}

// =============================================================================
// Browser
// =============================================================================

#[test]
fn test_browse_stops_on_q() {
    let dir = TempDir::new().unwrap();
    let dump = write(
        &dir,
        "dump.json",
        r#"{"gold": {"a": [["t","a","o","pos"]], "b": []}, "pred": {"a": [], "b": []}}"#,
    );

    Command::cargo_bin("dialeval-browse")
        .unwrap()
        .arg(&dump)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] sample_id: a"))
        .stdout(predicate::str::contains(r#"gold: [["t","a","o","pos"]]"#))
        .stdout(predicate::str::contains("sample_id: b").not());
}
