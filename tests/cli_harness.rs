#![allow(unused)]
//! Process-level CLI harness.
//!
//! # What this covers
//!
//! This harness exercises `proofsheet` as a compiled binary via
//! [`std::process::Command`], the way a user piping a paste into it would.
//!
//! - **Formats**: csv, jsonl and table output on stdout.
//! - **Files**: reading the paste from a file and writing the sheet to one.
//! - **Exit codes**: records = 0; blank paste or no records = non-zero with
//!   the user-facing message on stderr; bad flags = non-zero.
//! - **Enumerations**: `--enumerations` prints the dropdown lists.
//!
//! Every invocation passes `--no-user-config` so the user's config directory
//! is never read or created.
//!
//! # Running
//!
//! ```sh
//! cargo test --test cli_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn proofsheet_binary() -> Command {
    let binary = env!("CARGO_BIN_EXE_proofsheet");
    let mut cmd = Command::new(binary);
    cmd.args(["--no-user-config", "--reference", "2025-06-25T10:00"]);
    cmd
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = proofsheet_binary()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn proofsheet");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait for proofsheet")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

#[test]
fn csv_on_stdout_by_default() {
    let out = run_with_stdin(&[], FREE_TEXT_LOG);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Date,Banner Name,Week,Page Name,Proof,Language,Page Assembler,QC"
    );
    assert_eq!(
        lines[1],
        "30/06/2025,walmart,week-25,D-WK25_Digital_Front,PRESS,All zones,Munish Balakrishnan,Direct Upload"
    );
    assert_eq!(
        lines[4],
        "25/06/2025,walmart,week-25,CORP [WK 25 Digital_7_Caribbean_Global]_01,CPR,All zones,Mohammed Siddik,Hariharan"
    );
}

#[test]
fn jsonl_records_parse() {
    let out = run_with_stdin(&["--format", "jsonl"], CODED_LOG);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let records: Vec<serde_json::Value> = stdout(&out)
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["pageAssembler"], "Munish");
    assert_eq!(records[0]["proofStage"], "PRINT READY");
    assert_eq!(records[0]["date"], "");
    assert_eq!(records[2]["qc"], "");
}

#[test]
fn table_format_has_header_and_rule() {
    let out = run_with_stdin(&["--format", "table"], CODED_LOG);
    assert!(out.status.success());
    let text = stdout(&out);
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Date"));
    assert!(lines.next().unwrap().starts_with("----"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn format_aliases() {
    let out = run_with_stdin(&["-f", "ndjson"], CODED_LOG);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).lines().all(|l| l.starts_with('{')));
}

#[test]
fn forced_mode_flag() {
    let out = run_with_stdin(&["--mode", "free-text"], CODED_LOG);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("no valid entries found"));
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn reads_input_file_and_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("paste.txt");
    let output = dir.path().join("sheet.csv");
    std::fs::write(&input, FREE_TEXT_LOG).unwrap();

    let out = proofsheet_binary()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).is_empty());

    let sheet = std::fs::read_to_string(&output).unwrap();
    assert_eq!(sheet.lines().count(), 5);
}

#[test]
fn missing_input_file_fails() {
    let out = proofsheet_binary()
        .arg("/definitely/not/here.txt")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(stderr(&out).contains("reading /definitely/not/here.txt"));
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn blank_paste_exits_nonzero_with_hint() {
    let out = run_with_stdin(&[], "\n   \n");
    assert!(!out.status.success());
    assert!(stderr(&out).contains("please paste some raw data first"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn paste_with_nothing_recognisable_exits_nonzero() {
    let out = run_with_stdin(
        &[],
        "Notifications\nMunish commented on a file\nOpen in browser\nMark all as read\n",
    );
    assert!(!out.status.success());
    assert!(stderr(&out).contains("no valid entries found (4 lines scanned)"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn unknown_format_exits_nonzero() {
    let out = run_with_stdin(&["--format", "xlsx"], FREE_TEXT_LOG);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("unknown export format"));
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[test]
fn enumerations_flag_prints_dropdowns() {
    let out = run_with_stdin(&["--enumerations"], "");
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["enumerations"]["proof_stages"].as_array().unwrap().len(), 6);
    assert_eq!(value["enumerations"]["languages"].as_array().unwrap().len(), 3);
    assert_eq!(value["enumerations"]["assemblers"].as_array().unwrap().len(), 5);
    assert_eq!(value["enumerations"]["qc"].as_array().unwrap().len(), 3);
    assert_eq!(value["dropdowns"][0]["column"], "E");
    assert_eq!(value["dropdowns"][3]["header"], "QC");
}
