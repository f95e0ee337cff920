//! Integration tests for command mode (-c/--command flag and scripts)

use std::io::Write;
use std::process::{Command, Stdio};

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sheetlink"))
        // Tests must be deterministic and not depend on a user's ~/.config/sheetlink/config.toml.
        .arg("--no-config")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn run_commands(commands: &[&str]) -> (String, String, i32) {
    let mut args = Vec::new();
    for command in commands {
        args.push("-c");
        args.push(command);
    }
    run_command(&args)
}

fn snapshot_json(stdout: &str) -> serde_json::Value {
    let line = stdout
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("snapshot line");
    serde_json::from_str(line).expect("valid snapshot json")
}

#[test]
fn test_create_prints_uuid() {
    let (stdout, _, code) = run_commands(&["create A:string B:int"]);
    assert_eq!(code, 0);
    let id = stdout.trim();
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
}

#[test]
fn test_empty_sheet_snapshot() {
    let (stdout, _, code) = run_commands(&["create A:string B:int", "show"]);
    assert_eq!(code, 0);
    let id = stdout.lines().next().unwrap().to_string();
    let json = snapshot_json(&stdout);
    assert_eq!(json["sheet_id"], serde_json::Value::String(id));
    assert_eq!(json["columns"][0]["name"], "A");
    assert_eq!(json["columns"][0]["type"], "string");
    assert_eq!(json["columns"][1]["name"], "B");
    assert_eq!(json["columns"][1]["type"], "int");
    assert_eq!(json["cells"], serde_json::json!([]));
}

#[test]
fn test_lookup_resolves_in_snapshot() {
    let (stdout, _, code) = run_commands(&[
        "create A:string B:string C:int",
        "set A 1 original",
        "set B 1 lookup(A,1)",
        "set C 1 42",
        "show",
        "set A 1 updated",
        "get B 1",
    ]);
    assert_eq!(code, 0);
    let json = snapshot_json(&stdout);
    assert_eq!(
        json["cells"],
        serde_json::json!([
            {"column": "A", "row": 1, "value": "original"},
            {"column": "B", "row": 1, "value": "original"},
            {"column": "C", "row": 1, "value": 42},
        ])
    );
    assert_eq!(stdout.lines().last().unwrap(), "\"updated\"");
}

#[test]
fn test_raw_mode_shows_expression() {
    let (stdout, _, code) = run_command(&[
        "--raw",
        "-c",
        "create A:string B:string",
        "-c",
        "set A 1 x",
        "-c",
        "set B 1 lookup(A,1)",
        "-c",
        "show",
    ]);
    assert_eq!(code, 0);
    let json = snapshot_json(&stdout);
    assert_eq!(json["cells"][1]["value"], "lookup(A,1)");
}

#[test]
fn test_type_mismatch_exit_code() {
    let (_, stderr, code) = run_commands(&["create A:boolean", "set A 1 maybe"]);
    assert_eq!(code, 1);
    assert!(stderr.to_lowercase().contains("type mismatch"));
}

#[test]
fn test_lookup_type_mismatch_exit_code() {
    let (_, stderr, code) = run_commands(&["create A:boolean B:string", "set B 1 lookup(A,1)"]);
    assert_eq!(code, 1);
    assert!(stderr.to_lowercase().contains("type mismatch"));
}

#[test]
fn test_cycle_exit_code() {
    let (_, stderr, code) = run_commands(&[
        "create A:string B:string C:string",
        "set A 1 lookup(B,1)",
        "set B 1 lookup(C,1)",
        "set C 1 lookup(A,1)",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("cycle of size 3"));
}

#[test]
fn test_missing_column_exit_code() {
    let (_, stderr, code) = run_commands(&["create A:string", "set B 1 x"]);
    assert_eq!(code, 2);
    assert!(stderr.to_lowercase().contains("column"));
}

#[test]
fn test_missing_sheet_exit_code() {
    let (_, stderr, code) = run_commands(&["use nonexistent-id"]);
    assert_eq!(code, 2);
    assert!(stderr.to_lowercase().contains("not found"));
}

#[test]
fn test_script_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sheetlink"))
        .arg("--no-config")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# comment\ncreate N:double\n\nset N 1 5\nget N 1\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().last().unwrap(), "5.0");
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run_command(&["--frobnicate"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown option"));
}
