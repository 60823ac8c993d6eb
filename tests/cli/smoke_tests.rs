use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn codestat(ws: &TempWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codestat"));
    cmd.arg("--state-dir").arg(ws.state_dir()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_codestat"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze").and(predicate::str::contains("toggle-status")));
}

#[test]
fn analyze_then_status() {
    let ws = TempWorkspace::new();
    ws.create_file("a.rs", "a\n\n  \nb\n");
    ws.create_file("b.log", "x\n");

    codestat(&ws)
        .args(["analyze", "--exclude", "*.log"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete: 1 files, 2 lines"));

    codestat(&ws)
        .arg("status")
        .arg(ws.path())
        .assert()
        .success()
        .stdout("2 lines | 1 files\n");
}

#[test]
fn text_report_renders_table() {
    let ws = TempWorkspace::new();
    ws.create_file("main.py", "print(1)\nprint(2)\n");
    codestat(&ws).arg("analyze").arg(ws.path()).assert().success();

    codestat(&ws)
        .args(["report", "--format", "text"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("py").and(predicate::str::contains("100.0%")));
}

#[test]
fn missing_workspace_exits_with_failure() {
    let ws = TempWorkspace::new();
    codestat(&ws)
        .arg("analyze")
        .arg(ws.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No workspace"));
}

#[test]
fn oversized_file_warns_on_stderr() {
    let ws = TempWorkspace::new();
    std::fs::write(ws.path().join("big.bin"), vec![b'a'; 10 * 1024 * 1024 + 1]).unwrap();

    codestat(&ws)
        .arg("analyze")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete: 1 files, 0 lines"))
        .stderr(predicate::str::contains("recorded with 0 lines"));
}
