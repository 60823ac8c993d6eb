// tests/integration/end_to_end.rs
use std::fs;

use clap::Parser;
use codestat::{app, args::Args};
use codestat_ports::CancellationToken;
use codestat_shared_kernel::{ApplicationError, CodeStatError, DomainError};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn run(ws: &TempWorkspace, extra: &[&str]) -> Result<String, CodeStatError> {
    run_with(ws, extra, &CancellationToken::new())
}

fn run_with(ws: &TempWorkspace, extra: &[&str], cancel: &CancellationToken) -> Result<String, CodeStatError> {
    let mut argv = vec!["codestat"];
    argv.extend_from_slice(extra);
    argv.push("--state-dir");
    argv.push(ws.state_dir().to_str().unwrap());
    let args = Args::parse_from(argv);
    let mut out = Vec::new();
    app::run(&args, cancel, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn sample_workspace() -> TempWorkspace {
    let ws = TempWorkspace::new();
    ws.create_file("src/main.rs", "fn main() {\n\n    println!(\"hi\");\n}\n");
    ws.create_file("src/lib.rs", "pub mod a;\n");
    ws.create_file("README.md", "# Title\n\nBody\n");
    ws.create_file("Makefile", "all:\n\techo ok\n");
    ws.create_file("node_modules/pkg/index.js", "module.exports = 1;\n");
    ws
}

#[test]
fn analyze_reports_totals_and_records_history() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();

    let out = run(&ws, &["analyze", root, "--exclude", "node_modules"]).unwrap();

    assert!(out.contains("Analysis complete: 4 files, 8 lines"), "{out}");
    assert!(out.contains("8 lines | 4 files"), "{out}");
    assert_eq!(ws.history_files().len(), 1);

    let status = run(&ws, &["status", root]).unwrap();
    assert_eq!(status.trim(), "8 lines | 4 files");
}

#[test]
fn json_report_matches_the_last_analysis() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();
    run(&ws, &["analyze", root, "--name", "demo"]).unwrap();

    let out = run(&ws, &["report", root, "--format", "json"]).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["workspace_name"], "demo");
    assert_eq!(json["total_files"], 5);
    assert_eq!(json["by_extension"]["rs"]["line_count"], 4);
    assert_eq!(json["by_extension"]["unknown"]["file_count"], 1);
    let sum: u64 = json["by_extension"]
        .as_object()
        .unwrap()
        .values()
        .map(|b| b["line_count"].as_u64().unwrap())
        .sum();
    assert_eq!(sum, json["total_lines"].as_u64().unwrap());
}

#[test]
fn report_before_analysis_prints_a_hint() {
    let ws = sample_workspace();
    let out = run(&ws, &["report", ws.path().to_str().unwrap()]).unwrap();
    assert!(out.contains("Run `codestat analyze` first"));
    assert_eq!(run(&ws, &["status", ws.path().to_str().unwrap()]).unwrap().trim(), "not analyzed");
}

#[test]
fn analyze_writes_html_report_file() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();
    let report = ws.state_dir().join("out/report.html");

    run(&ws, &["analyze", root, "--report", report.to_str().unwrap()]).unwrap();

    let html = fs::read_to_string(&report).unwrap();
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>rs</td>"));
}

#[test]
fn settings_file_filters_extensions_and_toggle_hides_status() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();
    ws.create_file(".codestat.json", r#"{"includedFileTypes":["rs"],"excludePatterns":["node_modules"]}"#);

    let out = run(&ws, &["analyze", root]).unwrap();
    assert!(out.contains("Analysis complete: 2 files, 4 lines"), "{out}");

    let toggled = run(&ws, &["toggle-status", root]).unwrap();
    assert!(toggled.contains("disabled"));
    assert_eq!(run(&ws, &["status", root]).unwrap(), "");

    let settings: Value = serde_json::from_str(&fs::read_to_string(ws.path().join(".codestat.json")).unwrap()).unwrap();
    assert_eq!(settings["showInStatusBar"], false);
    assert_eq!(settings["includedFileTypes"][0], "rs");
}

#[test]
fn history_keeps_ten_most_recent() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();
    for i in 0..12 {
        run(&ws, &["analyze", root, "--name", &format!("run-{i:02}")]).unwrap();
    }

    let listing = run(&ws, &["history", root]).unwrap();
    assert!(listing.contains("run-11"));
    assert!(listing.contains("run-02"));
    assert!(!listing.contains("run-01"));
    assert!(listing.find("run-11").unwrap() < listing.find("run-02").unwrap());

    run(&ws, &["history", root, "--clear"]).unwrap();
    assert!(run(&ws, &["history", root]).unwrap().contains("No snapshots recorded"));
}

#[test]
fn cancelled_analysis_records_nothing() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let out = run_with(&ws, &["analyze", root], &cancel).unwrap();

    assert!(out.contains("Analysis cancelled"));
    assert!(ws.history_files().is_empty());
    assert_eq!(run(&ws, &["status", root]).unwrap().trim(), "not analyzed");
}

#[test]
fn missing_workspace_is_an_error() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("nope");
    let err = run(&ws, &["analyze", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, CodeStatError::Application(ApplicationError::NoWorkspace { .. })));
}

#[test]
fn malformed_settings_fail_the_analysis() {
    let ws = sample_workspace();
    ws.create_file(".codestat.json", "{ not json");
    let err = run(&ws, &["analyze", ws.path().to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, CodeStatError::Domain(DomainError::InvalidConfiguration { .. })));
    assert!(ws.history_files().is_empty());
}

#[test]
fn unwritable_report_path_carries_context() {
    let ws = sample_workspace();
    let root = ws.path().to_str().unwrap();
    run(&ws, &["analyze", root]).unwrap();
    let blocker = ws.create_file("blocker", "not a directory\n");
    let target = blocker.join("report.txt");

    let err = run(&ws, &["report", root, "--format", "text", "--output", target.to_str().unwrap()]).unwrap_err();

    assert!(matches!(err, CodeStatError::Context { ref context, .. } if context == "could not save the report"));
    assert!(err.to_string().contains("report.txt"));
}
