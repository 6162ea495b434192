#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_shows_pending_weeks_before_generate() {
    run_cli("show\nquit\n")
        .success()
        .stdout(str_contains("2025-05-05"))
        .stdout(str_contains("Pending"));
}

#[test]
fn cli_reports_unknown_associate() {
    run_cli("set Quinn 2025-05-05 DNS\nquit\n")
        .success()
        .stdout(str_contains("not on the roster"));
}

#[test]
fn cli_generates_and_summarizes() {
    run_cli("set Paul 2025-05-05 NO ISSUES\ngenerate\nsummary\nquit\n")
        .success()
        .stdout(str_contains("17 weeks, 1 covered, 16 unassigned"))
        .stdout(str_contains("Paul: 1 weeks"))
        .stdout(str_contains("Nnamdi: 0 weeks"));
}

#[test]
fn cli_clears_availability_with_dashes() {
    run_cli("set Paul 2025-05-05 NO ISSUES\nset Paul 2025-05-05 --\ngenerate\nsummary\nquit\n")
        .success()
        .stdout(str_contains("17 weeks, 0 covered, 17 unassigned"))
        .stdout(str_contains("Paul: 0 weeks"));
}

#[test]
fn cli_exports_csv_to_path() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().replace('\\', "\\\\");
    let script = format!(
        "set Paul 2025-05-05 NO ISSUES\ngenerate\nexport {}\nquit\n",
        path
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Schedule exported to"));

    let written = std::fs::read_to_string(tmp.path()).expect("read exported csv");
    assert!(written.starts_with("Week,Assigned\n2025-05-05,Paul\n"));
}
