// e2e/demo_cli.rs — CLI integration tests for the `cmdline` demo binary
//
// Runs the binary as a black box through std::process::Command and checks
// stdout, stderr and exit status for help, success and each failure kind.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `cmdline` binary produced by Cargo.
fn cmdline_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_cmdline") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("cmdline");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(cmdline_bin())
        .args(args)
        .env_remove("CMDLINE_DISPLAY_LEVEL")
        .output()
        .expect("failed to run cmdline")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── 1. Normal run ────────────────────────────────────────────────────────────

#[test]
fn test_cli_prints_npart_as_integer() {
    let out = run(&["-m", "cube.msh", "-np", "7"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "7\n");
}

#[test]
fn test_cli_long_names_and_truncation() {
    let out = run(&["--npart", "9.8", "--mesh", "cube.msh"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "9\n");
}

#[test]
fn test_cli_non_numeric_npart_prints_zero() {
    let out = run(&["-m", "cube.msh", "-np", "lots"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0\n");
}

// ── 2. Help ──────────────────────────────────────────────────────────────────

#[test]
fn test_cli_help_exits_zero_with_usage_on_stdout() {
    for flag in ["-h", "--help"] {
        let out = run(&[flag]);
        assert!(out.status.success(), "{} should exit 0", flag);
        let text = stdout(&out);
        assert!(text.contains("Usage: "), "usage missing for {}", flag);
        assert!(text.contains("[option=value]\nOptions:\n"));
        assert!(text.contains("    -h,--help                Print this help message.\n"));
        assert!(text.contains("    -m,--mesh                mesh file name.\n"));
        assert!(text.contains("    -np,--npart              number to be cutting.\n"));
        assert!(text.ends_with("Program cmdline\n\n"));
    }
}

#[test]
fn test_cli_help_not_first_is_an_error() {
    let out = run(&["-m", "cube.msh", "-h"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Missing value of option: -h."));
}

// ── 3. Missing required option ───────────────────────────────────────────────

#[test]
fn test_cli_missing_required_reports_on_stdout() {
    let out = run(&["-np", "4"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.starts_with("Missing Option: -m\n\nUsage: "), "stdout: {}", text);
    assert!(text.ends_with("Program cmdline\n\n"));
}

#[test]
fn test_cli_no_arguments_reports_missing_option() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Missing Option: -m"));
}

// ── 4. Parse errors ──────────────────────────────────────────────────────────

#[test]
fn test_cli_unknown_option_fails() {
    let out = run(&["--size", "3"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Wrong Option name: --size."));
}

#[test]
fn test_cli_missing_value_fails() {
    let out = run(&["-m", "-np", "3"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("Missing value of option: -m."));
    assert!(err.contains("Usage: "));
}

// ── 5. Display level ─────────────────────────────────────────────────────────

#[test]
fn test_cli_banner_at_display_level_3() {
    let out = Command::new(cmdline_bin())
        .args(["-m", "cube.msh", "-np", "2"])
        .env("CMDLINE_DISPLAY_LEVEL", "3")
        .output()
        .expect("failed to run cmdline");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2\n");
    let err = stderr(&out);
    assert!(err.contains("*** cmdline v"));
    assert!(err.contains("mesh file : cube.msh"));
}
