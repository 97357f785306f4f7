//! Tests for `check` parsing and option resolution.

use super::parse;
use crate::cli::commands::{check_into, run_check, CheckOptions};
use crate::cli::{Cli, CliCommand, ColorArg};
use clap::Parser;
use dck_core::checksum::crc32_str;
use dck_core::config::{ColorMode, DckConfig};
use std::path::Path;

#[test]
fn cli_parse_check() {
    match parse(&["dck", "check", "uris.jsonl"]) {
        CliCommand::Check {
            path,
            color,
            json,
            max_reports,
        } => {
            assert_eq!(path, "uris.jsonl");
            assert!(color.is_none());
            assert!(!json);
            assert!(max_reports.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_flags() {
    match parse(&[
        "dck",
        "check",
        "/data/u.jsonl",
        "--color",
        "never",
        "--json",
        "--max-reports",
        "50",
    ]) {
        CliCommand::Check {
            path,
            color,
            json,
            max_reports,
        } => {
            assert_eq!(path, "/data/u.jsonl");
            assert_eq!(color, Some(ColorArg::Never));
            assert!(json);
            assert_eq!(max_reports, Some(50));
        }
        _ => panic!("expected Check with flags"),
    }
}

#[test]
fn cli_parse_check_requires_path() {
    assert!(Cli::try_parse_from(["dck", "check"]).is_err());
}

#[test]
fn cli_parse_check_rejects_bad_color() {
    assert!(Cli::try_parse_from(["dck", "check", "f", "--color", "rainbow"]).is_err());
}

#[test]
fn options_fall_back_to_config() {
    let cfg = DckConfig {
        color: ColorMode::Always,
        max_reports: Some(5),
        json_summary: true,
    };
    let opts = CheckOptions::resolve(&cfg, None, false, None);
    assert_eq!(opts.color, ColorMode::Always);
    assert_eq!(opts.max_reports, Some(5));
    assert!(opts.json);
}

#[test]
fn flags_override_config() {
    let cfg = DckConfig {
        color: ColorMode::Always,
        max_reports: Some(5),
        json_summary: false,
    };
    let opts = CheckOptions::resolve(&cfg, Some(ColorMode::Never), true, Some(9));
    assert_eq!(opts.color, ColorMode::Never);
    assert_eq!(opts.max_reports, Some(9));
    assert!(opts.json);
}

fn plain_options() -> CheckOptions {
    CheckOptions {
        color: ColorMode::Never,
        json: false,
        max_reports: None,
    }
}

fn write_violations(dir: &Path) -> std::path::PathBuf {
    let a = crc32_str("/a");
    let body = format!(
        "{{\"uri\":\"/a\",\"digest\":\"{a}\"}}\n{{\"uri\":\"/b\",\"digest\":\"{a}\"}}\nnot json\n"
    );
    let path = dir.join("violations.jsonl");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn run_check_succeeds_despite_violations() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_violations(dir.path());
    assert!(run_check(&path, &plain_options()).is_ok());
}

#[test]
fn check_reports_violations_then_summary() {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    let path = write_violations(dir.path());
    let mut buf = Vec::new();
    let summary = check_into(&path, &plain_options(), &mut buf).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.mismatches, 1);
    assert_eq!(summary.decode_failures, 1);

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ERR #1 URI: /b"));
    assert!(lines[1].starts_with("DUP #1 URI: /b"));
    assert!(lines[2].starts_with("Error parsing JSON on line 3: not json."));
    assert_eq!(lines[3], "Check: total=2, dup=1, err=1, decode_failures=1.");
}

#[test]
fn run_check_missing_file_is_an_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.jsonl");
    let err = run_check(&path, &plain_options()).unwrap_err();
    assert!(format!("{err:#}").contains("missing.jsonl"));
}
