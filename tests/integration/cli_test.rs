//! CLI output tests

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::simpleterm;

#[test]
fn box_from_arguments() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["box", "--style", "ascii", "--title", "T", "C"])
        .assert()
        .success()
        .stdout("+---+\n| T |\n+---+\n| C |\n+---+\n");
}

#[test]
fn box_from_stdin_ignores_final_newline() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["box", "-s", "ascii"])
        .write_stdin("Line1\nLine2\n")
        .assert()
        .success()
        .stdout("+-------+\n| Line1 |\n| Line2 |\n+-------+\n");
}

#[test]
fn box_uses_configured_style_and_indent() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["box", "--indent", "1", "x"])
        .assert()
        .success()
        .stdout("  ┌───┐\n  │ x │\n  └───┘\n");
}

#[test]
fn rule_defaults_to_configured_width() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["rule", "--char", "#"])
        .assert()
        .success()
        .stdout(format!("{}\n", "#".repeat(80)));
}

#[test]
fn rule_with_zero_width_draws_one() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["rule", "-c", "=", "-w", "0"])
        .assert()
        .success()
        .stdout("=\n");
}

#[test]
fn palette_lists_named_colors() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("bright_magenta"))
        .stdout(predicate::str::contains("\x1b[48;5;196m"));
}

#[test]
fn styles_lists_every_style() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("strikethrough"))
        .stdout(predicate::str::contains("reset-bold-dim"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simpleterm"));
}

#[test]
fn help_mentions_every_command() {
    let temp = TempDir::new().unwrap();
    let assert = simpleterm(&temp).arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for command in ["box", "rule", "palette", "styles", "config", "survey", "completions"] {
        assert!(stdout.contains(command), "help lacks {}", command);
    }
}
