//! End-to-end survey runs over piped stdin

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::simpleterm;

/// Summary frame for Grace Hopper, 85, ascii, red accent.
const SURVEY_BOX: &str = concat!(
    "\x1b[31m+---------------------+\n",
    "| Survey              |\n",
    "+---------------------+\n",
    "| Name:  Grace Hopper |\n",
    "| Age:   85           |\n",
    "| Style: ascii        |\n",
    "+---------------------+\n",
    "\x1b[0m",
);

#[test]
fn survey_renders_answers() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .arg("survey")
        .write_stdin("Grace Hopper\n85\n1\nred\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(SURVEY_BOX));
}

#[test]
fn survey_reports_invalid_answers_in_german() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .args(["--locale", "de", "survey"])
        .write_stdin("Ada\nalt\n40\n2\nblue\nj\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bitte eine gültige ganze Zahl eingeben."))
        .stdout(predicate::str::contains("Bitte mit y/yes oder n/no antworten."))
        .stdout(predicate::str::contains("Nothing to show."));
}

#[test]
fn survey_fails_when_input_ends() {
    let temp = TempDir::new().unwrap();
    simpleterm(&temp)
        .arg("survey")
        .write_stdin("Ada\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended"));
}
