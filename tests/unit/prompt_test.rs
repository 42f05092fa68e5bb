//! Unit tests for the prompt loop driven by scripted input

use simpleterm::{Choice, ConsoleError};

use super::helpers::{scripted_prompt, written};

#[test]
fn ask_int_reads_one_line() {
    let mut prompt = scripted_prompt("42\n");
    assert_eq!(prompt.ask_int("Enter number:").unwrap(), 42);
}

#[test]
fn prompts_share_one_input_stream() {
    let mut prompt = scripted_prompt("7\nyes\nhello\n");
    assert_eq!(prompt.ask_int("n?").unwrap(), 7);
    assert!(prompt.ask_yes_no("ok?").unwrap());
    assert_eq!(prompt.ask("word?").unwrap().as_deref(), Some("hello"));
    assert_eq!(prompt.ask("more?").unwrap(), None);
}

#[test]
fn choice_returns_value_of_any_type() {
    #[derive(Debug, PartialEq)]
    enum Size {
        Small,
        Large,
    }
    let choices = vec![
        Choice::new("Small", Size::Small).unwrap(),
        Choice::new("Large", Size::Large).unwrap(),
    ];
    let mut prompt = scripted_prompt(" 2 \n");
    assert_eq!(prompt.ask_choice("Size?", &choices).unwrap(), &Size::Large);
}

#[test]
fn blank_choice_labels_never_construct() {
    assert!(matches!(
        Choice::new(" ", 0u8),
        Err(ConsoleError::Validation(_))
    ));
    assert!(matches!(
        Choice::new("", "value"),
        Err(ConsoleError::Validation(_))
    ));
}

#[test]
fn end_of_input_stops_every_retry_loop() {
    let eof = |result: Result<(), ConsoleError>| matches!(result, Err(ConsoleError::EndOfInput));

    assert!(eof(scripted_prompt("x\n").ask_int("?").map(drop)));
    assert!(eof(scripted_prompt("maybe\n").ask_yes_no("?").map(drop)));
    assert!(eof(scripted_prompt("nope\n")
        .ask_pattern("?", "[0-9]+", "digits")
        .map(drop)));
    assert!(eof(scripted_prompt("")
        .ask_validated("?", |_| true, "never")
        .map(drop)));
    assert!(eof(scripted_prompt("bad\n")
        .ask_mapped("?", |s| s.parse::<u8>(), "byte")
        .map(drop)));

    let choices = vec![Choice::new("only", 1).unwrap()];
    assert!(eof(scripted_prompt("5\n")
        .ask_choice("?", &choices)
        .map(drop)));
}

#[test]
fn error_messages_follow_each_rejection() {
    let mut prompt = scripted_prompt("a\nb\nc\n");
    let answer = prompt
        .ask_validated("Letter?", |s| s == "c", "Not c")
        .unwrap();
    assert_eq!(answer, "c");
    let out = written(prompt);
    assert_eq!(out.matches("Letter? ").count(), 3);
    assert_eq!(out.matches("Not c").count(), 2);
}
