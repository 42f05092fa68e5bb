//! Unit tests for the console builder

use simpleterm::{linef, Color, ConsoleError, Style, LINE_SEPARATOR};

use super::helpers::{console, rows};

#[test]
fn text_then_build_round_trips() {
    for s in ["", "plain", "with spaces  ", "ünïcödé ✓", "tabs\tare fine"] {
        let mut cb = console();
        cb.text(s);
        assert_eq!(cb.build(), s);
    }
}

#[test]
fn clear_then_build_is_always_empty() {
    let mut cb = console();
    cb.color(&Color::MAGENTA)
        .line("x")
        .rule('#')
        .boxed(Some("t"), "c")
        .clear();
    assert_eq!(cb.build(), "");
    assert_eq!(cb.clear().build(), "");
}

#[test]
fn rule_width_from_setter() {
    let mut cb = console();
    cb.set_rule_width(5).unwrap().rule('#');
    assert_eq!(cb.build(), format!("#####{}", LINE_SEPARATOR));
}

#[test]
fn explicit_rule_width_wins_and_zero_draws_one() {
    let mut cb = console();
    cb.rule_with_width('-', 3).rule_with_width('+', 0);
    assert_eq!(rows(&cb.build()), ["---", "+"]);
}

#[test]
fn indent_unit_scenario() {
    let mut cb = console();
    cb.set_indent_unit(">>").unwrap().set_indent(1).line("test");
    assert!(cb.build().starts_with(">>test"));
}

#[test]
fn invalid_settings_are_rejected() {
    let mut cb = console();
    assert!(matches!(
        cb.set_rule_width(0),
        Err(ConsoleError::InvalidArgument(_))
    ));
    assert!(matches!(
        cb.set_indent_unit(""),
        Err(ConsoleError::InvalidArgument(_))
    ));
}

#[test]
fn indentation_applies_to_lines_rules_and_boxes_but_not_text() {
    let mut cb = console();
    cb.set_indent(1)
        .text("raw")
        .newline()
        .line("line")
        .rule_with_width('~', 2)
        .boxed_with(None, "b", &simpleterm::BoxStyle::ASCII);
    assert_eq!(
        rows(&cb.build()),
        ["raw", "  line", "  ~~", "  +---+", "  | b |", "  +---+"]
    );
}

#[test]
fn linef_macro_formats_arguments() {
    let mut cb = console();
    linef!(cb, "{} + {} = {}", 2, 2, 4).unwrap();
    assert_eq!(rows(&cb.build()), ["2 + 2 = 4"]);
}

#[test]
fn chained_styling() {
    let mut cb = console();
    cb.style(Style::Underline)
        .color(&Color::from_palette_index(208).unwrap())
        .text("warn")
        .reset()
        .space()
        .background(&Color::rgb(1, 2, 3))
        .text("bg");
    assert_eq!(
        cb.build(),
        "\x1b[4m\x1b[38;5;208mwarn\x1b[0m \x1b[48;2;1;2;3mbg"
    );
}

#[test]
fn when_keeps_the_chain() {
    let verbose = false;
    let mut cb = console();
    cb.text("a")
        .when(verbose, |cb| {
            cb.text("debug");
        })
        .when(!verbose, |cb| {
            cb.text("b");
        })
        .text("c");
    assert_eq!(cb.build(), "abc");
}

#[test]
fn print_moves_everything_to_the_sink() {
    let mut cb = console();
    cb.text("one");
    cb.print().unwrap();
    cb.text("two");
    cb.println().unwrap();
    assert!(cb.is_empty());
    assert_eq!(
        String::from_utf8(cb.into_sink()).unwrap(),
        format!("onetwo{}", LINE_SEPARATOR)
    );
}
