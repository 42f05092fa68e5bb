//! Unit tests for the escape-code tables

use simpleterm::ansi::RESET;
use simpleterm::{Color, ConsoleError, Style};

#[test]
fn palette_indices_outside_range_are_invalid_arguments() {
    for code in [-1000, -1, 256, 257, 10_000] {
        assert!(
            matches!(
                Color::from_palette_index(code),
                Err(ConsoleError::InvalidArgument(_))
            ),
            "code {}",
            code
        );
    }
}

#[test]
fn rgb_triples_embed_channels_in_both_layers() {
    for (r, g, b) in [(0, 0, 0), (255, 255, 255), (1, 128, 254), (17, 0, 99)] {
        let color = Color::from_rgb(r, g, b).unwrap();
        assert_eq!(color.fg(), format!("\x1b[38;2;{};{};{}m", r, g, b));
        assert_eq!(color.bg(), format!("\x1b[48;2;{};{};{}m", r, g, b));
    }
}

#[test]
fn rgb_with_any_bad_channel_fails() {
    for (r, g, b) in [(-1, 0, 0), (0, 256, 0), (0, 0, -5), (300, 300, 300)] {
        assert!(Color::from_rgb(r, g, b).is_err());
    }
}

#[test]
fn sixteen_named_colors() {
    assert_eq!(Color::NAMED.len(), 16);
    assert_eq!(Color::BLACK.fg(), "\x1b[30m");
    assert_eq!(Color::WHITE.bg(), "\x1b[47m");
    assert_eq!(Color::BRIGHT_BLACK.fg(), "\x1b[90m");
    assert_eq!(Color::BRIGHT_BLACK.bg(), "\x1b[100m");
}

#[test]
fn style_table_is_byte_exact() {
    let expected = [
        (Style::Bold, "\x1b[1m"),
        (Style::Dim, "\x1b[2m"),
        (Style::Italic, "\x1b[3m"),
        (Style::Underline, "\x1b[4m"),
        (Style::Invert, "\x1b[7m"),
        (Style::Strikethrough, "\x1b[9m"),
        (Style::DoubleUnderline, "\x1b[21m"),
        (Style::ResetAll, RESET),
        (Style::ResetBoldDim, "\x1b[22m"),
        (Style::ResetItalic, "\x1b[23m"),
        (Style::ResetUnderline, "\x1b[24m"),
        (Style::ResetInvert, "\x1b[27m"),
        (Style::ResetStrikethrough, "\x1b[29m"),
    ];
    assert_eq!(expected.len(), Style::ALL.len());
    for (style, code) in expected {
        assert_eq!(style.to_string(), code);
    }
}
