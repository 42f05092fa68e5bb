//! Frame geometry: turns a title, content and glyph set into rows.
//!
//! Widths are measured in terminal columns (`unicode-width`), so wide CJK
//! characters and emoji still line up with the border.

use unicode_width::UnicodeWidthStr;

use super::BoxStyle;

/// A computed frame, one string per row, without indentation or line
/// terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLayout {
    inner_width: usize,
    titled: bool,
    rows: Vec<String>,
}

impl BoxLayout {
    /// Lay out `content` inside a frame drawn with `style`.
    ///
    /// A `None` or blank title produces no title row and no junction row.
    pub fn compute(title: Option<&str>, content: &str, style: &BoxStyle) -> Self {
        let lines = split_lines(content);
        let title = title.filter(|t| !t.trim().is_empty());

        let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let inner_width = title.map_or(content_width, |t| t.width().max(content_width));

        let horizontal = style.horizontal.repeat(inner_width + 2);
        let mut rows = Vec::with_capacity(lines.len() + 4);

        rows.push(format!("{}{}{}", style.top_left, horizontal, style.top_right));

        if let Some(title) = title {
            rows.push(framed_row(title, inner_width, style));
            rows.push(format!(
                "{}{}{}",
                style.junction_left,
                style.junction_horizontal.repeat(inner_width + 2),
                style.junction_right
            ));
        }

        for line in &lines {
            rows.push(framed_row(line, inner_width, style));
        }

        rows.push(format!(
            "{}{}{}",
            style.bottom_left, horizontal, style.bottom_right
        ));

        Self {
            inner_width,
            titled: title.is_some(),
            rows,
        }
    }

    /// Content columns between the padding spaces.
    pub fn inner_width(&self) -> usize {
        self.inner_width
    }

    /// Whether a title row and junction row were emitted.
    pub fn has_title(&self) -> bool {
        self.titled
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

fn framed_row(text: &str, inner_width: usize, style: &BoxStyle) -> String {
    format!(
        "{} {} {}",
        style.vertical,
        pad(text, inner_width),
        style.vertical
    )
}

/// Right-pad with spaces to `width` columns. Never truncates.
pub fn pad(text: &str, width: usize) -> String {
    let missing = width.saturating_sub(text.width());
    let mut padded = String::with_capacity(text.len() + missing);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(missing));
    padded
}

/// Split on every line-break sequence, keeping empty trailing segments.
///
/// Recognizes `\r\n`, `\n`, `\r`, vertical tab, form feed, NEL and the
/// Unicode line and paragraph separators.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some(&(j, '\n')) => {
                    chars.next();
                    j + 1
                }
                _ => i + 1,
            },
            '\n' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&content[start..i]);
        start = end;
    }
    lines.push(&content[start..]);
    lines
}
