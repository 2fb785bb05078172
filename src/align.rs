//! Alignment and text padding utilities
//!
//! Width here means character count, not display width: the renderer
//! promises deterministic output for any sink, so it never second-guesses
//! how a terminal measures glyphs.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of text within a padded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Number of characters in a string.
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Repeat a glyph `count` times.
pub(crate) fn repeat(glyph: char, count: usize) -> String {
    std::iter::repeat(glyph).take(count).collect()
}

/// Pad `text` with spaces to exactly `width` characters.
///
/// Center puts the smaller half of the slack on the left. Callers compute
/// `width` from the column contents, so `width >= text_width(text)` and no
/// truncation ever happens here.
pub(crate) fn pad_text(text: &str, width: usize, alignment: Alignment) -> String {
    let slack = width.saturating_sub(text_width(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, slack),
        Alignment::Right => (slack, 0),
        Alignment::Center => (slack / 2, slack - slack / 2),
    };

    let mut result = String::with_capacity(text.len() + slack);
    result.push_str(&repeat(' ', left));
    result.push_str(text);
    result.push_str(&repeat(' ', right));
    result
}

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;
