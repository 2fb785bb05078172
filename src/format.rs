//! Border and delimiter configuration
//!
//! A `TableFormat` describes the four horizontal tiers (top,
//! header-separator, value-separator, bottom), the vertical delimiters of
//! the header and value lines, and the pad glyphs around cell content.
//! Every mutation re-validates the structural consistency of the whole
//! configuration, so the renderer never sees a visually broken format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TableError};
use crate::sink::Encoding;

/// Optional (left, inner, right) glyphs bounding or joining one rendered
/// line. Corner/junction characters for divider tiers, vertical bars for
/// content lines, spacing for the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Delimiter {
    pub left: Option<char>,
    pub inner: Option<char>,
    pub right: Option<char>,
}

impl Delimiter {
    pub const NONE: Delimiter = Delimiter { left: None, inner: None, right: None };

    pub const fn new(left: Option<char>, inner: Option<char>, right: Option<char>) -> Self {
        Delimiter { left, inner, right }
    }

    /// The same glyph at all three positions.
    pub const fn uniform(glyph: char) -> Self {
        Delimiter { left: Some(glyph), inner: Some(glyph), right: Some(glyph) }
    }

    /// Presence agreement: each position is populated in both triples or
    /// in neither. Glyph identity does not matter.
    pub(crate) fn agrees_with(&self, other: &Delimiter) -> bool {
        self.left.is_some() == other.left.is_some()
            && self.inner.is_some() == other.inner.is_some()
            && self.right.is_some() == other.right.is_some()
    }

    /// Replace every populated position with `fill`. Divider lines run
    /// the fill glyph through the pad positions so the border stays solid.
    pub(crate) fn masked(&self, fill: char) -> Delimiter {
        Delimiter {
            left: self.left.map(|_| fill),
            inner: self.inner.map(|_| fill),
            right: self.right.map(|_| fill),
        }
    }

    fn glyphs(&self) -> impl Iterator<Item = char> {
        [self.left, self.inner, self.right].into_iter().flatten()
    }
}

/// One horizontal tier: an optional fill glyph (`None` = tier hidden) and
/// the delimiter triple for its corners/junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    fill: Option<char>,
    delimiter: Delimiter,
}

impl Tier {
    pub(crate) const fn visible(fill: char, delimiter: Delimiter) -> Self {
        Tier { fill: Some(fill), delimiter }
    }

    pub(crate) const fn hidden() -> Self {
        Tier { fill: None, delimiter: Delimiter::NONE }
    }

    pub fn fill(&self) -> Option<char> {
        self.fill
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn is_visible(&self) -> bool {
        self.fill.is_some()
    }
}

/// Names of the four tiers, used when a consistency violation has to say
/// which pair disagrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierKind {
    Top,
    HeaderSeparator,
    ValueSeparator,
    Bottom,
}

impl TierKind {
    pub fn name(&self) -> &'static str {
        match self {
            TierKind::Top => "top",
            TierKind::HeaderSeparator => "header separator",
            TierKind::ValueSeparator => "value separator",
            TierKind::Bottom => "bottom",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adjacent tier pairs checked for presence agreement. The cycle wraps so
/// the top and bottom borders of a closed box agree too.
const TIER_CYCLE: [(TierKind, TierKind); 4] = [
    (TierKind::Top, TierKind::HeaderSeparator),
    (TierKind::HeaderSeparator, TierKind::ValueSeparator),
    (TierKind::ValueSeparator, TierKind::Bottom),
    (TierKind::Bottom, TierKind::Top),
];

/// The full border configuration of a table rendering.
///
/// Construct one of the presets and customize it with the fluent
/// mutators; fallible mutators return `Result` so chains compose with
/// `?`:
///
/// ```
/// use tabtext::{Delimiter, TableFormat};
///
/// let format = TableFormat::default()
///     .hide_value_divider()
///     .show_bottom_divider('=', Delimiter::uniform('='))
///     .unwrap();
/// assert!(format.bottom().is_visible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFormat {
    hide_header: bool,
    top: Tier,
    header_separator: Tier,
    value_separator: Tier,
    bottom: Tier,
    header_line: Delimiter,
    value_line: Delimiter,
    pad: Delimiter,
}

impl Default for TableFormat {
    /// The `Default` preset: every tier a plain dash border, `|` vertical
    /// delimiters, single-space pad.
    fn default() -> Self {
        TableFormat {
            hide_header: false,
            top: Tier::visible('-', Delimiter::uniform('-')),
            header_separator: Tier::visible('-', Delimiter::uniform('-')),
            value_separator: Tier::visible('-', Delimiter::uniform('-')),
            bottom: Tier::visible('-', Delimiter::uniform('-')),
            header_line: Delimiter::uniform('|'),
            value_line: Delimiter::uniform('|'),
            pad: Delimiter::uniform(' '),
        }
    }
}

impl TableFormat {
    /// Everything hidden: bare cell text lines, nothing else.
    pub fn empty() -> Self {
        TableFormat {
            hide_header: false,
            top: Tier::hidden(),
            header_separator: Tier::hidden(),
            value_separator: Tier::hidden(),
            bottom: Tier::hidden(),
            header_line: Delimiter::NONE,
            value_line: Delimiter::NONE,
            pad: Delimiter::NONE,
        }
    }

    /// Like `Default` but with `+` corners and junctions on every tier.
    pub fn alternative() -> Self {
        TableFormat {
            top: Tier::visible('-', Delimiter::uniform('+')),
            header_separator: Tier::visible('-', Delimiter::uniform('+')),
            value_separator: Tier::visible('-', Delimiter::uniform('+')),
            bottom: Tier::visible('-', Delimiter::uniform('+')),
            ..TableFormat::default()
        }
    }

    /// `Alternative` without the divider between value rows.
    pub fn simple() -> Self {
        TableFormat { value_separator: Tier::hidden(), ..TableFormat::alternative() }
    }

    /// Header underline only: no borders, no vertical delimiters, cells
    /// separated by a double space.
    pub fn minimal() -> Self {
        TableFormat {
            hide_header: false,
            top: Tier::hidden(),
            header_separator: Tier::visible('-', Delimiter::NONE),
            value_separator: Tier::hidden(),
            bottom: Tier::hidden(),
            header_line: Delimiter::NONE,
            value_line: Delimiter::NONE,
            pad: Delimiter::new(None, Some(' '), None),
        }
    }

    /// GitHub-flavored Markdown table syntax.
    pub fn markdown() -> Self {
        TableFormat {
            top: Tier::hidden(),
            header_separator: Tier::visible('-', Delimiter::uniform('|')),
            value_separator: Tier::visible('-', Delimiter::uniform('|')),
            bottom: Tier::hidden(),
            ..TableFormat::default()
        }
    }

    /// Unicode box-drawing borders. Requires a sink that reports Unicode
    /// support (`Table::write_to` checks).
    pub fn unicode() -> Self {
        TableFormat {
            hide_header: false,
            top: Tier::visible('─', Delimiter::new(Some('┌'), Some('┬'), Some('┐'))),
            header_separator: Tier::visible('─', Delimiter::new(Some('├'), Some('┼'), Some('┤'))),
            value_separator: Tier::visible('─', Delimiter::new(Some('├'), Some('┼'), Some('┤'))),
            bottom: Tier::visible('─', Delimiter::new(Some('└'), Some('┴'), Some('┘'))),
            header_line: Delimiter::uniform('│'),
            value_line: Delimiter::uniform('│'),
            pad: Delimiter::uniform(' '),
        }
    }

    /// `unicode()` without the divider between value rows.
    pub fn simple_unicode() -> Self {
        TableFormat { value_separator: Tier::hidden(), ..TableFormat::unicode() }
    }

    pub fn top(&self) -> &Tier {
        &self.top
    }

    pub fn header_separator(&self) -> &Tier {
        &self.header_separator
    }

    pub fn value_separator(&self) -> &Tier {
        &self.value_separator
    }

    pub fn bottom(&self) -> &Tier {
        &self.bottom
    }

    pub fn header_line(&self) -> Delimiter {
        self.header_line
    }

    pub fn value_line(&self) -> Delimiter {
        self.value_line
    }

    pub fn pad(&self) -> Delimiter {
        self.pad
    }

    pub fn header_hidden(&self) -> bool {
        self.hide_header
    }

    pub fn show_top_divider(mut self, fill: char, delimiter: Delimiter) -> Result<Self, TableError> {
        self.top = Tier::visible(fill, delimiter);
        self.validated()
    }

    pub fn hide_top_divider(mut self) -> Self {
        self.top = Tier::hidden();
        self
    }

    pub fn show_header_divider(mut self, fill: char, delimiter: Delimiter) -> Result<Self, TableError> {
        self.header_separator = Tier::visible(fill, delimiter);
        self.validated()
    }

    pub fn hide_header_divider(mut self) -> Self {
        self.header_separator = Tier::hidden();
        self
    }

    pub fn show_value_divider(mut self, fill: char, delimiter: Delimiter) -> Result<Self, TableError> {
        self.value_separator = Tier::visible(fill, delimiter);
        self.validated()
    }

    pub fn hide_value_divider(mut self) -> Self {
        self.value_separator = Tier::hidden();
        self
    }

    pub fn show_bottom_divider(mut self, fill: char, delimiter: Delimiter) -> Result<Self, TableError> {
        self.bottom = Tier::visible(fill, delimiter);
        self.validated()
    }

    pub fn hide_bottom_divider(mut self) -> Self {
        self.bottom = Tier::hidden();
        self
    }

    /// Use the same vertical delimiter for header and value lines. The
    /// two triples trivially agree, so this cannot fail.
    pub fn set_delimiters(mut self, both: Delimiter) -> Self {
        self.header_line = both;
        self.value_line = both;
        self
    }

    /// Distinct header and value line delimiters; the triples must agree
    /// on presence at every position.
    pub fn set_line_delimiters(mut self, header: Delimiter, value: Delimiter) -> Result<Self, TableError> {
        self.header_line = header;
        self.value_line = value;
        self.validated()
    }

    pub fn no_delimiters(self) -> Self {
        self.set_delimiters(Delimiter::NONE)
    }

    pub fn set_pad(mut self, pad: Delimiter) -> Self {
        self.pad = pad;
        self
    }

    pub fn no_pad(self) -> Self {
        self.set_pad(Delimiter::NONE)
    }

    pub fn hide_header(mut self) -> Self {
        self.hide_header = true;
        self
    }

    pub fn hide_all(self) -> Self {
        self.hide_header()
            .hide_top_divider()
            .hide_header_divider()
            .hide_value_divider()
            .hide_bottom_divider()
            .no_delimiters()
            .no_pad()
    }

    /// The character repertoire this format needs its sink to accept.
    /// Derived from the configured glyphs, so custom box-drawing formats
    /// get the same capability check as the Unicode presets.
    pub fn required_encoding(&self) -> Encoding {
        let tiers = [&self.top, &self.header_separator, &self.value_separator, &self.bottom];
        let tier_glyphs = tiers
            .into_iter()
            .flat_map(|tier| tier.fill.into_iter().chain(tier.delimiter.glyphs()));
        let line_glyphs = self
            .header_line
            .glyphs()
            .chain(self.value_line.glyphs())
            .chain(self.pad.glyphs());

        if tier_glyphs.chain(line_glyphs).any(|glyph| !glyph.is_ascii()) {
            Encoding::Unicode
        } else {
            Encoding::Ascii
        }
    }

    fn tier(&self, kind: TierKind) -> &Tier {
        match kind {
            TierKind::Top => &self.top,
            TierKind::HeaderSeparator => &self.header_separator,
            TierKind::ValueSeparator => &self.value_separator,
            TierKind::Bottom => &self.bottom,
        }
    }

    /// Presence-agreement check over the tier cycle and the content line
    /// pair. Hidden tiers are exempt: they emit no line, so nothing can
    /// visually disagree with them.
    fn check_consistency(&self) -> Result<(), ConfigError> {
        for (first, second) in TIER_CYCLE {
            let (a, b) = (self.tier(first), self.tier(second));
            if a.is_visible() && b.is_visible() && !a.delimiter.agrees_with(&b.delimiter) {
                return Err(ConfigError::DividerMismatch { first, second });
            }
        }

        if !self.header_line.agrees_with(&self.value_line) {
            return Err(ConfigError::LineDelimiterMismatch);
        }

        Ok(())
    }

    fn validated(self) -> Result<Self, TableError> {
        self.check_consistency()?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
