//! Line assembly
//!
//! The builder is a pure function of one table snapshot and one format:
//! it renders the full cell text matrix, derives the column widths from
//! it, then emits lines tier by tier. Widths live only for the duration
//! of one call, so a table mutated between renders can never see stale
//! measurements. Format consistency was already enforced when the format
//! was configured; it is not re-checked here.

use log::debug;

use crate::align::{pad_text, text_width};
use crate::error::{ConfigError, Result};
use crate::format::{Delimiter, TableFormat, Tier};
use crate::table::TableData;

pub(crate) fn build(data: &TableData, format: &TableFormat) -> Result<String> {
    if data.columns.is_empty() {
        return Err(ConfigError::NoColumns.into());
    }

    let texts = render_texts(data);
    let widths = column_widths(data, &texts);
    debug!("rendering {} rows x {} columns, widths {:?}", data.rows.len(), data.columns.len(), widths);

    let pad = format.pad();
    let mut lines: Vec<String> = Vec::new();

    push_divider(&mut lines, data, format.top(), pad, &widths);

    if !format.header_hidden() {
        let cells: Vec<String> = data
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| pad_text(column.header(), widths[i], data.header_alignment(column)))
            .collect();
        lines.push(join_line(&cells, &pad, &format.header_line()));

        // The separator only makes sense under a header line.
        push_divider(&mut lines, data, format.header_separator(), pad, &widths);
    }

    let last = data.rows.len().saturating_sub(1);
    for (r, row) in data.rows.iter().enumerate() {
        let cells: Vec<String> = (0..data.columns.len())
            .map(|i| pad_text(&texts[r][i], widths[i], data.cell_alignment(row, i)))
            .collect();
        lines.push(join_line(&cells, &pad, &format.value_line()));

        if r == last {
            push_divider(&mut lines, data, format.bottom(), pad, &widths);
        } else {
            push_divider(&mut lines, data, format.value_separator(), pad, &widths);
        }
    }

    if data.options.enable_count {
        lines.push(String::new());
        lines.push(format!("Count: {}", data.rows.len()));
    }

    Ok(lines.join("\n"))
}

/// Every cell rendered through the formatter chain, once. Widths and the
/// emitted value lines both read from this matrix so formatters run a
/// single time per cell.
fn render_texts(data: &TableData) -> Vec<Vec<String>> {
    data.rows
        .iter()
        .map(|row| (0..data.columns.len()).map(|i| data.cell_text(row, i)).collect())
        .collect()
}

/// Column width = max character count over the header and every rendered
/// cell of the column.
fn column_widths(data: &TableData, texts: &[Vec<String>]) -> Vec<usize> {
    data.columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            texts
                .iter()
                .map(|row| text_width(&row[i]))
                .fold(text_width(column.header()), usize::max)
        })
        .collect()
}

/// Emit one divider line if the tier is visible. The pad positions are
/// masked with the tier's fill glyph so the border runs solid through
/// them.
fn push_divider(lines: &mut Vec<String>, data: &TableData, tier: &Tier, pad: Delimiter, widths: &[usize]) {
    let Some(fill) = tier.fill() else {
        return;
    };
    let cells = data.divider_cells(fill, widths);
    lines.push(join_line(&cells, &pad.masked(fill), &tier.delimiter()));
}

/// The single line-join primitive shared by divider and content lines:
///
/// ```text
/// delimiter.left pad.left cell (pad.inner delimiter.inner pad.inner cell)* pad.right delimiter.right
/// ```
///
/// Absent glyphs contribute nothing. Reusing this for every line kind is
/// what makes the tier presence-agreement rule sufficient for visual
/// coherence.
fn join_line(cells: &[String], pad: &Delimiter, delimiter: &Delimiter) -> String {
    let mut separator = String::new();
    push_glyph(&mut separator, pad.inner);
    push_glyph(&mut separator, delimiter.inner);
    push_glyph(&mut separator, pad.inner);

    let mut line = String::new();
    push_glyph(&mut line, delimiter.left);
    push_glyph(&mut line, pad.left);
    line.push_str(&cells.join(&separator));
    push_glyph(&mut line, pad.right);
    push_glyph(&mut line, delimiter.right);
    line
}

fn push_glyph(line: &mut String, glyph: Option<char>) {
    if let Some(c) = glyph {
        line.push(c);
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
