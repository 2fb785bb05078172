//! Tables: ordered columns, ordered rows, per-cell resolution
//!
//! Two variants share one data model and one renderer but promise
//! different arity contracts:
//!
//! - [`Table`] is strict: every row must match the column count when it
//!   is inserted, and a bad batch is rejected whole.
//! - [`DynamicTable`] is tolerant: columns and rows may diverge, and a
//!   missing cell renders as empty text.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::align::{Alignment, repeat};
use crate::builder;
use crate::column::Column;
use crate::error::{ArityError, ArityViolation, ConfigError, Result};
use crate::format::TableFormat;
use crate::row::Row;
use crate::sink::Sink;

/// Table-wide rendering options, the lowest-priority tier of the
/// alignment resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableOptions {
    /// Append a blank line and `Count: <N>` after the table.
    pub enable_count: bool,
    /// Alignment applied to cells whose raw scalar is a numeric kind and
    /// which carry no per-cell or per-column alignment.
    pub number_alignment: Option<Alignment>,
    /// Default header alignment for columns without their own.
    pub header_alignment: Option<Alignment>,
}

/// Shared state and resolution logic of both table variants. The builder
/// reads this as an immutable snapshot for the duration of one render.
#[derive(Debug, Clone, Default)]
pub(crate) struct TableData {
    pub(crate) columns: Vec<Column>,
    pub(crate) rows: Vec<Row>,
    pub(crate) options: TableOptions,
}

impl TableData {
    fn with_columns<C: Into<Column>>(columns: impl IntoIterator<Item = C>, options: TableOptions) -> Self {
        TableData {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            options,
        }
    }

    /// Rendered text of one cell. Priority: the value's own formatter,
    /// then the column formatter, then the canonical scalar text. A cell
    /// missing from a short row renders as empty text.
    pub(crate) fn cell_text(&self, row: &Row, index: usize) -> String {
        let Some(value) = row.get(index) else {
            return String::new();
        };

        if let Some(text) = value.format_self() {
            text
        } else if let Some(text) = self.columns[index].format_value(value) {
            text
        } else {
            value.raw().to_text()
        }
    }

    /// Resolved alignment of one cell. Priority: value override, column
    /// value alignment, the table's number alignment (numeric kinds
    /// only), then left.
    pub(crate) fn cell_alignment(&self, row: &Row, index: usize) -> Alignment {
        let column_alignment = self.columns[index].value_alignment();

        let Some(value) = row.get(index) else {
            return column_alignment.unwrap_or(Alignment::Left);
        };

        value
            .alignment()
            .or(column_alignment)
            .or_else(|| self.options.number_alignment.filter(|_| value.raw().is_numeric()))
            .unwrap_or(Alignment::Left)
    }

    /// Resolved alignment of one header. Priority: column header
    /// alignment, the table-wide header alignment, then left.
    pub(crate) fn header_alignment(&self, column: &Column) -> Alignment {
        column
            .header_alignment()
            .or(self.options.header_alignment)
            .unwrap_or(Alignment::Left)
    }

    /// Fill-glyph segments for a divider line, one per column.
    pub(crate) fn divider_cells(&self, fill: char, widths: &[usize]) -> Vec<String> {
        widths.iter().map(|width| repeat(fill, *width)).collect()
    }
}

/// Strict table: row arity is validated against the column count at
/// insertion time, and violations reject the entire batch with the table
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct Table {
    data: TableData,
}

impl Table {
    pub fn new<C: Into<Column>>(columns: impl IntoIterator<Item = C>) -> Self {
        Table::with_options(columns, TableOptions::default())
    }

    pub fn with_options<C: Into<Column>>(
        columns: impl IntoIterator<Item = C>,
        options: TableOptions,
    ) -> Self {
        Table { data: TableData::with_columns(columns, options) }
    }

    pub fn options(&self) -> &TableOptions {
        &self.data.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.data.options
    }

    pub fn columns(&self) -> &[Column] {
        &self.data.columns
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.data.columns.get_mut(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.data.rows
    }

    pub fn row_count(&self) -> usize {
        self.data.rows.len()
    }

    /// Append a column. Only legal while the table has no rows: rows
    /// already stored were validated against the old column count, and
    /// widening the table would silently break their arity.
    pub fn add_column(&mut self, column: impl Into<Column>) -> Result<&mut Self> {
        if !self.data.rows.is_empty() {
            return Err(ConfigError::ColumnsFrozen.into());
        }
        self.data.columns.push(column.into());
        Ok(self)
    }

    /// Append one row; its value count must equal the column count.
    pub fn add_row(&mut self, row: impl Into<Row>) -> Result<&mut Self> {
        self.add_rows([row.into()])
    }

    /// Append a batch of rows. The batch is validated as a unit: if any
    /// row's value count differs from the column count, the whole batch
    /// is rejected, the error lists every offending row, and the table is
    /// left unchanged.
    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<&mut Self> {
        let expected = self.data.columns.len();
        if expected == 0 {
            return Err(ConfigError::NoColumns.into());
        }

        let batch: Vec<Row> = rows.into_iter().collect();
        let violations: Vec<ArityViolation> = batch
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != expected)
            .map(|(i, row)| ArityViolation { row: i + 1, actual: row.len() })
            .collect();

        if !violations.is_empty() {
            return Err(ArityError { expected, violations }.into());
        }

        debug!("adding {} rows against {} columns", batch.len(), expected);
        self.data.rows.extend(batch);
        Ok(self)
    }

    /// Render to text with the given format. Pure: reads the table as a
    /// snapshot, caches nothing across calls.
    pub fn render(&self, format: &TableFormat) -> Result<String> {
        builder::build(&self.data, format)
    }

    /// Render and write to a sink, checking the sink's encoding
    /// capability against the format first.
    pub fn write_to(&self, sink: &mut dyn Sink, format: &TableFormat) -> Result<()> {
        write_table(&self.data, sink, format)
    }
}

/// Tolerant table: column and row cardinalities may diverge. Columns can
/// be appended after rows exist; a missing cell renders as empty text and
/// cells beyond the column count are ignored.
#[derive(Debug, Clone, Default)]
pub struct DynamicTable {
    data: TableData,
}

impl DynamicTable {
    pub fn new<C: Into<Column>>(columns: impl IntoIterator<Item = C>) -> Self {
        DynamicTable::with_options(columns, TableOptions::default())
    }

    pub fn with_options<C: Into<Column>>(
        columns: impl IntoIterator<Item = C>,
        options: TableOptions,
    ) -> Self {
        DynamicTable { data: TableData::with_columns(columns, options) }
    }

    pub fn options(&self) -> &TableOptions {
        &self.data.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.data.options
    }

    pub fn columns(&self) -> &[Column] {
        &self.data.columns
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.data.columns.get_mut(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.data.rows
    }

    pub fn row_count(&self) -> usize {
        self.data.rows.len()
    }

    /// Append a column, regardless of existing rows; their missing cells
    /// render empty.
    pub fn add_column(&mut self, column: impl Into<Column>) -> &mut Self {
        self.data.columns.push(column.into());
        self
    }

    /// Append one row of any length.
    pub fn add_row(&mut self, row: impl Into<Row>) -> &mut Self {
        self.data.rows.push(row.into());
        self
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> &mut Self {
        self.data.rows.extend(rows);
        self
    }

    /// Render to text with the given format. Pure: reads the table as a
    /// snapshot, caches nothing across calls.
    pub fn render(&self, format: &TableFormat) -> Result<String> {
        builder::build(&self.data, format)
    }

    /// Render and write to a sink, checking the sink's encoding
    /// capability against the format first.
    pub fn write_to(&self, sink: &mut dyn Sink, format: &TableFormat) -> Result<()> {
        write_table(&self.data, sink, format)
    }
}

fn write_table(data: &TableData, sink: &mut dyn Sink, format: &TableFormat) -> Result<()> {
    let encoding = format.required_encoding();
    if !sink.supports(encoding) {
        return Err(ConfigError::UnsupportedEncoding(encoding).into());
    }

    let text = builder::build(data, format)?;
    sink.write_text(&text)?;
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
