//! Adapters from foreign data shapes to the row/column model
//!
//! All adapters produce a strict [`Table`] with `number_alignment` set to
//! right (numbers in generated tables read best that way); adjust through
//! `options_mut()` afterwards. Column derivation happens here, once, at
//! the boundary; the render path never inspects foreign shapes.

use log::debug;
use serde_json::{Map, Value as JsonValue};

use crate::align::Alignment;
use crate::column::Column;
use crate::error::{ConfigError, Result};
use crate::row::Row;
use crate::table::{Table, TableOptions};
use crate::value::{CellValue, Value};

/// A record type that knows its own tabular shape.
///
/// The Rust-native stand-in for field reflection: the impl enumerates the
/// fields once, producing a static column list before any row is added.
///
/// ```
/// use tabtext::{Column, Record, Row, Table, row};
///
/// struct Package {
///     name: &'static str,
///     downloads: u64,
/// }
///
/// impl Record for Package {
///     fn columns() -> Vec<Column> {
///         vec![Column::new("name"), Column::new("downloads")]
///     }
///
///     fn row(&self) -> Row {
///         row![self.name, self.downloads]
///     }
/// }
///
/// let table = Table::from_records(&[Package { name: "log", downloads: 4 }]).unwrap();
/// assert_eq!(table.row_count(), 1);
/// ```
pub trait Record {
    fn columns() -> Vec<Column>;
    fn row(&self) -> Row;
}

/// A plain tabular dataset: named columns plus rows of raw scalars.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

fn adapter_options() -> TableOptions {
    TableOptions { number_alignment: Some(Alignment::Right), ..TableOptions::default() }
}

impl Table {
    /// Ordered column specs plus fixed-arity value rows, arity-checked as
    /// one batch.
    pub fn from_rows<C: Into<Column>>(
        columns: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = Row>,
    ) -> Result<Table> {
        let mut table = Table::with_options(columns, adapter_options());
        table.add_rows(rows)?;
        Ok(table)
    }

    /// A homogeneous collection of records. An empty collection is fine:
    /// the columns come from the type, not from the first element.
    pub fn from_records<T: Record>(items: &[T]) -> Result<Table> {
        let mut table = Table::with_options(T::columns(), adapter_options());
        table.add_rows(items.iter().map(Record::row))?;
        Ok(table)
    }

    /// A named-columns dataset. Fails on an empty column list, or with an
    /// arity error when a row disagrees with the column count.
    pub fn from_dataset(dataset: &Dataset) -> Result<Table> {
        if dataset.columns.is_empty() {
            return Err(ConfigError::EmptyInput.into());
        }

        let columns = dataset.columns.iter().map(|name| Column::new(name));
        let rows = dataset
            .rows
            .iter()
            .map(|cells| cells.iter().map(|cell| Value::new(cell.clone())).collect());
        Table::from_rows(columns, rows)
    }

    /// A collection of key-ordered mappings. The first mapping's keys
    /// become the columns, in key order; later mappings are looked up by
    /// key and missing keys become null cells. An empty collection is a
    /// configuration error: there is no first mapping to derive columns
    /// from.
    pub fn from_maps(maps: &[Map<String, JsonValue>]) -> Result<Table> {
        let refs: Vec<&Map<String, JsonValue>> = maps.iter().collect();
        from_map_refs(&refs)
    }

    /// A JSON array of objects, e.g. the typical REST list response.
    /// Anything else is invalid input.
    pub fn from_json(value: &JsonValue) -> Result<Table> {
        let items = value
            .as_array()
            .ok_or_else(|| ConfigError::InvalidInput("expected a JSON array of objects".to_string()))?;

        let maps = items
            .iter()
            .map(|item| {
                item.as_object().ok_or_else(|| {
                    ConfigError::InvalidInput("every array element must be a JSON object".to_string())
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        from_map_refs(&maps)
    }
}

fn from_map_refs(maps: &[&Map<String, JsonValue>]) -> Result<Table> {
    let Some(first) = maps.first() else {
        return Err(ConfigError::EmptyInput.into());
    };

    let keys: Vec<&String> = first.keys().collect();
    debug!("deriving {} columns from the first of {} mappings", keys.len(), maps.len());
    let columns = keys.iter().map(|key| Column::new(key.as_str()));

    let rows = maps.iter().map(|map| {
        keys.iter()
            .map(|key| Value::new(map.get(key.as_str()).map_or(CellValue::Null, cell_from_json)))
            .collect::<Row>()
    });

    Table::from_rows(columns, rows)
}

/// Scalar JSON values map to their scalar kinds; arrays and nested
/// objects fall back to their compact JSON text.
fn cell_from_json(value: &JsonValue) -> CellValue {
    match value {
        JsonValue::Null => CellValue::Null,
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(u) = n.as_u64() {
                CellValue::UInt(u)
            } else {
                CellValue::Float(n.as_f64().unwrap_or_default())
            }
        }
        JsonValue::String(s) => CellValue::Str(s.clone()),
        other => CellValue::Str(other.to_string()),
    }
}

#[cfg(test)]
#[path = "adapters_test.rs"]
mod adapters_test;
