//! Render in-memory tabular data as aligned, delimited plain text.
//!
//! Build a [`Table`] from columns and rows (or through one of the
//! adapters), pick a [`TableFormat`] preset or configure your own border
//! style, and render:
//!
//! ```
//! use tabtext::{Table, TableFormat, row};
//!
//! let mut table = Table::new(["one", "two", "three"]);
//! table
//!     .add_row(row![1, 2, 3])
//!     .unwrap()
//!     .add_row(row!["hello", "world", "very long text very long text"])
//!     .unwrap();
//!
//! let text = table.render(&TableFormat::default()).unwrap();
//! assert!(text.starts_with("----"));
//! assert!(text.contains("| hello | world |"));
//! ```
//!
//! Rendering is a pure function of the table contents and the format:
//! column widths are computed from scratch on every call, there is no
//! hidden state, and the same inputs always produce the same text. Cell
//! text and alignment resolve through a fixed priority chain (per-cell
//! override, then per-column, then table-wide option), and the border
//! configuration validates its own visual consistency at the moment it
//! is mutated rather than at render time.

mod adapters;
mod align;
mod builder;
mod column;
mod error;
mod format;
mod row;
mod sink;
mod table;
mod value;

pub use adapters::{Dataset, Record};
pub use align::Alignment;
pub use column::Column;
pub use error::{ArityError, ArityViolation, CastError, ConfigError, Result, SinkError, TableError};
pub use format::{Delimiter, TableFormat, Tier, TierKind};
pub use row::Row;
pub use sink::{Encoding, IoSink, Sink, stdout};
pub use table::{DynamicTable, Table, TableOptions};
pub use value::{CellValue, Formatter, Value};

/// Build a [`Row`] from heterogeneous scalars (anything convertible into
/// a [`Value`], including `Value` itself for cells carrying overrides).
///
/// ```
/// use tabtext::{Alignment, Value, row};
///
/// let row = row!["total", 42, Value::new(0.5).with_alignment(Alignment::Center)];
/// assert_eq!(row.len(), 3);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Row::from_values(vec![$($crate::Value::from($value)),+])
    };
}
