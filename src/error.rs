//! Error types
//!
//! Four failure kinds, all synchronous and raised at the call that
//! introduces the bad state: configuration problems, strict-table arity
//! violations, explicit typed-view casts, and sink write failures.
//! Rendering itself never fails once a table has columns and the format
//! passed its consistency checks.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::format::TierKind;
use crate::sink::Encoding;

pub type Result<T> = std::result::Result<T, TableError>;

/// Any error this crate can produce.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Arity(#[from] ArityError),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// A table, format, adapter input, or sink capability problem. Detected
/// at configuration time, never deferred to render time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no columns have been added")]
    NoColumns,

    #[error("{first} and {second} divider delimiters do not agree on presence")]
    DividerMismatch { first: TierKind, second: TierKind },

    #[error("header and value line delimiters do not agree on presence")]
    LineDelimiterMismatch,

    #[error("input collection is empty")]
    EmptyInput,

    #[error("invalid adapter input: {0}")]
    InvalidInput(String),

    #[error("cannot add columns to a strict table that already has rows")]
    ColumnsFrozen,

    #[error("sink does not support {0} output")]
    UnsupportedEncoding(Encoding),
}

/// A strict-table batch insert whose rows do not all match the column
/// count. The whole batch was rejected; the table is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityError {
    /// The table's column count at the time of the insert.
    pub expected: usize,
    /// Every offending row of the batch, in order.
    pub violations: Vec<ArityViolation>,
}

/// One offending row within a rejected batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityViolation {
    /// 1-based position of the row within the submitted batch.
    pub row: usize,
    /// Number of values the row actually carried.
    pub actual: usize,
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(
                f,
                "row #{} has {} values, expected {}",
                violation.row, violation.actual, self.expected
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ArityError {}

/// A typed view (`CellValue::as_int()` and friends) requested for a cell
/// whose runtime kind does not match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot view {actual} value as {requested}")]
pub struct CastError {
    pub requested: &'static str,
    pub actual: &'static str,
}

/// The output sink rejected a write. Propagated to the caller, never
/// retried.
#[derive(Debug, Error)]
#[error("sink write failed: {0}")]
pub struct SinkError(#[from] pub io::Error);
