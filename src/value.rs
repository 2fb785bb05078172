//! Cell scalars and per-cell overrides
//!
//! `CellValue` is the raw scalar a cell carries; `Value` wraps one with the
//! optional alignment and formatter overrides that take priority over the
//! column and table settings during rendering.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::align::Alignment;
use crate::error::CastError;

/// A formatter turns a cell into its rendered text.
///
/// Attachable to a `Value` (highest priority) or a `Column`; resolved via
/// the fixed priority chain in `TableData::cell_text`. `Arc` so tables
/// holding formatters stay cloneable and shareable across threads.
pub type Formatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// The raw scalar kinds a cell can hold.
///
/// `Int`, `UInt` and `Float` form the closed numeric kind set eligible for
/// automatic alignment under `TableOptions::number_alignment`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Whether this scalar belongs to the numeric kind set.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::UInt(_) | CellValue::Float(_))
    }

    /// Name of the scalar kind, used in cast error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::UInt(_) => "uint",
            CellValue::Float(_) => "float",
            CellValue::Str(_) => "string",
            CellValue::Date(_) => "date",
            CellValue::Timestamp(_) => "timestamp",
        }
    }

    /// Canonical text form; `Null` renders as empty text.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(n) => n.to_string(),
            CellValue::UInt(n) => n.to_string(),
            CellValue::Float(x) => x.to_string(),
            CellValue::Str(s) => s.clone(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Timestamp(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Typed view of the scalar. Fails when the runtime kind differs,
    /// including `Null` (there is no honest `bool` in a null cell).
    pub fn as_bool(&self) -> Result<bool, CastError> {
        match self {
            CellValue::Bool(b) => Ok(*b),
            other => Err(other.cast_error("bool")),
        }
    }

    pub fn as_int(&self) -> Result<i64, CastError> {
        match self {
            CellValue::Int(n) => Ok(*n),
            other => Err(other.cast_error("int")),
        }
    }

    pub fn as_uint(&self) -> Result<u64, CastError> {
        match self {
            CellValue::UInt(n) => Ok(*n),
            other => Err(other.cast_error("uint")),
        }
    }

    pub fn as_float(&self) -> Result<f64, CastError> {
        match self {
            CellValue::Float(x) => Ok(*x),
            other => Err(other.cast_error("float")),
        }
    }

    pub fn as_str(&self) -> Result<&str, CastError> {
        match self {
            CellValue::Str(s) => Ok(s),
            other => Err(other.cast_error("string")),
        }
    }

    pub fn as_date(&self) -> Result<NaiveDate, CastError> {
        match self {
            CellValue::Date(d) => Ok(*d),
            other => Err(other.cast_error("date")),
        }
    }

    pub fn as_timestamp(&self) -> Result<NaiveDateTime, CastError> {
        match self {
            CellValue::Timestamp(t) => Ok(*t),
            other => Err(other.cast_error("timestamp")),
        }
    }

    fn cast_error(&self, requested: &'static str) -> CastError {
        CastError { requested, actual: self.kind() }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// One cell: a raw scalar plus optional alignment and formatter overrides.
#[derive(Clone, Default)]
pub struct Value {
    raw: CellValue,
    alignment: Option<Alignment>,
    formatter: Option<Formatter>,
}

impl Value {
    pub fn new(raw: impl Into<CellValue>) -> Self {
        Value { raw: raw.into(), alignment: None, formatter: None }
    }

    pub fn null() -> Self {
        Value::new(CellValue::Null)
    }

    /// Per-cell alignment, overriding the column and table settings.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Per-cell formatter, overriding the column formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn raw(&self) -> &CellValue {
        &self.raw
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Run the cell's own formatter, if any.
    pub(crate) fn format_self(&self) -> Option<String> {
        self.formatter.as_ref().map(|format| format(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("raw", &self.raw)
            .field("alignment", &self.alignment)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl From<CellValue> for Value {
    fn from(raw: CellValue) -> Self {
        Value::new(raw)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for CellValue {
            fn from(v: $t) -> Self { CellValue::Int(v as i64) }
        }
        impl From<$t> for Value {
            fn from(v: $t) -> Self { Value::new(v) }
        }
    )*};
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for CellValue {
            fn from(v: $t) -> Self { CellValue::UInt(v as u64) }
        }
        impl From<$t> for Value {
            fn from(v: $t) -> Self { Value::new(v) }
        }
    )*};
}

macro_rules! impl_from_float {
    ($($t:ty),*) => {$(
        impl From<$t> for CellValue {
            fn from(v: $t) -> Self { CellValue::Float(v as f64) }
        }
        impl From<$t> for Value {
            fn from(v: $t) -> Self { Value::new(v) }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, isize);
impl_from_uint!(u8, u16, u32, u64, usize);
impl_from_float!(f32, f64);

macro_rules! impl_from_other {
    ($($t:ty => $body:expr),* $(,)?) => {$(
        impl From<$t> for CellValue {
            fn from(v: $t) -> Self { ($body)(v) }
        }
        impl From<$t> for Value {
            fn from(v: $t) -> Self { Value::new(v) }
        }
    )*};
}

impl_from_other!(
    bool => CellValue::Bool,
    &str => |v: &str| CellValue::Str(v.to_string()),
    String => CellValue::Str,
    NaiveDate => CellValue::Date,
    NaiveDateTime => CellValue::Timestamp,
);

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

impl<T: Into<CellValue>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::new(v)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;
