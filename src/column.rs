//! Column definitions
//!
//! A column carries its header text plus the optional header/value
//! alignments and value formatter that sit between per-cell overrides and
//! the table-wide options in the resolution chain.

use std::fmt;
use std::sync::Arc;

use crate::align::Alignment;
use crate::value::{Formatter, Value};

#[derive(Clone, Default)]
pub struct Column {
    header: String,
    header_alignment: Option<Alignment>,
    value_alignment: Option<Alignment>,
    formatter: Option<Formatter>,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            header_alignment: None,
            value_alignment: None,
            formatter: None,
        }
    }

    /// Align both the header and the values of this column.
    pub fn with_alignment(self, alignment: Alignment) -> Self {
        self.with_header_alignment(alignment).with_value_alignment(alignment)
    }

    pub fn with_header_alignment(mut self, alignment: Alignment) -> Self {
        self.header_alignment = Some(alignment);
        self
    }

    pub fn with_value_alignment(mut self, alignment: Alignment) -> Self {
        self.value_alignment = Some(alignment);
        self
    }

    /// Formatter applied to every cell of this column that has no
    /// formatter of its own.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn header_alignment(&self) -> Option<Alignment> {
        self.header_alignment
    }

    pub fn value_alignment(&self) -> Option<Alignment> {
        self.value_alignment
    }

    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn set_header_alignment(&mut self, alignment: Alignment) {
        self.header_alignment = Some(alignment);
    }

    pub fn set_value_alignment(&mut self, alignment: Alignment) {
        self.value_alignment = Some(alignment);
    }

    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
    }

    /// Run the column formatter on a cell, if one is set.
    pub(crate) fn format_value(&self, value: &Value) -> Option<String> {
        self.formatter.as_ref().map(|format| format(value))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("header_alignment", &self.header_alignment)
            .field("value_alignment", &self.value_alignment)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl From<&str> for Column {
    fn from(header: &str) -> Self {
        Column::new(header)
    }
}

impl From<String> for Column {
    fn from(header: String) -> Self {
        Column::new(header)
    }
}
