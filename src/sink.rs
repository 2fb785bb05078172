//! Output sinks
//!
//! The renderer produces a complete string; a `Sink` is where it goes.
//! Sinks report which character repertoire they accept so a box-drawing
//! format can be rejected up front instead of degrading into mojibake on
//! a non-Unicode target.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::SinkError;

/// Character repertoire a format needs or a sink provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Ascii,
    Unicode,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Ascii => f.write_str("ASCII"),
            Encoding::Unicode => f.write_str("Unicode"),
        }
    }
}

/// A write target for rendered tables.
///
/// One synchronous write per render; a failure surfaces immediately as a
/// `SinkError` and is never retried.
pub trait Sink {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError>;

    /// Whether this sink can represent the given repertoire. Defaults to
    /// everything; restricted targets override.
    fn supports(&self, _encoding: Encoding) -> bool {
        true
    }
}

/// Sink over any `std::io::Write`: stdout, files, byte buffers.
pub struct IoSink<W: Write> {
    writer: W,
    unicode: bool,
}

impl<W: Write> IoSink<W> {
    /// A Unicode-capable sink (the common case: UTF-8 targets).
    pub fn new(writer: W) -> Self {
        IoSink { writer, unicode: true }
    }

    /// A sink that only accepts ASCII output, e.g. a legacy codepage
    /// console or a protocol that forbids multibyte characters.
    pub fn ascii(writer: W) -> Self {
        IoSink { writer, unicode: false }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn supports(&self, encoding: Encoding) -> bool {
        match encoding {
            Encoding::Ascii => true,
            Encoding::Unicode => self.unicode,
        }
    }
}

/// Collecting into a `String` always succeeds and accepts everything.
impl Sink for String {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        self.push_str(text);
        Ok(())
    }
}

/// Convenience sink for the usual target.
pub fn stdout() -> IoSink<io::Stdout> {
    IoSink::new(io::stdout())
}
