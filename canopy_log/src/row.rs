// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-oriented CSV row writing.
//!
//! ## Overview
//!
//! A [`RowWriter`] is constructed with a fixed column set and writes the
//! header line immediately. Fields are pushed one at a time as a tick's
//! observations arrive; [`RowWriter::write_row`] checks the field count
//! against the columns, escapes, and emits the line. Rows are independent,
//! so an abandoned row can be discarded with [`RowWriter::prepare_row`]
//! without touching the sink.

use std::fmt::Display;
use std::io::{self, Write};

/// Writes arity-checked CSV rows to an [`io::Write`] sink.
#[derive(Debug)]
pub struct RowWriter<W: Write> {
    sink: W,
    columns: usize,
    row: Vec<String>,
}

impl<W: Write> RowWriter<W> {
    /// Create a writer for the given column set and emit the header line.
    pub fn new(mut sink: W, columns: &[&str]) -> io::Result<Self> {
        write_line(&mut sink, columns.iter().map(|c| escape(c)))?;
        Ok(Self {
            sink,
            columns: columns.len(),
            row: Vec::with_capacity(columns.len()),
        })
    }

    /// Discard any fields pushed for the current row.
    pub fn prepare_row(&mut self) {
        self.row.clear();
    }

    /// Append a field to the pending row.
    pub fn push(&mut self, field: impl Display) {
        self.row.push(field.to_string());
    }

    /// Number of fields pushed for the pending row.
    pub fn pending(&self) -> usize {
        self.row.len()
    }

    /// Write the pending row and clear it.
    ///
    /// Fails with [`io::ErrorKind::InvalidData`] if the field count does
    /// not match the column set; the pending row is kept so the caller can
    /// inspect or discard it.
    pub fn write_row(&mut self) -> io::Result<()> {
        if self.row.len() != self.columns {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "row has {} fields, header has {} columns",
                    self.row.len(),
                    self.columns
                ),
            ));
        }
        write_line(&mut self.sink, self.row.iter().map(|f| escape(f)))?;
        self.row.clear();
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Consume the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn write_line<W: Write>(sink: &mut W, fields: impl Iterator<Item = String>) -> io::Result<()> {
    let mut first = true;
    for field in fields {
        if !first {
            sink.write_all(b",")?;
        }
        first = false;
        sink.write_all(field.as_bytes())?;
    }
    sink.write_all(b"\n")
}

// Quote fields containing separators, quotes, or line breaks; double any
// embedded quotes.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        let mut out = String::with_capacity(field.len() + 2);
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
        out
    } else {
        field.to_string()
    }
}
