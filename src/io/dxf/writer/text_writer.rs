//! ASCII DXF writer

use std::io::Write;
use crate::error::Result;
use crate::types::Handle;
use super::stream_writer::DxfStreamWriter;

/// Longest string value written; longer values are truncated.
pub const MAX_STRING_LENGTH: usize = 256;

/// Fractional digits written for real values
pub const REAL_PRECISION: usize = 6;

/// Truncate `value` to at most [`MAX_STRING_LENGTH`] characters.
pub fn bounded_str(value: &str) -> &str {
    match value.char_indices().nth(MAX_STRING_LENGTH) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// ASCII DXF stream writer
///
/// Every pair is written as a tab-indented code line followed by the
/// value line. The writer adds no buffering of its own.
pub struct DxfTextWriter<W: Write> {
    writer: W,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        write!(self.writer, "\t{}\n{}\n", code, bounded_str(value))?;
        Ok(())
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        write!(self.writer, "\t{}\n{}\n", code, value)?;
        Ok(())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        write!(self.writer, "\t{}\n{}\n", code, value)?;
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        write!(self.writer, "\t{}\n{:.*}\n", code, REAL_PRECISION, value)?;
        Ok(())
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        write!(self.writer, "\t{}\n{:X}\n", code, handle)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
