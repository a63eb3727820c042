//! Section framing, header variables and TABLES records

use std::io::Write;

use crate::error::{DxfError, Result};
use crate::log;
use crate::tables::{pattern_length, TableKind};
use crate::types::{Vector2, Vector3};

use super::state::{Section, WriterState};
use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use super::DxfWriter;

/// One tagged value of a HEADER variable
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    String(i32, String),
    Integer(i32, i32),
    Real(i32, f64),
    Point2(i32, Vector2),
    Point3(i32, Vector3),
}

impl<W: Write> DxfWriter<W> {
    /// Open a section. Sections do not nest.
    pub fn section_begin(&mut self, section: Section) -> Result<()> {
        self.expect("section_begin", |state| matches!(state, WriterState::Idle))?;
        self.writer.write_section_start(section.name())?;
        self.state = WriterState::InSection(section);
        log::debug!(section = section.name(), "section begin");
        Ok(())
    }

    /// Close the open section
    pub fn section_end(&mut self) -> Result<()> {
        self.expect("section_end", |state| {
            matches!(state, WriterState::InSection(_))
        })?;
        self.writer.write_section_end()?;
        log::debug!(section = ?self.state.section(), "section end");
        self.state = WriterState::Idle;
        Ok(())
    }

    /// Close `section`, rejecting the call when a different one is open
    fn close_section(&mut self, section: Section, operation: &'static str) -> Result<()> {
        self.expect(operation, |state| *state == WriterState::InSection(section))?;
        self.section_end()
    }

    pub fn header_begin(&mut self) -> Result<()> {
        self.section_begin(Section::Header)
    }

    pub fn header_end(&mut self) -> Result<()> {
        self.close_section(Section::Header, "header_end")
    }

    /// Open the TABLES section
    pub fn tables_begin(&mut self) -> Result<()> {
        self.section_begin(Section::Tables)
    }

    /// Close the TABLES section
    pub fn tables_end(&mut self) -> Result<()> {
        self.close_section(Section::Tables, "tables_end")
    }

    pub fn blocks_begin(&mut self) -> Result<()> {
        self.section_begin(Section::Blocks)
    }

    pub fn blocks_end(&mut self) -> Result<()> {
        self.close_section(Section::Blocks, "blocks_end")
    }

    /// Open the ENTITIES section
    pub fn entities_begin(&mut self) -> Result<()> {
        self.section_begin(Section::Entities)
    }

    /// Close the ENTITIES section
    pub fn entities_end(&mut self) -> Result<()> {
        self.close_section(Section::Entities, "entities_end")
    }

    pub fn objects_begin(&mut self) -> Result<()> {
        self.section_begin(Section::Objects)
    }

    pub fn objects_end(&mut self) -> Result<()> {
        self.close_section(Section::Objects, "objects_end")
    }

    /// Write a header variable: `9 <name>` followed by its values in order
    pub fn header_variable(&mut self, name: &str, values: &[HeaderValue]) -> Result<()> {
        self.expect("header_variable", |state| {
            *state == WriterState::InSection(Section::Header)
        })?;
        self.writer.write_string(9, name)?;
        for value in values {
            match value {
                HeaderValue::String(code, text) => self.writer.write_string(*code, text)?,
                HeaderValue::Integer(code, int) => self.writer.write_i32(*code, *int)?,
                HeaderValue::Real(code, real) => self.writer.write_double(*code, *real)?,
                HeaderValue::Point2(code, point) => self.writer.write_point2d(*code, *point)?,
                HeaderValue::Point3(code, point) => self.writer.write_point3d(*code, *point)?,
            }
        }
        Ok(())
    }

    /// Write `$ACADVER` with the given version string (e.g. `AC1009`)
    pub fn acad_version(&mut self, version: &str) -> Result<()> {
        self.header_variable("$ACADVER", &[HeaderValue::String(1, version.to_string())])
    }

    /// Open a symbol table with the declared number of entries.
    ///
    /// The count is written as given; it is not checked against the
    /// records that follow.
    pub fn table_begin(&mut self, kind: TableKind, declared_entries: i16) -> Result<()> {
        self.require_full("table_begin")?;
        self.expect("table_begin", |state| {
            *state == WriterState::InSection(Section::Tables)
        })?;
        self.writer.write_string(0, "TABLE")?;
        self.writer.write_string(2, kind.name())?;
        self.write_next_handle()?;
        self.writer.write_subclass("AcDbSymbolTable")?;
        self.writer.write_i16(70, declared_entries)?;
        self.state = WriterState::InTable {
            kind,
            declared: declared_entries,
            written: 0,
        };
        log::debug!(table = kind.name(), declared_entries, "table begin");
        Ok(())
    }

    /// Close the open symbol table
    pub fn table_end(&mut self) -> Result<()> {
        self.require_full("table_end")?;
        self.expect("table_end", WriterState::allows_table_records)?;
        self.writer.write_string(0, "ENDTAB")?;
        if let WriterState::InTable { declared, written, .. } = self.state {
            if usize::try_from(declared).ok() != Some(written) {
                log::warn!(
                    state = %self.state,
                    declared,
                    written,
                    "table entry count does not match declared count"
                );
            }
            log::debug!(state = %self.state, written, "table end");
            self.state = WriterState::InSection(Section::Tables);
        }
        Ok(())
    }

    /// Write a VPORT record centered on (`x`, `y`) with view height `height`
    pub fn viewport(&mut self, name: &str, x: f64, y: f64, height: f64) -> Result<()> {
        self.begin_table_record("viewport", TableKind::VPort, "AcDbViewportTableRecord")?;
        self.writer.write_string(2, name)?;
        self.writer.write_i16(70, 0)?;

        let defaults = &self.config.viewport;
        self.writer.write_point2d(10, defaults.lower_left)?;
        self.writer.write_point2d(11, defaults.upper_right)?;
        self.writer.write_point2d(12, Vector2::new(x, y))?;
        self.writer.write_point2d(13, defaults.snap_base)?;
        self.writer.write_point2d(14, defaults.snap_spacing)?;
        self.writer.write_point2d(15, defaults.grid_spacing)?;
        self.writer.write_point3d(16, defaults.view_direction)?;
        self.writer.write_point3d(17, defaults.view_target)?;
        self.writer.write_double(40, height)?;
        self.writer.write_double(41, defaults.aspect_ratio)?;
        self.writer.write_double(42, defaults.lens_length)?;
        self.writer.write_double(43, defaults.front_clip)?;
        self.writer.write_double(44, defaults.back_clip)?;
        self.writer.write_double(50, defaults.snap_rotation)?;
        self.writer.write_double(51, defaults.view_twist)?;
        self.writer.write_i16(71, defaults.view_mode)?;
        self.writer.write_i16(72, defaults.circle_zoom)?;
        self.writer.write_i16(73, defaults.fast_zoom)?;
        self.writer.write_i16(74, defaults.ucs_icon)?;
        self.writer.write_i16(75, defaults.snap_on)?;
        self.writer.write_i16(76, defaults.grid_on)?;
        self.writer.write_i16(77, defaults.snap_style)?;
        self.writer.write_i16(78, defaults.snap_isopair)?;
        self.end_table_record();
        Ok(())
    }

    /// Write an LTYPE record.
    ///
    /// `pattern` holds signed lengths: positive is a dash, zero a dot,
    /// negative a gap. The total length (group 40) is the sum of their
    /// absolute values. The element count is written at group 73 and must
    /// fit in an `i32`.
    pub fn line_type(&mut self, name: &str, pattern: &[f64]) -> Result<()> {
        let count =
            i32::try_from(pattern.len()).map_err(|_| DxfError::PatternTooLong(pattern.len()))?;
        self.begin_table_record("line_type", TableKind::LineType, "AcDbLinetypeTableRecord")?;
        self.writer.write_string(2, name)?;
        self.writer.write_string(3, name)?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_i16(72, b'A' as i16)?; // Alignment code (always 65)
        self.writer.write_i32(73, count)?;
        self.writer.write_double(40, pattern_length(pattern))?;
        for &length in pattern {
            self.writer.write_double(49, length)?;
        }
        self.end_table_record();
        Ok(())
    }

    /// Write a LAYER record. `line_type` is not checked against the
    /// LTYPE table.
    pub fn layer(&mut self, name: &str, color: i16, line_type: &str) -> Result<()> {
        self.begin_table_record("layer", TableKind::Layer, "AcDbLayerTableRecord")?;
        self.writer.write_string(2, name)?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_i16(62, color)?;
        self.writer.write_string(6, line_type)?;
        self.end_table_record();
        Ok(())
    }

    /// Count a record toward the open table once all of its writes succeeded
    fn end_table_record(&mut self) {
        if let WriterState::InTable { written, .. } = &mut self.state {
            *written += 1;
        }
    }

    /// Common prefix of every table record: type, handle, subclass markers
    fn begin_table_record(
        &mut self,
        operation: &'static str,
        kind: TableKind,
        subclass: &str,
    ) -> Result<()> {
        self.require_full(operation)?;
        self.expect(operation, WriterState::allows_table_records)?;
        self.writer.write_string(0, kind.name())?;
        self.write_next_handle()?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass(subclass)?;
        Ok(())
    }
}
