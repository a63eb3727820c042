//! Entity records: comments, lines, closed polylines and text

use std::io::Write;

use crate::entities::polyline::VERTICES_FOLLOW;
use crate::entities::{EntityKind, PolylineFlags};
use crate::error::{DxfError, Result};
use crate::types::Vector2;

use super::state::WriterState;
use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use super::DxfWriter;

impl<W: Write> DxfWriter<W> {
    /// Write a group 999 comment. Valid in any section and needs no layer.
    pub fn comment(&mut self, text: &str) -> Result<()> {
        self.expect("comment", |state| !matches!(state, WriterState::Finished))?;
        self.writer.write_string(999, text)
    }

    /// Write a LINE from (`x0`, `y0`) to (`x1`, `y1`)
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<()> {
        self.expect("line", WriterState::allows_entities)?;
        self.write_entity_header(EntityKind::Line)?;
        self.writer.write_double(10, x0)?;
        self.writer.write_double(20, y0)?;
        self.writer.write_double(11, x1)?;
        self.writer.write_double(21, y1)?;
        Ok(())
    }

    /// Write a closed POLYLINE with one VERTEX per point, then SEQEND.
    ///
    /// Points are written as given; repeated or collinear points are kept.
    pub fn polygon(&mut self, points: &[Vector2]) -> Result<()> {
        if points.len() < 2 {
            return Err(DxfError::TooFewVertices(points.len()));
        }
        self.expect("polygon", WriterState::allows_entities)?;
        self.write_entity_header(EntityKind::Polyline)?;
        self.writer.write_i16(66, VERTICES_FOLLOW)?;
        self.writer.write_i16(70, PolylineFlags::CLOSED.bits())?;
        for point in points {
            self.write_entity_header(EntityKind::Vertex)?;
            self.writer.write_point2d(10, *point)?;
        }
        self.write_entity_header(EntityKind::SeqEnd)?;
        Ok(())
    }

    /// Write a TEXT record with its insertion point at (`x`, `y`)
    pub fn text(&mut self, x: f64, y: f64, height: f64, text: &str) -> Result<()> {
        self.expect("text", WriterState::allows_entities)?;
        self.write_entity_header(EntityKind::Text)?;
        if self.config.legacy_text {
            self.writer.write_double(10, x)?;
            self.writer.write_double(20, x)?;
            self.writer.write_i32(40, height as i32)?;
        } else {
            self.writer.write_point2d(10, Vector2::new(x, y))?;
            self.writer.write_double(40, height)?;
        }
        self.writer.write_string(1, text)?;
        Ok(())
    }
}
