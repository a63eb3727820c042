//! Entity record types emitted in the ENTITIES (or BLOCKS) section

use std::fmt;

pub mod polyline;

pub use polyline::PolylineFlags;

/// Record type names written at group code 0 for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Polyline,
    Vertex,
    SeqEnd,
    Text,
}

impl EntityKind {
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Line => "LINE",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::Vertex => "VERTEX",
            EntityKind::SeqEnd => "SEQEND",
            EntityKind::Text => "TEXT",
        }
    }

    /// Whether the record carries a layer tag (group code 8)
    pub const fn has_layer(self) -> bool {
        !matches!(self, EntityKind::SeqEnd)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
