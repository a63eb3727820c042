//! Symbol table kinds and table record data

use std::fmt;

pub mod linetype;
pub mod vport;

pub use linetype::{pattern_length, LineTypeElement, LineTypePattern};
pub use vport::ViewportDefaults;

/// The symbol tables that can appear in the TABLES section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    AppId,
    DimStyle,
    LineType,
    Layer,
    Style,
    Ucs,
    View,
    VPort,
    BlockRecord,
}

impl TableKind {
    /// All table kinds in declaration order
    pub const ALL: [TableKind; 9] = [
        TableKind::AppId,
        TableKind::DimStyle,
        TableKind::LineType,
        TableKind::Layer,
        TableKind::Style,
        TableKind::Ucs,
        TableKind::View,
        TableKind::VPort,
        TableKind::BlockRecord,
    ];

    /// Name written at group code 2 after `TABLE`, and as the record type
    pub const fn name(self) -> &'static str {
        match self {
            TableKind::AppId => "APPID",
            TableKind::DimStyle => "DIMSTYLE",
            TableKind::LineType => "LTYPE",
            TableKind::Layer => "LAYER",
            TableKind::Style => "STYLE",
            TableKind::Ucs => "UCS",
            TableKind::View => "VIEW",
            TableKind::VPort => "VPORT",
            TableKind::BlockRecord => "BLOCK_RECORD",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
