//! Section-order tracking for a writer session

use std::fmt;

use crate::tables::TableKind;

/// Top-level DXF sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Tables,
    Blocks,
    Entities,
    Objects,
}

impl Section {
    /// Name written at group code 2 after `SECTION`
    pub const fn name(self) -> &'static str {
        match self {
            Section::Header => "HEADER",
            Section::Tables => "TABLES",
            Section::Blocks => "BLOCKS",
            Section::Entities => "ENTITIES",
            Section::Objects => "OBJECTS",
        }
    }

    /// Whether entity records may appear in this section
    pub const fn holds_entities(self) -> bool {
        matches!(self, Section::Entities | Section::Blocks)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a session currently is in the document structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriterState {
    /// Between sections
    #[default]
    Idle,
    /// Inside a section, outside any table
    InSection(Section),
    /// Inside a `TABLE` span of the TABLES section
    InTable {
        kind: TableKind,
        declared: i16,
        written: usize,
    },
    /// `EOF` has been written
    Finished,
}

impl WriterState {
    /// The open section, if any
    pub fn section(&self) -> Option<Section> {
        match self {
            WriterState::InSection(section) => Some(*section),
            WriterState::InTable { .. } => Some(Section::Tables),
            WriterState::Idle | WriterState::Finished => None,
        }
    }

    pub fn allows_entities(&self) -> bool {
        matches!(self, WriterState::InSection(section) if section.holds_entities())
    }

    pub fn allows_table_records(&self) -> bool {
        matches!(self, WriterState::InTable { .. })
    }
}

impl fmt::Display for WriterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterState::Idle => f.write_str("no section is open"),
            WriterState::InSection(section) => write!(f, "in {} section", section),
            WriterState::InTable { kind, .. } => write!(f, "in {} table", kind),
            WriterState::Finished => f.write_str("document is finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_allowed_in_entities_and_blocks() {
        assert!(WriterState::InSection(Section::Entities).allows_entities());
        assert!(WriterState::InSection(Section::Blocks).allows_entities());
        assert!(!WriterState::InSection(Section::Header).allows_entities());
        assert!(!WriterState::Idle.allows_entities());
    }

    #[test]
    fn test_table_reports_tables_section() {
        let state = WriterState::InTable {
            kind: TableKind::Layer,
            declared: 1,
            written: 0,
        };
        assert_eq!(state.section(), Some(Section::Tables));
        assert!(state.allows_table_records());
        assert_eq!(state.to_string(), "in LAYER table");
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(WriterState::default(), WriterState::Idle);
    }

    #[test]
    fn test_finished_has_no_section() {
        assert_eq!(WriterState::Finished.section(), None);
        assert_eq!(WriterState::Finished.to_string(), "document is finished");
    }
}
