//! Error types for minidxf

use std::io;
use thiserror::Error;

use crate::io::dxf::WriterState;

/// Main error type for DXF emission
#[derive(Debug, Error)]
pub enum DxfError {
    /// The output sink rejected a write
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An entity was emitted while no layer was active
    #[error("No active layer set before entity emission")]
    LayerNotSet,

    /// A polygon needs at least two vertices
    #[error("Polygon requires at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    /// A line type pattern has more elements than group 73 can hold
    #[error("Line type pattern has {0} elements, more than fits in group code 73")]
    PatternTooLong(usize),

    /// A table operation was called on a writer without table support
    #[error("Operation '{0}' requires the full capability set")]
    CapabilityDisabled(&'static str),

    /// An operation was called in a state where it is not allowed
    #[error("Operation '{operation}' not allowed while {state}")]
    OutOfOrder {
        operation: &'static str,
        state: WriterState,
    },
}

/// Result type alias for minidxf operations
pub type Result<T> = std::result::Result<T, DxfError>;
