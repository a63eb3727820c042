//! DXF (Drawing Exchange Format) writing

mod writer;

pub use writer::{
    bounded_str, Capabilities, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, DxfWriter,
    DxfWriterConfiguration, HeaderValue, Section, WriterState, DEFAULT_LAYER,
    MAX_STRING_LENGTH, REAL_PRECISION,
};
