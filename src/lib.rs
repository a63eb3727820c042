//! # minidxf
//!
//! A minimal streaming writer for ASCII DXF files.
//!
//! The writer appends group code/value pairs to any [`std::io::Write`] sink
//! in the order the caller invokes its operations. There is no document
//! model and no reader: what you call is what gets written.
//!
//! ## Features
//!
//! - HEADER, TABLES, BLOCKS, ENTITIES and OBJECTS section framing
//! - VPORT, LTYPE and LAYER table records with sequential handles
//! - LINE, closed POLYLINE, TEXT and comment records
//! - Optional ordering checks that reject out-of-place operations
//!
//! ## Quick Start
//!
//! ```rust
//! use minidxf::{DxfWriter, TableKind, Vector2};
//!
//! let mut dxf = DxfWriter::new(Vec::new());
//!
//! dxf.tables_begin()?;
//! dxf.table_begin(TableKind::Layer, 1)?;
//! dxf.layer("OUTLINE", 1, "CONTINUOUS")?;
//! dxf.table_end()?;
//! dxf.tables_end()?;
//!
//! dxf.entities_begin()?;
//! dxf.set_layer(Some("OUTLINE"));
//! dxf.line(0.0, 0.0, 5.0, 0.0)?;
//! dxf.polygon(&[
//!     Vector2::new(10.0, 0.0),
//!     Vector2::new(0.0, 10.0),
//!     Vector2::new(-10.0, 0.0),
//! ])?;
//! dxf.text(1.0, 1.0, 4.0, "Test string")?;
//! dxf.entities_end()?;
//! dxf.end()?;
//!
//! let bytes = dxf.into_inner();
//! assert!(bytes.ends_with(b"\t0\nEOF\n"));
//! # Ok::<(), minidxf::DxfError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod io;
mod log;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Handle, HandleSeed, Vector2, Vector3};

pub use entities::{EntityKind, PolylineFlags};
pub use tables::{LineTypeElement, LineTypePattern, TableKind, ViewportDefaults};

// Re-export I/O types
pub use io::dxf::{
    Capabilities, DxfWriter, DxfWriterConfiguration, HeaderValue, Section, WriterState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
