//! I/O module for writing DXF files

pub mod dxf;

pub use dxf::DxfWriter;
