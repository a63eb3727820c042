//! Core value types shared by the writer

pub mod handle;
pub mod vector;

pub use handle::{Handle, HandleSeed};
pub use vector::{Vector2, Vector3};
