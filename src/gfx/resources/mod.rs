// src/gfx/resources/mod.rs
//! Surface resources
//!
//! Colors, authored and physical materials, and their GPU uniform layout.

pub mod color;
pub mod material;

// Re-export main types
pub use color::{Color, ColorParseError};
pub use material::{AuthoredMaterial, MaterialConfig, MaterialUniform, MeshMaterial, PhysicalMaterial};
