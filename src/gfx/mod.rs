//! # Graphics Module
//!
//! Scene-side state of the card that the rendering engine consumes.
//!
//! - **Camera** ([`camera`]) - Zoom-only camera framing the card
//! - **Resources** ([`resources`]) - Colors, authored and physical materials
//! - **Scene** ([`scene`]) - Loaded asset hierarchy and OBJ loading
//! - **Material pipeline** ([`material_pipeline`]) - Rebuilds mesh materials
//!   from a [`MaterialConfig`]
//!
//! [`MaterialConfig`]: resources::MaterialConfig

pub mod camera;
pub mod material_pipeline;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::ZoomCamera;
pub use material_pipeline::MaterialPipeline;
