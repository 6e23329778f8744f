//! # Card Module
//!
//! Scene composition for the membership card: text overlays, status tiers
//! and the per-frame output consumed by the renderer.

pub mod composition;
pub mod status;

pub use composition::{CardComposition, CardHolder, FrameOutput, RenderedMesh, TextLabel};
pub use status::StatusTier;
