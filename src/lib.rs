// src/lib.rs
//! Card Viewer
//!
//! Interaction and animation core for a single 3D membership card: a
//! spring-driven entry, drag-to-rotate once settled, and selective physical
//! material assignment on the loaded model.

pub mod animation;
pub mod app;
pub mod card;
pub mod gfx;
pub mod input;
pub mod prelude;

// Re-export main types for convenience
pub use app::{CardViewerApp, FrameSink, LogSink};
pub use card::CardComposition;
