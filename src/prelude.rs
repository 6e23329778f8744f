//! # Card Viewer Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use card_viewer::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut card = CardComposition::default();
//!     card.load_scene(load_obj("assets/card.obj")?);
//!     card.select_status(StatusTier::Gold);
//!
//!     CardViewerApp::new(card, LogSink::default())?.run()
//! }
//! ```

// Re-export core application types
pub use crate::app::{CardViewerApp, FrameSink, LogSink};

// Re-export animation types
pub use crate::animation::{
    DragRotationController, Smoothing, SpringConstants, SpringState, Transform, TransformUniform,
    ViewerPhase, ViewerStateMachine,
};

// Re-export card composition types
pub use crate::card::{CardComposition, CardHolder, FrameOutput, StatusTier, TextLabel};

// Re-export graphics and scene types
pub use crate::gfx::material_pipeline::MaterialPipeline;
pub use crate::gfx::resources::{Color, MaterialConfig, MeshMaterial, PhysicalMaterial};
pub use crate::gfx::scene::{load_obj, SceneGraph};

// Re-export input types
pub use crate::input::{EventDisposition, HitRegion, ScreenRect};
