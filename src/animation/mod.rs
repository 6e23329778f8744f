//! # Animation Module
//!
//! Motion of the card root: the spring-driven entry, the drag-to-rotate
//! controller and the state machine that hands control from one to the other.
//!
//! ```no_run
//! use card_viewer::animation::{ViewerPhase, ViewerStateMachine};
//!
//! let mut viewer = ViewerStateMachine::default();
//! while viewer.phase() == ViewerPhase::Entering {
//!     let _transform = viewer.tick(1.0 / 60.0);
//! }
//! ```

pub mod drag;
pub mod spring;
pub mod transform;
pub mod viewer;

pub use drag::{DragRotationController, DragState, Smoothing};
pub use spring::{SpringConstants, SpringState};
pub use transform::{Transform, TransformUniform};
pub use viewer::{DragCallback, ViewerPhase, ViewerStateMachine};
