//! Two-phase lifecycle of the card
//!
//! While `Entering`, the spring integrator owns the transform. Once both
//! channels come to rest the state is snapped onto its targets and the drag
//! controller takes over for good.

use super::{
    drag::DragRotationController,
    spring::{self, SpringConstants, SpringState},
    transform::Transform,
};
use crate::input::{EventDisposition, PointerHub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerPhase {
    Entering,
    Settled,
}

/// Receives every change of the drag flag, e.g. to switch the cursor icon
pub type DragCallback = Box<dyn FnMut(bool)>;

pub struct ViewerStateMachine {
    phase: ViewerPhase,
    constants: SpringConstants,
    spring: SpringState,
    drag: DragRotationController,
    rendered_rotation: f64,
    on_drag_changed: Option<DragCallback>,
}

impl Default for ViewerStateMachine {
    fn default() -> Self {
        Self::new(SpringConstants::default(), SpringState::default())
    }
}

impl ViewerStateMachine {
    pub fn new(constants: SpringConstants, initial: SpringState) -> Self {
        Self {
            phase: ViewerPhase::Entering,
            constants,
            spring: initial,
            drag: DragRotationController::new(constants.target_rotation),
            rendered_rotation: initial.rotation_y,
            on_drag_changed: None,
        }
    }

    /// Builder pattern: Replace the drag controller (smoothing, pointer hub)
    pub fn with_drag_controller(mut self, drag: DragRotationController) -> Self {
        self.drag = drag;
        self
    }

    /// Builder pattern: Set the drag-flag callback
    pub fn with_drag_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        self.on_drag_changed = Some(Box::new(callback));
        self
    }

    pub fn set_drag_callback<F>(&mut self, callback: F)
    where
        F: FnMut(bool) + 'static,
    {
        self.on_drag_changed = Some(Box::new(callback));
    }

    /// Removes the drag-flag callback, e.g. to chain another listener onto it
    pub fn take_drag_callback(&mut self) -> Option<DragCallback> {
        self.on_drag_changed.take()
    }

    /// Advances one frame and returns the transform to apply
    pub fn tick(&mut self, delta: f64) -> Transform {
        match self.phase {
            ViewerPhase::Entering => {
                self.spring = spring::step(self.spring, &self.constants, delta);
                if self.spring.is_converged(&self.constants) {
                    self.spring = SpringState::settled(&self.constants);
                    self.phase = ViewerPhase::Settled;
                    log::info!(
                        "entry animation settled at y={}, yaw={}",
                        self.spring.position_y,
                        self.spring.rotation_y
                    );
                }
                self.rendered_rotation = self.spring.rotation_y;
            }
            ViewerPhase::Settled => {
                self.rendered_rotation = self.drag.tick(self.rendered_rotation, delta);
            }
        }
        self.transform()
    }

    /// Pointer press on the card; ignored until the entry animation settles
    pub fn on_pointer_down(&mut self, pointer_x: f64) -> EventDisposition {
        if self.phase == ViewerPhase::Entering {
            return EventDisposition::Ignored;
        }
        let was_dragging = self.drag.is_dragging();
        // Anchor on the target rather than the lagging rendered yaw so that
        // re-grabbing mid-smoothing does not snap the card back.
        let anchor = self.drag.target_rotation();
        let disposition = self.drag.on_pointer_down(pointer_x, anchor);
        self.notify_drag_change(was_dragging);
        disposition
    }

    pub fn on_pointer_move(&mut self, pointer_x: f64) {
        self.drag.on_pointer_move(pointer_x);
    }

    pub fn on_pointer_up(&mut self) {
        let was_dragging = self.drag.is_dragging();
        self.drag.on_pointer_up();
        self.notify_drag_change(was_dragging);
    }

    fn notify_drag_change(&mut self, was_dragging: bool) {
        let is_dragging = self.drag.is_dragging();
        if was_dragging == is_dragging {
            return;
        }
        if let Some(callback) = self.on_drag_changed.as_mut() {
            callback(is_dragging);
        }
    }

    /// Transform for the current state without advancing it
    pub fn transform(&self) -> Transform {
        Transform::new(self.spring.position_y, self.rendered_rotation)
    }

    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    pub fn spring_state(&self) -> &SpringState {
        &self.spring
    }

    pub fn constants(&self) -> &SpringConstants {
        &self.constants
    }

    pub fn drag(&self) -> &DragRotationController {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_hub(&self) -> &PointerHub {
        self.drag.hub()
    }
}
