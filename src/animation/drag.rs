//! Drag-to-rotate controller
//!
//! Horizontal pointer travel maps linearly onto a target yaw. The rendered yaw
//! chases that target through a low-pass filter every frame, whether or not a
//! drag is in progress.

use crate::input::{EventDisposition, PointerHub, PointerSubscription};

/// Radians of yaw per pixel of horizontal pointer travel
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Per-frame blend factor of the default smoothing filter
pub const SMOOTHING_FACTOR: f64 = 0.15;

/// How the rendered yaw approaches the target yaw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Fixed blend per frame, independent of elapsed time.
    /// Faster refresh rates therefore converge faster in wall-clock time.
    PerFrame(f64),
    /// Exponential decay with the given time constant in seconds
    TimeConstant(f64),
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::PerFrame(SMOOTHING_FACTOR)
    }
}

impl Smoothing {
    /// Blend factor to apply for a frame lasting `delta` seconds
    pub fn alpha(self, delta: f64) -> f64 {
        match self {
            Smoothing::PerFrame(factor) => factor,
            Smoothing::TimeConstant(tau) if tau > 0.0 => 1.0 - (-delta / tau).exp(),
            Smoothing::TimeConstant(_) => 1.0,
        }
    }
}

/// Drag bookkeeping, private to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub anchor_pointer_x: f64,
    pub anchor_rotation: f64,
    pub target_rotation: f64,
}

pub struct DragRotationController {
    state: DragState,
    sensitivity: f64,
    smoothing: Smoothing,
    hub: PointerHub,
    subscription: Option<PointerSubscription>,
}

impl DragRotationController {
    /// Creates an idle controller holding `initial_rotation` as its target
    pub fn new(initial_rotation: f64) -> Self {
        Self {
            state: DragState {
                is_dragging: false,
                anchor_pointer_x: 0.0,
                anchor_rotation: initial_rotation,
                target_rotation: initial_rotation,
            },
            sensitivity: DRAG_SENSITIVITY,
            smoothing: Smoothing::default(),
            hub: PointerHub::new(),
            subscription: None,
        }
    }

    /// Builder pattern: Set the smoothing filter
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Builder pattern: Register global listeners on a shared hub
    pub fn with_hub(mut self, hub: PointerHub) -> Self {
        self.hub = hub;
        self
    }

    /// Starts a drag anchored at the given pointer x and rotation.
    ///
    /// The press is always consumed so that no ancestor handler sees it.
    pub fn on_pointer_down(&mut self, pointer_x: f64, current_rotation: f64) -> EventDisposition {
        self.state.is_dragging = true;
        self.state.anchor_pointer_x = pointer_x;
        self.state.anchor_rotation = current_rotation;
        if self.subscription.is_none() {
            self.subscription = Some(self.hub.subscribe());
        }
        EventDisposition::Consumed
    }

    pub fn on_pointer_move(&mut self, pointer_x: f64) {
        if !self.state.is_dragging {
            return;
        }
        let dx = pointer_x - self.state.anchor_pointer_x;
        self.state.target_rotation = self.state.anchor_rotation + dx * self.sensitivity;
    }

    /// Ends any drag. Safe to call at any time.
    pub fn on_pointer_up(&mut self) {
        self.state.is_dragging = false;
        self.subscription = None;
    }

    /// Moves `rendered` one filter step toward the target rotation
    pub fn tick(&self, rendered: f64, delta: f64) -> f64 {
        rendered + (self.state.target_rotation - rendered) * self.smoothing.alpha(delta)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn target_rotation(&self) -> f64 {
        self.state.target_rotation
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_drag_accumulates_pointer_travel() {
        let mut controller = DragRotationController::new(PI);
        controller.on_pointer_down(100.0, 1.0);

        let mut x = 100.0;
        for dx in [5.0, -12.0, 40.0, 3.5] {
            x += dx;
            controller.on_pointer_move(x);
        }

        let expected = 1.0 + (5.0 - 12.0 + 40.0 + 3.5) * 0.01;
        assert!((controller.target_rotation() - expected).abs() < 1e-12);

        controller.on_pointer_up();
        assert!((controller.target_rotation() - expected).abs() < 1e-12);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut controller = DragRotationController::new(PI);
        controller.on_pointer_move(500.0);
        assert_eq!(controller.target_rotation(), PI);
    }

    #[test]
    fn test_release_without_press() {
        let mut controller = DragRotationController::new(0.0);
        controller.on_pointer_up();
        controller.on_pointer_up();
        assert!(!controller.is_dragging());
        assert!(!controller.hub().is_listening());
    }

    #[test]
    fn test_pointer_down_is_consumed() {
        let mut controller = DragRotationController::new(0.0);
        assert!(controller.on_pointer_down(0.0, 0.0).is_consumed());
    }

    #[test]
    fn test_target_is_unbounded() {
        let mut controller = DragRotationController::new(0.0);
        controller.on_pointer_down(0.0, 0.0);
        controller.on_pointer_move(10_000.0);
        assert!((controller.target_rotation() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_global_listener_tracks_drag() {
        let mut controller = DragRotationController::new(0.0);
        controller.on_pointer_down(0.0, 0.0);
        assert!(controller.hub().is_listening());
        controller.on_pointer_up();
        assert!(!controller.hub().is_listening());
    }

    #[test]
    fn test_teardown_releases_listener_mid_drag() {
        let hub = PointerHub::new();
        let mut controller = DragRotationController::new(0.0).with_hub(hub.clone());
        controller.on_pointer_down(0.0, 0.0);
        assert!(hub.is_listening());

        drop(controller);
        assert!(!hub.is_listening());
    }

    #[test]
    fn test_per_frame_smoothing() {
        let mut controller = DragRotationController::new(0.0);
        controller.on_pointer_down(0.0, 0.0);
        controller.on_pointer_move(100.0);

        let rendered = controller.tick(0.0, 1.0 / 60.0);
        assert!((rendered - 0.15).abs() < 1e-12);

        // Elapsed time does not change the per-frame blend
        let rendered_slow = controller.tick(0.0, 1.0 / 10.0);
        assert_eq!(rendered, rendered_slow);
    }

    #[test]
    fn test_time_constant_smoothing() {
        let mut controller =
            DragRotationController::new(0.0).with_smoothing(Smoothing::TimeConstant(0.1));
        controller.on_pointer_down(0.0, 0.0);
        controller.on_pointer_move(100.0);

        // Two half-frames land where one full frame does
        let half = controller.tick(controller.tick(0.0, 0.05), 0.05);
        let full = controller.tick(0.0, 0.1);
        assert!((half - full).abs() < 1e-12);
        assert!((full - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_smoothing_converges_to_target() {
        let controller = DragRotationController::new(2.0);
        let mut rendered = 0.0;
        for _ in 0..200 {
            rendered = controller.tick(rendered, 1.0 / 60.0);
        }
        assert!((rendered - 2.0).abs() < 1e-9);
    }
}
