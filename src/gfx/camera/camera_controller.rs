use winit::{dpi::PhysicalPosition, event::MouseScrollDelta};

use super::zoom_camera::ZoomCamera;

/// Pixels of trackpad scroll treated as one wheel notch
const PIXELS_PER_NOTCH: f64 = 50.0;

/// Zoom-only camera controls: panning and orbiting are disabled
pub struct CameraController {
    pub zoom_speed: f32,
}

impl CameraController {
    pub fn new(zoom_speed: f32) -> Self {
        Self { zoom_speed }
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta, camera: &mut ZoomCamera) {
        // Scrolling up moves the camera closer
        let steps = -match delta {
            MouseScrollDelta::LineDelta(_, scroll) => *scroll,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                (*scroll / PIXELS_PER_NOTCH) as f32
            }
        };
        if steps != 0.0 {
            camera.dolly(steps, self.zoom_speed);
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(1.0)
    }
}
