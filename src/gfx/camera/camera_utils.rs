use cgmath::{Matrix4, SquareMatrix};
use winit::event::MouseScrollDelta;

use super::{camera_controller::CameraController, zoom_camera::ZoomCamera};

pub struct CameraManager {
    pub camera: ZoomCamera,
    pub controller: CameraController,
}

impl Default for CameraManager {
    fn default() -> Self {
        Self::new(ZoomCamera::default(), CameraController::default())
    }
}

impl CameraManager {
    pub fn new(camera: ZoomCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        self.controller.process_scroll(delta, &mut self.camera);
    }
}

/// Camera state handed to the renderer with every frame
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// Eye position with w = 1, padded to a full 16 byte row
    pub view_position: [f32; 4],
    /// Projection times view, column major
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        assert_eq!(bytemuck::bytes_of(&CameraUniform::default()).len() % 16, 0);
    }

    #[test]
    fn test_manager_routes_scroll_to_camera() {
        let mut manager = CameraManager::default();
        manager.process_scroll(&MouseScrollDelta::LineDelta(0.0, -2.0));
        assert!(manager.camera.distance > 50.0);
    }
}
