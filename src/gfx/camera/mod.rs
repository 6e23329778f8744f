pub mod camera_controller;
pub mod camera_utils;
pub mod zoom_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{CameraManager, CameraUniform};
pub use zoom_camera::ZoomCamera;
