use super::camera_utils::CameraUniform;
use cgmath::*;

/// Remaps cgmath's GL clip depth of [-1, 1] onto [0, 1]
#[rustfmt::skip]
pub const GL_TO_ZERO_ONE_DEPTH: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Camera on the +Z axis looking at the target; only its distance changes
#[derive(Debug, Clone, Copy)]
pub struct ZoomCamera {
    pub distance: f32,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: ZoomCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Default for ZoomCamera {
    /// Card framing: 50 units out, 50 degree vertical field of view
    fn default() -> Self {
        Self::new(50.0, Deg(50.0).into(), 1200.0 / 800.0)
    }
}

impl ZoomCamera {
    pub fn new(distance: f32, fovy: Rad<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            target: Vector3::zero(),
            up: Vector3::unit_y(),
            bounds: ZoomCameraBounds::default(),
            aspect,
            fovy,
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.set_distance(distance);
        camera
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye());
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            GL_TO_ZERO_ONE_DEPTH * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn eye(&self) -> Vector3<f32> {
        self.target + Vector3::unit_z() * self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.bounds.min_distance, self.bounds.max_distance);
    }

    /// Dollies by `steps` wheel notches; positive steps move away
    pub fn dolly(&mut self, steps: f32, zoom_speed: f32) {
        let scale = 0.95f32.powf(zoom_speed * steps.abs());
        if steps > 0.0 {
            self.set_distance(self.distance / scale);
        } else {
            self.set_distance(self.distance * scale);
        }
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        let eye = self.eye();
        self.uniform.view_position = [eye.x, eye.y, eye.z, 1.0];
        self.uniform.view_proj = self.build_view_projection_matrix().into();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ZoomCameraBounds {
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ZoomCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: 20.0,
            max_distance: 100.0,
        }
    }
}
