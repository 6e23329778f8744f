use cgmath::{Matrix4, Rad, Vector3};

/// Uniform scale applied to the card root
pub const CARD_SCALE: f64 = 5.0;

/// GPU uniform data for the card root
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
}

/// Root transform of the card for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position_y: f64,
    pub rotation_y: f64,
    pub scale: f64,
}

impl Transform {
    pub fn new(position_y: f64, rotation_y: f64) -> Self {
        Self {
            position_y,
            rotation_y,
            scale: CARD_SCALE,
        }
    }

    /// Model matrix: translate, then yaw, then uniform scale
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(0.0, self.position_y as f32, 0.0))
            * Matrix4::from_angle_y(Rad(self.rotation_y as f32))
            * Matrix4::from_scale(self.scale as f32)
    }

    pub fn uniform(&self) -> TransformUniform {
        TransformUniform {
            model: self.to_matrix().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Vector4, Zero};

    #[test]
    fn test_matrix_translates_origin() {
        let transform = Transform::new(30.0, std::f64::consts::PI);
        let origin = transform.to_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin.truncate(), Vector3::new(0.0, 30.0, 0.0));
    }

    #[test]
    fn test_matrix_scales_and_yaws() {
        let transform = Transform::new(0.0, std::f64::consts::FRAC_PI_2);
        let x_axis = transform.to_matrix() * Vector4::new(1.0, 0.0, 0.0, 0.0);
        // A quarter turn about +Y sends +X to -Z
        assert!((x_axis.z + 5.0).abs() < 1e-5);
        assert!(x_axis.x.abs() < 1e-5);
        assert!(!x_axis.truncate().is_zero());
    }

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 64);
        let uniform = Transform::new(-10.0, 0.0).uniform();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);
        // Column major: translation lives in the last column
        assert_eq!(uniform.model[3], [0.0, -10.0, 0.0, 1.0]);
        assert_eq!(uniform.model[0], [5.0, 0.0, 0.0, 0.0]);
    }
}
