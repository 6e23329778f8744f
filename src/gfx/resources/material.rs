//! Material system for PBR rendering
//!
//! Meshes start out with the material authored in the asset. The material
//! pipeline replaces it with a [`PhysicalMaterial`] built from a
//! [`MaterialConfig`]; the renderer reads either variant through
//! [`MeshMaterial`].

use std::sync::Arc;

use super::color::Color;

/// Externally supplied surface parameters, compared by value.
///
/// Numeric fields are passed to material construction unvalidated; callers
/// clamp upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialConfig {
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub env_map_intensity: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x35, 0x6d, 0xa0),
            metalness: 0.74,
            roughness: 0.17,
            clearcoat: 0.36,
            clearcoat_roughness: 0.15,
            env_map_intensity: 1.0,
        }
    }
}

impl MaterialConfig {
    /// Builder pattern: Set the accent color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder pattern: Set metalness
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    /// Builder pattern: Set roughness
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Builder pattern: Set clearcoat strength and roughness
    pub fn with_clearcoat(mut self, clearcoat: f32, clearcoat_roughness: f32) -> Self {
        self.clearcoat = clearcoat;
        self.clearcoat_roughness = clearcoat_roughness;
        self
    }

    /// Builder pattern: Set environment reflection intensity
    pub fn with_env_map_intensity(mut self, intensity: f32) -> Self {
        self.env_map_intensity = intensity;
        self
    }
}

/// GPU uniform data for physical materials
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub env_map_intensity: f32,
    _padding: [f32; 3],
}

/// Physical material rebuilt by the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalMaterial {
    pub base_color: Color,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub env_map_intensity: f32,
}

impl PhysicalMaterial {
    /// Takes every surface parameter from `config` except the base color
    pub fn from_config(base_color: Color, config: &MaterialConfig) -> Self {
        Self {
            base_color,
            metalness: config.metalness,
            roughness: config.roughness,
            clearcoat: config.clearcoat,
            clearcoat_roughness: config.clearcoat_roughness,
            env_map_intensity: config.env_map_intensity,
        }
    }

    /// Packs the material for upload, base color in linear space
    pub fn uniform(&self) -> MaterialUniform {
        let [r, g, b] = self.base_color.to_linear();
        MaterialUniform {
            base_color: [r, g, b, 1.0],
            metalness: self.metalness,
            roughness: self.roughness,
            clearcoat: self.clearcoat,
            clearcoat_roughness: self.clearcoat_roughness,
            env_map_intensity: self.env_map_intensity,
            _padding: [0.0; 3],
        }
    }
}

/// Material as authored in the loaded asset
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredMaterial {
    pub name: String,
    pub base_color: Color,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for AuthoredMaterial {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: Color::rgb(0.8, 0.8, 0.8),
            metalness: 0.0,
            roughness: 0.5,
        }
    }
}

impl AuthoredMaterial {
    pub fn new(name: &str, base_color: Color, metalness: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metalness,
            roughness,
        }
    }
}

/// Material reference held by a mesh node
#[derive(Debug, Clone)]
pub enum MeshMaterial {
    Authored(AuthoredMaterial),
    Physical(Arc<PhysicalMaterial>),
}

impl MeshMaterial {
    pub fn base_color(&self) -> Color {
        match self {
            MeshMaterial::Authored(material) => material.base_color,
            MeshMaterial::Physical(material) => material.base_color,
        }
    }

    pub fn as_physical(&self) -> Option<&Arc<PhysicalMaterial>> {
        match self {
            MeshMaterial::Physical(material) => Some(material),
            MeshMaterial::Authored(_) => None,
        }
    }
}

impl Default for MeshMaterial {
    fn default() -> Self {
        MeshMaterial::Authored(AuthoredMaterial::default())
    }
}
