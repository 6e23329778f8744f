//! Mesh-selective material assignment
//!
//! Every run replaces the material of every mesh with a freshly allocated
//! [`PhysicalMaterial`]. The accent mesh takes the configured color; body
//! meshes keep the base color they were authored with.

use std::sync::Arc;

use crate::gfx::{
    resources::{MaterialConfig, MeshMaterial, PhysicalMaterial},
    scene::{SceneGraph, SceneMeshSet},
};

/// Traversal index of the mesh that receives the accent color
pub const ACCENT_MESH_INDEX: usize = 2;

pub struct MaterialPipeline {
    accent_index: usize,
    config: MaterialConfig,
}

impl Default for MaterialPipeline {
    fn default() -> Self {
        Self::new(MaterialConfig::default())
    }
}

impl MaterialPipeline {
    pub fn new(config: MaterialConfig) -> Self {
        Self {
            accent_index: ACCENT_MESH_INDEX,
            config,
        }
    }

    /// Builder pattern: Designate a different accent mesh
    pub fn with_accent_index(mut self, accent_index: usize) -> Self {
        self.accent_index = accent_index;
        self
    }

    /// Rebuilds the material of every mesh from `config`.
    ///
    /// A mesh set too small to contain the accent index is treated as all
    /// body meshes.
    pub fn apply(&self, meshes: &mut SceneMeshSet<'_>, config: &MaterialConfig) {
        log::debug!("applying material with accent color {}", config.color);
        if meshes.len() <= self.accent_index {
            log::warn!(
                "accent mesh {} not present in {} meshes, keeping authored colors",
                self.accent_index,
                meshes.len()
            );
        }

        for (index, mesh) in meshes.iter_mut().enumerate() {
            // Capture before replacing, so the authored color survives every rebuild
            let pristine = mesh.pristine_color();
            let base_color = if index == self.accent_index {
                config.color
            } else {
                pristine
            };
            mesh.material = MeshMaterial::Physical(Arc::new(PhysicalMaterial::from_config(
                base_color, config,
            )));
            mesh.cast_shadow = true;
            mesh.receive_shadow = true;
        }
    }

    /// Applies `config` when it differs by value from the current one.
    ///
    /// Returns true when a rebuild happened.
    pub fn on_config_changed(&mut self, scene: &mut SceneGraph, config: MaterialConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.apply(&mut scene.mesh_set(), &config);
        true
    }

    /// Stores `config` without rebuilding; returns true if it differed
    pub fn set_config(&mut self, config: MaterialConfig) -> bool {
        let changed = config != self.config;
        self.config = config;
        changed
    }

    /// Applies the current config to a freshly loaded graph
    pub fn on_meshes_loaded(&self, scene: &mut SceneGraph) {
        self.apply(&mut scene.mesh_set(), &self.config);
    }

    pub fn config(&self) -> &MaterialConfig {
        &self.config
    }

    pub fn accent_index(&self) -> usize {
        self.accent_index
    }
}
