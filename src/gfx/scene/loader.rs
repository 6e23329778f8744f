//! OBJ/MTL asset loading
//!
//! Each model of the OBJ file becomes one mesh node under a single root
//! group, in file order. Mesh materials are taken from the accompanying MTL
//! file, so body meshes keep their designed colors.

use std::path::Path;

use thiserror::Error;

use super::scene::{MeshNode, SceneGraph, SceneNode};
use crate::gfx::resources::{AuthoredMaterial, Color, MeshMaterial};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ file `{path}`")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    #[error("OBJ file `{0}` contains no models")]
    Empty(String),
}

/// Loads an OBJ file (and its MTL, when present) into a scene graph
pub fn load_obj(path: impl AsRef<Path>) -> Result<SceneGraph, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| LoadError::Obj {
        path: display.clone(),
        source,
    })?;

    if models.is_empty() {
        return Err(LoadError::Empty(display));
    }

    let materials = materials.unwrap_or_else(|err| {
        log::warn!("no usable MTL data for `{display}` ({err}), using default materials");
        Vec::new()
    });
    let authored: Vec<AuthoredMaterial> = materials
        .iter()
        .enumerate()
        .map(|(i, mtl)| authored_material(i, mtl))
        .collect();

    let children = models
        .iter()
        .enumerate()
        .map(|(i, model)| {
            let material = model
                .mesh
                .material_id
                .and_then(|id| authored.get(id).cloned())
                .unwrap_or_default();
            let name = if model.name.is_empty() {
                format!("mesh_{i}")
            } else {
                model.name.clone()
            };
            let mesh = MeshNode::new(&name, MeshMaterial::Authored(material)).with_geometry(
                (model.mesh.positions.len() / 3) as u32,
                (model.mesh.indices.len() / 3) as u32,
            );
            SceneNode::mesh(mesh)
        })
        .collect();

    let root_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scene".to_string());
    let graph = SceneGraph::new(SceneNode::group(&root_name, children));

    let stats = graph.get_statistics();
    log::info!(
        "loaded `{display}`: {} meshes, {} vertices, {} triangles",
        stats.mesh_count,
        stats.total_vertices,
        stats.total_triangles
    );
    Ok(graph)
}

fn authored_material(index: usize, mtl: &tobj::Material) -> AuthoredMaterial {
    let name = if mtl.name.is_empty() {
        format!("material_{index}")
    } else {
        mtl.name.clone()
    };
    let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
    // MTL has no metalness; shininess maps inversely onto roughness
    let roughness = 1.0 - (mtl.shininess.unwrap_or(32.0) / 128.0).clamp(0.0, 1.0);
    AuthoredMaterial::new(&name, Color::from(diffuse), 0.0, roughness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TRIANGLE_OBJ: &str = "mtllib card.mtl
o body
v 0 0 0
v 1 0 0
v 0 1 0
usemtl navy
f 1 2 3
o stripe
v 0 0 1
v 1 0 1
v 0 1 1
usemtl gold
f 4 5 6
";

    const CARD_MTL: &str = "newmtl navy
Kd 0.1 0.2 0.4
Ns 64
newmtl gold
Kd 0.7 0.6 0.3
";

    #[test]
    fn test_load_obj_with_materials() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("card.obj"), TRIANGLE_OBJ).unwrap();
        fs::write(dir.path().join("card.mtl"), CARD_MTL).unwrap();

        let graph = load_obj(dir.path().join("card.obj")).unwrap();
        let meshes = graph.meshes();

        assert_eq!(graph.root.name, "card");
        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].name, "body");
        assert_eq!(meshes[0].material.base_color(), Color::rgb(0.1, 0.2, 0.4));
        assert_eq!(meshes[1].material.base_color(), Color::rgb(0.7, 0.6, 0.3));
        assert_eq!(meshes[0].triangle_count, 1);
    }

    #[test]
    fn test_missing_mtl_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("card.obj"), TRIANGLE_OBJ).unwrap();

        let graph = load_obj(dir.path().join("card.obj")).unwrap();
        for mesh in graph.meshes() {
            assert_eq!(mesh.material.base_color(), Color::rgb(0.8, 0.8, 0.8));
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_obj("/definitely/not/here.obj");
        assert!(matches!(result, Err(LoadError::Obj { .. })));
    }
}
