use crate::gfx::resources::{Color, MeshMaterial};

/// Renderable leaf of the scene graph
#[derive(Debug, Clone, Default)]
pub struct MeshNode {
    pub name: String,
    pub material: MeshMaterial,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub vertex_count: u32,
    pub triangle_count: u32,
    /// Base color the mesh carried before its first material replacement
    pristine_color: Option<Color>,
}

impl MeshNode {
    pub fn new(name: &str, material: MeshMaterial) -> Self {
        Self {
            name: name.to_string(),
            material,
            ..Default::default()
        }
    }

    /// Builder pattern: Record geometry statistics
    pub fn with_geometry(mut self, vertex_count: u32, triangle_count: u32) -> Self {
        self.vertex_count = vertex_count;
        self.triangle_count = triangle_count;
        self
    }

    /// Authored base color, captured from the current material on first use
    pub fn pristine_color(&mut self) -> Color {
        *self
            .pristine_color
            .get_or_insert_with(|| self.material.base_color())
    }
}

/// Payload of a scene node
#[derive(Debug, Clone)]
pub enum NodeKind {
    Group,
    Mesh(MeshNode),
}

/// Node of the loaded asset's hierarchy
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn group(name: &str, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Group,
            children,
        }
    }

    pub fn mesh(mesh: MeshNode) -> Self {
        Self {
            name: mesh.name.clone(),
            kind: NodeKind::Mesh(mesh),
            children: Vec::new(),
        }
    }

    /// Mesh capability of this node, if it has one
    pub fn as_mesh(&self) -> Option<&MeshNode> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            NodeKind::Group => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut MeshNode> {
        match &mut self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            NodeKind::Group => None,
        }
    }

    /// Visits this node, then its children depth-first in order
    pub fn traverse<'a>(&'a self, visit: &mut impl FnMut(&'a SceneNode)) {
        visit(self);
        for child in &self.children {
            child.traverse(visit);
        }
    }

    fn collect_meshes_mut<'a>(&'a mut self, out: &mut Vec<&'a mut MeshNode>) {
        let SceneNode { kind, children, .. } = self;
        if let NodeKind::Mesh(mesh) = kind {
            out.push(mesh);
        }
        for child in children.iter_mut() {
            child.collect_meshes_mut(out);
        }
    }
}

/// Loaded asset: a single root node
#[derive(Debug, Clone)]
pub struct SceneGraph {
    pub root: SceneNode,
}

impl SceneGraph {
    pub fn new(root: SceneNode) -> Self {
        Self { root }
    }

    /// Meshes in traversal order
    pub fn meshes(&self) -> Vec<&MeshNode> {
        let mut meshes = Vec::new();
        self.root.traverse(&mut |node| {
            if let Some(mesh) = node.as_mesh() {
                meshes.push(mesh);
            }
        });
        meshes
    }

    /// Mutable mesh view in traversal order
    pub fn mesh_set(&mut self) -> SceneMeshSet<'_> {
        let mut meshes = Vec::new();
        self.root.collect_meshes_mut(&mut meshes);
        SceneMeshSet { meshes }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes().len()
    }

    pub fn get_statistics(&self) -> SceneStatistics {
        let meshes = self.meshes();
        SceneStatistics {
            mesh_count: meshes.len(),
            total_vertices: meshes.iter().map(|m| m.vertex_count).sum(),
            total_triangles: meshes.iter().map(|m| m.triangle_count).sum(),
        }
    }
}

/// Ordered, mutable view over every mesh of a [`SceneGraph`]
pub struct SceneMeshSet<'a> {
    meshes: Vec<&'a mut MeshNode>,
}

impl<'a> SceneMeshSet<'a> {
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, &'a mut MeshNode> {
        self.meshes.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&MeshNode> {
        self.meshes.get(index).map(|mesh| &**mesh)
    }
}

/// Scene statistics for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub mesh_count: usize,
    pub total_vertices: u32,
    pub total_triangles: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::AuthoredMaterial;

    fn mesh(name: &str) -> SceneNode {
        SceneNode::mesh(MeshNode::new(
            name,
            MeshMaterial::Authored(AuthoredMaterial::default()),
        ))
    }

    fn nested_graph() -> SceneGraph {
        SceneGraph::new(SceneNode::group(
            "card",
            vec![
                mesh("a"),
                SceneNode::group("inner", vec![mesh("b"), mesh("c")]),
                mesh("d"),
            ],
        ))
    }

    #[test]
    fn test_traversal_is_preorder() {
        let graph = nested_graph();
        let names: Vec<_> = graph.meshes().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_mesh_set_matches_traversal() {
        let mut graph = nested_graph();
        let mut set = graph.mesh_set();
        assert_eq!(set.len(), 4);
        assert_eq!(set.get(2).map(|m| m.name.as_str()), Some("c"));

        for mesh in set.iter_mut() {
            mesh.cast_shadow = true;
        }
        assert!(graph.meshes().iter().all(|m| m.cast_shadow));
    }

    #[test]
    fn test_group_has_no_mesh_capability() {
        let graph = nested_graph();
        assert!(graph.root.as_mesh().is_none());
        assert!(graph.root.children[0].as_mesh().is_some());
    }

    #[test]
    fn test_pristine_color_captured_once() {
        let mut node = MeshNode::new(
            "body",
            MeshMaterial::Authored(AuthoredMaterial::new("body", Color::RED, 0.0, 1.0)),
        );
        assert_eq!(node.pristine_color(), Color::RED);

        node.material = MeshMaterial::Authored(AuthoredMaterial::new("x", Color::WHITE, 0.0, 1.0));
        assert_eq!(node.pristine_color(), Color::RED);
    }

    #[test]
    fn test_statistics() {
        let mut graph = SceneGraph::new(SceneNode::group(
            "card",
            vec![SceneNode::mesh(MeshNode::default().with_geometry(8, 12))],
        ));
        graph.root.children.push(SceneNode::mesh(MeshNode::default().with_geometry(4, 2)));

        let stats = graph.get_statistics();
        assert_eq!(stats.mesh_count, 2);
        assert_eq!(stats.total_vertices, 12);
        assert_eq!(stats.total_triangles, 14);
    }
}
