//! # Scene Management Module
//!
//! The loaded card asset as a hierarchy of group and mesh nodes.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - Root of the loaded asset
//! - [`SceneNode`] - Group or mesh node, queried through [`SceneNode::as_mesh`]
//! - [`SceneMeshSet`] - Ordered mutable view over every mesh, in traversal order
//! - [`load_obj`] - OBJ/MTL loader producing a [`SceneGraph`]
//!
//! ## Usage
//!
//! ```no_run
//! use card_viewer::gfx::scene::load_obj;
//!
//! let mut graph = load_obj("assets/card.obj")?;
//! let meshes = graph.mesh_set();
//! println!("{} meshes", meshes.len());
//! # Ok::<(), card_viewer::gfx::scene::LoadError>(())
//! ```

pub mod loader;
pub mod scene;

// Re-export main types
pub use loader::{load_obj, LoadError};
pub use scene::{MeshNode, NodeKind, SceneGraph, SceneMeshSet, SceneNode, SceneStatistics};
