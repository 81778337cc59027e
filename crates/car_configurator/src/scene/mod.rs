//! Scene graph of a loaded vehicle
//!
//! The configurator works on an already parsed tree of nodes handed over by
//! a [`SceneLoader`]. Nodes live in an arena keyed by [`NodeId`]; the only way
//! to add a node is as the child of an existing one, so every graph is a
//! finite tree with a single root.
//!
//! ## Layout
//!
//! ```text
//! SceneGraph
//!   └─ root (whole vehicle)
//!        ├─ SceneNode { name, transform, mesh: Some(Mesh { positions, materials }) }
//!        └─ SceneNode { name, transform, mesh: None, children: [...] }
//! ```

mod bounds;
mod scene_graph;
mod loader;

pub use bounds::Aabb;
pub use scene_graph::{Mesh, SceneGraph, SceneNode};
pub use loader::{
    GeometryDescription, MaterialDescription, MeshDescription, NodeDescription,
    RonSceneLoader, SceneDescription, SceneLoadError, SceneLoader, TextureDescription,
};
pub use crate::foundation::collections::NodeId;
