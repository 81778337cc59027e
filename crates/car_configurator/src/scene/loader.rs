//! Scene loading collaborator
//!
//! Real assets are parsed by the host application; the configurator only
//! consumes the resulting [`SceneGraph`]. [`RonSceneLoader`] reads a small
//! RON scene description so fixtures and the demo app can build graphs
//! without an asset pipeline.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::collections::NodeId;
use crate::foundation::math::{Point3, Transform, Vec3};
use crate::material::{Color, MaterialBuilder, MaterialRef, Texture, TextureMaps, TextureRef};

use super::{Mesh, SceneGraph, SceneNode};

/// Errors produced while turning a scene source into a graph
#[derive(Error, Debug)]
pub enum SceneLoadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    
    /// A mesh slot names a material missing from the library
    #[error("Node '{node}' references unknown material '{material}'")]
    UnknownMaterial {
        /// Node carrying the slot
        node: String,
        /// Missing material name
        material: String,
    },
    
    /// Two library entries share a name
    #[error("Material '{0}' is defined more than once")]
    DuplicateMaterial(String),
}

/// Source of parsed scene graphs
pub trait SceneLoader {
    /// Load the scene stored at `source`
    fn load(&self, source: &Path) -> Result<SceneGraph, SceneLoadError>;
}

/// Loads [`SceneDescription`] files written in RON
#[derive(Debug, Default, Clone, Copy)]
pub struct RonSceneLoader;

impl RonSceneLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }
    
    /// Parse and build a scene from RON text
    pub fn load_str(&self, text: &str) -> Result<SceneGraph, SceneLoadError> {
        let description: SceneDescription =
            ron::from_str(text).map_err(|e| SceneLoadError::Parse(e.to_string()))?;
        description.build()
    }
}

impl SceneLoader for RonSceneLoader {
    fn load(&self, source: &Path) -> Result<SceneGraph, SceneLoadError> {
        let contents = std::fs::read_to_string(source)?;
        let graph = self.load_str(&contents)?;
        log::info!(
            "Loaded scene '{}' with {} nodes",
            source.display(),
            graph.len()
        );
        Ok(graph)
    }
}

/// Serialized scene: a material library plus a node tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Named materials; mesh slots reference them by name
    #[serde(default)]
    pub materials: Vec<MaterialDescription>,
    /// Root of the node tree
    pub root: NodeDescription,
}

/// Serialized material library entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    /// Library name
    pub name: String,
    /// Base color
    pub base_color: Color,
    /// Metalness factor
    pub metalness: f32,
    /// Roughness factor
    pub roughness: f32,
    /// Opacity (below 1.0 enables transparency)
    pub opacity: f32,
    /// Emission color
    pub emissive: Color,
    /// Emission strength
    pub emissive_intensity: f32,
    /// Texture map URIs
    pub textures: TextureDescription,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: Color::rgb(0.8, 0.8, 0.8),
            metalness: 0.0,
            roughness: 0.5,
            opacity: 1.0,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            textures: TextureDescription::default(),
        }
    }
}

/// Texture map URIs of a material
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureDescription {
    /// Diffuse map
    pub diffuse: Option<String>,
    /// Normal map
    pub normal: Option<String>,
    /// Roughness map
    pub roughness: Option<String>,
    /// Metalness map
    pub metalness: Option<String>,
}

/// Serialized node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Display name
    pub name: String,
    /// Local position
    #[serde(default)]
    pub position: [f32; 3],
    /// Local rotation as Euler angles in radians
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Local scale
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    /// Optional geometry and material slots
    #[serde(default)]
    pub mesh: Option<MeshDescription>,
    /// Ordered children
    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Serialized mesh payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshDescription {
    /// Geometry source
    pub geometry: GeometryDescription,
    /// Material library names, one per slot
    #[serde(default)]
    pub materials: Vec<String>,
}

/// Geometry of a serialized mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GeometryDescription {
    /// Origin-centered box with the given full size
    Box {
        /// Width, height, depth
        size: [f32; 3],
    },
    /// Explicit vertex positions
    Points(Vec<[f32; 3]>),
}

impl SceneDescription {
    /// Build a graph, sharing textures by URI and materials by library name
    pub fn build(&self) -> Result<SceneGraph, SceneLoadError> {
        let library = self.material_library()?;
        let mut graph = SceneGraph::with_root(self.root.to_node(&library)?);
        let root = graph.root();
        for child in &self.root.children {
            attach(&mut graph, root, child, &library)?;
        }
        Ok(graph)
    }
    
    fn material_library(&self) -> Result<HashMap<String, MaterialRef>, SceneLoadError> {
        let mut textures: HashMap<String, TextureRef> = HashMap::new();
        let mut texture = |uri: &Option<String>| {
            uri.as_ref().map(|uri| {
                textures
                    .entry(uri.clone())
                    .or_insert_with(|| Texture::new(uri.clone()))
                    .clone()
            })
        };
        
        let mut library = HashMap::new();
        for entry in &self.materials {
            let maps = TextureMaps {
                diffuse: texture(&entry.textures.diffuse),
                normal: texture(&entry.textures.normal),
                roughness: texture(&entry.textures.roughness),
                metalness: texture(&entry.textures.metalness),
            };
            let material = MaterialBuilder::new()
                .base_color(entry.base_color)
                .metalness(entry.metalness)
                .roughness(entry.roughness)
                .opacity(entry.opacity)
                .emissive(entry.emissive)
                .emissive_intensity(entry.emissive_intensity)
                .maps(maps)
                .name(entry.name.clone())
                .build_ref();
            if library.insert(entry.name.clone(), material).is_some() {
                return Err(SceneLoadError::DuplicateMaterial(entry.name.clone()));
            }
        }
        Ok(library)
    }
}

impl NodeDescription {
    fn to_node(&self, library: &HashMap<String, MaterialRef>) -> Result<SceneNode, SceneLoadError> {
        let transform = Transform::from_parts(
            Vec3::from(self.position),
            Vec3::from(self.rotation),
            Vec3::from(self.scale),
        );
        
        let node = match &self.mesh {
            Some(mesh) => {
                let materials = mesh
                    .materials
                    .iter()
                    .map(|name| {
                        library.get(name).cloned().ok_or_else(|| SceneLoadError::UnknownMaterial {
                            node: self.name.clone(),
                            material: name.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let mesh = match &mesh.geometry {
                    GeometryDescription::Box { size } => Mesh::cuboid(Vec3::from(*size), materials),
                    GeometryDescription::Points(points) => Mesh::new(
                        points.iter().map(|p| Point3::from(*p)).collect(),
                        materials,
                    ),
                };
                SceneNode::with_mesh(self.name.clone(), mesh)
            }
            None => SceneNode::group(self.name.clone()),
        };
        
        Ok(node.at(transform))
    }
}

fn attach(
    graph: &mut SceneGraph,
    parent: NodeId,
    description: &NodeDescription,
    library: &HashMap<String, MaterialRef>,
) -> Result<(), SceneLoadError> {
    let node = description.to_node(library)?;
    // Parent was just inserted into this graph
    if let Some(id) = graph.add_child(parent, node) {
        for child in &description.children {
            attach(graph, id, child, library)?;
        }
    }
    Ok(())
}
