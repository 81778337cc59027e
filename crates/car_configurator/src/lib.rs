//! # Car Configurator
//!
//! Part detection and material customization for arbitrary vehicle meshes.
//!
//! ## Features
//!
//! - **Scene Classification**: Heuristic body / wheel / interior detection from
//!   node names with geometric fallbacks
//! - **Material Mutation**: Paint, wheel and interior presets applied to exactly
//!   the classified parts, preserving texture maps and shared materials
//! - **Direct Parts**: Window tint, headlight glow and ambient light by name
//! - **Configuration**: Thresholds and name rules loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use car_configurator::prelude::*;
//!
//! let mut scene = SceneGraph::new("Sketchfab_Scene");
//! let root = scene.root();
//! let paint = Material::default().into_ref();
//! scene.add_child(
//!     root,
//!     SceneNode::with_mesh("body_shell", Mesh::cuboid(Vec3::new(2.0, 1.0, 4.0), vec![paint])),
//! );
//!
//! let assignment = SceneClassifier::default().classify(&scene);
//! assert_eq!(assignment.len(Category::Body), 1);
//!
//! let red = Color::from_hex("#cc0000").unwrap();
//! MaterialMutator::default().apply_attribute(&mut scene, &VisualAttribute::BodyColor(red), &assignment);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;
pub mod material;
pub mod classify;
pub mod customize;
pub mod config;

mod error;
mod session;

pub use error::ConfiguratorError;
pub use session::ConfiguratorSession;

#[cfg(test)]
mod tests;

/// Common imports for configurator users
pub mod prelude {
    pub use crate::{
        ConfiguratorError, ConfiguratorSession,
        foundation::math::{Vec3, Point3, Transform},
        scene::{Aabb, Mesh, NodeId, RonSceneLoader, SceneGraph, SceneLoader, SceneNode},
        material::{Color, InteriorStyle, Material, MaterialBuilder, MaterialRef, Texture, TextureMaps, WheelStyle},
        classify::{Category, CategoryAssignment, ClassifierConfig, NameRule, NameRuleTable, SceneClassifier},
        customize::{ApplyReport, CustomizationRequest, MaterialMutator, MutatorConfig, VisualAttribute},
        config::{Config, ConfiguratorConfig},
    };
}
