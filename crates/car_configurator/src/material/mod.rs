//! Material system for configurable vehicle surfaces
//!
//! Materials describe how a mesh surface looks: base color, reflectance
//! parameters, emission, transparency, and opaque texture map references.
//!
//! # Sharing
//!
//! Mesh slots hold materials behind [`MaterialRef`] (`Arc<Material>`). Assets
//! frequently instance one material across many nodes, so customization code
//! either swaps the `Arc` for a freshly built material or goes through
//! copy-on-write; a shared instance is never edited in place.

pub mod color;
pub mod material_type;
pub mod material_builder;
pub mod presets;

pub use color::{Color, ColorParseError};
pub use material_type::{Material, MaterialRef, Texture, TextureMaps, TextureRef};
pub use material_builder::MaterialBuilder;
pub use presets::{InteriorStyle, PresetParseError, WheelStyle};
