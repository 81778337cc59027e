//! Procedural material builder
//!
//! Fluent API used by the presets and the material mutator to construct
//! replacement materials. Scalar inputs are clamped to their valid ranges.

use super::{Color, Material, MaterialRef, TextureMaps};

/// Builder for creating materials programmatically at runtime
///
/// # Examples
/// ```
/// use car_configurator::material::{Color, MaterialBuilder};
///
/// let paint = MaterialBuilder::new()
///     .base_color(Color::rgb(0.8, 0.0, 0.0))
///     .metalness(0.6)
///     .roughness(0.2)
///     .name("Body Paint")
///     .build();
/// assert_eq!(paint.metalness, 0.6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaterialBuilder {
    material: Material,
}

impl MaterialBuilder {
    /// Create a new material builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base color (albedo)
    pub fn base_color(mut self, color: Color) -> Self {
        self.material.base_color = color;
        self
    }

    /// Set the base color from a packed `0xRRGGBB` value
    pub fn base_color_hex(mut self, hex: u32) -> Self {
        self.material.base_color = Color::from_u32(hex);
        self
    }

    /// Set metalness factor (0.0 = dielectric, 1.0 = metallic)
    pub fn metalness(mut self, metalness: f32) -> Self {
        self.material.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Set roughness factor (0.0 = mirror smooth, 1.0 = completely rough)
    pub fn roughness(mut self, roughness: f32) -> Self {
        self.material.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set opacity; values below 1.0 enable transparency
    pub fn opacity(mut self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.material.opacity = opacity;
        self.material.transparent = opacity < 1.0;
        self
    }

    /// Set emission color for self-illuminated materials
    pub fn emissive(mut self, color: Color) -> Self {
        self.material.emissive = color;
        self
    }

    /// Set emission strength multiplier
    pub fn emissive_intensity(mut self, strength: f32) -> Self {
        self.material.emissive_intensity = strength.max(0.0);
        self
    }

    /// Attach texture maps
    pub fn maps(mut self, maps: TextureMaps) -> Self {
        self.material.maps = maps;
        self
    }

    /// Set material name for debugging
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.material.name = Some(name.into());
        self
    }

    /// Build the final material
    pub fn build(self) -> Material {
        self.material
    }

    /// Build straight into a shareable reference
    pub fn build_ref(self) -> MaterialRef {
        self.material.into_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Texture;

    #[test]
    fn test_builder_clamps_inputs() {
        let material = MaterialBuilder::new()
            .metalness(1.5)
            .roughness(-0.5)
            .emissive_intensity(-2.0)
            .build();

        assert_eq!(material.metalness, 1.0);
        assert_eq!(material.roughness, 0.0);
        assert_eq!(material.emissive_intensity, 0.0);
    }

    #[test]
    fn test_opacity_toggles_transparency() {
        let glass = MaterialBuilder::new().opacity(0.4).build();
        assert!(glass.transparent);

        let solid = MaterialBuilder::new().opacity(1.0).build();
        assert!(!solid.transparent);
    }

    #[test]
    fn test_maps_are_shared_not_copied() {
        let diffuse = Texture::new("carbon.png");
        let material = MaterialBuilder::new()
            .maps(TextureMaps { diffuse: Some(diffuse.clone()), ..Default::default() })
            .build();

        assert!(std::sync::Arc::ptr_eq(material.maps.diffuse.as_ref().unwrap(), &diffuse));
    }
}
