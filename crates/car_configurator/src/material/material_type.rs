//! Material and texture reference definitions

use std::sync::Arc;

use super::Color;

/// Opaque texture resource
///
/// The configurator never samples textures; it only carries references
/// through material replacement. Identity (via [`Arc::ptr_eq`]) is what
/// matters, not contents.
#[derive(Debug, PartialEq, Eq)]
pub struct Texture {
    /// Source URI as reported by the scene loader
    pub uri: String,
}

impl Texture {
    /// Create a texture reference for a URI
    pub fn new(uri: impl Into<String>) -> TextureRef {
        Arc::new(Self { uri: uri.into() })
    }
}

/// Shared handle to a texture
pub type TextureRef = Arc<Texture>;

/// Texture maps attached to a material
#[derive(Debug, Clone, Default)]
pub struct TextureMaps {
    /// Albedo / diffuse map
    pub diffuse: Option<TextureRef>,
    /// Tangent-space normal map
    pub normal: Option<TextureRef>,
    /// Roughness map
    pub roughness: Option<TextureRef>,
    /// Metalness map
    pub metalness: Option<TextureRef>,
}

impl TextureMaps {
    /// Whether no map is set
    pub fn is_empty(&self) -> bool {
        self.diffuse.is_none()
            && self.normal.is_none()
            && self.roughness.is_none()
            && self.metalness.is_none()
    }

    /// Whether both sets point at the same texture instances
    pub fn same_references(&self, other: &Self) -> bool {
        fn same(a: Option<&TextureRef>, b: Option<&TextureRef>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        same(self.diffuse.as_ref(), other.diffuse.as_ref())
            && same(self.normal.as_ref(), other.normal.as_ref())
            && same(self.roughness.as_ref(), other.roughness.as_ref())
            && same(self.metalness.as_ref(), other.metalness.as_ref())
    }
}

/// Metallic-roughness surface description for one mesh slot
#[derive(Debug, Clone)]
pub struct Material {
    /// Optional name for debugging
    pub name: Option<String>,
    /// Base color (albedo)
    pub base_color: Color,
    /// Metalness factor (0.0 = dielectric, 1.0 = metallic)
    pub metalness: f32,
    /// Roughness factor (0.0 = mirror, 1.0 = completely rough)
    pub roughness: f32,
    /// Opacity, only honored when `transparent` is set
    pub opacity: f32,
    /// Alpha blending enabled
    pub transparent: bool,
    /// Emission color for self-illuminated surfaces
    pub emissive: Color,
    /// Emission strength
    pub emissive_intensity: f32,
    /// Texture maps
    pub maps: TextureMaps,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: None,
            base_color: Color::rgb(0.8, 0.8, 0.8),
            metalness: 0.0,
            roughness: 0.5,
            opacity: 1.0,
            transparent: false,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            maps: TextureMaps::default(),
        }
    }
}

impl Material {
    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Wrap into a shareable reference
    pub fn into_ref(self) -> MaterialRef {
        Arc::new(self)
    }

    /// Whether two materials would render identically
    ///
    /// Compares every scalar parameter and texture identity, ignoring the name.
    pub fn same_appearance(&self, other: &Self) -> bool {
        self.base_color == other.base_color
            && self.metalness == other.metalness
            && self.roughness == other.roughness
            && self.opacity == other.opacity
            && self.transparent == other.transparent
            && self.emissive == other.emissive
            && self.emissive_intensity == other.emissive_intensity
            && self.maps.same_references(&other.maps)
    }
}

/// Shared handle to a material; one instance may back many mesh slots
pub type MaterialRef = Arc<Material>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_identity_not_equality() {
        let a = Texture::new("paint.png");
        let b = Texture::new("paint.png");

        let maps_a = TextureMaps { diffuse: Some(a.clone()), ..Default::default() };
        let maps_a2 = TextureMaps { diffuse: Some(a), ..Default::default() };
        let maps_b = TextureMaps { diffuse: Some(b), ..Default::default() };

        assert!(maps_a.same_references(&maps_a2));
        assert!(!maps_a.same_references(&maps_b));
    }

    #[test]
    fn test_same_appearance_ignores_name() {
        let a = Material::default().with_name("a");
        let b = Material::default().with_name("b");
        assert!(a.same_appearance(&b));

        let c = Material { metalness: 0.3, ..Material::default() };
        assert!(!a.same_appearance(&c));
    }

    #[test]
    fn test_empty_maps() {
        assert!(TextureMaps::default().is_empty());
        let maps = TextureMaps { normal: Some(Texture::new("n.png")), ..Default::default() };
        assert!(!maps.is_empty());
    }
}
