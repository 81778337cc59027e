//! Wheel and interior material presets
//!
//! Presets are fully distinct surfaces rather than color variants: applying one
//! replaces the whole material, textures included.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Material, MaterialBuilder};

/// Unknown preset identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} preset: '{id}'")]
pub struct PresetParseError {
    /// Preset family ("wheel" or "interior")
    pub kind: &'static str,
    /// Identifier that failed to parse
    pub id: String,
}

/// Selectable wheel finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelStyle {
    /// Gloss black sport rims
    Sport,
    /// Brushed gunmetal rims
    Classic,
    /// Polished dark chrome
    Luxury,
    /// Satin off-road rims
    OffRoad,
}

impl WheelStyle {
    /// Every wheel style, in menu order
    pub const fn all() -> [Self; 4] {
        [Self::Sport, Self::Classic, Self::Luxury, Self::OffRoad]
    }

    /// Stable identifier used in requests and config files
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Classic => "classic",
            Self::Luxury => "luxury",
            Self::OffRoad => "off-road",
        }
    }

    /// Parse an identifier; `_` and `-` are interchangeable, case is ignored
    pub fn from_id(id: &str) -> Result<Self, PresetParseError> {
        let normalized = normalize_id(id);
        Self::all()
            .into_iter()
            .find(|style| style.id() == normalized)
            .ok_or_else(|| PresetParseError { kind: "wheel", id: id.to_string() })
    }

    /// Build the wheel material for this style
    pub fn material(self) -> Material {
        let (hex, metalness, roughness) = match self {
            Self::Sport => (0x1a1a1a, 0.9, 0.05),
            Self::Classic => (0x2b2b2e, 0.8, 0.1),
            Self::Luxury => (0x121214, 0.95, 0.02),
            Self::OffRoad => (0x202020, 0.85, 0.08),
        };

        MaterialBuilder::new()
            .base_color_hex(hex)
            .metalness(metalness)
            .roughness(roughness)
            .name(format!("Wheel ({})", self.id()))
            .build()
    }
}

/// Selectable interior trims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteriorStyle {
    /// Black leather
    BlackLeather,
    /// Beige leather
    BeigeLeather,
    /// Red sport upholstery
    RedSport,
    /// Off-white luxury leather
    WhiteLuxury,
    /// Grey cloth
    GreyFabric,
}

impl InteriorStyle {
    /// Every interior style, in menu order
    pub const fn all() -> [Self; 5] {
        [
            Self::BlackLeather,
            Self::BeigeLeather,
            Self::RedSport,
            Self::WhiteLuxury,
            Self::GreyFabric,
        ]
    }

    /// Stable identifier used in requests and config files
    pub const fn id(self) -> &'static str {
        match self {
            Self::BlackLeather => "black-leather",
            Self::BeigeLeather => "beige-leather",
            Self::RedSport => "red-sport",
            Self::WhiteLuxury => "white-luxury",
            Self::GreyFabric => "grey-fabric",
        }
    }

    /// Parse an identifier; `_` and `-` are interchangeable, case is ignored
    pub fn from_id(id: &str) -> Result<Self, PresetParseError> {
        let normalized = normalize_id(id);
        Self::all()
            .into_iter()
            .find(|style| style.id() == normalized)
            .ok_or_else(|| PresetParseError { kind: "interior", id: id.to_string() })
    }

    /// Build the interior material for this style
    pub fn material(self) -> Material {
        let hex = match self {
            Self::BlackLeather => 0x1c1c1c,
            Self::BeigeLeather => 0xc8b48c,
            Self::RedSport => 0x8b1a1a,
            Self::WhiteLuxury => 0xf0ede6,
            Self::GreyFabric => 0x5a5a5a,
        };

        // Cloth and leather: almost no metal response, diffuse highlights
        MaterialBuilder::new()
            .base_color_hex(hex)
            .metalness(0.1)
            .roughness(0.8)
            .name(format!("Interior ({})", self.id()))
            .build()
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_presets_in_range() {
        for style in WheelStyle::all() {
            let material = style.material();
            assert!((0.8..=0.95).contains(&material.metalness), "{style:?}");
            assert!((0.02..=0.1).contains(&material.roughness), "{style:?}");
            assert!(material.maps.is_empty());
        }
    }

    #[test]
    fn test_interior_presets_are_matte() {
        for style in InteriorStyle::all() {
            let material = style.material();
            assert_eq!(material.metalness, 0.1);
            assert_eq!(material.roughness, 0.8);
        }
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(WheelStyle::from_id("OFF_ROAD").unwrap(), WheelStyle::OffRoad);
        assert_eq!(InteriorStyle::from_id("red-sport").unwrap(), InteriorStyle::RedSport);

        let err = WheelStyle::from_id("hover").unwrap_err();
        assert_eq!(err.kind, "wheel");
        assert_eq!(err.id, "hover");
    }

    #[test]
    fn test_serde_uses_variant_names() {
        for style in WheelStyle::all() {
            let text = ron::to_string(&style).unwrap();
            let back: WheelStyle = ron::from_str(&text).unwrap();
            assert_eq!(back, style);
        }
        let parsed: InteriorStyle = ron::from_str("BeigeLeather").unwrap();
        assert_eq!(parsed, InteriorStyle::BeigeLeather);
    }
}
