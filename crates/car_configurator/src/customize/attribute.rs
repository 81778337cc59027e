//! Visual attributes and customization requests

use serde::{Deserialize, Serialize};

use crate::classify::Category;
use crate::material::{Color, InteriorStyle, WheelStyle};

/// Parts addressed by name instead of by classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectPart {
    /// Window glass
    Window,
    /// Headlight lenses
    Headlight,
    /// Cabin ambient lighting strips
    InteriorLight,
}

/// Which nodes an attribute acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeTarget {
    /// Nodes of a classified category
    Category(Category),
    /// Nodes whose name matches a direct part pattern
    Direct(DirectPart),
}

/// One requested change to the vehicle's appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualAttribute {
    /// Paint color for body panels
    BodyColor(Color),
    /// Wheel finish preset
    WheelStyle(WheelStyle),
    /// Interior trim preset
    InteriorStyle(InteriorStyle),
    /// Window tint level, 0.0 (clear) to 1.0 (darkest)
    WindowTint(f32),
    /// Headlight glow strength
    HeadlightIntensity(f32),
    /// Cabin ambient light color
    AmbientLightColor(Color),
}

impl VisualAttribute {
    /// Nodes this attribute applies to
    pub const fn target(&self) -> AttributeTarget {
        match self {
            Self::BodyColor(_) => AttributeTarget::Category(Category::Body),
            Self::WheelStyle(_) => AttributeTarget::Category(Category::Wheel),
            Self::InteriorStyle(_) => AttributeTarget::Category(Category::Interior),
            Self::WindowTint(_) => AttributeTarget::Direct(DirectPart::Window),
            Self::HeadlightIntensity(_) => AttributeTarget::Direct(DirectPart::Headlight),
            Self::AmbientLightColor(_) => AttributeTarget::Direct(DirectPart::InteriorLight),
        }
    }
}

/// Full set of user selections, any of which may be unset
///
/// Supplied fresh by the host UI on every interaction. Deserializes from
/// TOML or RON with hex strings for colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationRequest {
    /// Body paint color
    pub body_color: Option<Color>,
    /// Wheel preset
    pub wheel_style: Option<WheelStyle>,
    /// Interior preset
    pub interior_style: Option<InteriorStyle>,
    /// Window tint level
    pub window_tint: Option<f32>,
    /// Headlight glow strength
    pub headlight_intensity: Option<f32>,
    /// Cabin ambient light color
    pub ambient_light_color: Option<Color>,
}

impl CustomizationRequest {
    /// Set attributes in a fixed order: body, wheel, interior, window,
    /// headlight, ambient light
    pub fn attributes(&self) -> Vec<VisualAttribute> {
        [
            self.body_color.map(VisualAttribute::BodyColor),
            self.wheel_style.map(VisualAttribute::WheelStyle),
            self.interior_style.map(VisualAttribute::InteriorStyle),
            self.window_tint.map(VisualAttribute::WindowTint),
            self.headlight_intensity.map(VisualAttribute::HeadlightIntensity),
            self.ambient_light_color.map(VisualAttribute::AmbientLightColor),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Set window, headlight and ambient attributes, in [`Self::attributes`] order
    pub fn direct_attributes(&self) -> impl Iterator<Item = VisualAttribute> {
        self.attributes()
            .into_iter()
            .filter(|attribute| matches!(attribute.target(), AttributeTarget::Direct(_)))
    }

    /// Record a single attribute, replacing any previous value of its kind
    pub fn set(&mut self, attribute: VisualAttribute) {
        match attribute {
            VisualAttribute::BodyColor(color) => self.body_color = Some(color),
            VisualAttribute::WheelStyle(style) => self.wheel_style = Some(style),
            VisualAttribute::InteriorStyle(style) => self.interior_style = Some(style),
            VisualAttribute::WindowTint(level) => self.window_tint = Some(level),
            VisualAttribute::HeadlightIntensity(value) => self.headlight_intensity = Some(value),
            VisualAttribute::AmbientLightColor(color) => self.ambient_light_color = Some(color),
        }
    }

    /// Overlay every attribute set in `other`
    pub fn merge(&mut self, other: &Self) {
        for attribute in other.attributes() {
            self.set(attribute);
        }
    }

    /// Whether no attribute is set
    pub fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }
}
