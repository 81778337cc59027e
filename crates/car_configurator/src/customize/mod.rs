//! Material customization
//!
//! Applies user-selected visual attributes to a classified scene. Category
//! attributes (body paint, wheel and interior presets) act on the nodes of a
//! [`crate::classify::CategoryAssignment`]; the low-cardinality direct parts
//! (windows, headlights, interior lights) are matched by name on the spot.

mod attribute;
mod mutator;

pub use attribute::{AttributeTarget, CustomizationRequest, DirectPart, VisualAttribute};
pub use mutator::{
    AmbientLightSettings, ApplyReport, HeadlightSettings, MaterialMutator, MutatorConfig,
    PaintFinish, WindowTintSettings,
};
