//! Scene classification
//!
//! Partitions the mesh nodes of a vehicle into semantic categories so that
//! customization only touches the intended parts.
//!
//! ## Pipeline
//!
//! ```text
//! SceneGraph (read-only)
//!      ↓  NameRuleTable: block-list + positive patterns
//!      ↓  geometric fallbacks for nodes no rule recognized
//!      ↓  global body fallback (largest volume)
//! CategoryAssignment (immutable)
//! ```

mod category;
mod rules;
mod classifier;

pub use category::{Category, CategoryAssignment};
pub use rules::{
    NameMatch, NameRule, NameRuleTable, RuleEffect, BODY_BLOCK_LIST, BODY_PATTERNS,
    INTERIOR_PATTERNS, WHEEL_PATTERNS,
};
pub use classifier::{
    BodyGeometry, ClassifierConfig, InteriorGeometry, SceneClassifier, WheelGeometry,
};
