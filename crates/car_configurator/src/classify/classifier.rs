//! Heuristic mesh classifier

use serde::{Deserialize, Serialize};

use crate::foundation::collections::NodeId;
use crate::scene::{Aabb, SceneGraph};

use super::{Category, CategoryAssignment, NameMatch, NameRuleTable};

/// Bounding-box thresholds for recognizing an unnamed body shell
///
/// Defaults assume the asset is modeled at roughly meter scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyGeometry {
    /// Width (X extent) must exceed this
    pub min_width: f32,
    /// Height (Y extent) must exceed this
    pub min_height: f32,
    /// Depth (Z extent) must exceed this
    pub min_depth: f32,
    /// Lowest accepted local Y position
    pub min_altitude: f32,
    /// Highest accepted local Y position
    pub max_altitude: f32,
}

impl Default for BodyGeometry {
    fn default() -> Self {
        Self {
            min_width: 1.0,
            min_height: 0.5,
            min_depth: 2.0,
            min_altitude: -0.5,
            max_altitude: 1.5,
        }
    }
}

impl BodyGeometry {
    fn matches(&self, bounds: &Aabb, altitude: f32) -> bool {
        let size = bounds.size();
        size.x > self.min_width
            && size.y > self.min_height
            && size.z > self.min_depth
            && (self.min_altitude..=self.max_altitude).contains(&altitude)
    }
}

/// Thresholds for recognizing an unnamed wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    /// Maximum |width - depth| for a footprint to count as square
    pub square_tolerance: f32,
    /// Local Y position must be below this
    pub max_altitude: f32,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            square_tolerance: 0.1,
            max_altitude: 0.0,
        }
    }
}

impl WheelGeometry {
    fn matches(&self, bounds: &Aabb, altitude: f32) -> bool {
        let size = bounds.size();
        (size.x - size.z).abs() < self.square_tolerance && altitude < self.max_altitude
    }
}

/// Thresholds for recognizing an unnamed cabin part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteriorGeometry {
    /// Bounds center must satisfy |x| below this
    pub max_center_offset: f32,
    /// Bounds center Y must be above this
    pub min_center_height: f32,
}

impl Default for InteriorGeometry {
    fn default() -> Self {
        Self {
            max_center_offset: 0.5,
            min_center_height: -0.5,
        }
    }
}

impl InteriorGeometry {
    fn matches(&self, bounds: &Aabb) -> bool {
        let center = bounds.center();
        center.x.abs() < self.max_center_offset && center.y > self.min_center_height
    }
}

/// Classifier settings: name rules plus geometric thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Name rule table
    pub rules: NameRuleTable,
    /// Body shell thresholds
    pub body: BodyGeometry,
    /// Wheel thresholds
    pub wheel: WheelGeometry,
    /// Interior thresholds
    pub interior: InteriorGeometry,
    /// Pick the largest node as body when nothing else qualifies
    pub largest_body_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: NameRuleTable::default(),
            body: BodyGeometry::default(),
            wheel: WheelGeometry::default(),
            interior: InteriorGeometry::default(),
            largest_body_fallback: true,
        }
    }
}

/// Per-node facts gathered in the first pass
struct Candidate {
    id: NodeId,
    name_match: NameMatch,
    bounds: Option<Aabb>,
    category: Option<Category>,
}

/// Partitions the mesh nodes of a scene into [`Category`] groups
///
/// Classification is a read-only pass: the graph is never modified, and the
/// same graph always yields the same assignment.
#[derive(Debug, Clone, Default)]
pub struct SceneClassifier {
    config: ClassifierConfig,
}

impl SceneClassifier {
    /// Create a classifier with the given settings
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify every mesh node of `graph`
    ///
    /// Precedence per node is body → wheel → interior; the first match wins.
    /// Names decide first. Nodes no rule recognizes fall back to their bounds.
    /// Block-listed nodes without a category are excluded outright.
    pub fn classify(&self, graph: &SceneGraph) -> CategoryAssignment {
        let mut candidates: Vec<Candidate> = graph
            .mesh_nodes()
            .into_iter()
            .filter_map(|id| graph.node(id).map(|node| (id, node)))
            .map(|(id, node)| {
                let name_match = self.config.rules.evaluate(&node.name);
                let bounds = graph.world_bounds(id);
                let altitude = node.transform.position.y;
                let category = name_match
                    .category()
                    .or_else(|| self.geometric_category(name_match, bounds.as_ref(), altitude));
                log::trace!(
                    "Classifier: '{}' flags {:?} -> {:?}",
                    node.name,
                    name_match,
                    category
                );
                Candidate { id, name_match, bounds, category }
            })
            .collect();

        let has_body = candidates
            .iter()
            .any(|candidate| candidate.category == Some(Category::Body));
        if !has_body && self.config.largest_body_fallback {
            self.apply_largest_body_fallback(graph, &mut candidates);
        }

        let mut assignment = CategoryAssignment::default();
        for candidate in &candidates {
            assignment.push(candidate.category.unwrap_or(Category::Excluded), candidate.id);
        }

        log::debug!(
            "Classified {} mesh nodes: body={}, wheel={}, interior={}, excluded={}",
            assignment.total(),
            assignment.len(Category::Body),
            assignment.len(Category::Wheel),
            assignment.len(Category::Interior),
            assignment.len(Category::Excluded)
        );
        assignment
    }

    fn geometric_category(
        &self,
        name_match: NameMatch,
        bounds: Option<&Aabb>,
        altitude: f32,
    ) -> Option<Category> {
        if !name_match.is_anonymous() {
            return None;
        }
        let bounds = bounds?;

        if self.config.body.matches(bounds, altitude) {
            Some(Category::Body)
        } else if self.config.wheel.matches(bounds, altitude) {
            Some(Category::Wheel)
        } else if self.config.interior.matches(bounds) {
            Some(Category::Interior)
        } else {
            None
        }
    }

    fn apply_largest_body_fallback(&self, graph: &SceneGraph, candidates: &mut [Candidate]) {
        let named_elsewhere =
            NameMatch::BLOCK_BODY | NameMatch::WHEEL | NameMatch::INTERIOR | NameMatch::EXCLUDE;
        let mut largest: Option<(usize, f32)> = None;
        let mut without_vertices = 0;
        for (index, candidate) in candidates.iter().enumerate() {
            if candidate.name_match.intersects(named_elsewhere) {
                continue;
            }
            let Some(bounds) = candidate.bounds else {
                without_vertices += 1;
                continue;
            };
            let volume = bounds.volume();
            // Strict comparison keeps the earliest node on ties
            if largest.map_or(true, |(_, best)| volume > best) {
                largest = Some((index, volume));
            }
        }

        match largest {
            Some((index, volume)) => {
                let candidate = &mut candidates[index];
                candidate.category = Some(Category::Body);
                log::debug!(
                    "No body match; using largest node '{}' (volume {:.3}) as body",
                    graph.node(candidate.id).map_or("?", |node| node.name.as_str()),
                    volume
                );
            }
            None if without_vertices > 0 => log::warn!(
                "No body candidate found: {without_vertices} unnamed mesh nodes have no vertices; \
                 body category left empty"
            ),
            None => log::warn!("No body candidate found; body category left empty"),
        }
    }
}
