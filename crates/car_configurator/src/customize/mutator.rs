//! Material mutation on classified nodes

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classify::CategoryAssignment;
use crate::foundation::collections::NodeId;
use crate::material::{Color, InteriorStyle, Material, MaterialBuilder, MaterialRef, WheelStyle};
use crate::scene::SceneGraph;

use super::{AttributeTarget, CustomizationRequest, DirectPart, VisualAttribute};

/// Fixed reflectance of automotive paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintFinish {
    /// Metalness of freshly painted panels
    pub metalness: f32,
    /// Roughness of freshly painted panels
    pub roughness: f32,
}

impl Default for PaintFinish {
    fn default() -> Self {
        Self {
            metalness: 0.6,
            roughness: 0.2,
        }
    }
}

/// Window tint behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowTintSettings {
    /// Name substring selecting window nodes
    pub pattern: String,
    /// Glass color
    pub tint_color: Color,
    /// Opacity at tint level 0.0
    pub clear_opacity: f32,
    /// Opacity at tint level 1.0
    pub max_opacity: f32,
}

impl Default for WindowTintSettings {
    fn default() -> Self {
        Self {
            pattern: "window".to_string(),
            tint_color: Color::from_u32(0x10_14_18),
            clear_opacity: 0.3,
            max_opacity: 0.9,
        }
    }
}

/// Headlight glow behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlightSettings {
    /// Name substring selecting headlight nodes
    pub pattern: String,
    /// Glow color
    pub emissive_color: Color,
}

impl Default for HeadlightSettings {
    fn default() -> Self {
        Self {
            pattern: "headlight".to_string(),
            emissive_color: Color::WHITE,
        }
    }
}

/// Cabin ambient light behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLightSettings {
    /// Name substring selecting interior light nodes
    pub pattern: String,
    /// Glow strength applied with the chosen color
    pub intensity: f32,
}

impl Default for AmbientLightSettings {
    fn default() -> Self {
        Self {
            pattern: "interiorlight".to_string(),
            intensity: 1.0,
        }
    }
}

/// Mutator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutatorConfig {
    /// Body paint finish
    pub paint: PaintFinish,
    /// Window tint
    pub window: WindowTintSettings,
    /// Headlights
    pub headlight: HeadlightSettings,
    /// Interior ambient lights
    pub ambient: AmbientLightSettings,
}

/// What a mutation touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Nodes whose materials changed
    pub nodes: usize,
    /// Slots that received a newly built material
    pub replaced: usize,
    /// Slots edited through copy-on-write
    pub updated: usize,
}

impl ApplyReport {
    /// Whether nothing was touched
    pub fn is_noop(&self) -> bool {
        self.nodes == 0
    }
}

impl std::ops::AddAssign for ApplyReport {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.replaced += other.replaced;
        self.updated += other.updated;
    }
}

/// Applies [`VisualAttribute`]s to the matching nodes of a scene
///
/// Category attributes replace slot materials with newly built ones so that a
/// material instanced on unrelated nodes is never altered. Direct-part
/// attributes edit the slot via [`Arc::make_mut`], which clones the material
/// first whenever another slot still shares it.
#[derive(Debug, Clone, Default)]
pub struct MaterialMutator {
    config: MutatorConfig,
}

impl MaterialMutator {
    /// Create a mutator with the given settings
    pub fn new(config: MutatorConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &MutatorConfig {
        &self.config
    }

    /// Apply one attribute
    ///
    /// Empty categories and nodes without material slots are skipped; this
    /// never fails.
    pub fn apply_attribute(
        &self,
        graph: &mut SceneGraph,
        attribute: &VisualAttribute,
        assignment: &CategoryAssignment,
    ) -> ApplyReport {
        let report = match attribute.target() {
            AttributeTarget::Category(category) => {
                let nodes = assignment.nodes(category);
                if nodes.is_empty() {
                    log::debug!("No {category} nodes; skipping {attribute:?}");
                    return ApplyReport::default();
                }
                self.apply_to_category(graph, nodes, attribute)
            }
            AttributeTarget::Direct(part) => self.apply_to_direct_part(graph, part, attribute),
        };

        log::debug!(
            "Applied {:?}: {} nodes, {} replaced, {} updated",
            attribute,
            report.nodes,
            report.replaced,
            report.updated
        );
        report
    }

    /// Apply every attribute set in `request`, in request order
    pub fn apply_request(
        &self,
        graph: &mut SceneGraph,
        request: &CustomizationRequest,
        assignment: &CategoryAssignment,
    ) -> ApplyReport {
        let mut total = ApplyReport::default();
        for attribute in request.attributes() {
            total += self.apply_attribute(graph, &attribute, assignment);
        }
        total
    }

    fn apply_to_category(
        &self,
        graph: &mut SceneGraph,
        nodes: &[NodeId],
        attribute: &VisualAttribute,
    ) -> ApplyReport {
        let mut report = ApplyReport::default();
        for id in nodes {
            let Some(mesh) = graph.node_mut(*id).and_then(|node| node.mesh.as_mut()) else {
                log::debug!("Assigned node {id:?} is missing or has no mesh; skipping");
                continue;
            };
            if mesh.materials.is_empty() {
                continue;
            }

            for slot in &mut mesh.materials {
                let replacement = self.replacement(slot, attribute);
                *slot = replacement;
                report.replaced += 1;
            }
            report.nodes += 1;
        }
        report
    }

    fn replacement(&self, current: &Material, attribute: &VisualAttribute) -> MaterialRef {
        match attribute {
            VisualAttribute::BodyColor(color) => self.paint(current, *color),
            VisualAttribute::WheelStyle(style) => wheel_material(*style),
            VisualAttribute::InteriorStyle(style) => interior_material(*style),
            // Direct-part attributes never reach category replacement
            _ => Arc::new(current.clone()),
        }
    }

    /// Fresh paint material keeping the slot's texture maps
    fn paint(&self, current: &Material, color: Color) -> MaterialRef {
        MaterialBuilder::new()
            .maps(current.maps.clone())
            .base_color(color)
            .metalness(self.config.paint.metalness)
            .roughness(self.config.paint.roughness)
            .name("Body Paint")
            .build_ref()
    }

    fn apply_to_direct_part(
        &self,
        graph: &mut SceneGraph,
        part: DirectPart,
        attribute: &VisualAttribute,
    ) -> ApplyReport {
        let pattern = match part {
            DirectPart::Window => &self.config.window.pattern,
            DirectPart::Headlight => &self.config.headlight.pattern,
            DirectPart::InteriorLight => &self.config.ambient.pattern,
        }
        .to_lowercase();
        if pattern.is_empty() {
            return ApplyReport::default();
        }

        let mut report = ApplyReport::default();
        for id in graph.mesh_nodes() {
            let Some(node) = graph.node_mut(id) else { continue };
            if !node.name.to_lowercase().contains(&pattern) {
                continue;
            }
            let Some(mesh) = node.mesh.as_mut() else { continue };
            if mesh.materials.is_empty() {
                continue;
            }

            for slot in &mut mesh.materials {
                self.update_in_place(Arc::make_mut(slot), attribute);
                report.updated += 1;
            }
            report.nodes += 1;
        }

        if report.is_noop() {
            log::debug!("No nodes matching '{pattern}' for {attribute:?}");
        }
        report
    }

    fn update_in_place(&self, material: &mut Material, attribute: &VisualAttribute) {
        match attribute {
            VisualAttribute::WindowTint(level) => {
                let level = level.clamp(0.0, 1.0);
                let window = &self.config.window;
                material.base_color = window.tint_color;
                material.opacity = (window.clear_opacity
                    + (window.max_opacity - window.clear_opacity) * level)
                    .clamp(0.0, 1.0);
                material.transparent = true;
            }
            VisualAttribute::HeadlightIntensity(intensity) => {
                material.emissive = self.config.headlight.emissive_color;
                material.emissive_intensity = intensity.max(0.0);
            }
            VisualAttribute::AmbientLightColor(color) => {
                material.emissive = *color;
                material.emissive_intensity = self.config.ambient.intensity.max(0.0);
            }
            VisualAttribute::BodyColor(_)
            | VisualAttribute::WheelStyle(_)
            | VisualAttribute::InteriorStyle(_) => {}
        }
    }
}

fn wheel_material(style: WheelStyle) -> MaterialRef {
    Arc::new(style.material())
}

fn interior_material(style: InteriorStyle) -> MaterialRef {
    Arc::new(style.material())
}
