//! Per-scene customization session
//!
//! Owns the loaded vehicle and memoizes its classification. The cache lives
//! exactly as long as the scene: loading another scene discards it.

use crate::classify::{CategoryAssignment, SceneClassifier};
use crate::config::ConfiguratorConfig;
use crate::customize::{ApplyReport, CustomizationRequest, MaterialMutator, VisualAttribute};
use crate::scene::SceneGraph;

/// Loaded scene plus cached classification and current selections
#[derive(Debug)]
pub struct ConfiguratorSession {
    classifier: SceneClassifier,
    mutator: MaterialMutator,
    scene: Option<SceneGraph>,
    assignment: Option<CategoryAssignment>,
    current: CustomizationRequest,
}

impl ConfiguratorSession {
    /// Create a session without a scene
    pub fn new(config: ConfiguratorConfig) -> Self {
        Self {
            classifier: SceneClassifier::new(config.classifier),
            mutator: MaterialMutator::new(config.mutator),
            scene: None,
            assignment: None,
            current: CustomizationRequest::default(),
        }
    }

    /// Replace the scene, dropping the cached classification
    ///
    /// Returns the previously loaded scene, if any. Current selections are
    /// kept but not applied; call [`Self::reapply_all`] to restore them.
    pub fn load_scene(&mut self, scene: SceneGraph) -> Option<SceneGraph> {
        log::info!("Loading scene with {} nodes", scene.len());
        self.assignment = None;
        self.scene.replace(scene)
    }

    /// Currently loaded scene
    pub fn scene(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }

    /// Selections applied so far
    pub fn current_request(&self) -> &CustomizationRequest {
        &self.current
    }

    /// Cached classification, computed on first use
    pub fn assignment(&mut self) -> Option<&CategoryAssignment> {
        let scene = self.scene.as_ref()?;
        if self.assignment.is_none() {
            self.assignment = Some(self.classifier.classify(scene));
        }
        self.assignment.as_ref()
    }

    /// Apply a single attribute and remember it
    ///
    /// Without a loaded scene the selection is only recorded. Current
    /// window, headlight and ambient selections are re-applied afterwards, so
    /// the scene always matches a full [`Self::reapply_all`]. The report
    /// covers `attribute` only.
    pub fn apply(&mut self, attribute: &VisualAttribute) -> ApplyReport {
        self.current.set(*attribute);
        self.apply_to_scene(|mutator, scene, assignment| {
            mutator.apply_attribute(scene, attribute, assignment)
        })
    }

    /// Apply every attribute set in `request` and merge it into the selections
    pub fn apply_request(&mut self, request: &CustomizationRequest) -> ApplyReport {
        self.current.merge(request);
        self.apply_to_scene(|mutator, scene, assignment| {
            mutator.apply_request(scene, request, assignment)
        })
    }

    /// Reclassify from scratch and re-apply all current selections
    pub fn reapply_all(&mut self) -> ApplyReport {
        self.assignment = None;
        let request = self.current.clone();
        self.apply_to_scene(|mutator, scene, assignment| {
            mutator.apply_request(scene, &request, assignment)
        })
    }

    fn apply_to_scene<F>(&mut self, apply: F) -> ApplyReport
    where
        F: FnOnce(&MaterialMutator, &mut SceneGraph, &CategoryAssignment) -> ApplyReport,
    {
        let Some(scene) = self.scene.as_mut() else {
            log::debug!("No scene loaded; selection recorded only");
            return ApplyReport::default();
        };
        let assignment = self
            .assignment
            .get_or_insert_with(|| self.classifier.classify(scene));
        let report = apply(&self.mutator, &mut *scene, assignment);

        // A category preset replaces whole slots, wiping direct-part changes on
        // nodes matched both ways; restore them in fixed order.
        for attribute in self.current.direct_attributes() {
            self.mutator.apply_attribute(scene, &attribute, assignment);
        }
        report
    }
}

impl Default for ConfiguratorSession {
    fn default() -> Self {
        Self::new(ConfiguratorConfig::default())
    }
}
