//! Invariants every classification and mutation must uphold

use std::collections::HashSet;
use std::sync::Arc;

use crate::classify::{Category, CategoryAssignment, SceneClassifier};
use crate::customize::{CustomizationRequest, MaterialMutator, VisualAttribute};
use crate::foundation::math::{Transform, Vec3};
use crate::material::{Color, InteriorStyle, Material, MaterialBuilder, MaterialRef, Texture, TextureMaps, WheelStyle};
use crate::scene::{Mesh, SceneGraph, SceneNode};
use crate::ConfiguratorSession;

fn add(graph: &mut SceneGraph, name: &str, size: (f32, f32, f32), y: f32, x: f32) {
    let root = graph.root();
    let node = SceneNode::with_mesh(
        name,
        Mesh::cuboid(Vec3::new(size.0, size.1, size.2), vec![Material::default().into_ref()]),
    )
    .at(Transform::from_position(Vec3::new(x, y, 0.0)));
    graph.add_child(root, node).unwrap();
}

/// Mixed scene with named and anonymous parts
fn mixed_scene() -> SceneGraph {
    let mut graph = SceneGraph::new("vehicle");
    add(&mut graph, "body_bumper_cover", (1.8, 0.3, 0.4), 0.3, 0.0);
    add(&mut graph, "Object_12", (2.0, 1.1, 4.2), 0.5, 0.0);
    add(&mut graph, "Object_13", (0.6, 0.6, 0.6), -0.2, 0.8);
    add(&mut graph, "Object_14", (0.4, 0.3, 0.4), 0.4, 0.1);
    add(&mut graph, "tyre_rear", (0.3, 0.7, 0.7), 0.3, -0.8);
    add(&mut graph, "dashboard_metal", (1.2, 0.3, 0.4), 0.8, 0.0);
    add(&mut graph, "Headlight_R", (0.3, 0.2, 0.1), 0.6, -0.6);
    graph
}

fn material_of(graph: &SceneGraph, name: &str) -> MaterialRef {
    let id = graph.find_by_name(name).unwrap();
    graph.node(id).unwrap().mesh.as_ref().unwrap().materials[0].clone()
}

#[test]
fn test_exclusion_precedence() {
    let mut graph = mixed_scene();
    // Shell-sized and body-named, yet block-listed twice over
    add(&mut graph, "body_bumper_trim", (2.0, 1.0, 4.0), 0.5, 0.0);
    let assignment = SceneClassifier::default().classify(&graph);

    let cover = graph.find_by_name("body_bumper_cover").unwrap();
    let trim = graph.find_by_name("body_bumper_trim").unwrap();
    assert!(!assignment.contains(Category::Body, cover));
    assert!(!assignment.contains(Category::Body, trim));
}

#[test]
fn test_body_never_empty_for_anonymous_scene() {
    let mut graph = SceneGraph::new("vehicle");
    // Nothing here satisfies the shell thresholds or any name rule
    add(&mut graph, "Object_1", (0.4, 0.2, 0.9), 3.0, 2.0);
    add(&mut graph, "Object_2", (0.7, 0.2, 0.9), 3.0, 2.0);
    add(&mut graph, "Object_3", (0.1, 0.2, 0.3), 3.0, 2.0);

    let assignment = SceneClassifier::default().classify(&graph);
    assert_eq!(assignment.names(&graph, Category::Body), vec!["Object_2"]);
}

#[test]
fn test_categories_are_exclusive_and_complete() {
    let graph = mixed_scene();
    let assignment = SceneClassifier::default().classify(&graph);

    let mut seen = HashSet::new();
    for (_, nodes) in assignment.iter() {
        for id in nodes {
            assert!(seen.insert(*id), "node {id:?} assigned twice");
        }
    }
    assert_eq!(seen.len(), graph.mesh_nodes().len());
}

#[test]
fn test_mixed_scene_precedence() {
    let graph = mixed_scene();
    let assignment = SceneClassifier::default().classify(&graph);

    assert_eq!(assignment.names(&graph, Category::Body), vec!["Object_12"]);
    assert_eq!(assignment.names(&graph, Category::Wheel), vec!["Object_13", "tyre_rear"]);
    assert_eq!(
        assignment.names(&graph, Category::Interior),
        vec!["Object_14", "dashboard_metal"]
    );
    assert_eq!(
        assignment.names(&graph, Category::Excluded),
        vec!["body_bumper_cover", "Headlight_R"]
    );
}

#[test]
fn test_classification_is_deterministic_and_read_only() {
    let graph = mixed_scene();
    let before: Vec<MaterialRef> = graph
        .mesh_nodes()
        .into_iter()
        .map(|id| graph.node(id).unwrap().mesh.as_ref().unwrap().materials[0].clone())
        .collect();

    let classifier = SceneClassifier::default();
    let first = classifier.classify(&graph);
    let second = classifier.classify(&graph.clone());
    assert_eq!(first, second);

    for (id, material) in graph.mesh_nodes().into_iter().zip(before) {
        let current = &graph.node(id).unwrap().mesh.as_ref().unwrap().materials[0];
        assert!(Arc::ptr_eq(current, &material));
    }
}

#[test]
fn test_repeated_body_paint_is_idempotent() {
    let mut once = mixed_scene();
    let mut twice = mixed_scene();
    let assignment = SceneClassifier::default().classify(&once);
    let red = VisualAttribute::BodyColor(Color::rgb(0.9, 0.05, 0.05));
    let mutator = MaterialMutator::default();

    mutator.apply_attribute(&mut once, &red, &assignment);
    mutator.apply_attribute(&mut twice, &red, &assignment);
    mutator.apply_attribute(&mut twice, &red, &assignment);

    let a = material_of(&once, "Object_12");
    let b = material_of(&twice, "Object_12");
    assert!(a.same_appearance(&b));
    assert_eq!(b.base_color, Color::rgb(0.9, 0.05, 0.05));
}

#[test]
fn test_texture_preserved_by_paint() {
    let diffuse = Texture::new("door_decal.png");
    let mut graph = SceneGraph::new("vehicle");
    let root = graph.root();
    let material = MaterialBuilder::new()
        .base_color_hex(0x202020)
        .maps(TextureMaps { diffuse: Some(diffuse.clone()), ..Default::default() })
        .build_ref();
    graph
        .add_child(root, SceneNode::with_mesh("exterior", Mesh::cuboid(Vec3::new(1.0, 1.0, 1.0), vec![material])))
        .unwrap();

    let assignment = SceneClassifier::default().classify(&graph);
    let yellow = Color::from_u32(0xffd400);
    MaterialMutator::default().apply_attribute(&mut graph, &VisualAttribute::BodyColor(yellow), &assignment);

    let painted = material_of(&graph, "exterior");
    assert!(Arc::ptr_eq(painted.maps.diffuse.as_ref().unwrap(), &diffuse));
    assert_eq!(painted.base_color, yellow);
}

#[test]
fn test_empty_wheel_set_is_noop() {
    let mut graph = SceneGraph::new("vehicle");
    add(&mut graph, "body", (2.0, 1.0, 4.0), 0.5, 0.0);
    let assignment = SceneClassifier::default().classify(&graph);
    assert!(assignment.is_empty(Category::Wheel));
    let before = material_of(&graph, "body");

    let report = MaterialMutator::default().apply_attribute(
        &mut graph,
        &VisualAttribute::WheelStyle(WheelStyle::Sport),
        &assignment,
    );

    assert!(report.is_noop());
    assert!(Arc::ptr_eq(&before, &material_of(&graph, "body")));
}

#[test]
fn test_empty_assignment_never_panics() {
    let mut graph = mixed_scene();
    let assignment = CategoryAssignment::default();
    let mutator = MaterialMutator::default();
    for attribute in [
        VisualAttribute::BodyColor(Color::WHITE),
        VisualAttribute::WheelStyle(WheelStyle::Classic),
        VisualAttribute::InteriorStyle(InteriorStyle::GreyFabric),
    ] {
        assert!(mutator.apply_attribute(&mut graph, &attribute, &assignment).is_noop());
    }
}

#[test]
fn test_incremental_matches_full_reapply() {
    let request = CustomizationRequest {
        body_color: Some(Color::from_u32(0x1f4e79)),
        wheel_style: Some(WheelStyle::Luxury),
        interior_style: Some(InteriorStyle::RedSport),
        headlight_intensity: Some(1.5),
        ..Default::default()
    };

    let mut incremental = ConfiguratorSession::default();
    incremental.load_scene(mixed_scene());
    incremental.apply(&VisualAttribute::BodyColor(Color::WHITE));
    incremental.apply(&VisualAttribute::HeadlightIntensity(4.0));
    for attribute in request.attributes() {
        incremental.apply(&attribute);
    }

    let mut fresh = ConfiguratorSession::default();
    fresh.load_scene(mixed_scene());
    fresh.apply_request(&request);
    fresh.reapply_all();

    let a = incremental.scene().unwrap();
    let b = fresh.scene().unwrap();
    for name in ["Object_12", "Object_13", "tyre_rear", "Object_14", "dashboard_metal", "Headlight_R", "body_bumper_cover"] {
        assert!(
            material_of(a, name).same_appearance(&material_of(b, name)),
            "{name} differs"
        );
    }
}

#[test]
fn test_incremental_matches_full_reapply_on_shared_nodes() {
    // Each of these is both classified and addressed by a direct-part name
    let shared_scene = || {
        let mut graph = SceneGraph::new("vehicle");
        add(&mut graph, "body_shell", (2.0, 1.0, 4.0), 0.5, 0.0);
        add(&mut graph, "InteriorLight_Roof", (0.4, 0.05, 0.4), 1.0, 0.0);
        add(&mut graph, "headlight_rim_L", (0.3, 0.3, 0.3), 0.6, 0.7);
        add(&mut graph, "interior_window_divider", (0.8, 0.6, 0.05), 0.8, 0.0);
        graph
    };

    let mut incremental = ConfiguratorSession::default();
    incremental.load_scene(shared_scene());
    for attribute in [
        VisualAttribute::AmbientLightColor(Color::from_u32(0x00c8ff)),
        VisualAttribute::HeadlightIntensity(2.5),
        VisualAttribute::WindowTint(0.8),
        VisualAttribute::InteriorStyle(InteriorStyle::BeigeLeather),
        VisualAttribute::WheelStyle(WheelStyle::OffRoad),
        VisualAttribute::BodyColor(Color::from_u32(0x2e7d32)),
    ] {
        incremental.apply(&attribute);
    }

    let mut fresh = ConfiguratorSession::default();
    fresh.load_scene(shared_scene());
    fresh.apply_request(&incremental.current_request().clone());
    fresh.reapply_all();

    let a = incremental.scene().unwrap();
    let b = fresh.scene().unwrap();
    for name in ["body_shell", "InteriorLight_Roof", "headlight_rim_L", "interior_window_divider"] {
        assert!(
            material_of(a, name).same_appearance(&material_of(b, name)),
            "{name} differs"
        );
    }

    let light = material_of(a, "InteriorLight_Roof");
    assert_eq!(light.emissive, Color::from_u32(0x00c8ff));
    assert!(material_of(a, "headlight_rim_L").emissive_intensity > 0.0);
    assert!(material_of(a, "interior_window_divider").transparent);
}
