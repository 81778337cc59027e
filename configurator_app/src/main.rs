//! Configurator demo application
//! 
//! Loads a vehicle scene description, classifies its parts, applies a
//! customization request and logs the resulting material state.
//!
//! Usage: `configurator_demo <scene.ron> [request.toml|request.ron] [config.toml|config.ron]`

use std::path::{Path, PathBuf};

use car_configurator::foundation::logging;
use car_configurator::prelude::*;
use thiserror::Error;

/// Demo failures
#[derive(Error, Debug)]
enum DemoError {
    #[error("Usage: configurator_demo <scene.ron> [request] [config]")]
    Usage,
    
    #[error(transparent)]
    Configurator(#[from] ConfiguratorError),
}

struct DemoArgs {
    scene: PathBuf,
    request: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl DemoArgs {
    fn from_env() -> Result<Self, DemoError> {
        let mut args = std::env::args().skip(1).map(PathBuf::from);
        let scene = args.next().ok_or(DemoError::Usage)?;
        Ok(Self {
            scene,
            request: args.next(),
            config: args.next(),
        })
    }
}

fn load_request(path: &Path) -> Result<CustomizationRequest, ConfiguratorError> {
    Ok(CustomizationRequest::load_from_file(path)?)
}

fn run(args: &DemoArgs) -> Result<(), DemoError> {
    let config = match &args.config {
        Some(path) => ConfiguratorConfig::load_from_file(path).map_err(ConfiguratorError::from)?,
        None => ConfiguratorConfig::default(),
    };
    
    let scene = RonSceneLoader::new()
        .load(&args.scene)
        .map_err(ConfiguratorError::from)?;
    
    let mut session = ConfiguratorSession::new(config);
    session.load_scene(scene);
    
    let assignment = session.assignment().cloned();
    if let (Some(graph), Some(assignment)) = (session.scene(), assignment) {
        for (category, _) in assignment.iter() {
            log::info!(
                "{:>9}: {}",
                category.as_str(),
                assignment.names(graph, category).join(", ")
            );
        }
    }
    
    let request = match &args.request {
        Some(path) => load_request(path)?,
        None => CustomizationRequest {
            body_color: Some(Color::from_hex("#b3001b").map_err(ConfiguratorError::from)?),
            wheel_style: Some(WheelStyle::Sport),
            interior_style: Some(InteriorStyle::BlackLeather),
            ..Default::default()
        },
    };
    
    let report = session.apply_request(&request);
    log::info!(
        "Applied request: {} nodes touched, {} slots replaced, {} slots updated",
        report.nodes,
        report.replaced,
        report.updated
    );
    
    if let Some(graph) = session.scene() {
        for id in graph.mesh_nodes() {
            let Some(node) = graph.node(id) else { continue };
            let Some(mesh) = node.mesh.as_ref() else { continue };
            for (slot, material) in mesh.materials.iter().enumerate() {
                log::info!(
                    "{}[{}]: color {} metalness {:.2} roughness {:.2} opacity {:.2} emissive {} x{:.1}",
                    node.name,
                    slot,
                    material.base_color,
                    material.metalness,
                    material.roughness,
                    material.opacity,
                    material.emissive,
                    material.emissive_intensity
                );
            }
        }
    }
    
    Ok(())
}

fn main() {
    logging::init_with_level(logging::LevelFilter::Info);
    
    log::info!("Starting configurator demo");
    
    let result = DemoArgs::from_env().and_then(|args| run(&args));
    if let Err(e) = result {
        log::error!("Configurator demo failed: {}", e);
        std::process::exit(1);
    }
    
    log::info!("Configurator demo finished");
}
