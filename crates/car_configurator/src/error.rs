//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::material::{ColorParseError, PresetParseError};
use crate::scene::SceneLoadError;

/// Any failure surfaced by the configurator's fallible entry points
///
/// Classification and material mutation never fail; only loading inputs
/// (configuration, scenes, user-supplied colors and preset ids) can.
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    
    /// Scene source could not be turned into a graph
    #[error("Scene loading error: {0}")]
    SceneLoad(#[from] SceneLoadError),
    
    /// Invalid color string
    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),
    
    /// Unknown preset identifier
    #[error("Preset error: {0}")]
    Preset(#[from] PresetParseError),
}
