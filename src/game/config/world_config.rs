//! World Configuration
//!
//! Centralized configuration for the block world and its query systems.
//! Replaces the scattered per-system constants of earlier prototypes with
//! one explicitly constructed object that is passed to whoever needs it.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Central configuration for the spatial core.
///
/// `Default` returns the gameplay constants the city scenes were tuned
/// against: 4-unit blocks, a 1024-unit-square map, street level at y=0
/// and a 3x4x3 character.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorldConfig {
    /// Edge length of one block in world units
    pub block_size: f32,
    /// Map bounds (-map_size to +map_size on X and Z)
    pub map_size: f32,
    /// Ground level reported for columns with no placed support
    pub ground_fallback_y: f32,
    /// Character extents (width, height, depth) used by pathfinding to
    /// keep waypoints at standing height
    pub character_size: Vec3,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            block_size: 4.0,
            map_size: 512.0,
            ground_fallback_y: 0.0,
            character_size: Vec3::new(3.0, 4.0, 3.0),
        }
    }
}

impl WorldConfig {
    /// Loads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Saves the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Half the character height; the offset from ground to a standing
    /// agent's center.
    pub fn half_character_height(&self) -> f32 {
        self.character_size.y / 2.0
    }
}

/// Errors that can occur during config load/save.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
