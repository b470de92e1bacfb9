//! Engine configuration
//!
//! Loads [`EngineConfig`] from an optional JSON file. Every field has a
//! default, so a file only needs the keys it changes:
//!
//! ```json
//! { "name": "Amazonia", "max_depth": 2 }
//! ```
//!
//! # Error Handling
//!
//! [`EngineConfig::load_or_default`] never fails: a missing or invalid file
//! is logged and the defaults are used.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Search depth used while the ply number is below `until_step`.
/// A stage without `until_step` applies to the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthStage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_step: Option<u32>,
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name answered to `name?`
    pub name: String,
    /// Where finished game logs are written
    pub record_dir: PathBuf,
    /// Depth by game phase, first matching stage wins
    pub depth_schedule: Vec<DepthStage>,
    /// Hard cap applied after the schedule
    pub max_depth: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "Amazonia".to_string(),
            record_dir: PathBuf::from("records"),
            depth_schedule: vec![
                DepthStage {
                    until_step: Some(23),
                    depth: 2,
                },
                DepthStage {
                    until_step: Some(50),
                    depth: 3,
                },
                DepthStage {
                    until_step: Some(70),
                    depth: 4,
                },
                DepthStage {
                    until_step: None,
                    depth: 5,
                },
            ],
            max_depth: None,
        }
    }
}

impl EngineConfig {
    /// Read a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Read `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                info!("[CONFIG] Loaded settings from {:?}", path);
                config
            }
            Err(e) => {
                warn!("[CONFIG] Failed to load {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Search depth for the position at ply `step`, never below 1
    pub fn depth_for_step(&self, step: u32) -> u32 {
        let scheduled = self
            .depth_schedule
            .iter()
            .find(|stage| stage.until_step.map_or(true, |until| step < until))
            .map_or(1, |stage| stage.depth);
        self.max_depth
            .map_or(scheduled, |cap| scheduled.min(cap))
            .max(1)
    }
}
