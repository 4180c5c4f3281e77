//! Main NirgamaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::PlannerConfig;

use super::building::BuildingSection;
use super::error::ConfigLoadError;
use super::planner::PlannerSection;

/// Default config path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full Nirgama configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NirgamaConfig {
    /// Building layout
    #[serde(default)]
    pub building: BuildingSection,

    /// Search limits
    #[serde(default)]
    pub planner: PlannerSection,
}

impl NirgamaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigLoadError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to runtime PlannerConfig
    pub fn to_planner_config(&self) -> PlannerConfig {
        self.planner.to_planner_config()
    }
}
