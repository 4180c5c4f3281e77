//! Building configuration section.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::FloorId;

use super::defaults;

/// Building settings section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSection {
    /// Display name, used only in logs
    #[serde(default = "defaults::building_name")]
    pub name: String,

    /// Floor snapshots, one per floor index
    #[serde(default)]
    pub floors: Vec<FloorEntry>,
}

impl Default for BuildingSection {
    fn default() -> Self {
        Self {
            name: defaults::building_name(),
            floors: Vec::new(),
        }
    }
}

/// One floor of the building
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorEntry {
    /// Floor index
    pub index: FloorId,

    /// Snapshot path, relative to the config file's directory unless absolute
    pub grid: PathBuf,

    /// Human-readable floor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FloorEntry {
    /// Snapshot path with relative paths anchored at `base_dir`
    pub fn resolve_grid(&self, base_dir: &Path) -> PathBuf {
        if self.grid.is_absolute() {
            self.grid.clone()
        } else {
            base_dir.join(&self.grid)
        }
    }

    /// Label, or "floor N" when none was given
    pub fn display_name(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("floor {}", self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_grid() {
        let entry = FloorEntry {
            index: 0,
            grid: PathBuf::from("maps/ground.json"),
            label: None,
        };
        assert_eq!(
            entry.resolve_grid(Path::new("/srv/mall")),
            PathBuf::from("/srv/mall/maps/ground.json")
        );
        assert_eq!(entry.display_name(), "floor 0");

        let absolute = FloorEntry {
            index: 1,
            grid: PathBuf::from("/data/first.json"),
            label: Some("First floor".to_string()),
        };
        assert_eq!(
            absolute.resolve_grid(Path::new("/srv/mall")),
            PathBuf::from("/data/first.json")
        );
        assert_eq!(absolute.display_name(), "First floor");
    }
}
