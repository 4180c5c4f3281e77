//! Planner configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::PlannerConfig;

use super::defaults;

/// Planner settings section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Expansion cap per query (0 = unlimited)
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            max_expansions: defaults::max_expansions(),
        }
    }
}

impl PlannerSection {
    /// Convert to runtime PlannerConfig
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            max_expansions: (self.max_expansions > 0).then_some(self.max_expansions),
        }
    }
}
