//! Configuration loading for Nirgama.
//!
//! Loads the building layout and planner limits from a single YAML file
//! with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nirgama::config::NirgamaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = NirgamaConfig::load_default()?;
//!
//! // Convert to runtime planner config
//! let planner_config = config.to_planner_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`BuildingSection`] | Building name, floor index to snapshot path |
//! | [`PlannerSection`] | Expansion cap |
//!
//! ## Example YAML
//!
//! ```yaml
//! building:
//!   name: mall
//!   floors:
//!     - index: 0
//!       grid: maps/ground_floor_grid.json   # relative to this file
//!       label: Ground floor
//!     - index: 1
//!       grid: maps/first_floor_grid.json
//! planner:
//!   max_expansions: 0                       # 0 = unlimited
//! ```

mod building;
mod defaults;
mod error;
mod nirgama;
mod planner;

// Re-export main types
pub use error::ConfigLoadError;
pub use nirgama::{DEFAULT_CONFIG_PATH, NirgamaConfig};

// Re-export section types
pub use building::{BuildingSection, FloorEntry};
pub use planner::PlannerSection;
