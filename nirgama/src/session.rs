//! Read-only navigation session.
//!
//! Bundles the loaded floors with the topology derived from them. A session
//! is built once and then lent to planners; nothing in it changes after
//! construction, so any number of queries may borrow it at once.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::config::{ConfigLoadError, NirgamaConfig};
use crate::core::Position;
use crate::error::GridError;
use crate::grid::{FloorGrid, GridStore};
use crate::pathfinding::{MultiFloorPlanner, PathResult, PlannerConfig};
use crate::topology::{ExitSet, TopologyIndex};

/// Error building a session from a configuration file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigLoadError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Loaded floors plus their exits and stair links
#[derive(Clone, Debug, Default)]
pub struct NavSession {
    store: GridStore,
    topology: TopologyIndex,
}

impl NavSession {
    /// Take ownership of a populated store and derive its topology.
    pub fn new(store: GridStore) -> Self {
        let topology = TopologyIndex::build(&store);
        Self { store, topology }
    }

    /// Build a session from in-memory floors
    pub fn from_floors(floors: impl IntoIterator<Item = FloorGrid>) -> Result<Self, GridError> {
        Ok(Self::new(GridStore::from_floors(floors)?))
    }

    /// Load every configured floor, resolving relative snapshot paths
    /// against `base_dir`.
    pub fn from_config(config: &NirgamaConfig, base_dir: &Path) -> Result<Self, GridError> {
        let mut store = GridStore::new();
        for entry in &config.building.floors {
            let path = entry.resolve_grid(base_dir);
            let floor = store.load_file(entry.index, &path)?;
            info!(
                "[Session] {} ({}): {} traversable cells",
                entry.display_name(),
                path.display(),
                floor.count_by_label().traversable()
            );
        }

        let session = Self::new(store);
        info!(
            "[Session] Building '{}' ready: {} floors, {} exits",
            config.building.name,
            session.store.floor_count(),
            session.topology.exits().len()
        );
        Ok(session)
    }

    /// Load a configuration file and every floor it names.
    pub fn load(config_path: &Path) -> Result<Self, SessionError> {
        let config = NirgamaConfig::load(config_path)?;
        let base_dir = config_path.parent().unwrap_or(Path::new(""));
        Ok(Self::from_config(&config, base_dir)?)
    }

    /// Loaded floors
    #[inline]
    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// Derived exits and stair links
    #[inline]
    pub fn topology(&self) -> &TopologyIndex {
        &self.topology
    }

    /// Every exit on every floor
    #[inline]
    pub fn exits(&self) -> &ExitSet {
        self.topology.exits()
    }

    /// Planner borrowing this session
    pub fn planner(&self, config: PlannerConfig) -> MultiFloorPlanner<'_> {
        MultiFloorPlanner::new(&self.store, &self.topology, config)
    }

    /// Shortest path from `start` to the nearest exit, with default limits.
    pub fn find_path(&self, start: Position) -> Result<PathResult, GridError> {
        self.planner(PlannerConfig::default()).find_path(start)
    }
}
