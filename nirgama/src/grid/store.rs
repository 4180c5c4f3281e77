//! Session-wide collection of floors.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use crate::core::{CellLabel, FloorId, Position};
use crate::error::{GridError, Result};
use crate::io::snapshot;

use super::FloorGrid;

/// One labeled grid per floor, all of identical dimensions.
///
/// The first floor added fixes the session's (rows, cols); every later
/// floor must match. There is no mutation API: floors are only added.
#[derive(Clone, Debug, Default)]
pub struct GridStore {
    floors: BTreeMap<FloorId, FloorGrid>,
    dimensions: Option<(usize, usize)>,
}

impl GridStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-constructed floors.
    pub fn from_floors(floors: impl IntoIterator<Item = FloorGrid>) -> Result<Self> {
        let mut store = Self::new();
        for floor in floors {
            store.insert(floor)?;
        }
        Ok(store)
    }

    /// Parse a persisted snapshot and add it as floor `floor`.
    pub fn load(&mut self, floor: FloorId, source: &str) -> Result<&FloorGrid> {
        let grid = snapshot::parse_snapshot(floor, source)?;
        self.insert(grid)
    }

    /// Read a snapshot file and add it as floor `floor`.
    pub fn load_file(&mut self, floor: FloorId, path: &Path) -> Result<&FloorGrid> {
        debug!("[GridStore] Loading floor {} from {:?}", floor, path);
        let grid = snapshot::load_snapshot(floor, path)?;
        self.insert(grid)
    }

    /// Add a floor, checking index uniqueness and session dimensions.
    pub fn insert(&mut self, grid: FloorGrid) -> Result<&FloorGrid> {
        let index = grid.index();
        if self.floors.contains_key(&index) {
            return Err(GridError::DuplicateFloor(index));
        }

        let found = grid.dimensions();
        match self.dimensions {
            Some(expected) if expected != found => {
                debug!(
                    "[GridStore] Rejecting floor {}: {:?} != session {:?}",
                    index, found, expected
                );
                return Err(GridError::DimensionMismatch {
                    floor: index,
                    expected,
                    found,
                });
            }
            Some(_) => {}
            None => self.dimensions = Some(found),
        }

        let counts = grid.count_by_label();
        info!(
            "[GridStore] Floor {}: {}x{}, {} walls, {} stairs, {} exits",
            index, found.0, found.1, counts.wall, counts.stair, counts.exit
        );

        Ok(self.floors.entry(index).or_insert(grid))
    }

    /// Floor by index
    #[inline]
    pub fn floor(&self, floor: FloorId) -> Option<&FloorGrid> {
        self.floors.get(&floor)
    }

    /// Bounds-checked lookup.
    ///
    /// Fails with `UnknownFloor` for a floor index that was never loaded
    /// and `OutOfBounds` for coordinates outside the floor.
    pub fn cell_at(&self, floor: FloorId, row: usize, col: usize) -> Result<CellLabel> {
        self.floor(floor)
            .ok_or(GridError::UnknownFloor(floor))?
            .cell_at(row, col)
    }

    /// Label at a position, or `None` for unknown floors and out-of-bounds
    /// coordinates.
    #[inline]
    pub fn label(&self, position: Position) -> Option<CellLabel> {
        self.floors
            .get(&position.floor)
            .and_then(|f| f.get(position.row, position.col))
    }

    /// Floors in ascending index order
    pub fn floors(&self) -> impl Iterator<Item = &FloorGrid> + '_ {
        self.floors.values()
    }

    /// Loaded floor indices, ascending
    pub fn floor_ids(&self) -> impl Iterator<Item = FloorId> + '_ {
        self.floors.keys().copied()
    }

    /// Number of loaded floors
    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// True if no floor has been loaded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Session (rows, cols), fixed by the first floor
    #[inline]
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.dimensions
    }

    /// Total number of nodes in the search graph (all cells of all floors)
    pub fn cell_count(&self) -> usize {
        self.floors.values().map(FloorGrid::cell_count).sum()
    }
}
