//! Exits, stairs and stair-to-stair floor links.
//!
//! Pure derivations over a [`GridStore`]. The index is built once per
//! session and never changes afterwards.
//!
//! A stair at (f, r, c) links to every stair at the same (r, c) on every
//! other floor, and to nothing else. There is no "nearest stair" lookup.

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use serde::Serialize;

use crate::core::{CellLabel, FloorId, Position};
use crate::grid::GridStore;

/// The multi-target goal set of a search
pub type ExitSet = HashSet<Position>;

/// Collect every Exit-labeled cell on every floor.
pub fn exits(store: &GridStore) -> ExitSet {
    store
        .floors()
        .flat_map(|floor| floor.positions_with(CellLabel::Exit))
        .collect()
}

/// Collect every Stair-labeled cell, ordered by (floor, row, col).
pub fn stairs(store: &GridStore) -> Vec<Position> {
    // Floors iterate in ascending index order and cells row-major, so the
    // result is already sorted.
    store
        .floors()
        .flat_map(|floor| floor.positions_with(CellLabel::Stair))
        .collect()
}

/// Cached exits and stair links for one session
#[derive(Clone, Debug, Default)]
pub struct TopologyIndex {
    exits: ExitSet,
    stairs: Vec<Position>,
    /// (row, col) -> floors with a stair there, ascending
    stair_links: HashMap<(usize, usize), Vec<FloorId>>,
}

impl TopologyIndex {
    /// Derive the index from a store
    pub fn build(store: &GridStore) -> Self {
        let exits = exits(store);
        let stairs = stairs(store);

        let mut stair_links: HashMap<(usize, usize), Vec<FloorId>> = HashMap::new();
        for stair in &stairs {
            stair_links
                .entry(stair.coord())
                .or_default()
                .push(stair.floor);
        }

        let index = Self {
            exits,
            stairs,
            stair_links,
        };

        let stats = index.stats();
        info!(
            "[Topology] {} exits, {} stairs, {} portal edges",
            stats.exit_count, stats.stair_count, stats.portal_edge_count
        );
        for floor in store.floor_ids() {
            if index.exit_count_on(floor) == 0 {
                debug!(
                    "[Topology] Floor {} has no exit; paths must leave it by stair",
                    floor
                );
            }
        }

        index
    }

    /// All exits, across all floors
    #[inline]
    pub fn exits(&self) -> &ExitSet {
        &self.exits
    }

    /// All stairs, ordered by (floor, row, col)
    #[inline]
    pub fn stairs(&self) -> &[Position] {
        &self.stairs
    }

    /// Is `position` an exit?
    #[inline]
    pub fn is_exit(&self, position: &Position) -> bool {
        self.exits.contains(position)
    }

    /// Number of exits on one floor
    pub fn exit_count_on(&self, floor: FloorId) -> usize {
        self.exits.iter().filter(|e| e.floor == floor).count()
    }

    /// Stairs on other floors at the same (row, col), ascending floor order.
    ///
    /// The caller is responsible for only asking from a stair cell; a
    /// non-stair cell sharing (row, col) with stairs elsewhere still gets
    /// their positions back.
    pub fn portal_targets(&self, stair: Position) -> impl Iterator<Item = Position> + '_ {
        self.stair_links
            .get(&stair.coord())
            .into_iter()
            .flatten()
            .filter(move |&&floor| floor != stair.floor)
            .map(move |&floor| stair.on_floor(floor))
    }

    /// Summary counts
    pub fn stats(&self) -> TopologyStats {
        let portal_edge_count = self
            .stair_links
            .values()
            .map(|floors| floors.len() * floors.len().saturating_sub(1) / 2)
            .sum();

        TopologyStats {
            exit_count: self.exits.len(),
            stair_count: self.stairs.len(),
            portal_edge_count,
        }
    }
}

/// Topology summary counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TopologyStats {
    /// Exit cells across all floors
    pub exit_count: usize,
    /// Stair cells across all floors
    pub stair_count: usize,
    /// Undirected portal edges
    pub portal_edge_count: usize,
}
