//! Multi-floor A* planner implementation.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap};

use crate::core::{CellLabel, Position};
use crate::error::{GridError, Result};
use crate::grid::GridStore;
use crate::topology::{ExitSet, TopologyIndex};

use super::heuristic::ExitHeuristic;
use super::types::{OpenEntry, PathFailure, PathResult, PlannerConfig};

/// A* pathfinder over all floors of a session.
///
/// Borrows the store and topology immutably; every query owns its own
/// open set, g-scores and came-from map, so planners over the same
/// session can run on several threads at once.
pub struct MultiFloorPlanner<'a> {
    store: &'a GridStore,
    topology: &'a TopologyIndex,
    config: PlannerConfig,
}

impl<'a> MultiFloorPlanner<'a> {
    /// Create a new planner
    pub fn new(store: &'a GridStore, topology: &'a TopologyIndex, config: PlannerConfig) -> Self {
        Self {
            store,
            topology,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(store: &'a GridStore, topology: &'a TopologyIndex) -> Self {
        Self::new(store, topology, PlannerConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Check that `start` names a loaded, in-bounds, non-wall cell.
    pub fn validate_start(&self, start: Position) -> Result<CellLabel> {
        let reject = |reason| GridError::InvalidStart {
            position: start,
            reason,
        };

        let floor = self
            .store
            .floor(start.floor)
            .ok_or_else(|| reject("floor is not loaded"))?;
        let label = floor
            .get(start.row, start.col)
            .ok_or_else(|| reject("outside the floor grid"))?;
        if !label.is_traversable() {
            return Err(reject("cell is a wall"));
        }
        Ok(label)
    }

    /// Shortest path from `start` to the nearest exit of the session.
    pub fn find_path(&self, start: Position) -> Result<PathResult> {
        self.find_path_to(start, self.topology.exits())
    }

    /// Shortest path from `start` to the nearest member of `goals`.
    ///
    /// An unreachable goal set is not an error: the result is empty with
    /// `PathFailure::NoPath`.
    pub fn find_path_to(&self, start: Position, goals: &ExitSet) -> Result<PathResult> {
        trace!(
            "[MultiFloorAStar] find_path: start={} goals={}",
            start,
            goals.len()
        );

        if let Err(e) = self.validate_start(start) {
            debug!("[MultiFloorAStar] FAILED: {}", e);
            return Err(e);
        }

        let heuristic = ExitHeuristic::new(goals);

        // A* search
        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut g_scores: HashMap<Position, usize> = HashMap::new();
        let mut counter: u64 = 0;

        open_set.push(OpenEntry {
            position: start,
            g_cost: 0,
            f_cost: heuristic.estimate(start),
            counter,
        });
        g_scores.insert(start, 0);

        let mut nodes_expanded = 0;
        let mut neighbors = Vec::with_capacity(8);

        while let Some(current) = open_set.pop() {
            // Stale entry: a cheaper route to this node was recorded after
            // it was queued.
            if g_scores
                .get(&current.position)
                .is_some_and(|&g| current.g_cost > g)
            {
                continue;
            }

            // Goal reached
            if goals.contains(&current.position) {
                return Ok(self.reconstruct_path(
                    &came_from,
                    current.position,
                    current.g_cost,
                    nodes_expanded,
                ));
            }

            if self
                .config
                .max_expansions
                .is_some_and(|max| nodes_expanded >= max)
            {
                debug!(
                    "[MultiFloorAStar] FAILED: MaxExpansionsExceeded ({} nodes)",
                    nodes_expanded
                );
                return Ok(PathResult::failed(
                    PathFailure::MaxExpansionsExceeded,
                    nodes_expanded,
                ));
            }

            nodes_expanded += 1;
            self.collect_neighbors(current.position, &mut neighbors);

            let tentative_g = current.g_cost + 1;
            for &neighbor in &neighbors {
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(usize::MAX);
                if tentative_g < known_g {
                    came_from.insert(neighbor, current.position);
                    g_scores.insert(neighbor, tentative_g);

                    counter += 1;
                    open_set.push(OpenEntry {
                        position: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + heuristic.estimate(neighbor),
                        counter,
                    });
                }
            }
        }

        debug!(
            "[MultiFloorAStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Ok(PathResult::failed(PathFailure::NoPath, nodes_expanded))
    }

    /// Lateral neighbors (up, down, left, right) that are in bounds and not
    /// walls, then portal targets in ascending floor order if `p` is a stair.
    fn collect_neighbors(&self, p: Position, out: &mut Vec<Position>) {
        out.clear();
        let Some(floor) = self.store.floor(p.floor) else {
            return;
        };

        out.extend(p.neighbors_4().filter(|n| {
            floor
                .get(n.row, n.col)
                .is_some_and(CellLabel::is_traversable)
        }));

        if floor.get(p.row, p.col) == Some(CellLabel::Stair) {
            out.extend(self.topology.portal_targets(p));
        }
    }

    /// Reconstruct the path from the came_from map
    fn reconstruct_path(
        &self,
        came_from: &HashMap<Position, Position>,
        goal: Position,
        cost: usize,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = vec![goal];
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        trace!(
            "[MultiFloorAStar] SUCCESS: goal={} cost={} nodes_expanded={}",
            goal,
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            goal: Some(goal),
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
