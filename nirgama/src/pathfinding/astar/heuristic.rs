//! Nearest-exit heuristic for the multi-floor search.
//!
//! The primary term is the Manhattan distance to the nearest goal on the
//! same floor. Two adjustments apply:
//!
//! - A floor without any goal estimates 0. Paths through such a floor must
//!   still reach a stair, so it cannot be treated as infinitely far.
//! - On a floor with goals, the estimate is clamped by the cheapest
//!   cross-floor bound: Manhattan distance to a goal on another floor plus
//!   one portal edge. Without it, a far same-floor exit would overestimate
//!   a route that takes the stairs to a nearby exit.
//!
//! Both keep the estimate admissible. The 0 fallback makes it inconsistent
//! across portals into goal-less floors, which the planner handles by
//! re-opening nodes on any strictly cheaper g-score.

use std::collections::BTreeMap;

use crate::core::{FloorId, Position};
use crate::topology::ExitSet;

/// Cost of the single portal edge any cross-floor route must take
const PORTAL_COST: usize = 1;

/// Goals grouped by floor
#[derive(Clone, Debug, Default)]
pub(super) struct ExitHeuristic {
    by_floor: BTreeMap<FloorId, Vec<(usize, usize)>>,
}

impl ExitHeuristic {
    pub fn new(goals: &ExitSet) -> Self {
        let mut by_floor: BTreeMap<FloorId, Vec<(usize, usize)>> = BTreeMap::new();
        for goal in goals {
            by_floor.entry(goal.floor).or_default().push(goal.coord());
        }
        // HashSet iteration order is arbitrary
        for coords in by_floor.values_mut() {
            coords.sort_unstable();
        }
        Self { by_floor }
    }

    /// Lower bound on the edge count from `p` to the nearest goal.
    pub fn estimate(&self, p: Position) -> usize {
        let Some(same_floor) = self.nearest_on_floor(p.floor, p) else {
            return 0;
        };

        let cross_floor = self
            .by_floor
            .keys()
            .filter(|&&floor| floor != p.floor)
            .filter_map(|&floor| self.nearest_on_floor(floor, p))
            .min()
            .map(|d| d + PORTAL_COST);

        cross_floor.map_or(same_floor, |d| same_floor.min(d))
    }

    fn nearest_on_floor(&self, floor: FloorId, p: Position) -> Option<usize> {
        self.by_floor.get(&floor).and_then(|coords| {
            coords
                .iter()
                .map(|&(row, col)| p.row.abs_diff(row) + p.col.abs_diff(col))
                .min()
        })
    }
}
