//! Multi-floor A* types.

use serde::Serialize;
use std::cmp::Ordering;

use crate::core::{FloorId, Position};

/// A* open set entry
///
/// Ordered for a min-heap on `f_cost`; equal costs pop in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct OpenEntry {
    pub position: Position,
    pub g_cost: usize, // Cost from start
    pub f_cost: usize, // g_cost + heuristic
    pub counter: u64,  // Insertion sequence, tie-breaker
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Planner configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Stop after expanding this many nodes (`None` = run to completion).
    ///
    /// The search always terminates on its own; this is a caller-level
    /// guard for latency-bound callers.
    pub max_expansions: Option<usize>,
}

impl PlannerConfig {
    /// Cap the number of node expansions
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

/// Result of a multi-floor search
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Start to goal inclusive (empty if no path found)
    pub path: Vec<Position>,
    /// The exit that was reached
    pub goal: Option<Position>,
    /// Path cost in edges (0 when the start is an exit or no path found)
    pub cost: usize,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            goal: None,
            cost: 0,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// True when no path was found
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Floors in the order the path visits them, without repeats of
    /// consecutive entries.
    pub fn floors_visited(&self) -> Vec<FloorId> {
        let mut floors: Vec<FloorId> = self.path.iter().map(|p| p.floor).collect();
        floors.dedup();
        floors
    }

    /// Number of portal (stair-to-stair) edges on the path
    pub fn portal_transitions(&self) -> usize {
        self.path
            .windows(2)
            .filter(|w| w[0].floor != w[1].floor)
            .count()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PathFailure {
    /// No exit is reachable from the start
    NoPath,
    /// The configured expansion cap was hit first
    MaxExpansionsExceeded,
}
