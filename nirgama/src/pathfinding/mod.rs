//! Path planning over the multi-floor graph.
//!
//! Provides:
//! - [`astar`]: multi-floor, multi-exit A* planner

pub mod astar;

pub use astar::{
    MultiFloorPlanner, PathFailure, PathResult, PlannerConfig, find_path, path_exists,
};
