//! Multi-floor, multi-exit A* search.
//!
//! Implements A* over the stacked floor graph with support for:
//! - Any number of goal cells (the first exit popped wins)
//! - Stair portal edges between floors
//! - 4-connected unit-cost movement
//! - An optional expansion cap

mod heuristic;
mod planner;
mod types;

pub use planner::MultiFloorPlanner;
pub use types::{PathFailure, PathResult, PlannerConfig};

use crate::core::Position;
use crate::error::Result;
use crate::session::NavSession;

/// Quick path finding with default configuration
pub fn find_path(session: &NavSession, start: Position) -> Result<PathResult> {
    let planner = MultiFloorPlanner::with_defaults(session.store(), session.topology());
    planner.find_path(start)
}

/// Check if any exit is reachable from `start`.
///
/// An invalid start counts as unreachable.
pub fn path_exists(session: &NavSession, start: Position) -> bool {
    matches!(find_path(session, start), Ok(result) if result.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::grid::FloorGrid;
    use crate::topology::ExitSet;

    fn session(floors: &[&str]) -> NavSession {
        let grids = floors
            .iter()
            .enumerate()
            .map(|(i, ascii)| FloorGrid::from_ascii(i, ascii).unwrap());
        NavSession::from_floors(grids).unwrap()
    }

    fn assert_connected(path: &[Position]) {
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let lateral = a.is_adjacent(&b);
            let portal = a.floor != b.floor && a.coord() == b.coord();
            assert!(lateral || portal, "{} -> {} is not an edge", a, b);
        }
    }

    #[test]
    fn test_path_around_center_wall() {
        let session = session(&["...\n.#.\n..E"]);
        let start = Position::new(0, 0, 0);

        let result = find_path(&session, start).unwrap();

        assert!(result.success);
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.cost, 4);
        assert_eq!(result.path[0], start);
        assert_eq!(result.goal, Some(Position::new(0, 2, 2)));
        assert_eq!(*result.path.last().unwrap(), Position::new(0, 2, 2));
        assert!(!result.path.contains(&Position::new(0, 1, 1)));
        assert_connected(&result.path);
    }

    #[test]
    fn test_path_through_stair() {
        // Floor 0 has no exit; floor 1 has one at (1, 1)
        let session = session(&["S.\n..", "S.\n.E"]);
        let start = Position::new(0, 0, 1);

        let result = find_path(&session, start).unwrap();

        assert!(result.success);
        assert_eq!(result.cost, 4);
        assert_eq!(
            result.path,
            vec![
                Position::new(0, 0, 1),
                Position::new(0, 0, 0),
                Position::new(1, 0, 0),
                Position::new(1, 1, 0),
                Position::new(1, 1, 1),
            ]
        );
        assert_eq!(result.floors_visited(), vec![0, 1]);
        assert_eq!(result.portal_transitions(), 1);
    }

    #[test]
    fn test_prefers_nearest_exit() {
        let session = session(&["E.....E\n.......\n......."]);
        let result = find_path(&session, Position::new(0, 1, 5)).unwrap();
        assert_eq!(result.goal, Some(Position::new(0, 0, 6)));
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn test_start_on_exit() {
        let session = session(&["..E"]);
        let start = Position::new(0, 0, 2);

        let result = find_path(&session, start).unwrap();

        assert!(result.success);
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.cost, 0);
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_no_path() {
        let session = session(&["..#E\n..#.\n..#."]);
        let result = find_path(&session, Position::new(0, 0, 0)).unwrap();

        assert!(!result.success);
        assert!(result.is_empty());
        assert_eq!(result.goal, None);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        // Every cell of the left component was expanded once
        assert_eq!(result.nodes_expanded, 6);
        assert!(!path_exists(&session, Position::new(0, 0, 0)));
    }

    #[test]
    fn test_no_exits_at_all() {
        let session = session(&["S..", "S.."]);
        let result = find_path(&session, Position::new(0, 0, 2)).unwrap();
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert_eq!(result.nodes_expanded, 6);
    }

    #[test]
    fn test_start_blocked() {
        let session = session(&[".#E"]);
        let result = find_path(&session, Position::new(0, 0, 1));
        assert!(matches!(result, Err(GridError::InvalidStart { .. })));
        assert!(!path_exists(&session, Position::new(0, 0, 1)));
    }

    #[test]
    fn test_start_out_of_bounds_or_unknown_floor() {
        let session = session(&["..E"]);
        for start in [
            Position::new(0, 1, 0),
            Position::new(0, 0, 3),
            Position::new(4, 0, 0),
        ] {
            assert!(matches!(
                find_path(&session, start),
                Err(GridError::InvalidStart { position, .. }) if position == start
            ));
        }
    }

    #[test]
    fn test_walls_between_stairs_are_not_crossed() {
        // Stairs line up at (2, 0) only; (0, 2) is a stair on floor 0 but a
        // wall on floor 1.
        let session = session(&["..S\n##.\nS..", "E.#\n...\nS.."]);
        let result = find_path(&session, Position::new(0, 0, 0)).unwrap();

        assert!(result.success);
        assert_eq!(result.goal, Some(Position::new(1, 0, 0)));
        // Six steps to (0,2,0), the portal, then two steps up floor 1
        assert_eq!(result.cost, 9);
        assert_connected(&result.path);
    }

    #[test]
    fn test_find_path_to_custom_goals() {
        let session = session(&["....\n....\nE..."]);
        let planner = MultiFloorPlanner::with_defaults(session.store(), session.topology());

        let goals: ExitSet = [Position::new(0, 0, 3)].into_iter().collect();
        let result = planner.find_path_to(Position::new(0, 0, 0), &goals).unwrap();

        assert_eq!(result.goal, Some(Position::new(0, 0, 3)));
        assert_eq!(result.cost, 3);
    }

    #[test]
    fn test_max_expansions() {
        let session = session(&[".........\n.........\n........E"]);
        let config = PlannerConfig::default().with_max_expansions(3);
        let planner = MultiFloorPlanner::new(session.store(), session.topology(), config);

        let result = planner.find_path(Position::new(0, 0, 0)).unwrap();

        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(
            result.failure_reason,
            Some(PathFailure::MaxExpansionsExceeded)
        );
        assert_eq!(result.nodes_expanded, 3);

        // A generous cap changes nothing
        let config = PlannerConfig::default().with_max_expansions(1000);
        let planner = MultiFloorPlanner::new(session.store(), session.topology(), config);
        let result = planner.find_path(Position::new(0, 0, 0)).unwrap();
        assert_eq!(result.cost, 10);
    }

    #[test]
    fn test_deterministic() {
        let session = session(&["S....\n.....\n....E", "S...E\n.....\n....."]);
        let start = Position::new(0, 2, 0);
        let first = find_path(&session, start).unwrap();
        for _ in 0..10 {
            assert_eq!(find_path(&session, start).unwrap(), first);
        }
    }
}
