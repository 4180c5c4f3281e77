//! Test utilities for Nirgama pathfinding.
//!
//! Building generators, a brute-force BFS reference and path checks.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use nirgama::{CellLabel, FloorGrid, NavSession, Position};
use rand::prelude::*;

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Session from one ASCII picture per floor, floors numbered from 0.
pub fn session_from_ascii(floors: &[&str]) -> NavSession {
    let grids = floors
        .iter()
        .enumerate()
        .map(|(i, ascii)| FloorGrid::from_ascii(i, ascii).unwrap());
    NavSession::from_floors(grids).unwrap()
}

/// Random building generator parameters.
#[derive(Clone, Copy, Debug)]
pub struct BuildingParams {
    pub floors: usize,
    pub rows: usize,
    pub cols: usize,
    pub wall_probability: f64,
    /// Stair shafts, each a (row, col) carrying a stair on a random subset
    /// of floors
    pub shafts: usize,
    pub exits: usize,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            floors: 3,
            rows: 8,
            cols: 10,
            wall_probability: 0.25,
            shafts: 3,
            exits: 2,
        }
    }
}

/// Seeded random building.
pub fn random_building(seed: u64, params: BuildingParams) -> NavSession {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells =
        vec![vec![vec![CellLabel::Walkable; params.cols]; params.rows]; params.floors];

    for floor in cells.iter_mut() {
        for row in floor.iter_mut() {
            for cell in row.iter_mut() {
                if rng.random_bool(params.wall_probability) {
                    *cell = CellLabel::Wall;
                }
            }
        }
    }

    for _ in 0..params.shafts {
        let (r, c) = (rng.random_range(0..params.rows), rng.random_range(0..params.cols));
        for floor in cells.iter_mut() {
            if rng.random_bool(0.7) {
                floor[r][c] = CellLabel::Stair;
            }
        }
    }

    for _ in 0..params.exits {
        let f = rng.random_range(0..params.floors);
        let (r, c) = (rng.random_range(0..params.rows), rng.random_range(0..params.cols));
        cells[f][r][c] = CellLabel::Exit;
    }

    let grids = cells
        .into_iter()
        .enumerate()
        .map(|(i, rows)| FloorGrid::from_rows(i, rows).unwrap());
    NavSession::from_floors(grids).unwrap()
}

/// Edges out of `p`, found by scanning the floors directly.
fn brute_force_neighbors(session: &NavSession, p: Position) -> Vec<Position> {
    let store = session.store();
    let mut out: Vec<Position> = p
        .neighbors_4()
        .filter(|n| store.label(*n).is_some_and(|l| l != CellLabel::Wall))
        .collect();

    if store.label(p) == Some(CellLabel::Stair) {
        for floor in store.floor_ids() {
            let other = p.on_floor(floor);
            if floor != p.floor && store.label(other) == Some(CellLabel::Stair) {
                out.push(other);
            }
        }
    }
    out
}

/// Breadth-first distance from `start` to the nearest exit, if any.
pub fn bfs_distance(session: &NavSession, start: Position) -> Option<usize> {
    let store = session.store();
    let mut dist: HashMap<Position, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if store.label(p) == Some(CellLabel::Exit) {
            return Some(d);
        }
        for n in brute_force_neighbors(session, p) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Every traversable cell of every floor.
pub fn traversable_cells(session: &NavSession) -> Vec<Position> {
    session
        .store()
        .floors()
        .flat_map(|floor| {
            floor
                .iter()
                .filter(|(_, _, label)| label.is_traversable())
                .map(move |(row, col, _)| Position::new(floor.index(), row, col))
        })
        .collect()
}

/// Panic unless consecutive positions are joined by a lateral or portal
/// edge and the path avoids walls.
pub fn assert_valid_path(session: &NavSession, path: &[Position]) {
    let store = session.store();
    for p in path {
        let label = store.label(*p);
        assert!(
            label.is_some_and(CellLabel::is_traversable),
            "{} is not traversable ({:?})",
            p,
            label
        );
    }
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            brute_force_neighbors(session, a).contains(&b),
            "{} -> {} is not an edge",
            a,
            b
        );
    }
}
