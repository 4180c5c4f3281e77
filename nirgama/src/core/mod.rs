//! Core types for the nirgama floor-grid library.
//!
//! - [`CellLabel`]: what a grid cell represents (walkable, wall, stair, exit)
//! - [`Position`]: a (floor, row, col) node of the search graph

mod cell;
mod position;

pub use cell::CellLabel;
pub use position::{FloorId, ParsePositionError, Position};
