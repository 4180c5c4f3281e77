//! Grid snapshot persistence.
//!
//! The annotation tool writes one JSON snapshot per floor. This module
//! reads them into [`FloorGrid`](crate::grid::FloorGrid)s and can write a
//! floor back out in the same shape.
//!
//! ```rust,ignore
//! use nirgama::io::{load_snapshot, save_snapshot};
//! use std::path::Path;
//!
//! let ground = load_snapshot(0, Path::new("maps/ground_floor_grid.json"))?;
//! save_snapshot(&ground, Path::new("copy.json"))?;
//! ```

pub mod snapshot;

pub use snapshot::{
    load_snapshot, parse_snapshot, read_snapshot, save_snapshot, snapshot_rows, write_snapshot,
};
