//! Floor grid storage.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │   Snapshot files (one per floor, JSON)       │
//! │   ground_floor_grid.json  first_floor_...    │
//! └──────────────────────┬───────────────────────┘
//!                        │ io::snapshot
//!                        ▼
//!               ┌─────────────────┐
//!               │    FloorGrid    │  rows x cols labels, row-major
//!               └────────┬────────┘
//!                        │ insert (dimension + duplicate checks)
//!                        ▼
//!               ┌─────────────────┐
//!               │    GridStore    │  floor index -> FloorGrid
//!               └─────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`FloorGrid`]: one floor, bounds-checked lookup, label statistics
//! - [`GridStore`]: all floors of a session, sharing one (rows, cols)
//! - [`LabelCounts`]: per-label cell counts

mod floor;
mod store;

pub use floor::{FloorGrid, LabelCounts};
pub use store::GridStore;
