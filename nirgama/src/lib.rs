//! # Nirgama: Multi-Floor Exit Pathfinding
//!
//! Shortest-path search from any walkable cell of a building to its
//! nearest exit. Each floor is a labeled grid; stairs stacked at the same
//! (row, col) join floors with a single unit-cost edge.
//!
//! ## Features
//!
//! - **Multi-exit A\***: the search races toward every exit at once and
//!   returns the first one popped, which is the nearest.
//! - **Stair portals**: a stair links only to stairs at identical (row, col)
//!   on other floors.
//! - **Read-only sessions**: floors and topology are fixed after loading, so
//!   queries can run concurrently without locking.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nirgama::{FloorGrid, NavSession, Position};
//!
//! let session = NavSession::from_floors([
//!     FloorGrid::from_ascii(0, "S.\n..")?,
//!     FloorGrid::from_ascii(1, "S.\n.E")?,
//! ])?;
//!
//! let result = session.find_path(Position::new(0, 0, 1))?;
//! for step in &result.path {
//!     println!("{}", step);
//! }
//! # Ok::<(), nirgama::GridError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Cell labels and positions
//! - [`grid`]: Per-floor grids and the session-wide store
//! - [`io`]: JSON grid snapshots
//! - [`topology`]: Exits, stairs and stair links
//! - [`pathfinding`]: Multi-floor A*
//! - [`config`]: YAML building configuration
//! - [`session`]: Store + topology bundle handed to planners
//!
//! ## Data Flow
//!
//! ```text
//!   snapshot files ──► GridStore ──► TopologyIndex ──┐
//!                      (validate)    (exits, stairs) │
//!                                                    ▼
//!                 start ──────────────────► MultiFloorPlanner ──► PathResult
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod pathfinding;
pub mod session;
pub mod topology;

pub use config::{ConfigLoadError, NirgamaConfig};
pub use crate::core::{CellLabel, FloorId, Position};
pub use error::{GridError, Result};
pub use grid::{FloorGrid, GridStore};
pub use pathfinding::{
    MultiFloorPlanner, PathFailure, PathResult, PlannerConfig, find_path, path_exists,
};
pub use session::{NavSession, SessionError};
pub use topology::{ExitSet, TopologyIndex};
