//! Error types for grid loading, lookup and query validation.

use thiserror::Error;

use crate::core::{FloorId, Position};

/// Grid store / pathfinder error type
#[derive(Error, Debug)]
pub enum GridError {
    #[error("malformed grid for floor {floor}: {reason}")]
    MalformedGrid { floor: FloorId, reason: String },

    #[error(
        "floor {floor} is {}x{}, but the session grids are {}x{}",
        .found.0, .found.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        floor: FloorId,
        /// Session (rows, cols)
        expected: (usize, usize),
        /// Offending floor's (rows, cols)
        found: (usize, usize),
    },

    #[error("({row}, {col}) is outside floor {floor} ({rows}x{cols})")]
    OutOfBounds {
        floor: FloorId,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("floor {0} is not loaded")]
    UnknownFloor(FloorId),

    #[error("floor {0} is already loaded")]
    DuplicateFloor(FloorId),

    #[error("invalid start {position}: {reason}")]
    InvalidStart {
        position: Position,
        reason: &'static str,
    },

    #[error("failed to read grid for floor {floor}: {source}")]
    Io {
        floor: FloorId,
        #[source]
        source: std::io::Error,
    },
}

impl GridError {
    pub(crate) fn malformed(floor: FloorId, reason: impl Into<String>) -> Self {
        GridError::MalformedGrid {
            floor,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
