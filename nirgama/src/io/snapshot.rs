//! Persisted floor-grid snapshots.
//!
//! Format: a JSON array of rows, each row an array of label codes.
//!
//! ```text
//! [[0, 0, 1],
//!  [2, 0, 3]]
//! ```
//!
//! - Outer array = rows, inner array = columns (row-major)
//! - Codes: 0 = walkable, 1 = wall, 2 = stair, 3 = exit
//!
//! This is the annotation tool's output format, one file per floor.

use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::core::{CellLabel, FloorId};
use crate::error::{GridError, Result};
use crate::grid::FloorGrid;

/// Parse a snapshot held in memory
pub fn parse_snapshot(floor: FloorId, source: &str) -> Result<FloorGrid> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| GridError::malformed(floor, format!("invalid JSON: {}", e)))?;
    grid_from_value(floor, &value)
}

/// Read a snapshot from a reader
pub fn read_snapshot<R: Read>(floor: FloorId, reader: R) -> Result<FloorGrid> {
    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            GridError::Io {
                floor,
                source: e.into(),
            }
        } else {
            GridError::malformed(floor, format!("invalid JSON: {}", e))
        }
    })?;
    grid_from_value(floor, &value)
}

/// Load a snapshot file
pub fn load_snapshot(floor: FloorId, path: &Path) -> Result<FloorGrid> {
    let file = std::fs::File::open(path).map_err(|source| GridError::Io { floor, source })?;
    read_snapshot(floor, std::io::BufReader::new(file))
}

/// Write a floor in snapshot form
pub fn write_snapshot<W: Write>(grid: &FloorGrid, writer: &mut W) -> Result<()> {
    let rows = snapshot_rows(grid);
    let floor = grid.index();
    serde_json::to_writer(&mut *writer, &rows).map_err(|e| GridError::Io {
        floor,
        source: e.into(),
    })?;
    writer
        .flush()
        .map_err(|source| GridError::Io { floor, source })
}

/// Save a floor to a snapshot file
pub fn save_snapshot(grid: &FloorGrid, path: &Path) -> Result<()> {
    let floor = grid.index();
    let mut file =
        std::fs::File::create(path).map_err(|source| GridError::Io { floor, source })?;
    write_snapshot(grid, &mut file)
}

/// Label codes as nested rows
pub fn snapshot_rows(grid: &FloorGrid) -> Vec<Vec<u8>> {
    grid.row_slices()
        .map(|row| row.iter().map(|l| l.code()).collect())
        .collect()
}

fn grid_from_value(floor: FloorId, value: &Value) -> Result<FloorGrid> {
    let Value::Array(rows) = value else {
        return Err(GridError::malformed(floor, "expected an array of rows"));
    };

    let mut labels = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let Value::Array(cells) = row else {
            return Err(GridError::malformed(
                floor,
                format!("row {} is not an array", r),
            ));
        };

        let row_labels = cells
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                cell.as_u64().and_then(CellLabel::from_code).ok_or_else(|| {
                    GridError::malformed(
                        floor,
                        format!(
                            "row {}, column {}: {} is not a label code (0, 1, 2, 3)",
                            r, c, cell
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        labels.push(row_labels);
    }

    FloorGrid::from_rows(floor, labels)
}
