//! Single-floor grid storage.

use serde::{Deserialize, Serialize};

use crate::core::{CellLabel, FloorId, Position};
use crate::error::{GridError, Result};

/// One floor's labels in row-major order.
///
/// The grid uses the snapshot's coordinate system:
/// - (0, 0) is the top-left cell
/// - rows grow downward, columns grow to the right
///
/// Floors are immutable once built; the only constructors validate shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorGrid {
    index: FloorId,
    rows: usize,
    cols: usize,
    cells: Vec<CellLabel>,
}

impl FloorGrid {
    /// Build a floor from row vectors.
    ///
    /// Fails with `MalformedGrid` if there are no rows, no columns, or the
    /// rows have different lengths.
    pub fn from_rows(index: FloorId, rows: Vec<Vec<CellLabel>>) -> Result<Self> {
        let cols = match rows.first() {
            None => return Err(GridError::malformed(index, "grid has no rows")),
            Some(first) if first.is_empty() => {
                return Err(GridError::malformed(index, "grid has no columns"));
            }
            Some(first) => first.len(),
        };

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::malformed(
                    index,
                    format!("row {} has {} columns, expected {}", r, row.len(), cols),
                ));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            index,
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a floor from its debug-character form, one line per row.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// ```text
    /// S..#
    /// .#.E
    /// ```
    pub fn from_ascii(index: FloorId, text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (r, line) in text.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    CellLabel::from_char(ch).ok_or_else(|| {
                        GridError::malformed(
                            index,
                            format!("row {}, column {}: unknown cell character {:?}", r, c, ch),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Self::from_rows(index, rows)
    }

    /// A floor with every cell set to `label`.
    ///
    /// Fails with `MalformedGrid` if either dimension is zero or the cell
    /// count overflows.
    pub fn filled(index: FloorId, rows: usize, cols: usize, label: CellLabel) -> Result<Self> {
        if rows == 0 {
            return Err(GridError::malformed(index, "grid has no rows"));
        }
        if cols == 0 {
            return Err(GridError::malformed(index, "grid has no columns"));
        }
        let count = rows.checked_mul(cols).ok_or_else(|| {
            GridError::malformed(index, format!("{}x{} cells overflow", rows, cols))
        })?;

        Ok(Self {
            index,
            rows,
            cols,
            cells: vec![label; count],
        })
    }

    // === Basic Properties ===

    /// Floor index
    #[inline]
    pub fn index(&self) -> FloorId {
        self.index
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // === Coordinate Conversion ===

    /// Check if (row, col) is within bounds.
    #[inline]
    pub fn is_valid_coord(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Convert (row, col) to flat array index.
    #[inline]
    pub fn coord_to_index(&self, row: usize, col: usize) -> Option<usize> {
        self.is_valid_coord(row, col).then(|| row * self.cols + col)
    }

    // === Cell Access ===

    /// Label at (row, col), or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<CellLabel> {
        self.coord_to_index(row, col).map(|i| self.cells[i])
    }

    /// Bounds-checked lookup. Never clamps.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellLabel> {
        self.get(row, col).ok_or(GridError::OutOfBounds {
            floor: self.index,
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Iterate over all cells as (row, col, label), row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellLabel)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &label)| (i / self.cols, i % self.cols, label))
    }

    /// Row slices, top to bottom
    pub fn row_slices(&self) -> impl Iterator<Item = &[CellLabel]> + '_ {
        self.cells.chunks(self.cols.max(1))
    }

    /// Positions on this floor carrying `label`, row-major.
    pub fn positions_with(&self, label: CellLabel) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |&(_, _, l)| l == label)
            .map(move |(row, col, _)| Position::new(self.index, row, col))
    }

    /// Count cells by label.
    pub fn count_by_label(&self) -> LabelCounts {
        let mut counts = LabelCounts::default();
        for &label in &self.cells {
            match label {
                CellLabel::Walkable => counts.walkable += 1,
                CellLabel::Wall => counts.wall += 1,
                CellLabel::Stair => counts.stair += 1,
                CellLabel::Exit => counts.exit += 1,
            }
        }
        counts
    }

    /// Debug rendering: one character per cell, `*` for cells of `overlay`
    /// that lie on this floor.
    pub fn render_ascii(&self, overlay: &[Position]) -> String {
        let mut chars: Vec<char> = self.cells.iter().map(|l| l.as_char()).collect();
        for p in overlay.iter().filter(|p| p.floor == self.index) {
            if let Some(i) = self.coord_to_index(p.row, p.col) {
                chars[i] = '*';
            }
        }

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in chars.chunks(self.cols.max(1)) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Cell counts by label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    /// Open floor cells
    pub walkable: usize,
    /// Wall cells
    pub wall: usize,
    /// Stair cells
    pub stair: usize,
    /// Exit cells
    pub exit: usize,
}

impl LabelCounts {
    /// Cells a path may enter.
    pub fn traversable(&self) -> usize {
        self.walkable + self.stair + self.exit
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.traversable() + self.wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = FloorGrid::from_rows(
            2,
            vec![
                vec![CellLabel::Walkable, CellLabel::Wall, CellLabel::Exit],
                vec![CellLabel::Stair, CellLabel::Walkable, CellLabel::Walkable],
            ],
        )
        .unwrap();

        assert_eq!(grid.index(), 2);
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.get(0, 2), Some(CellLabel::Exit));
        assert_eq!(grid.get(1, 0), Some(CellLabel::Stair));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = FloorGrid::from_rows(
            0,
            vec![vec![CellLabel::Walkable; 3], vec![CellLabel::Walkable; 2]],
        );
        assert!(matches!(result, Err(GridError::MalformedGrid { floor: 0, .. })));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(FloorGrid::from_rows(0, vec![]).is_err());
        assert!(FloorGrid::from_rows(0, vec![vec![], vec![]]).is_err());
        assert!(FloorGrid::from_ascii(0, "\n  \n").is_err());
    }

    #[test]
    fn test_filled_rejects_degenerate_shapes() {
        for (rows, cols) in [(0, 0), (3, 0), (0, 3), (usize::MAX, 2)] {
            assert!(
                matches!(
                    FloorGrid::filled(4, rows, cols, CellLabel::Walkable),
                    Err(GridError::MalformedGrid { floor: 4, .. })
                ),
                "{}x{}",
                rows,
                cols
            );
        }

        let grid = FloorGrid::filled(4, 2, 5, CellLabel::Wall).unwrap();
        assert_eq!(grid.dimensions(), (2, 5));
        assert_eq!(grid.count_by_label().wall, 10);
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let grid = FloorGrid::filled(1, 3, 4, CellLabel::Walkable).unwrap();
        assert_eq!(grid.cell_at(2, 3).unwrap(), CellLabel::Walkable);

        match grid.cell_at(3, 0) {
            Err(GridError::OutOfBounds {
                floor,
                row,
                col,
                rows,
                cols,
            }) => {
                assert_eq!((floor, row, col, rows, cols), (1, 3, 0, 3, 4));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
        assert!(grid.cell_at(0, 4).is_err());
    }

    #[test]
    fn test_from_ascii() {
        let grid = FloorGrid::from_ascii(
            0,
            "
            S..#
            .#.E
            ",
        )
        .unwrap();

        assert_eq!(grid.dimensions(), (2, 4));
        assert_eq!(grid.get(0, 0), Some(CellLabel::Stair));
        assert_eq!(grid.get(0, 3), Some(CellLabel::Wall));
        assert_eq!(grid.get(1, 3), Some(CellLabel::Exit));
    }

    #[test]
    fn test_from_ascii_unknown_char() {
        let err = FloorGrid::from_ascii(0, "..\n.x").unwrap_err();
        assert!(err.to_string().contains("row 1, column 1"));
    }

    #[test]
    fn test_positions_with() {
        let grid = FloorGrid::from_ascii(3, "E.\n.E").unwrap();
        let exits: Vec<_> = grid.positions_with(CellLabel::Exit).collect();
        assert_eq!(exits, vec![Position::new(3, 0, 0), Position::new(3, 1, 1)]);
    }

    #[test]
    fn test_cell_counts() {
        let grid = FloorGrid::from_ascii(0, "S.#\n.#E\n...").unwrap();
        let counts = grid.count_by_label();
        assert_eq!(counts.walkable, 5);
        assert_eq!(counts.wall, 2);
        assert_eq!(counts.stair, 1);
        assert_eq!(counts.exit, 1);
        assert_eq!(counts.traversable(), 7);
        assert_eq!(counts.total(), 9);
    }

    #[test]
    fn test_render_ascii_overlay() {
        let grid = FloorGrid::from_ascii(0, "..\n.E").unwrap();
        let path = [
            Position::new(0, 0, 0),
            Position::new(0, 0, 1),
            Position::new(1, 0, 0),
        ];
        assert_eq!(grid.render_ascii(&path), "**\n.E\n");
    }

    #[test]
    fn test_iter_row_major() {
        let grid = FloorGrid::from_ascii(0, ".#\nSE").unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells[1], (0, 1, CellLabel::Wall));
        assert_eq!(cells[2], (1, 0, CellLabel::Stair));
        assert_eq!(grid.row_slices().count(), 2);
    }
}
