//! Cell labels for annotated floor grids.
//!
//! Every cell of a floor carries exactly one label. Labels are fixed once
//! a floor has been loaded; the annotation tool is the only producer.

/// Semantic cell label - what does this square of floor plan represent?
///
/// The persisted code of each label is its discriminant:
/// - `Walkable` (0) - open floor
/// - `Wall` (1) - blocked, never entered
/// - `Stair` (2) - walkable, and a portal to stairs at the same row/col
/// - `Exit` (3) - walkable goal cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellLabel {
    /// Open floor
    #[default]
    Walkable = 0,

    /// Wall or other obstruction
    Wall = 1,

    /// Staircase connecting floors at the same (row, col)
    Stair = 2,

    /// Building exit (search goal)
    Exit = 3,
}

impl CellLabel {
    /// All labels in persisted-code order.
    pub const ALL: [CellLabel; 4] = [
        CellLabel::Walkable,
        CellLabel::Wall,
        CellLabel::Stair,
        CellLabel::Exit,
    ];

    /// Can a path enter this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        self != CellLabel::Wall
    }

    /// Does this cell link to other floors?
    #[inline]
    pub fn is_portal(self) -> bool {
        self == CellLabel::Stair
    }

    /// Is this cell a goal?
    #[inline]
    pub fn is_exit(self) -> bool {
        self == CellLabel::Exit
    }

    /// Persisted integer code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Convert from a persisted code. Unknown codes are rejected, not
    /// mapped to a default.
    #[inline]
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(CellLabel::Walkable),
            1 => Some(CellLabel::Wall),
            2 => Some(CellLabel::Stair),
            3 => Some(CellLabel::Exit),
            _ => None,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellLabel::Walkable => '.',
            CellLabel::Wall => '#',
            CellLabel::Stair => 'S',
            CellLabel::Exit => 'E',
        }
    }

    /// Inverse of [`CellLabel::as_char`]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellLabel::Walkable),
            '#' => Some(CellLabel::Wall),
            'S' => Some(CellLabel::Stair),
            'E' => Some(CellLabel::Exit),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellLabel::Walkable => "walkable",
            CellLabel::Wall => "wall",
            CellLabel::Stair => "stair",
            CellLabel::Exit => "exit",
        };
        f.write_str(name)
    }
}
