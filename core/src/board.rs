// core/src/board.rs
//
// Board grid, per-path visited set, and neighbor enumeration.

use std::fmt;

use crate::token::Token;

/// Largest board the visited bitset can track.
pub const MAX_CELLS: usize = 64;

/// A `(row, col)` board coordinate.
pub type Cell = (usize, usize);

/// Reasons a board cannot be built or used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is zero.
    Empty,
    /// More than [`MAX_CELLS`] cells.
    TooLarge { width: usize, height: usize },
    /// Cell data does not fill the declared grid.
    Dimensions {
        width: usize,
        height: usize,
        cells: usize,
    },
    /// Board shape differs from the solver's configured shape.
    Mismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Tile text that is not a letter or "QU".
    InvalidTile(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Empty => write!(f, "board has no cells"),
            BoardError::TooLarge { width, height } => write!(
                f,
                "board {}x{} exceeds {} cells",
                width, height, MAX_CELLS
            ),
            BoardError::Dimensions {
                width,
                height,
                cells,
            } => write!(
                f,
                "expected {} tiles for a {}x{} board, got {}",
                width * height,
                width,
                height,
                cells
            ),
            BoardError::Mismatch { expected, found } => write!(
                f,
                "board is {}x{} but the solver is configured for {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            BoardError::InvalidTile(t) => write!(f, "invalid tile '{}'", t),
        }
    }
}

impl std::error::Error for BoardError {}

/// Check that a `width` x `height` grid is usable.
pub fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::Empty);
    }
    match width.checked_mul(height) {
        Some(n) if n <= MAX_CELLS => Ok(()),
        _ => Err(BoardError::TooLarge { width, height }),
    }
}

/// A fixed grid of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Token>,
}

impl Board {
    /// Build a board from row-major cells.
    pub fn new(width: usize, height: usize, cells: Vec<Token>) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(BoardError::Dimensions {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a board from rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Token>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let total: usize = rows.iter().map(Vec::len).sum();
        if rows.iter().any(|r| r.len() != width) {
            return Err(BoardError::Dimensions {
                width,
                height,
                cells: total,
            });
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    /// Tiles per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a board with no tiles. [`Board::new`] never builds one.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tile at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Token {
        self.cells[self.index(row, col)]
    }

    /// Row-major bit index of a cell.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    /// Iterate over rows of tiles.
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.cells.chunks(self.width)
    }

    /// Every coordinate in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |r| (0..self.width).map(move |c| (r, c)))
    }

    /// The up-to-eight cells touching `(row, col)`, excluding itself.
    ///
    /// Bounds are clamped on all four edges: a corner of a board at least
    /// 2x2 has 3 neighbors, an edge cell of a board at least 3x3 has 5, and
    /// an interior cell has 8.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> {
        let r_lo = row.saturating_sub(1);
        let r_hi = (row + 1).min(self.height - 1);
        let c_lo = col.saturating_sub(1);
        let c_hi = (col + 1).min(self.width - 1);
        (r_lo..=r_hi)
            .flat_map(move |r| (c_lo..=c_hi).map(move |c| (r, c)))
            .filter(move |&cell| cell != (row, col))
    }

    /// True if two distinct cells touch horizontally, vertically or diagonally.
    pub fn adjacent(a: Cell, b: Cell) -> bool {
        a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
    }
}

/// Cells already used by the current path.
///
/// A copyable bitset: extending a path produces a new value and leaves the
/// caller's set untouched, so sibling branches never see each other's tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visited(u64);

impl Visited {
    /// No cells visited.
    pub fn new() -> Self {
        Self(0)
    }

    /// A copy of this set with `index` added.
    #[must_use]
    pub fn with(self, index: usize) -> Self {
        debug_assert!(index < MAX_CELLS);
        Self(self.0 | (1u64 << index))
    }

    /// Whether cell `index` is already on the path.
    pub fn contains(&self, index: usize) -> bool {
        index < MAX_CELLS && self.0 & (1u64 << index) != 0
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True before the first cell is visited.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
