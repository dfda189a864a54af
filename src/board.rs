//! The 4×4 tile grid and the slide traversal shared by all directions.

use crate::cells::CellSet;
use crate::common::{BoardError, Direction};
use crate::config::{BOARD_SIZE, MAX_TILE};
use crate::line::{compact, Line};
use core::fmt;

/// Row-major grid of tile values, 0 for an empty cell.
pub type Grid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// Mask over the cells of the board.
pub type CellMask = CellSet<u16, BOARD_SIZE>;

/// Returns `true` for values a cell may hold: 0 or a power of two from 2 up
/// to [`MAX_TILE`].
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Tile grid. Every cell holds 0 or a power of two of at least 2.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "Grid", into = "Grid"))]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from a caller-supplied grid, rejecting invalid tiles.
    pub fn from_grid(grid: Grid) -> Result<Self, BoardError> {
        for (row, cells) in grid.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Board { cells: grid })
    }

    /// Copy of the underlying grid.
    #[inline]
    pub fn grid(&self) -> Grid {
        self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Result<u32, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Place `value` at (row, col), overwriting whatever was there.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        if !is_valid_tile(value) {
            return Err(BoardError::InvalidTile { row, col, value });
        }
        self.cells[row][col] = value;
        Ok(())
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(BoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Cells holding no tile.
    pub fn empty_cells(&self) -> CellMask {
        CellMask::from_fn(|r, c| self.cells[r][c] == 0)
    }

    /// Cells holding a tile.
    pub fn occupied_cells(&self) -> CellMask {
        self.empty_cells().complement()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// Number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.occupied_cells().len()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board, 0 when empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Returns `true` when two horizontally or vertically adjacent cells hold
    /// the same non-zero value.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < BOARD_SIZE && self.cells[r][c + 1] == v {
                    return true;
                }
                if r + 1 < BOARD_SIZE && self.cells[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Read one lane in slide order.
    fn lane(&self, direction: Direction, lane: usize) -> Line {
        core::array::from_fn(|step| {
            let (r, c) = direction.cell(lane, step);
            self.cells[r][c]
        })
    }

    /// Write one lane back through the same traversal it was read with.
    fn write_lane(&mut self, direction: Direction, lane: usize, line: Line) {
        for (step, value) in line.into_iter().enumerate() {
            let (r, c) = direction.cell(lane, step);
            self.cells[r][c] = value;
        }
    }

    /// Slide every lane toward `direction`, returning the score merges earned.
    pub fn slide(&mut self, direction: Direction) -> u64 {
        let mut gained = 0;
        for lane in 0..BOARD_SIZE {
            let compacted = compact(self.lane(direction, lane));
            self.write_lane(direction, lane, compacted.line);
            gained += compacted.gained;
        }
        gained
    }

    /// Board that would result from sliding toward `direction`, with its gain.
    pub fn slid(&self, direction: Direction) -> (Board, u64) {
        let mut next = *self;
        let gained = next.slide(direction);
        (next, gained)
    }

    /// Returns `true` when sliding toward `direction` would change the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.slid(direction).0 != *self
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::from_grid(grid)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board").field("cells", &self.cells).finish()
    }
}

/// Renders the grid with `.` for empty cells, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
