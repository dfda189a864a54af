//! Common types for 2048: directions, move results and errors.

use crate::config::BOARD_SIZE;
use crate::game::GameStatus;

/// Direction tiles travel during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the order the AI breaks ties.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Board cell visited at `step` of `lane` when sliding this way.
    ///
    /// Step 0 is the cell on the edge tiles slide toward, so every lane reads
    /// as a sequence compacting toward index 0.
    #[inline]
    pub const fn cell(self, lane: usize, step: usize) -> (usize, usize) {
        let last = BOARD_SIZE - 1;
        match self {
            Direction::Left => (lane, step),
            Direction::Right => (lane, last - step),
            Direction::Up => (step, lane),
            Direction::Down => (last - step, lane),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

/// Result of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Whether any cell changed.
    pub moved: bool,
    /// Score earned by merges during the slide.
    pub gained: u64,
}

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSpawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column is outside the board.
    IndexOutOfBounds { row: usize, col: usize },
    /// Cell value is neither empty nor a power of two of at least 2.
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidTile { row, col, value } => {
                write!(f, "Cell ({}, {}) holds invalid tile value {}", row, col, value)
            }
        }
    }
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The operation is not allowed in the engine's current status.
    InvalidState { status: GameStatus },
    /// A tile was requested but every cell is occupied.
    NoEmptyCell,
    /// Underlying board error.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidState { status } => {
                write!(f, "Operation not allowed while the game is {}", status)
            }
            GameError::NoEmptyCell => write!(f, "No empty cell left for a new tile"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
