/// Side length of the square board.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A tile of at least this value wins the game.
pub const WIN_TILE: u32 = 2048;

/// Largest tile a cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Tiles placed on an empty board by `start`/`restart`.
pub const START_TILES: usize = 2;
