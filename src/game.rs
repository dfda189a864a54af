use crate::{
    board::{Board, Grid},
    common::{BoardError, Direction, GameError, MoveOutcome, TileSpawn},
    config::{SPAWN_TWO_PROBABILITY, START_TILES, WIN_TILE},
    source::{RngSource, TileSource},
};
use rand::{rngs::SmallRng, SeedableRng};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// No game started yet.
    Idle,
    Playing,
    Won,
    Lost,
}

impl core::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.pad(name)
    }
}

/// Classify a board.
///
/// A winning tile takes precedence over everything else, including a full
/// board with no merges left. Otherwise the game continues while a cell is
/// empty or two adjacent cells can merge.
pub fn classify(board: &Board) -> GameStatus {
    if board.max_tile() >= WIN_TILE {
        GameStatus::Won
    } else if !board.is_full() || board.has_adjacent_pair() {
        GameStatus::Playing
    } else {
        GameStatus::Lost
    }
}

/// Serializable snapshot of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub score: u64,
    pub status: GameStatus,
}

/// Core game logic: the board, the running score and the game status.
///
/// Tiles are spawned from the injected [`TileSource`], so a game is fully
/// reproducible for a given source.
pub struct GameEngine<S> {
    board: Board,
    score: u64,
    status: GameStatus,
    source: S,
}

impl<S: TileSource> GameEngine<S> {
    /// Create an idle engine with an empty board.
    pub fn new(source: S) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            status: GameStatus::Idle,
            source,
        }
    }

    /// Create an idle engine over a caller-supplied grid.
    pub fn with_grid(grid: Grid, source: S) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::from_grid(grid)?,
            score: 0,
            status: GameStatus::Idle,
            source,
        })
    }

    /// Restore an engine from a previously saved state. Idle snapshots stay
    /// idle; any other status is re-derived from the board.
    pub fn from_state(state: GameState, source: S) -> Self {
        let status = match state.status {
            GameStatus::Idle => GameStatus::Idle,
            _ => classify(&state.board),
        };
        Self {
            board: state.board,
            score: state.score,
            status,
            source,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            score: self.score,
            status: self.status,
        }
    }

    /// Copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Copy of the board as a plain grid.
    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Clear the board and score, then place the opening tiles.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.board = Board::new();
        self.score = 0;
        self.status = GameStatus::Playing;
        for _ in 0..START_TILES {
            self.add_random_tile()?;
        }
        log::debug!("game started:\n{}", self.board);
        Ok(())
    }

    /// Start over. Identical to [`GameEngine::start`].
    pub fn restart(&mut self) -> Result<(), GameError> {
        log::debug!("restarting game at score {}", self.score);
        self.start()
    }

    /// Slide all tiles toward `direction`.
    ///
    /// Does not spawn a tile; callers add one after a slide that moved.
    pub fn slide(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::InvalidState {
                status: self.status,
            });
        }
        let before = self.board;
        let gained = self.board.slide(direction);
        self.score = self.score.saturating_add(gained);
        self.status = classify(&self.board);

        let outcome = MoveOutcome {
            moved: self.board != before,
            gained,
        };
        log::trace!(
            "slide {}: moved={} gained={} status={}",
            direction,
            outcome.moved,
            outcome.gained,
            self.status
        );
        Ok(outcome)
    }

    pub fn slide_left(&mut self) -> Result<bool, GameError> {
        self.slide(Direction::Left).map(|o| o.moved)
    }

    pub fn slide_right(&mut self) -> Result<bool, GameError> {
        self.slide(Direction::Right).map(|o| o.moved)
    }

    pub fn slide_up(&mut self) -> Result<bool, GameError> {
        self.slide(Direction::Up).map(|o| o.moved)
    }

    pub fn slide_down(&mut self) -> Result<bool, GameError> {
        self.slide(Direction::Down).map(|o| o.moved)
    }

    /// Place a 2 (or, less often, a 4) on a uniformly chosen empty cell.
    ///
    /// Fails with [`GameError::InvalidState`] before the game has started and
    /// with [`GameError::NoEmptyCell`] on a full board.
    pub fn add_random_tile(&mut self) -> Result<TileSpawn, GameError> {
        if self.status == GameStatus::Idle {
            return Err(GameError::InvalidState {
                status: self.status,
            });
        }
        let empty = self.board.empty_cells();
        let count = empty.len();
        if count == 0 {
            return Err(GameError::NoEmptyCell);
        }

        let pick = ((self.source.uniform() * count as f64) as usize).min(count - 1);
        let (row, col) = empty.nth(pick).ok_or(GameError::NoEmptyCell)?;
        let value = if self.source.uniform() < SPAWN_TWO_PROBABILITY {
            2
        } else {
            4
        };
        self.board.set(row, col, value)?;
        self.status = classify(&self.board);

        log::trace!("spawned {} at ({}, {})", value, row, col);
        Ok(TileSpawn { row, col, value })
    }
}

impl GameEngine<RngSource<SmallRng>> {
    /// Idle engine drawing tiles from a `SmallRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::new(SmallRng::seed_from_u64(seed)))
    }

    /// Idle engine drawing tiles from a `SmallRng` seeded from the OS.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(RngSource::new(SmallRng::from_rng(&mut seed_rng)))
    }
}
