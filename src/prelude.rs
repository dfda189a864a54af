//! Commonly used types and utilities for ease of import.

pub use crate::{
    classify, AiPlayer, Board, Command, Direction, GameEngine, GameError, GameStatus,
    MoveOutcome, Player, TileSource,
};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, FileStore, MemoryStore, ScoreStore, Session};
