#![cfg(feature = "std")]

use crate::{
    game::{GameEngine, GameStatus},
    player::{Command, Player},
    source::TileSource,
    store::{record_best, ScoreStore},
};

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameReport {
    pub status: GameStatus,
    pub score: u64,
    pub max_tile: u32,
    /// Slides that changed the board.
    pub moves: u32,
}

/// Drives a game: feeds player commands to the engine, spawns a tile after
/// every slide that moved, and keeps the best score up to date.
pub struct Session<S, P, St> {
    engine: GameEngine<S>,
    player: P,
    store: St,
}

impl<S, P, St> Session<S, P, St>
where
    S: TileSource,
    P: Player,
    St: ScoreStore,
{
    pub fn new(engine: GameEngine<S>, player: P, store: St) -> Self {
        Self {
            engine,
            player,
            store,
        }
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn into_parts(self) -> (GameEngine<S>, P, St) {
        (self.engine, self.player, self.store)
    }

    /// Play until the game is won or lost, or the player quits.
    ///
    /// An idle engine is started first. A finished engine is restarted, so
    /// calling `play` again begins a new game.
    pub fn play(&mut self) -> anyhow::Result<GameReport> {
        match self.engine.status() {
            GameStatus::Playing => {}
            GameStatus::Idle => self.engine.start()?,
            GameStatus::Won | GameStatus::Lost => self.engine.restart()?,
        }

        let mut moves = 0;
        while self.engine.status() == GameStatus::Playing {
            let board = self.engine.board();
            match self.player.next_command(&board, self.engine.score()) {
                Command::Quit => break,
                Command::Restart => {
                    self.engine.restart()?;
                    moves = 0;
                }
                Command::Slide(direction) => {
                    let outcome = self.engine.slide(direction)?;
                    self.player.handle_outcome(direction, outcome);
                    if outcome.moved {
                        moves += 1;
                        self.engine.add_random_tile()?;
                        record_best(&mut self.store, self.engine.score())?;
                    }
                }
            }
        }

        let board = self.engine.board();
        let report = GameReport {
            status: self.engine.status(),
            score: self.engine.score(),
            max_tile: board.max_tile(),
            moves,
        };
        self.player
            .handle_game_over(&board, report.status, report.score);
        log::info!(
            "game over: status={} score={} max_tile={} moves={}",
            report.status,
            report.score,
            report.max_tile,
            report.moves
        );
        Ok(report)
    }
}
