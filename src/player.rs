use crate::{
    board::Board,
    common::{Direction, MoveOutcome},
    game::GameStatus,
};

/// What a player wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Slide(Direction),
    Restart,
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next command given the current board and score.
    fn next_command(&mut self, board: &Board, score: u64) -> Command;

    /// Inform the player of the result of its last slide.
    fn handle_outcome(&mut self, _direction: Direction, _outcome: MoveOutcome) {}

    /// Inform the player that the game has ended.
    fn handle_game_over(&mut self, _board: &Board, _status: GameStatus, _score: u64) {}
}
