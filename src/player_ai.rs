use crate::{
    board::Board,
    common::Direction,
    player::{Command, Player},
};

/// Greedy AI: takes the slide with the largest immediate gain.
///
/// Ties go to the slide leaving more empty cells, then to the earlier entry
/// of [`Direction::ALL`]. Quits when no slide changes the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Best slide for `board`, or `None` if nothing moves.
    pub fn best_direction(board: &Board) -> Option<Direction> {
        let mut best: Option<(Direction, (u64, usize))> = None;
        for direction in Direction::ALL {
            let (next, gained) = board.slid(direction);
            if next == *board {
                continue;
            }
            let key = (gained, next.empty_cells().len());
            match best {
                Some((_, best_key)) if best_key >= key => {}
                _ => best = Some((direction, key)),
            }
        }
        best.map(|(direction, _)| direction)
    }
}

impl Player for AiPlayer {
    fn next_command(&mut self, board: &Board, _score: u64) -> Command {
        match Self::best_direction(board) {
            Some(direction) => Command::Slide(direction),
            None => Command::Quit,
        }
    }
}
