#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Direction, MoveOutcome},
    game::GameStatus,
    player::{Command, Player},
};

const FRAME_WIDTH: usize = 25;

/// Interactive player reading commands from stdin.
pub struct CliPlayer {
    best: u64,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Best score shown next to the current one.
    pub fn with_best(best: u64) -> Self {
        Self { best }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one line of input into a command.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let cmd = match input.to_ascii_lowercase().as_str() {
        "a" | "h" | "left" => Command::Slide(Direction::Left),
        "d" | "l" | "right" => Command::Slide(Direction::Right),
        "w" | "k" | "up" => Command::Slide(Direction::Up),
        "s" | "j" | "down" => Command::Slide(Direction::Down),
        "r" | "restart" => Command::Restart,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{}'", other)),
    };
    Ok(cmd)
}

/// Print the board framed with the score line.
pub fn print_board(board: &Board, score: u64, best: u64) {
    std::println!("\n  Score: {:<8} Best: {}", score, best.max(score));
    let rule = "═".repeat(FRAME_WIDTH);
    std::println!("  ╔{}╗", rule);
    for line in board.to_string().lines() {
        std::println!("  ║{:<width$}║", line, width = FRAME_WIDTH);
    }
    std::println!("  ╚{}╝", rule);
}

fn print_help() {
    std::println!("\n  Move:    w/a/s/d, k/h/j/l or up/left/down/right");
    std::println!("  Restart: r    Quit: q\n");
}

impl Player for CliPlayer {
    fn next_command(&mut self, board: &Board, score: u64) -> Command {
        self.best = self.best.max(score);
        print_board(board, score, self.best);
        let stdin = io::stdin();
        loop {
            std::print!("Move (or 'help'): ");
            if io::stdout().flush().is_err() {
                return Command::Quit;
            }
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Command::Quit,
                Ok(_) => {}
            }
            if line.trim().eq_ignore_ascii_case("help") {
                print_help();
                continue;
            }
            match parse_command(&line) {
                Ok(cmd) => return cmd,
                Err(e) => std::println!("✗ {}", e),
            }
        }
    }

    fn handle_outcome(&mut self, direction: Direction, outcome: MoveOutcome) {
        if !outcome.moved {
            std::println!("Nothing moves {}.", direction);
        } else if outcome.gained > 0 {
            std::println!("+{}", outcome.gained);
        }
    }

    fn handle_game_over(&mut self, board: &Board, status: GameStatus, score: u64) {
        self.best = self.best.max(score);
        print_board(board, score, self.best);
        match status {
            GameStatus::Won => std::println!("\n🎉 You reached 2048!"),
            GameStatus::Lost => std::println!("\n💀 No moves left."),
            _ => std::println!("\nGame ended."),
        }
    }
}
