//! Compaction of a single lane.
//!
//! A lane is one row or column read in the order of a slide, so that tiles
//! always travel toward index 0. Every directional move reduces to running
//! [`compact`] over each lane of the board.

use crate::config::{BOARD_SIZE, MAX_TILE};

/// One row or column in slide order.
pub type Line = [u32; BOARD_SIZE];

/// Lane after a slide together with the score its merges earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compacted {
    pub line: Line,
    pub gained: u64,
}

/// Slide `line` toward index 0, merging each equal adjacent pair once.
///
/// A tile produced by a merge never merges again within the same call, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.
/// Tiles already at [`MAX_TILE`] stay put.
pub fn compact(line: Line) -> Compacted {
    let (mut tiles, len) = pack(line);

    let mut gained = 0;
    let mut i = 0;
    while i + 1 < len {
        if tiles[i] == tiles[i + 1] && tiles[i] < MAX_TILE {
            tiles[i] *= 2;
            tiles[i + 1] = 0;
            gained += u64::from(tiles[i]);
            i += 2;
        } else {
            i += 1;
        }
    }

    let (line, _) = pack(tiles);
    Compacted { line, gained }
}

/// Move non-zero values to the front, keeping their order. Returns the packed
/// lane and the number of tiles in it.
fn pack(line: Line) -> (Line, usize) {
    let mut out = [0; BOARD_SIZE];
    let mut len = 0;
    for value in line.into_iter().filter(|&v| v != 0) {
        out[len] = value;
        len += 1;
    }
    (out, len)
}
