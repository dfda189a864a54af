#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod cells;
mod board;
mod common;
mod config;
mod game;
mod line;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
mod session;
mod source;
#[cfg(feature = "std")]
mod store;

pub use cells::{CellSet, Cells, MaskWord};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use line::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::*;
pub use source::*;
#[cfg(feature = "std")]
pub use store::*;
