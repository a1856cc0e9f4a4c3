#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
