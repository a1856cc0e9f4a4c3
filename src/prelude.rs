//! Commonly used types and utilities for ease of import.

pub use crate::{
    setup_fleet, take_turn, AiPlayer, Board, Cell, Coord, GameSession, GameStatus, Orientation,
    Player, Ship, ShotOutcome, Side, TurnResult, BOARD_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_target, ui::BoardView, InteractivePlayer};
