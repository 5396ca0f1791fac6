//! Errors returned when a command is rejected.
//!
//! A rejected command never changes the engine's state.

use thiserror::Error;

use crate::core::{Coord, Player};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{coord} is off the board")]
    OutOfBounds { coord: Coord },

    #[error("no piece at {coord}")]
    EmptySquare { coord: Coord },

    #[error("piece at {coord} belongs to {owner}, but it is {current}'s turn")]
    NotYourPiece {
        coord: Coord,
        owner: Player,
        current: Player,
    },

    #[error("jump chain in progress with the piece at {chaining}; cannot move {requested}")]
    ChainLocked { chaining: Coord, requested: Coord },

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Coord, to: Coord },

    #[error("no jump in progress to stay after")]
    NoJumpInProgress,
}
