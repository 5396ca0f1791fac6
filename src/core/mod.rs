//! Core game types: players, coordinates, board, configuration, moves, state.
//!
//! Everything here is plain data with no rules attached; the legality of
//! moves lives in `rules`.

pub mod player;
pub mod coord;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use coord::{Coord, Direction, Region, BOARD_SIZE};
pub use board::{starting_area, target_area, Board, BoardParseError, Cell};
pub use config::{DualWinPolicy, GameConfig};
pub use action::{Move, MoveKind, MoveRecord};
pub use state::{ProgressFlags, TurnState};
