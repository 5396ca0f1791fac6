//! Moves and move history records.
//!
//! A move is a `from`/`to` pair. Its kind follows from the geometry: one
//! square along an axis is a step, two squares is a jump over the square
//! in between.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Player;

/// A piece movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

/// Whether a move stepped or jumped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Moved to an adjacent square.
    Step,
    /// Jumped over the piece at `over`.
    Jump { over: Coord },
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Any displacement of two squares along either axis is a jump.
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        let (drow, dcol) = self.from.delta_to(self.to);
        if drow.abs() == 2 || dcol.abs() == 2 {
            MoveKind::Jump {
                over: self.from.midpoint(self.to),
            }
        } else {
            MoveKind::Step
        }
    }

    #[must_use]
    pub fn is_jump(&self) -> bool {
        matches!(self.kind(), MoveKind::Jump { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A move as recorded in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move made.
    pub mv: Move,

    /// Step or jump.
    pub kind: MoveKind,

    /// Turn number when the move was made.
    pub turn: u32,

    /// Position within the turn's jump chain (0 for the first move).
    pub sequence: u32,
}
