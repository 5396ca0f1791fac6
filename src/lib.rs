//! # turkish-checkers
//!
//! Rules engine for two-player Turkish Chinese Checkers.
//!
//! ## The Game
//!
//! - 8x8 board. Player One (red) starts with nine pieces in the top-right
//!   3x3 corner, Player Two (blue) with nine in the bottom-left corner.
//! - Pieces move orthogonally: a step to an adjacent empty square, or a
//!   jump over an adjacent piece of either colour onto the empty square
//!   beyond. Jumped pieces stay on the board.
//! - Jumps may be chained within one turn; the same square cannot be
//!   jumped twice in a chain. The player may stop the chain at any time.
//! - Backward moves (away from the target corner) are only allowed once
//!   all of a player's pieces have left home and the moving piece is
//!   already inside the opponent's corner.
//! - The first player to fill the opponent's starting corner wins.
//!
//! ## Design
//!
//! - **No I/O**: the engine is a plain value; rendering and input mapping
//!   belong to the host.
//! - **Validated commands**: `apply_move` rejects illegal moves with a
//!   `MoveError` and leaves the state untouched.
//! - **Deterministic**: the same command sequence always yields the same
//!   state.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, board, configuration, moves, turn state
//! - `rules`: move generation, the backward-move rule, the engine itself

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Coord, Direction, Region, BOARD_SIZE,
    Board, BoardParseError, Cell, starting_area, target_area,
    DualWinPolicy, GameConfig,
    Move, MoveKind, MoveRecord,
    ProgressFlags, TurnState,
};

pub use crate::rules::{
    ClickOutcome, GameResult, MoveError, MoveList, MoveOutcome, RulesEngine, TurnPhase,
};
