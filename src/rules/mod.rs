//! Game rules.
//!
//! - `movement`: which directions count as backward and when they are allowed
//! - `engine`: move generation, move application, turns and winning
//! - `error`: why a command was rejected

pub mod movement;
pub mod engine;
pub mod error;

pub use engine::{ClickOutcome, GameResult, MoveList, MoveOutcome, RulesEngine, TurnPhase};
pub use error::MoveError;
pub use movement::{direction_allowed, is_backward};
