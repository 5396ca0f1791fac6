//! Turn state and per-player progress flags.
//!
//! ## TurnState
//!
//! Whose turn it is, which piece is selected, and the jump chain in
//! progress. The chain fields are reset every time the turn passes.
//!
//! ## ProgressFlags
//!
//! One-way latches recording that all of a player's pieces have left
//! their starting area at least once. Once set, a flag stays set even if
//! a piece later moves back into the area.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::board::{starting_area, Board};
use super::coord::Coord;
use super::player::{Player, PlayerMap};

/// State of the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player to move.
    pub current_player: Player,

    /// Selected piece, if any. During a jump chain this is the chaining piece.
    pub selected: Option<Coord>,

    /// At least one jump has been made this turn.
    pub jump_in_progress: bool,

    /// Squares jumped over this turn; none of them may be jumped again.
    pub jumped_over: FxHashSet<Coord>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Moves made so far this turn.
    pub moves_this_turn: u32,
}

impl TurnState {
    #[must_use]
    pub fn new(first_player: Player) -> Self {
        Self {
            current_player: first_player,
            selected: None,
            jump_in_progress: false,
            jumped_over: FxHashSet::default(),
            turn_number: 1,
            moves_this_turn: 0,
        }
    }

    /// Pass the turn to the other player and clear the chain.
    pub fn advance(&mut self) {
        self.current_player = self.current_player.opponent();
        self.selected = None;
        self.jump_in_progress = false;
        self.jumped_over.clear();
        self.turn_number += 1;
        self.moves_this_turn = 0;
    }

    /// Record a jump over `over` by the piece now standing on `landing`.
    pub fn record_jump(&mut self, over: Coord, landing: Coord) {
        self.jumped_over.insert(over);
        self.jump_in_progress = true;
        self.selected = Some(landing);
    }
}

/// Per-player "all pieces have left home" latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressFlags {
    flags: PlayerMap<bool>,
}

impl ProgressFlags {
    /// Flags derived from a position: set for every player with no piece
    /// left in their starting area.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            flags: PlayerMap::new(|p| !board.any_in_region(starting_area(p), p)),
        }
    }

    #[must_use]
    pub fn get(&self, player: Player) -> bool {
        self.flags[player]
    }

    /// Re-scan the board for `player` unless the latch is already set.
    /// Returns true if the flag was set by this call.
    pub fn update(&mut self, board: &Board, player: Player) -> bool {
        if self.flags[player] {
            return false;
        }
        if board.any_in_region(starting_area(player), player) {
            return false;
        }
        self.flags[player] = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_advance_clears_chain() {
        let mut turn = TurnState::new(Player::One);
        turn.record_jump(Coord::new(3, 4), Coord::new(3, 3));
        turn.moves_this_turn = 1;

        assert!(turn.jump_in_progress);
        assert_eq!(turn.selected, Some(Coord::new(3, 3)));
        assert!(turn.jumped_over.contains(&Coord::new(3, 4)));

        turn.advance();

        assert_eq!(turn.current_player, Player::Two);
        assert_eq!(turn.selected, None);
        assert!(!turn.jump_in_progress);
        assert!(turn.jumped_over.is_empty());
        assert_eq!(turn.turn_number, 2);
        assert_eq!(turn.moves_this_turn, 0);
    }

    #[test]
    fn test_progress_initially_unset() {
        let flags = ProgressFlags::from_board(&Board::initial());
        assert!(!flags.get(Player::One));
        assert!(!flags.get(Player::Two));
    }

    #[test]
    fn test_progress_latches() {
        let mut board = Board::empty();
        board.set(Coord::new(4, 4), Some(Player::One));

        let mut flags = ProgressFlags::default();
        assert!(flags.update(&board, Player::One));
        assert!(flags.get(Player::One));

        // Moving back home does not reset the latch.
        board.set(Coord::new(4, 4), None);
        board.set(Coord::new(0, 7), Some(Player::One));
        assert!(!flags.update(&board, Player::One));
        assert!(flags.get(Player::One));
    }

    #[test]
    fn test_progress_blocked_by_home_piece() {
        let mut board = Board::empty();
        board.set(Coord::new(6, 1), Some(Player::Two));

        let mut flags = ProgressFlags::default();
        assert!(!flags.update(&board, Player::Two));
        assert!(!flags.get(Player::Two));
    }
}
