//! The rules engine: board, turn and progress state plus every rule that
//! reads or changes them.
//!
//! Hosts drive the engine in one of two ways:
//! - directly, with `legal_moves`, `apply_move` and `select_stay`;
//! - through `click`, which runs the select / move / stay state machine a
//!   point-and-click front end needs, one board square at a time.
//!
//! `apply_move` validates every move against `legal_moves` and leaves the
//! state untouched when it rejects one.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    target_area, Board, Coord, Direction, DualWinPolicy, GameConfig, Move, MoveKind, MoveRecord,
    Player, ProgressFlags, TurnState,
};

use super::error::MoveError;
use super::movement::direction_allowed;

/// Destinations reachable from one square. At most four steps and four jumps.
pub type MoveList = SmallVec<[Coord; 8]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Both target areas filled at once, scored as a draw.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What happened to the turn after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The turn passed to the other player.
    TurnEnded,
    /// A jump was made and another is available: the mover must jump again
    /// or stay.
    ChainContinues,
}

/// Where the turn-level state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingSelection,
    PieceSelected(Coord),
    /// Mid jump chain with the piece at this square.
    JumpChain(Coord),
    GameOver(GameResult),
}

/// Effect of a `click` on a board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    Selected(Coord),
    Deselected,
    Moved(MoveOutcome),
    /// The chaining piece was clicked and the turn ended in place.
    Stayed,
}

/// Turkish Checkers rules engine.
///
/// ## Example
///
/// ```
/// use turkish_checkers::{Coord, MoveOutcome, Player, RulesEngine};
///
/// let mut engine = RulesEngine::new();
/// let from = Coord::new(2, 5);
/// let to = Coord::new(3, 5);
///
/// assert!(engine.legal_moves(from).contains(&to));
/// assert_eq!(engine.apply_move(from, to), Ok(MoveOutcome::TurnEnded));
/// assert_eq!(engine.current_player(), Player::Two);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RulesEngine {
    config: GameConfig,
    board: Board,
    turn: TurnState,
    progress: ProgressFlags,
    history: Vector<MoveRecord>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    /// New game from the starting position with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// New game from the starting position.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::initial(), config)
    }

    /// Start from an arbitrary position. Progress flags are derived from it.
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            config,
            progress: ProgressFlags::from_board(&board),
            turn: TurnState::new(config.first_player),
            board,
            history: Vector::new(),
        }
    }

    // === Read Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<Player> {
        self.board.get(coord)
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.current_player
    }

    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.turn.selected
    }

    #[must_use]
    pub fn jump_in_progress(&self) -> bool {
        self.turn.jump_in_progress
    }

    /// Squares jumped over so far this turn.
    pub fn jumped_over(&self) -> impl Iterator<Item = Coord> + '_ {
        self.turn.jumped_over.iter().copied()
    }

    /// Has every one of `player`'s pieces left their starting area?
    #[must_use]
    pub fn progress(&self, player: Player) -> bool {
        self.progress.get(player)
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    /// Every move made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Move Generation ===

    /// Destinations for the piece at `origin`.
    ///
    /// Empty for empty or off-board squares. Steps are only offered outside
    /// a jump chain; jumps over either player's pieces are always offered
    /// unless the jumped square was already jumped this turn.
    #[must_use]
    pub fn legal_moves(&self, origin: Coord) -> MoveList {
        let mut moves = MoveList::new();
        let Some(player) = self.board.get(origin) else {
            return moves;
        };

        if !self.turn.jump_in_progress {
            for direction in Direction::ALL {
                let to = origin.step(direction, 1);
                if self.board.is_vacant(to)
                    && direction_allowed(&self.progress, player, origin, to)
                {
                    moves.push(to);
                }
            }
        }

        for direction in Direction::ALL {
            let over = origin.step(direction, 1);
            let landing = origin.step(direction, 2);
            if self.board.is_occupied(over)
                && self.board.is_vacant(landing)
                && !self.turn.jumped_over.contains(&over)
                && direction_allowed(&self.progress, player, origin, landing)
            {
                moves.push(landing);
            }
        }

        moves
    }

    /// Every move the current player may make right now. During a jump
    /// chain only the chaining piece may move.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Move> {
        let origins: Vec<Coord> = match (self.turn.jump_in_progress, self.turn.selected) {
            (true, Some(chaining)) => vec![chaining],
            _ => self.board.pieces(self.turn.current_player).collect(),
        };

        origins
            .into_iter()
            .flat_map(|from| {
                self.legal_moves(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    // === Commands ===

    /// Move the current player's piece from `from` to `to`.
    ///
    /// A step ends the turn. A jump ends it only when the piece has no
    /// further jump; otherwise the player must jump again or call
    /// `select_stay`.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.validate_move(from, to) {
            debug!(%from, %to, error = %err, "Rejected move");
            return Err(err);
        }

        let player = self.turn.current_player;
        self.board.set(from, None);
        self.board.set(to, Some(player));

        if self.progress.update(&self.board, player) {
            debug!(%player, "All pieces have left the starting area");
        }

        let mv = Move::new(from, to);
        let kind = mv.kind();
        self.history.push_back(MoveRecord {
            player,
            mv,
            kind,
            turn: self.turn.turn_number,
            sequence: self.turn.moves_this_turn,
        });
        self.turn.moves_this_turn += 1;
        debug!(%player, %from, %to, ?kind, turn = self.turn.turn_number, "Applied move");

        let outcome = match kind {
            MoveKind::Jump { over } => {
                self.turn.record_jump(over, to);
                if self.legal_moves(to).is_empty() {
                    self.end_turn();
                    MoveOutcome::TurnEnded
                } else {
                    MoveOutcome::ChainContinues
                }
            }
            MoveKind::Step => {
                self.end_turn();
                MoveOutcome::TurnEnded
            }
        };

        if let Some(result) = self.check_winner() {
            info!(?result, turn = self.turn.turn_number, "Game over");
        }

        Ok(outcome)
    }

    /// Stop a jump chain where it stands and pass the turn.
    pub fn select_stay(&mut self) -> Result<(), MoveError> {
        if !self.turn.jump_in_progress {
            return Err(MoveError::NoJumpInProgress);
        }
        self.end_turn();
        Ok(())
    }

    /// Pass the turn: swap players and clear selection and jump chain.
    pub fn end_turn(&mut self) {
        let previous = self.turn.current_player;
        self.turn.advance();
        debug!(
            from = %previous,
            to = %self.turn.current_player,
            turn = self.turn.turn_number,
            "Turn ended"
        );
    }

    fn validate_move(&self, from: Coord, to: Coord) -> Result<(), MoveError> {
        for coord in [from, to] {
            if !coord.is_on_board() {
                return Err(MoveError::OutOfBounds { coord });
            }
        }

        let owner = self
            .board
            .get(from)
            .ok_or(MoveError::EmptySquare { coord: from })?;
        let current = self.turn.current_player;
        if owner != current {
            return Err(MoveError::NotYourPiece {
                coord: from,
                owner,
                current,
            });
        }

        if self.turn.jump_in_progress {
            if let Some(chaining) = self.turn.selected {
                if chaining != from {
                    return Err(MoveError::ChainLocked {
                        chaining,
                        requested: from,
                    });
                }
            }
        }

        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        Ok(())
    }

    // === Winning ===

    /// Has either player filled their target area?
    ///
    /// Both areas are checked on every call; `GameConfig::dual_win` decides
    /// the result if both are full.
    #[must_use]
    pub fn check_winner(&self) -> Option<GameResult> {
        let one = self.board.region_filled_by(target_area(Player::One), Player::One);
        let two = self.board.region_filled_by(target_area(Player::Two), Player::Two);

        match (one, two) {
            (true, true) => Some(match self.config.dual_win {
                DualWinPolicy::Draw => GameResult::Draw,
                DualWinPolicy::FirstChecked => GameResult::Winner(Player::One),
            }),
            (true, false) => Some(GameResult::Winner(Player::One)),
            (false, true) => Some(GameResult::Winner(Player::Two)),
            (false, false) => None,
        }
    }

    /// The single winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.check_winner() {
            Some(GameResult::Winner(player)) => Some(player),
            _ => None,
        }
    }

    // === Selection State Machine ===

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if let Some(result) = self.check_winner() {
            return TurnPhase::GameOver(result);
        }
        match (self.turn.selected, self.turn.jump_in_progress) {
            (Some(coord), true) => TurnPhase::JumpChain(coord),
            (Some(coord), false) => TurnPhase::PieceSelected(coord),
            (None, _) => TurnPhase::AwaitingSelection,
        }
    }

    /// Handle a click on a board square.
    ///
    /// - With nothing selected, clicking one of the current player's pieces
    ///   selects it.
    /// - With a piece selected, clicking a legal destination moves there;
    ///   clicking anything else deselects.
    /// - Mid jump chain, clicking the chaining piece stays; other clicks
    ///   that are not a further jump are ignored.
    ///
    /// Once the game is over every click is ignored.
    pub fn click(&mut self, coord: Coord) -> ClickOutcome {
        if !coord.is_on_board() || self.check_winner().is_some() {
            return ClickOutcome::Ignored;
        }

        let Some(selected) = self.turn.selected else {
            if self.board.get(coord) == Some(self.turn.current_player) {
                self.turn.selected = Some(coord);
                return ClickOutcome::Selected(coord);
            }
            return ClickOutcome::Ignored;
        };

        if self.legal_moves(selected).contains(&coord) {
            return self
                .apply_move(selected, coord)
                .map_or(ClickOutcome::Ignored, ClickOutcome::Moved);
        }

        if self.turn.jump_in_progress {
            if coord == selected {
                self.end_turn();
                return ClickOutcome::Stayed;
            }
            return ClickOutcome::Ignored;
        }

        self.turn.selected = None;
        ClickOutcome::Deselected
    }
}
