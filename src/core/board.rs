//! The 8x8 board and the players' fixed corner areas.
//!
//! The board is a fixed two-dimensional array: all 64 squares always exist
//! and each holds at most one piece. Pieces are never captured, so the
//! number of pieces per player never changes after setup.
//!
//! Boards can be written as text diagrams, one string per row, using `.`
//! for an empty square and `1`/`2` for the players' pieces:
//!
//! ```
//! use turkish_checkers::core::{Board, Coord, Player};
//!
//! let board = Board::initial();
//! assert_eq!(board.get(Coord::new(0, 7)), Some(Player::One));
//! assert_eq!(board.to_string().lines().next(), Some(".....111"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::{Coord, Region, BOARD_SIZE};
use super::player::Player;

/// Contents of one square.
pub type Cell = Option<Player>;

const SIDE: usize = BOARD_SIZE as usize;

/// Player One starts in the top-right corner.
const PLAYER_ONE_START: Region = Region::new(0, 5, 2, 7);

/// Player Two starts in the bottom-left corner.
const PLAYER_TWO_START: Region = Region::new(5, 0, 7, 2);

/// The 3x3 corner a player's pieces start in.
#[must_use]
pub const fn starting_area(player: Player) -> Region {
    match player {
        Player::One => PLAYER_ONE_START,
        Player::Two => PLAYER_TWO_START,
    }
}

/// The corner a player must fill to win: the opponent's starting area.
#[must_use]
pub const fn target_area(player: Player) -> Region {
    starting_area(player.opponent())
}

/// Errors from parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} squares, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, col {col}: unknown symbol {symbol:?}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; SIDE]; SIDE],
        }
    }

    /// The starting position: nine pieces in each player's starting area.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for player in Player::ALL {
            for coord in starting_area(player).cells() {
                board.set(coord, Some(player));
            }
        }
        board
    }

    /// Parse a text diagram of exactly 8 rows of 8 symbols.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != SIDE {
            return Err(BoardParseError::RowCount {
                expected: SIDE,
                found: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.trim().chars().collect();
            if symbols.len() != SIDE {
                return Err(BoardParseError::RowLength {
                    row,
                    expected: SIDE,
                    found: symbols.len(),
                });
            }

            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => None,
                    other => Some(Player::from_symbol(other).ok_or(
                        BoardParseError::UnknownSymbol {
                            row,
                            col,
                            symbol: other,
                        },
                    )?),
                };
            }
        }

        Ok(board)
    }

    /// Piece at `coord`. Off-board squares read as empty.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        if !coord.is_on_board() {
            return None;
        }
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Set the square at `coord`. Returns false if `coord` is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if !coord.is_on_board() {
            return false;
        }
        self.cells[coord.row as usize][coord.col as usize] = cell;
        true
    }

    /// On the board and empty.
    #[must_use]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        coord.is_on_board() && self.get(coord).is_none()
    }

    /// On the board and holding a piece of either player.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Squares holding `player`'s pieces, row-major.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.get(c) == Some(player))
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }

    /// Does every square of `region` hold one of `player`'s pieces?
    #[must_use]
    pub fn region_filled_by(&self, region: Region, player: Player) -> bool {
        region.cells().all(|c| self.get(c) == Some(player))
    }

    /// Does `player` still have any piece inside `region`?
    #[must_use]
    pub fn any_in_region(&self, region: Region, player: Player) -> bool {
        region.cells().any(|c| self.get(c) == Some(player))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = cell.map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
