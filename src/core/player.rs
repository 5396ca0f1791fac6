//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player: `Player::One` (red) starts in the
//! top-right corner, `Player::Two` (blue) in the bottom-left.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for per-player flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Slot index (0 for One, 1 for Two).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Player number as shown to humans (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Piece colour name.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Player::One => "Red",
            Player::Two => "Blue",
        }
    }

    /// Parse a board diagram symbol (`'1'` or `'2'`).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(Player::One),
            '2' => Some(Player::Two),
            _ => None,
        }
    }

    /// Board diagram symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use turkish_checkers::core::{Player, PlayerMap};
///
/// let mut flags: PlayerMap<bool> = PlayerMap::with_value(false);
/// flags[Player::Two] = true;
///
/// assert!(!flags[Player::One]);
/// assert!(flags[Player::Two]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
