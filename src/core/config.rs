//! Game configuration.
//!
//! The board geometry and movement rules are fixed. The only choices a host
//! makes at startup are who moves first and how a simultaneous double win
//! is scored.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// How to score a position where both target areas are filled at once.
///
/// A single move can only fill the mover's target area, so this only
/// arises from positions loaded with `RulesEngine::from_board`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DualWinPolicy {
    /// Neither player wins.
    #[default]
    Draw,
    /// Player One's area is checked first and wins.
    FirstChecked,
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player to move first.
    pub first_player: Player,

    /// Scoring of a simultaneous double win.
    pub dual_win: DualWinPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::One,
            dual_win: DualWinPolicy::Draw,
        }
    }
}

impl GameConfig {
    /// Set the player to move first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the double win policy.
    #[must_use]
    pub fn with_dual_win(mut self, policy: DualWinPolicy) -> Self {
        self.dual_win = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.first_player, Player::One);
        assert_eq!(config.dual_win, DualWinPolicy::Draw);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_first_player(Player::Two)
            .with_dual_win(DualWinPolicy::FirstChecked);

        assert_eq!(config.first_player, Player::Two);
        assert_eq!(config.dual_win, DualWinPolicy::FirstChecked);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_first_player(Player::Two);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
