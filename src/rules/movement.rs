//! The backward-move rule.
//!
//! Forward is toward the player's target corner: down and left for Player
//! One, up and right for Player Two. Moving the other way is backward, and
//! a backward move is only allowed once the player's progress flag is set
//! and the piece already stands in the opponent's starting area.

use crate::core::{starting_area, Coord, Player, ProgressFlags};

/// Does the move `from -> to` go backward for `player`?
#[must_use]
pub fn is_backward(player: Player, from: Coord, to: Coord) -> bool {
    let (drow, dcol) = from.delta_to(to);
    match player {
        Player::One => drow < 0 || dcol > 0,
        Player::Two => drow > 0 || dcol < 0,
    }
}

/// May `player` move a piece from `from` to `to` as far as direction goes?
///
/// Forward and sideways moves always pass; only backward moves can fail.
#[must_use]
pub fn direction_allowed(
    progress: &ProgressFlags,
    player: Player,
    from: Coord,
    to: Coord,
) -> bool {
    if !is_backward(player, from, to) {
        return true;
    }
    progress.get(player) && starting_area(player.opponent()).contains(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Direction};

    fn latched() -> ProgressFlags {
        ProgressFlags::from_board(&Board::empty())
    }

    #[test]
    fn test_backward_directions() {
        let c = Coord::new(4, 4);

        assert!(is_backward(Player::One, c, c.step(Direction::Up, 1)));
        assert!(is_backward(Player::One, c, c.step(Direction::Right, 1)));
        assert!(!is_backward(Player::One, c, c.step(Direction::Down, 1)));
        assert!(!is_backward(Player::One, c, c.step(Direction::Left, 2)));

        assert!(is_backward(Player::Two, c, c.step(Direction::Down, 1)));
        assert!(is_backward(Player::Two, c, c.step(Direction::Left, 1)));
        assert!(!is_backward(Player::Two, c, c.step(Direction::Up, 2)));
        assert!(!is_backward(Player::Two, c, c.step(Direction::Right, 1)));
    }

    #[test]
    fn test_forward_always_allowed() {
        let unset = ProgressFlags::default();
        let from = Coord::new(1, 6);
        assert!(direction_allowed(&unset, Player::One, from, Coord::new(2, 6)));
        assert!(direction_allowed(&unset, Player::One, from, Coord::new(1, 5)));
    }

    #[test]
    fn test_backward_needs_flag_and_enemy_corner() {
        let inside = Coord::new(6, 1);
        let outside = Coord::new(4, 4);

        // Flag set, inside the opponent's corner.
        assert!(direction_allowed(&latched(), Player::One, inside, Coord::new(5, 1)));

        // Flag set, outside the corner.
        assert!(!direction_allowed(&latched(), Player::One, outside, Coord::new(3, 4)));

        // Inside the corner, flag unset.
        let unset = ProgressFlags::default();
        assert!(!direction_allowed(&unset, Player::One, inside, Coord::new(5, 1)));
    }

    #[test]
    fn test_player_two_mirror() {
        let inside = Coord::new(1, 6);
        assert!(direction_allowed(&latched(), Player::Two, inside, Coord::new(1, 5)));
        let unset = ProgressFlags::default();
        assert!(!direction_allowed(&unset, Player::Two, inside, Coord::new(2, 6)));
    }

    #[test]
    fn test_extreme_coordinates() {
        let low = Coord::new(-100, 0);
        let high = Coord::new(100, 0);

        assert!(!is_backward(Player::One, low, high));
        assert!(is_backward(Player::One, high, low));
        assert!(is_backward(Player::Two, low, high));
        assert!(!is_backward(Player::Two, high, low));

        let corner = Coord::new(i8::MIN, i8::MAX);
        let opposite = Coord::new(i8::MAX, i8::MIN);
        assert!(!is_backward(Player::One, corner, opposite));
        assert!(is_backward(Player::Two, corner, opposite));

        // Off the board is never inside a starting area.
        assert!(!direction_allowed(&latched(), Player::One, high, low));
        assert!(direction_allowed(&latched(), Player::One, low, high));
    }
}
