//! Line evaluation for win detection.

use super::types::{BOARD_WIDTH, CellState, Player};
use tracing::instrument;

/// Earliest turn counter at which a win is worth checking for.
///
/// The counter has already advanced past the move being checked, so this is
/// the value after the fourth move; a win needs at least five.
pub const MIN_WIN_CHECK_TURN: u32 = 5;

/// Returns true if `line` is a full line held entirely by `player`.
///
/// Lines shorter than three cells (such as the empty result of a diagonal
/// query off the diagonal) never count. Empty cells never match a player.
#[instrument]
pub fn is_line_valid(line: &[CellState], player: Player) -> bool {
    let mark = CellState::from(player);
    line.len() == BOARD_WIDTH && line.iter().all(|&cell| cell == mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Empty, PlayerO, PlayerX};

    #[test]
    fn test_full_line_for_player() {
        assert!(is_line_valid(&[PlayerX, PlayerX, PlayerX], Player::X));
        assert!(is_line_valid(&[PlayerO, PlayerO, PlayerO], Player::O));
    }

    #[test]
    fn test_line_held_by_opponent() {
        assert!(!is_line_valid(&[PlayerX, PlayerX, PlayerX], Player::O));
    }

    #[test]
    fn test_mixed_or_incomplete_line() {
        assert!(!is_line_valid(&[PlayerX, PlayerO, PlayerX], Player::X));
        assert!(!is_line_valid(&[PlayerX, PlayerX, Empty], Player::X));
        assert!(!is_line_valid(&[Empty, Empty, Empty], Player::X));
    }

    #[test]
    fn test_short_line_never_valid() {
        assert!(!is_line_valid(&[], Player::X));
        assert!(!is_line_valid(&[PlayerX, PlayerX], Player::X));
    }
}
