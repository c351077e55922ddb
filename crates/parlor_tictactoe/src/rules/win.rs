//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` occupies all three squares of any line.
///
/// Total over every board, including boards no legal game could reach.
#[instrument(level = "trace")]
pub fn is_winning_for(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`LINES`] order) held by
/// one player, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!is_winning_for(&board, Player::X));
        assert!(!is_winning_for(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX|___|___".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(is_winning_for(&board, Player::X));
        assert!(!is_winning_for(&board, Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
        assert!(is_winning_for(&board, Player::O));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert!(is_winning_for(&board, Player::O), "line {line:?}");
            assert!(!is_winning_for(&board, Player::X), "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_|OO_|___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
        assert!(!is_winning_for(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX|___|___".parse().unwrap();
        assert!(!is_winning_for(&board, Player::X));
        assert!(!is_winning_for(&board, Player::O));
    }
}
