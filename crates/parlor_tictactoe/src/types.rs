//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::{draw, win};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: it is nine bytes of state, and the move selector
/// relies on taking a scratch copy rather than mutating the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions of all empty squares in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        draw::is_full(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        win::check_winner(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the grid, showing empty squares by their 1-based number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    match self.squares[pos] {
                        Square::Empty => (pos + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    }
                })
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is not a mark, an empty marker, or a separator.
    #[display("unexpected character {:?} in board layout", character)]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The layout did not describe exactly nine squares.
    #[display("board layout has {} squares, expected 9", count)]
    WrongLength {
        /// Number of squares found.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a compact layout such as `"XX_|_O_|___"`.
    ///
    /// `X` and `O` are marks (case-insensitive); `_`, `.` and `-` are empty.
    /// Whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for character in s.chars() {
            let square = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' => Square::Empty,
                '|' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::UnexpectedCharacter { character: c }),
            };
            squares.push(square);
        }

        let count = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength { count })?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has finished.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let board: Board = "XX_ _O_ ___".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.empty_positions().len(), 6);
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(ParseBoardError::WrongLength { count: 2 })
        );
        assert_eq!(
            "XXZ______".parse::<Board>(),
            Err(ParseBoardError::UnexpectedCharacter { character: 'Z' })
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X__|_O_|___".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(
            rendered,
            " X | 2 | 3 \n---|---|---\n 4 | O | 6 \n---|---|---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_board_serde() {
        let board: Board = "XO_______".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_winner_and_full() {
        let board: Board = "OX_|XO_|__O".parse().unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert!(!board.is_full());

        let board: Board = "XOX|XOO|OXX".parse().unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
