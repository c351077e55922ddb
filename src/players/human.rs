//! Human player reading moves from a console.

use super::Contestant;
use anyhow::{Result, bail};
use parlor_tictactoe::{Board, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player prompting on `output` and reading lines from `input`.
///
/// Squares are numbered 1-9 as shown on the rendered board. Position
/// labels such as `center` or `top-left` are accepted as well.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Classifies one line of input.
    ///
    /// Any integer counts as a number, however large; only 1-9 name a square.
    fn parse(line: &str) -> Reply {
        let line = line.trim();
        let digits = line.strip_prefix(&['-', '+'][..]).unwrap_or(line);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(Position::from_index)
                .map_or(Reply::BadNumber, Reply::Square);
        }
        Position::from_label_or_number(line).map_or(Reply::Unrecognized, Reply::Square)
    }
}

/// What a line of human input amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    /// Names a square, which may still be occupied.
    Square(Position),
    /// An integer outside 1-9.
    BadNumber,
    /// Neither a number nor a square label.
    Unrecognized,
}

impl<R: BufRead, W: Write> Contestant for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match Self::parse(&line) {
                Reply::Square(pos) if board.is_empty(pos) => {
                    debug!(%pos, "Human chose position");
                    return Ok(pos);
                }
                Reply::Unrecognized => {
                    writeln!(self.output, "Invalid input. Enter a number between 1 and 9.")?;
                }
                Reply::Square(_) | Reply::BadNumber => {
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new("You", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_one_based_numbers() {
        let mut player = human("5\n");
        assert_eq!(player.choose_move(&Board::new()).unwrap(), Position::Center);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let board: Board = "X________".parse().unwrap();
        let mut player = human("abc\n0\n10\n1\n2\n");
        assert_eq!(player.choose_move(&board).unwrap(), Position::TopCenter);

        let out = String::from_utf8(player.output).unwrap();
        assert_eq!(out.matches("Enter your move (1-9): ").count(), 5);
        assert_eq!(
            out.matches("Invalid input. Enter a number between 1 and 9.").count(),
            1
        );
        assert_eq!(out.matches("Invalid move. Try again.").count(), 3);
    }

    #[test]
    fn test_accepts_labels() {
        let mut player = human("bottom-right\n");
        assert_eq!(
            player.choose_move(&Board::new()).unwrap(),
            Position::BottomRight
        );
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut player = human("");
        assert!(player.choose_move(&Board::new()).is_err());
    }

    #[test]
    fn test_label_fragments_are_invalid_input() {
        let mut player = human("e\n-\nleft\n5\n");
        assert_eq!(player.choose_move(&Board::new()).unwrap(), Position::Center);

        let out = String::from_utf8(player.output).unwrap();
        assert_eq!(
            out.matches("Invalid input. Enter a number between 1 and 9.").count(),
            3
        );
        assert_eq!(out.matches("Invalid move. Try again.").count(), 0);
    }

    #[test]
    fn test_huge_number_is_invalid_move() {
        let mut player = human("99999999999999999999\n-3\n+7\n");
        assert_eq!(player.choose_move(&Board::new()).unwrap(), Position::BottomLeft);

        let out = String::from_utf8(player.output).unwrap();
        assert_eq!(out.matches("Invalid move. Try again.").count(), 2);
        assert_eq!(
            out.matches("Invalid input. Enter a number between 1 and 9.").count(),
            0
        );
    }
}
