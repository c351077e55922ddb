//! Contestant trait and implementations.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use parlor_tictactoe::{Board, Position};

/// Anything that can choose a tic-tac-toe move.
pub trait Contestant {
    /// Chooses a move on `board`.
    ///
    /// Must return an empty position; the match rejects anything else.
    fn choose_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
