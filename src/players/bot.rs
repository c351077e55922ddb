//! The heuristic bot as a contestant.

use super::Contestant;
use anyhow::Result;
use parlor_tictactoe::{Board, Player, Position, bot};
use std::io::Write;
use tracing::{debug, instrument};

/// Plays the priority-rule bot for one mark.
pub struct BotPlayer<W> {
    name: String,
    mark: Player,
    /// Where move explanations are written, if enabled.
    explain: Option<W>,
}

impl<W: Write> BotPlayer<W> {
    /// Creates a bot that plays `mark` silently.
    pub fn new(name: impl Into<String>, mark: Player) -> Self {
        Self {
            name: name.into(),
            mark,
            explain: None,
        }
    }

    /// Creates a bot that reports the rule behind each move to `out`.
    pub fn explaining(name: impl Into<String>, mark: Player, out: W) -> Self {
        Self {
            name: name.into(),
            mark,
            explain: Some(out),
        }
    }
}

impl<W: Write> Contestant for BotPlayer<W> {
    #[instrument(skip(self, board), fields(bot = %self.name, mark = %self.mark))]
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        let (position, rule) = bot::explain_move(board, self.mark)?;
        debug!(%position, %rule, "Bot chose position");

        if let Some(out) = self.explain.as_mut() {
            writeln!(out, "{} plays {} ({}).", self.name, position, rule)?;
        }
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
