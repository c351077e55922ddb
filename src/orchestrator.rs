//! Game orchestration between two contestants.

use crate::players::Contestant;
use anyhow::Result;
use parlor_tictactoe::{Game, GameStatus, Player};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one tic-tac-toe game between two contestants on a console.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a fresh game. X moves first.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>, output: W) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game loop until a win or a draw.
    ///
    /// A contestant that fails to produce a move, or produces an illegal
    /// one, aborts the game with that error.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");

        loop {
            writeln!(self.output)?;
            write!(self.output, "{}", self.game.board())?;
            writeln!(self.output)?;

            let mark = self.game.to_move();
            let contestant = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            let position = contestant.choose_move(self.game.board())?;
            debug!(%mark, %position, "Applying move");

            let status = self.game.make_move(position)?;
            match status {
                GameStatus::InProgress => continue,
                GameStatus::Won(winner) => {
                    self.print_final_board()?;
                    writeln!(self.output, "Player {} wins!", winner)?;
                }
                GameStatus::Draw => {
                    self.print_final_board()?;
                    writeln!(self.output, "It's a draw!")?;
                }
            }

            info!(?status, moves = self.game.history().len(), "Game finished");
            return Ok(status);
        }
    }

    fn print_final_board(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output)?;
        Ok(())
    }
}
