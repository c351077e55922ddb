//! Game engine for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::rules::{is_full, is_winning_for};
use crate::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board, alternates X and O (X moves first), and re-evaluates
/// the status after every move: first whether the mover won, then whether
/// the board filled up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the game has finished.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Makes a move for the current player at `pos`.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            warn!("Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            warn!(%pos, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        debug!(%pos, "Move applied");

        if is_winning_for(&self.board, player) {
            info!(winner = %player, "Game won");
            self.status = GameStatus::Won(player);
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = player.opponent();
        }

        Ok(self.status)
    }

    /// Makes a move given a raw board index (0-8).
    pub fn make_move_at(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.make_move(pos)
    }

    /// Replays a sequence of positions from a fresh game.
    #[instrument(skip(positions))]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.make_move(pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
