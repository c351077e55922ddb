//! Heuristic move selection for the automated player.
//!
//! The bot follows a fixed priority list and never searches deeper than
//! one ply:
//!
//! 1. take the center if it is free;
//! 2. complete one of its own lines, scanning squares 0-8;
//! 3. otherwise block an opponent line, scanning squares 0-8;
//! 4. take the first free corner of 0, 2, 6, 8;
//! 5. take the first free side of 1, 3, 5, 7.
//!
//! Steps 2 and 3 are two full passes over the board, not one merged pass,
//! so a winning square always beats a blocking square with a lower index.

use crate::rules::is_winning_for;
use crate::{Board, Player, Position, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

/// The mark the bot plays unless told otherwise.
pub const DEFAULT_BOT: Player = Player::O;

/// Which priority rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rule {
    /// The center square was free.
    #[display("center")]
    Center,
    /// The move completes one of the bot's lines.
    #[display("win")]
    Win,
    /// The move blocks an opponent line.
    #[display("block")]
    Block,
    /// First free corner.
    #[display("corner")]
    Corner,
    /// First free side.
    #[display("side")]
    Side,
}

/// The bot was asked to move on a board with no empty square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("no legal move: board is full")]
pub struct NoLegalMove {
    /// The board the bot was given.
    pub board: Board,
}

/// Selects the bot's move, playing as [`DEFAULT_BOT`] (O) against X.
pub fn select_move(board: &Board) -> Result<Position, NoLegalMove> {
    select_move_for(board, DEFAULT_BOT)
}

/// Selects the move for `bot` on `board`.
///
/// The board is only read; the chosen square is not applied.
pub fn select_move_for(board: &Board, bot: Player) -> Result<Position, NoLegalMove> {
    explain_move(board, bot).map(|(position, _)| position)
}

/// Selects the move for `bot` and reports which rule chose it.
#[instrument(skip(board), fields(bot = %bot))]
pub fn explain_move(board: &Board, bot: Player) -> Result<(Position, Rule), NoLegalMove> {
    if board.is_empty(Position::Center) {
        debug!(rule = %Rule::Center, "Bot takes center");
        return Ok((Position::Center, Rule::Center));
    }

    if let Some(position) = completing_square(board, bot) {
        debug!(rule = %Rule::Win, %position, "Bot completes a line");
        return Ok((position, Rule::Win));
    }

    if let Some(position) = completing_square(board, bot.opponent()) {
        debug!(rule = %Rule::Block, %position, "Bot blocks opponent line");
        return Ok((position, Rule::Block));
    }

    if let Some(position) = first_empty(board, &Position::CORNERS) {
        debug!(rule = %Rule::Corner, %position, "Bot takes corner");
        return Ok((position, Rule::Corner));
    }

    if let Some(position) = first_empty(board, &Position::SIDES) {
        debug!(rule = %Rule::Side, %position, "Bot takes side");
        return Ok((position, Rule::Side));
    }

    warn!("Bot asked to move on a full board");
    Err(NoLegalMove { board: *board })
}

/// Lowest-indexed empty square that would give `player` a line.
///
/// Each candidate is tried on a scratch copy and restored before the next.
fn completing_square(board: &Board, player: Player) -> Option<Position> {
    let mut scratch = *board;
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(player));
        let wins = is_winning_for(&scratch, player);
        scratch.set(pos, Square::Empty);
        if wins {
            return Some(pos);
        }
    }
    None
}

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|&pos| board.is_empty(pos))
}
