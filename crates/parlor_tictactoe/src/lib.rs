//! Pure tic-tac-toe game logic with a deterministic heuristic bot.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: win and draw detection in [`rules`]
//! - **Bot**: priority-rule move selection in [`bot`]
//! - **Engine**: [`Game`] applies moves and tracks status
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Position, bot};
//!
//! let board = Board::new();
//! assert_eq!(bot::select_move(&board)?, Position::Center);
//! # Ok::<(), parlor_tictactoe::bot::NoLegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod bot;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use bot::{NoLegalMove, Rule};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, ParseBoardError, Player, Square};
