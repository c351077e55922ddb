//! Parlor - console tic-tac-toe against a heuristic bot, and a to-do list.
//!
//! # Architecture
//!
//! - **Players**: [`Contestant`] implementations for humans and the bot
//! - **Orchestrator**: runs one game between two contestants
//! - **Todo**: the to-do list and its JSON store
//! - **Config**: TOML settings shared by the commands
//!
//! Game rules and the bot itself live in [`parlor_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
pub mod todo;

pub use cli::{Cli, Command, Mark, TodoCommand};
pub use config::{CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_PATH, ParlorConfig};
pub use orchestrator::Orchestrator;
pub use players::{BotPlayer, Contestant, HumanPlayer};
