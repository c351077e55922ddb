//! Command-line interface for parlor.

use crate::todo::TodoAction;
use clap::{Parser, Subcommand, ValueEnum};
use parlor_tictactoe::Player;
use std::path::PathBuf;

/// Parlor - console tic-tac-toe against a heuristic bot, and a to-do list
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Console parlor games and a to-do list manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $PARLOR_CONFIG, then parlor.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the bot (X moves first)
    Tictactoe {
        /// Mark the bot plays; you get the other one
        #[arg(long, value_enum)]
        bot_mark: Option<Mark>,

        /// Print which rule the bot used for each move
        #[arg(long)]
        explain: bool,
    },

    /// Manage the to-do list
    Todo {
        /// JSON file holding the list
        #[arg(long)]
        store: Option<PathBuf>,

        /// To-do operation
        #[command(subcommand)]
        action: TodoCommand,
    },
}

/// A tic-tac-toe mark as written on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Plays first
    X,
    /// Plays second
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}

/// To-do list operations
#[derive(Subcommand, Debug)]
pub enum TodoCommand {
    /// Add a task
    Add {
        /// Task description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Remove the task at an index
    Remove {
        /// Index shown by `view`
        index: usize,
    },
    /// List all tasks
    View,
    /// Mark the task at an index as done
    Complete {
        /// Index shown by `view`
        index: usize,
    },
}

impl From<TodoCommand> for TodoAction {
    fn from(command: TodoCommand) -> Self {
        match command {
            TodoCommand::Add { words } => TodoAction::Add(words.join(" ")),
            TodoCommand::Remove { index } => TodoAction::Remove(index),
            TodoCommand::View => TodoAction::View,
            TodoCommand::Complete { index } => TodoAction::Complete(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_todo_add_joins_words() {
        let cli = Cli::parse_from(["parlor", "todo", "add", "buy", "oat", "milk"]);
        let Command::Todo { store, action } = cli.command else {
            panic!("expected todo command");
        };
        assert_eq!(store, None);
        assert_eq!(TodoAction::from(action), TodoAction::Add("buy oat milk".into()));
    }

    #[test]
    fn test_tictactoe_flags() {
        let cli = Cli::parse_from(["parlor", "tictactoe", "--bot-mark", "x", "--explain"]);
        let Command::Tictactoe { bot_mark, explain } = cli.command else {
            panic!("expected tictactoe command");
        };
        assert_eq!(bot_mark, Some(Mark::X));
        assert!(explain);
    }
}
