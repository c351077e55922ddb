//! Parlor - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use parlor::todo::{self, TodoStore};
use parlor::{BotPlayer, Cli, Command, Contestant, HumanPlayer, Orchestrator, ParlorConfig};
use parlor_tictactoe::Player;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = ParlorConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tictactoe { bot_mark, explain } => {
            let explain = explain || *config.explain_bot();
            let mut config = config.with_explain_bot(explain);
            if let Some(mark) = bot_mark {
                config = config.with_bot_mark(mark.into());
            }
            run_tictactoe(&config)
        }
        Command::Todo { store, action } => {
            let config = match store {
                Some(path) => config.with_todo_store(path),
                None => config,
            };
            let store = TodoStore::new(config.todo_store().clone());
            let action: todo::TodoAction = action.into();
            todo::execute(&action, &store, &mut io::stdout().lock())
        }
    }
}

/// Play one game of human vs. bot on the terminal.
#[instrument(skip(config), fields(bot_mark = %config.bot_mark()))]
fn run_tictactoe(config: &ParlorConfig) -> Result<()> {
    let bot_mark = *config.bot_mark();
    let bot: Box<dyn Contestant> = if *config.explain_bot() {
        Box::new(BotPlayer::explaining("Bot", bot_mark, io::stdout()))
    } else {
        Box::new(BotPlayer::<io::Stdout>::new("Bot", bot_mark))
    };
    let human: Box<dyn Contestant> =
        Box::new(HumanPlayer::new("You", io::stdin().lock(), io::stdout()));

    let (player_x, player_o) = match bot_mark {
        Player::X => (bot, human),
        Player::O => (human, bot),
    };

    info!("Starting tic-tac-toe");
    let mut orchestrator = Orchestrator::new(player_x, player_o, io::stdout());
    orchestrator.run()?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
