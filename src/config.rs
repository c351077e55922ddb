//! Configuration for the parlor console.

use derive_getters::Getters;
use derive_more::{Display, Error};
use parlor_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "parlor.toml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_ENV_VAR: &str = "PARLOR_CONFIG";

/// Settings shared by the parlor commands.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ParlorConfig {
    /// Mark played by the bot in tic-tac-toe. X always moves first.
    #[serde(default = "default_bot_mark")]
    bot_mark: Player,

    /// Print which rule the bot used for each move.
    #[serde(default)]
    explain_bot: bool,

    /// File the to-do list is stored in.
    #[serde(default = "default_todo_store")]
    todo_store: PathBuf,
}

#[instrument]
fn default_bot_mark() -> Player {
    parlor_tictactoe::bot::DEFAULT_BOT
}

#[instrument]
fn default_todo_store() -> PathBuf {
    PathBuf::from("todo.json")
}

impl Default for ParlorConfig {
    fn default() -> Self {
        Self {
            bot_mark: default_bot_mark(),
            explain_bot: false,
            todo_store: default_todo_store(),
        }
    }
}

impl ParlorConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(bot_mark = %config.bot_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the `PARLOR_CONFIG` file, else
    /// `parlor.toml`. A missing default file yields the defaults; a missing
    /// file the user named explicitly is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns a copy with the bot mark replaced.
    pub fn with_bot_mark(mut self, bot_mark: Player) -> Self {
        self.bot_mark = bot_mark;
        self
    }

    /// Returns a copy with bot explanations switched on or off.
    pub fn with_explain_bot(mut self, explain_bot: bool) -> Self {
        self.explain_bot = explain_bot;
        self
    }

    /// Returns a copy with a different to-do store path.
    pub fn with_todo_store(mut self, todo_store: PathBuf) -> Self {
        self.todo_store = todo_store;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
