//! Console configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Marker;
use tracing::{debug, info, instrument};

/// Who sits in seat two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two people share the keyboard.
    #[default]
    HumanVsHuman,
    /// Seat two is played by the random opponent.
    HumanVsComputer,
}

/// Settings for a console session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Who plays seat two.
    #[serde(default)]
    mode: Mode,

    /// Display name for seat one.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name for seat two.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Player one's marker. X moves first.
    #[serde(default = "default_marker")]
    marker: Marker,

    /// Seed for the computer opponent; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before announcing a tie.
    #[serde(default = "default_draw_delay_ms")]
    draw_delay_ms: u64,
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

fn default_marker() -> Marker {
    Marker::X
}

fn default_draw_delay_ms() -> u64 {
    500
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            marker: default_marker(),
            seed: None,
            draw_delay_ms: default_draw_delay_ms(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of the file settings.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(marker) = cli.marker {
            self.marker = marker;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(name) = &cli.player_one {
            self.player_one = name.clone();
        }
        if let Some(name) = &cli.player_two {
            self.player_two = name.clone();
        }
        if let Some(delay) = cli.draw_delay_ms {
            self.draw_delay_ms = delay;
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.mode(), &Mode::HumanVsHuman);
        assert_eq!(config.marker(), &Marker::X);
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(*config.draw_delay_ms(), 500);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("tictactoe.toml");
        fs::write(
            &path,
            "mode = \"human-vs-computer\"\nmarker = \"O\"\nplayer_one = \"ada\"\nseed = 3\n",
        )
        .expect("Failed to write TOML");

        let config = ConsoleConfig::load_or_default(&path).unwrap();
        assert_eq!(config.mode(), &Mode::HumanVsComputer);
        assert_eq!(config.marker(), &Marker::O);
        assert_eq!(config.player_one(), "ada");
        assert_eq!(config.player_two(), "Player 2");
        assert_eq!(config.seed(), &Some(3));
    }

    #[test]
    fn test_invalid_file_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "mode = \"solitaire\"\n").expect("Failed to write TOML");

        let err = ConsoleConfig::load_or_default(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from(["tictactoe", "--player-two", "grace", "--draw-delay-ms", "0"]);
        let config = ConsoleConfig::default().with_overrides(&cli);
        assert_eq!(config.player_two(), "grace");
        assert_eq!(*config.draw_delay_ms(), 0);
        assert_eq!(config.player_one(), "Player 1");
    }
}
