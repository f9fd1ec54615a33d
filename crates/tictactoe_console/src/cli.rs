//! Command-line interface for the tic-tac-toe console.

use crate::config::Mode;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Marker;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Who plays seat two
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Marker for player one (X moves first)
    #[arg(long)]
    pub marker: Option<Marker>,

    /// Seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Display name for player one
    #[arg(long)]
    pub player_one: Option<String>,

    /// Display name for player two
    #[arg(long)]
    pub player_two: Option<String>,

    /// Pause before announcing a tie, in milliseconds
    #[arg(long)]
    pub draw_delay_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(cli.mode.is_none());
        assert!(cli.marker.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--mode",
            "human-vs-computer",
            "--marker",
            "o",
            "--seed",
            "9",
        ]);
        assert_eq!(cli.mode, Some(Mode::HumanVsComputer));
        assert_eq!(cli.marker, Some(Marker::O));
        assert_eq!(cli.seed, Some(9));
    }
}
