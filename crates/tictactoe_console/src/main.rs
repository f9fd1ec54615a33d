//! Tic-tac-toe console front end.
//!
//! Wires the match engine to standard input and output.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ConsoleConfig;
use session::ConsoleSession;
use tictactoe_engine::Seat;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)?.with_overrides(&cli);
    info!(mode = ?config.mode(), "Starting tic-tac-toe");

    let mut session = ConsoleSession::from_config(&config)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    let controller = session.controller();
    info!(
        score_one = controller.score(Seat::One),
        score_two = controller.score(Seat::Two),
        "Final score"
    );
    Ok(())
}
