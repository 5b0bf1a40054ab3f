//! Ultimate tic-tac-toe - terminal front end
//!
//! Interactive two-player play, move-file replay and a winning-line listing
//! on top of the `ultimate_tictactoe` engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use session::ReplayOutcome;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_level());

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { file } => run_replay(&config, &file),
        Command::Lines => {
            println!("{}", render::lines());
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &CliConfig) -> Result<()> {
    let stdin = std::io::stdin();
    session::play(config, stdin.lock(), std::io::stdout())
}

/// Replay a move file and exit non-zero if it contained an invalid move
#[instrument(skip(config))]
fn run_replay(config: &CliConfig, file: &std::path::Path) -> Result<()> {
    let outcome = session::replay(config, file, std::io::stdout())?;
    info!(?outcome, "Replay complete");
    if let ReplayOutcome::Rejected { line, reason, .. } = outcome {
        anyhow::bail!("Move on line {} was refused: {}", line, reason);
    }
    Ok(())
}
