//! Command-line interface for the ultimate tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate")]
#[command(about = "Play ultimate tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config (built-in defaults if omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game, reading moves from stdin
    Play,

    /// Apply moves from a file, one `<sub-game> <cell>` per line
    Replay {
        /// File of moves; blank lines and `#` comments are ignored
        file: PathBuf,
    },

    /// Print the eight winning lines
    Lines,
}
