//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal against an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Two people share the board instead of playing the AI
    #[arg(long, global = true)]
    pub two_player: bool,

    /// Where to write logs (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the computer's score for every empty cell of a board
    Analyze {
        /// Board in row notation, e.g. "OX. .O. ..X" (O = Player One, X = Player Two)
        board: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
