//! Command-line interface for xo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xo_game::Mode;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "Tic-tac-toe against a friend or a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "xo.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Game mode: single (vs. computer) or multi
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,

        /// Do not print the board after each move
        #[arg(long)]
        no_board: bool,
    },

    /// Play one single-player game with random moves for both sides
    Demo {
        /// Seed for both sides' moves
        #[arg(long)]
        seed: Option<u64>,
    },
}
