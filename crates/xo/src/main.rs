//! xo - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tokio::io::{BufReader, stdin, stdout};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use xo::{Session, XoConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = XoConfig::load(&cli.config)?;

    match cli.command {
        Command::Play {
            mode,
            seed,
            no_board,
        } => run_play(config.with_overrides(mode, seed, no_board)).await,
        Command::Demo { seed } => run_demo(config.with_overrides(None, seed, false)),
    }
}

/// Run an interactive game on the terminal
#[instrument(skip_all, fields(mode = %config.mode()))]
async fn run_play(config: XoConfig) -> Result<()> {
    info!("Starting interactive game");
    let session = Session::new(&config);
    xo::run(session, BufReader::new(stdin()), stdout()).await?;
    Ok(())
}

/// Run a self-playing single-player game
#[instrument(skip_all)]
fn run_demo(config: XoConfig) -> Result<()> {
    info!("Starting demo game");
    for line in xo::demo(&config) {
        println!("{}", line.trim_end());
    }
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,xo=info,xo_game=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
