//! tictac - two-player tic-tac-toe at a text prompt.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictac_core::Game;
use tictac_prompt::{PromptConfig, Session, TranscriptView, replay};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PromptConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config).await,
        Command::Replay { moves, json } => run_replay(config, moves, json).await,
    }
}

/// Installs the stderr subscriber so stdout carries only the game.
fn initialize_tracing(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Tracing initialized");
}

/// Play interactively on stdin/stdout
#[instrument(skip(config))]
async fn run_play(config: PromptConfig) -> Result<()> {
    let game = Game::with_view(TranscriptView::new(config.glyphs().clone()));
    let input = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(input, tokio::io::stdout(), game);

    tokio::select! {
        result = session.run() => {
            let outcomes = result?;
            info!(rounds = outcomes.len(), ?outcomes, "Session finished");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!(state = %session.game().state(), "Interrupted");
            println!("\nLeaving...");
            // The blocking stdin reader would otherwise hold the runtime open.
            std::process::exit(0);
        }
    }

    Ok(())
}

/// Play a scripted list of moves
#[instrument(skip(config))]
async fn run_replay(config: PromptConfig, moves: Vec<String>, json: bool) -> Result<()> {
    let outcomes = replay(&moves, config.glyphs().clone(), json, tokio::io::stdout()).await?;
    info!(?outcomes, "Replay finished");
    Ok(())
}
