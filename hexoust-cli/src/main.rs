//! HexOust CLI - Command-line interface
//!
//! Commands:
//! - play: Play a game in the terminal
//! - board: Print board geometry as JSON
//! - serve: Start the renderer backend

mod geometry;
mod play;
mod server;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexoust_core::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexoust")]
#[command(about = "HexOust rules engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game in the terminal
    Play(play::PlayArgs),
    /// Print board geometry as JSON
    Board(geometry::BoardArgs),
    /// Start the renderer backend
    Serve(server::ServerArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so the text board stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Board(args) => geometry::run(args),
        Commands::Serve(args) => server::run(args),
    }
}

/// Game config from an optional JSON file, with an optional radius override
pub(crate) fn load_config(path: Option<&Path>, radius: Option<i32>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load game config: {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(radius) = radius {
        config.radius = radius;
    }
    config.validate()?;

    Ok(config)
}
