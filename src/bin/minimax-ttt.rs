//! minimax-ttt - Tic-Tac-Toe against an unbeatable minimax bot
//!
//! Subcommands:
//! - `play`: a person against the bot on the console
//! - `simulate`: repeated bot matches with a tally of ties
//! - `analyze`: the minimax score of every move of a position
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minimax-ttt")]
#[command(version, about = "Tic-Tac-Toe with an exhaustive minimax bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot
    Play(minimax_ttt::cli::commands::play::PlayArgs),

    /// Run bot matches and count the ties
    Simulate(minimax_ttt::cli::commands::simulate::SimulateArgs),

    /// Show the minimax score of every legal move
    Analyze(minimax_ttt::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => minimax_ttt::cli::commands::play::execute(args),
        Commands::Simulate(args) => minimax_ttt::cli::commands::simulate::execute(args),
        Commands::Analyze(args) => minimax_ttt::cli::commands::analyze::execute(args),
    }
}
