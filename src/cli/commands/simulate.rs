//! Simulate command - repeated automated matches with a result tally

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use super::{apply_overrides, base_config, opening_book_flag, parse_mark_token};
use crate::{
    cli::{
        ConsoleInput,
        output::{print_kv, print_section},
    },
    config::{MatchConfig, PlayerKind},
    pipeline::{MatchSetup, ProgressObserver, Simulation, SimulationConfig, TraceObserver},
    ports::MoveInput,
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Run bot matches and count the ties")]
pub struct SimulateArgs {
    /// Number of matches
    #[arg(long, short = 'n', default_value_t = 100)]
    pub iterations: usize,

    /// Load players and options from a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Which mark the bot plays (`x` or `o`, default `x`)
    #[arg(long)]
    pub bot_mark: Option<String>,

    /// Who plays against the bot
    #[arg(long, value_enum)]
    pub opponent: Option<PlayerKind>,

    /// Which mark makes the first move (`x` or `o`)
    #[arg(long)]
    pub first_mover: Option<String>,

    /// Answer the first two plies with the fixed center/corner reply
    #[arg(long)]
    pub opening_book: bool,

    /// Search every position in full, even if the config enables the opening book
    #[arg(long, conflicts_with = "opening_book")]
    pub no_opening_book: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Save the tally as JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Resolve the match configuration from the file and the flags
pub fn resolve_config(args: &SimulateArgs) -> Result<MatchConfig> {
    let fallback = MatchConfig::new(PlayerKind::Bot, PlayerKind::Bot);
    let mut config = base_config(args.config.as_deref(), fallback)?;

    if args.opponent.is_some() || args.bot_mark.is_some() {
        let bot = match &args.bot_mark {
            Some(value) => parse_mark_token(value, "--bot-mark")?,
            None => Mark::X,
        };
        // Without --opponent the non-bot player of the base config changes seats
        let opponent = args.opponent.unwrap_or(match config.kind_for(bot) {
            PlayerKind::Bot => config.kind_for(bot.opponent()),
            other => other,
        });
        config = config
            .with_player(bot, PlayerKind::Bot)
            .with_player(bot.opponent(), opponent);
    }

    if config.has_human() {
        return Err(anyhow!(
            "simulate runs automated players only (X: {}, O: {})",
            config.x.as_str(),
            config.o.as_str()
        ));
    }

    apply_overrides(
        config,
        args.first_mover.as_deref(),
        opening_book_flag(args.opening_book, args.no_opening_book),
        args.seed,
    )
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    // Human seats were rejected above, so the console is never consulted
    let mut setup = MatchSetup::from_config(&config, |_| {
        Box::new(ConsoleInput::stdio()) as Box<dyn MoveInput>
    })?;

    print_section("Simulation");
    print_kv("X", setup.player(Mark::X).name());
    print_kv("O", setup.player(Mark::O).name());
    print_kv("First mover", &config.first_mover.to_string());
    print_kv("Matches", &args.iterations.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut simulation = Simulation::new(SimulationConfig {
        iterations: args.iterations,
        seed: config.seed,
    })
    .with_observer(Box::new(TraceObserver));
    if !args.no_progress {
        simulation = simulation.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = simulation.run(&mut setup)?;

    print_section("Results");
    print_kv("X wins", &result.x_wins.to_string());
    print_kv("O wins", &result.o_wins.to_string());
    print_kv("Ties", &result.ties.to_string());
    print_kv("Tie rate", &format!("{:.1}%", result.tie_rate() * 100.0));
    println!("\n{}", result.summary());

    if let Some(path) = &args.output {
        result.save(path)?;
        println!("Results saved to: {}", path.display());
    }

    Ok(())
}
