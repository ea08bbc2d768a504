//! Play command - a person against the bot on the console

use std::{io, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;

use super::{apply_overrides, base_config, opening_book_flag, parse_mark_token};
use crate::{
    Error,
    cli::{BoardObserver, ConsoleInput},
    config::{MatchConfig, PlayerKind},
    pipeline::{MatchSetup, play_match},
    ports::{MoveInput, Observer},
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the bot")]
pub struct PlayArgs {
    /// Load players and options from a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Which mark you play (`x` or `o`)
    #[arg(long)]
    pub human_mark: Option<String>,

    /// Who sits in the other seat
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

    /// Seed for a random opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Resolve the match configuration from the file and the flags
pub fn resolve_config(args: &PlayArgs) -> Result<MatchConfig> {
    let mut config = base_config(args.config.as_deref(), MatchConfig::default())?;

    if let Some(value) = &args.human_mark {
        let human = parse_mark_token(value, "--human-mark")?;
        let opponent = args.opponent.unwrap_or(config.kind_for(human.opponent()));
        config = config
            .with_player(human, PlayerKind::Human)
            .with_player(human.opponent(), opponent);
    } else if let Some(opponent) = args.opponent {
        // Keep the human where the config put it, defaulting to X
        let human = [Mark::X, Mark::O]
            .into_iter()
            .find(|&m| config.kind_for(m) == PlayerKind::Human)
            .unwrap_or(Mark::X);
        config = config
            .with_player(human, PlayerKind::Human)
            .with_player(human.opponent(), opponent);
    }

    if config.x == PlayerKind::Human && config.o == PlayerKind::Human {
        return Err(anyhow!("play needs at least one automated player"));
    }

    apply_overrides(
        config,
        args.first_mover.as_deref(),
        opening_book_flag(args.opening_book, args.no_opening_book),
        args.seed,
    )
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!(x = config.x.as_str(), o = config.o.as_str(), first = %config.first_mover, "starting game");

    let mut setup = MatchSetup::from_config(&config, |_| {
        Box::new(ConsoleInput::stdio()) as Box<dyn MoveInput>
    })?;

    let automated: Vec<Mark> = [Mark::X, Mark::O]
        .into_iter()
        .filter(|&m| config.kind_for(m) != PlayerKind::Human)
        .collect();
    let mut observers: Vec<Box<dyn Observer>> =
        vec![Box::new(BoardObserver::new(io::stdout(), automated))];

    match play_match(&mut setup, 0, &mut observers) {
        Ok(report) => {
            info!(outcome = ?report.outcome, rejected = report.rejected, "game over");
            Ok(())
        }
        Err(Error::InputClosed) => {
            println!();
            Err(anyhow!("input closed before the game finished"))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PlayArgs {
        PlayArgs {
            config: None,
            human_mark: None,
            opponent: None,
            first_mover: None,
            opening_book: false,
            no_opening_book: false,
            seed: None,
        }
    }

    #[test]
    fn test_defaults_to_human_x_against_bot() {
        let config = resolve_config(&args()).unwrap();
        assert_eq!(config.x, PlayerKind::Human);
        assert_eq!(config.o, PlayerKind::Bot);
        assert_eq!(config.first_mover, Mark::X);
    }

    #[test]
    fn test_human_can_take_o() {
        let config = resolve_config(&PlayArgs {
            human_mark: Some("o".into()),
            opponent: Some(PlayerKind::Random),
            seed: Some(4),
            ..args()
        })
        .unwrap();
        assert_eq!(config.x, PlayerKind::Random);
        assert_eq!(config.o, PlayerKind::Human);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_two_humans_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "x": "human", "o": "human" }"#).unwrap();

        let result = resolve_config(&PlayArgs {
            config: Some(path),
            ..args()
        });
        assert!(result.is_err());
    }
}
