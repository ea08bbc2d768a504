//! Match configuration: who plays which mark, who opens, and search options.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, search::SearchConfig, tictactoe::Mark};

/// Kind of participant assigned to a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed in by a person
    Human,
    /// Exhaustive minimax search
    Bot,
    /// Uniformly random legal moves
    Random,
}

impl PlayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Bot => "bot",
            PlayerKind::Random => "random",
        }
    }
}

/// Configuration for setting up a match.
///
/// Loadable from JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use minimax_ttt::config::{MatchConfig, PlayerKind};
/// use minimax_ttt::tictactoe::Mark;
///
/// let config = MatchConfig::new(PlayerKind::Bot, PlayerKind::Bot)
///     .with_first_mover(Mark::O)
///     .with_opening_book(true)
///     .with_seed(7);
/// assert_eq!(config.kind_for(Mark::O), PlayerKind::Bot);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Who plays X
    pub x: PlayerKind,
    /// Who plays O
    pub o: PlayerKind,
    /// Mark that opens every match
    pub first_mover: Mark,
    /// Use the fixed opening reply instead of searching the first two plies
    pub opening_book: bool,
    /// Seed for random players
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Create a configuration with the given players; X opens, full search, no seed.
    pub fn new(x: PlayerKind, o: PlayerKind) -> Self {
        Self {
            x,
            o,
            first_mover: Mark::X,
            opening_book: false,
            seed: None,
        }
    }

    pub fn with_first_mover(mut self, mark: Mark) -> Self {
        self.first_mover = mark;
        self
    }

    pub fn with_opening_book(mut self, enabled: bool) -> Self {
        self.opening_book = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assign a player kind to a mark
    pub fn with_player(mut self, mark: Mark, kind: PlayerKind) -> Self {
        match mark {
            Mark::X => self.x = kind,
            Mark::O => self.o = kind,
        }
        self
    }

    pub fn kind_for(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Whether any seat needs a person at the keyboard
    pub fn has_human(&self) -> bool {
        self.x == PlayerKind::Human || self.o == PlayerKind::Human
    }

    /// Search options shared by both bots
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default().with_opening_book(self.opening_book)
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: MatchConfig = serde_json::from_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded match config");
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for MatchConfig {
    /// A person (X, opening) against the bot (O)
    fn default() -> Self {
        Self::new(PlayerKind::Human, PlayerKind::Bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_human_against_bot() {
        let config = MatchConfig::default();
        assert_eq!(config.x, PlayerKind::Human);
        assert_eq!(config.o, PlayerKind::Bot);
        assert_eq!(config.first_mover, Mark::X);
        assert!(config.has_human());
        assert!(!config.search_config().opening_book);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "x": "bot", "first_mover": "O" }"#).unwrap();
        assert_eq!(config.x, PlayerKind::Bot);
        assert_eq!(config.o, PlayerKind::Bot);
        assert_eq!(config.first_mover, Mark::O);
        assert!(!config.has_human());
    }

    #[test]
    fn test_unknown_player_kind_is_rejected() {
        let result: std::result::Result<MatchConfig, _> =
            serde_json::from_str(r#"{ "x": "oracle" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_player() {
        let config = MatchConfig::default().with_player(Mark::X, PlayerKind::Random);
        assert_eq!(config.kind_for(Mark::X), PlayerKind::Random);
        assert_eq!(config.kind_for(Mark::O), PlayerKind::Bot);
    }
}
