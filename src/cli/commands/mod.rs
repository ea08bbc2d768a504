//! Subcommand implementations

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::{config::MatchConfig, tictactoe::Mark};

pub mod analyze;
pub mod play;
pub mod simulate;

pub(crate) fn parse_mark_token(value: &str, flag: &str) -> Result<Mark> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Mark::X),
        "o" | "second" | "p2" => Ok(Mark::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Start from the config file when one is given, else from `fallback`
pub(crate) fn base_config(path: Option<&Path>, fallback: MatchConfig) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(fallback),
    }
}

/// Collapse an `--opening-book`/`--no-opening-book` pair into an override
pub(crate) fn opening_book_flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Apply the flags shared by every subcommand on top of a base config
pub(crate) fn apply_overrides(
    mut config: MatchConfig,
    first_mover: Option<&str>,
    opening_book: Option<bool>,
    seed: Option<u64>,
) -> Result<MatchConfig> {
    if let Some(value) = first_mover {
        config.first_mover = parse_mark_token(value, "--first-mover")?;
    }
    if let Some(enabled) = opening_book {
        config.opening_book = enabled;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerKind;

    #[test]
    fn test_parse_mark_token() {
        assert_eq!(parse_mark_token("X", "--flag").unwrap(), Mark::X);
        assert_eq!(parse_mark_token(" second ", "--flag").unwrap(), Mark::O);
        let err = parse_mark_token("z", "--human-mark").unwrap_err();
        assert!(err.to_string().contains("--human-mark"));
    }

    #[test]
    fn test_overrides_win_over_base() {
        let base = MatchConfig::new(PlayerKind::Bot, PlayerKind::Bot).with_seed(1);
        let config = apply_overrides(base, Some("o"), Some(true), Some(5)).unwrap();
        assert_eq!(config.first_mover, Mark::O);
        assert!(config.opening_book);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_missing_overrides_keep_base() {
        let base = MatchConfig::new(PlayerKind::Bot, PlayerKind::Random)
            .with_first_mover(Mark::O)
            .with_opening_book(true);
        let config = apply_overrides(base.clone(), None, None, None).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_opening_book_can_be_switched_off() {
        let base = MatchConfig::new(PlayerKind::Bot, PlayerKind::Bot).with_opening_book(true);
        let off = opening_book_flag(false, true);
        assert_eq!(off, Some(false));
        let config = apply_overrides(base, None, off, None).unwrap();
        assert!(!config.opening_book);
        assert_eq!(opening_book_flag(false, false), None);
    }

    #[test]
    fn test_base_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = base_config(Some(&dir.path().join("absent.json")), MatchConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("loading config"));
    }
}
