//! Match and simulation pipeline
//!
//! This module provides:
//! - Concrete players (human, minimax bot, random baseline)
//! - The match driver that alternates players and re-prompts humans
//! - Repeated automated matches with a result tally
//! - Observers for progress bars, logging and match history

pub mod matches;
pub mod observers;
pub mod players;
pub mod simulation;

pub use matches::{MatchReport, MatchSetup, play_match};
pub use observers::{HistoryObserver, ProgressObserver, TraceObserver};
pub use players::{BotPlayer, HumanPlayer, RandomPlayer};
pub use simulation::{Simulation, SimulationConfig, SimulationResult};

pub use crate::ports::{Observer, Player};
