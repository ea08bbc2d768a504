//! Repeated automated matches with a tally of results

use serde::{Deserialize, Serialize};
use tracing::info;

use super::matches::{MatchSetup, play_match};
use crate::{
    Error, Result,
    ports::Observer,
    tictactoe::{Mark, Outcome},
};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of matches to play
    pub iterations: usize,

    /// Base seed; match `i` reseeds the players with `seed + 2i`
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            seed: None,
        }
    }
}

/// Tally of a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub iterations: usize,
    pub ties: usize,
    pub x_wins: usize,
    pub o_wins: usize,
}

impl SimulationResult {
    fn record(&mut self, outcome: Outcome) {
        self.iterations += 1;
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Tied => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn tie_rate(&self) -> f64 {
        if self.iterations > 0 {
            self.ties as f64 / self.iterations as f64
        } else {
            0.0
        }
    }

    /// One-line summary, e.g. `Finished with 100/100 ties`
    pub fn summary(&self) -> String {
        format!("Finished with {}/{} ties", self.ties, self.iterations)
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Runs a fixed number of matches between the same two players
pub struct Simulation {
    config: SimulationConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play every match and tally the outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a seat is interactive, and
    /// otherwise the first error raised by a match or an observer.
    pub fn run(&mut self, setup: &mut MatchSetup) -> Result<SimulationResult> {
        for mark in [Mark::X, Mark::O] {
            let player = setup.player(mark);
            if player.is_interactive() {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "simulation needs automated players, but {} is played by '{}'",
                        mark,
                        player.name()
                    ),
                });
            }
        }

        for observer in &mut self.observers {
            observer.on_simulation_start(self.config.iterations)?;
        }

        let mut result = SimulationResult::default();
        for match_num in 0..self.config.iterations {
            if let Some(seed) = self.config.seed {
                setup.reseed(seed.wrapping_add(2 * match_num as u64))?;
            }
            let report = play_match(setup, match_num, &mut self.observers)?;
            result.record(report.outcome);
        }

        for observer in &mut self.observers {
            observer.on_simulation_end()?;
        }

        info!(
            iterations = result.iterations,
            ties = result.ties,
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            "simulation finished"
        );
        Ok(result)
    }
}
