//! Observer implementations for matches and simulations

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::matches::MatchReport;
use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameState, Mark, Move, Outcome},
};

/// Progress bar observer - shows simulation progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    ties: usize,
    o_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            ties: 0,
            o_wins: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} T:{} O:{}", self.x_wins, self.ties, self.o_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_simulation_start(&mut self, iterations: usize) -> Result<()> {
        let pb = ProgressBar::new(iterations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} matches ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_match_end(&mut self, match_num: usize, report: &MatchReport) -> Result<()> {
        match report.outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Tied => self.ties += 1,
            Outcome::InProgress => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(match_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Logs every event at debug level
#[derive(Debug, Default)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn on_match_start(&mut self, match_num: usize, state: &GameState) -> Result<()> {
        debug!(match_num, first = %state.to_move(), "match start");
        Ok(())
    }

    fn on_move(&mut self, match_num: usize, mark: Mark, mv: Move, state: &GameState) -> Result<()> {
        debug!(match_num, %mark, %mv, position = %state.encode(), "move");
        Ok(())
    }

    fn on_match_end(&mut self, match_num: usize, report: &MatchReport) -> Result<()> {
        debug!(
            match_num,
            outcome = ?report.outcome,
            rejected = report.rejected,
            "match end"
        );
        Ok(())
    }
}

/// Collects match reports in memory
#[derive(Debug, Default)]
pub struct HistoryObserver {
    reports: Vec<MatchReport>,
}

impl HistoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[MatchReport] {
        &self.reports
    }
}

impl Observer for HistoryObserver {
    fn on_match_end(&mut self, _match_num: usize, report: &MatchReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}
