//! Observer port - watching matches without coupling the driver to output

use crate::{
    Result,
    pipeline::MatchReport,
    tictactoe::{GameState, Mark, Move},
};

/// Observer of matches and simulations
///
/// # Event Sequence
///
/// 1. `on_simulation_start(iterations)` - once, only when running a simulation
/// 2. For each match:
///    - `on_match_start(match_num, state)`
///    - `on_move(...)` - after every accepted move
///    - `on_match_end(match_num, report)`
/// 3. `on_simulation_end()` - once, only when running a simulation
///
/// All methods default to doing nothing.
pub trait Observer {
    fn on_simulation_start(&mut self, _iterations: usize) -> Result<()> {
        Ok(())
    }

    fn on_match_start(&mut self, _match_num: usize, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called with the state after `mark` played `mv`
    fn on_move(
        &mut self,
        _match_num: usize,
        _mark: Mark,
        _mv: Move,
        _state: &GameState,
    ) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self, _match_num: usize, _report: &MatchReport) -> Result<()> {
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        Ok(())
    }
}
