//! Game state validation logic

use std::collections::HashSet;

use super::{
    board::Mark,
    game::{GameState, PieceCount},
    lines::LineAnalyzer,
};

impl GameState {
    /// Check if the state could arise from alternating play
    ///
    /// Either mark may have opened, so counts may differ by one in either
    /// direction, but the side to move must be the one that is behind (or
    /// either side when counts are equal).
    pub fn is_valid(&self) -> bool {
        let PieceCount { x, o } = PieceCount::of(self.board());
        let diff = x as isize - o as isize;

        let turn_consistent = match self.to_move() {
            Mark::X => diff == 0 || diff == -1,
            Mark::O => diff == 0 || diff == 1,
        };
        if !turn_consistent {
            return false;
        }

        let x_wins = LineAnalyzer::has_won(&self.board().cells, Mark::X);
        let o_wins = LineAnalyzer::has_won(&self.board().cells, Mark::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner moved last, so it cannot also be the side to move
        for (won, mark) in [(x_wins, Mark::X), (o_wins, Mark::O)] {
            if won && (self.to_move() == mark || !self.winning_lines_share_cell(mark)) {
                return false;
            }
        }

        true
    }

    /// Check if all completed lines for a mark share at least one cell
    ///
    /// Two lines can only be completed together by a single final move.
    pub fn winning_lines_share_cell(&self, mark: Mark) -> bool {
        let lines = LineAnalyzer::completed_lines(&self.board().cells, mark);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }

    /// Count distinct states reachable from an empty board with `first_mover` opening
    pub fn count_reachable_states(first_mover: Mark) -> usize {
        let mut stack = vec![GameState::new(first_mover)];
        let mut seen = HashSet::new();

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }
            for mv in state.legal_moves() {
                if let Ok(next) = state.after(mv) {
                    stack.push(next);
                }
            }
        }

        seen.len()
    }
}
