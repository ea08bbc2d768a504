//! Winning line detection for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board, in evaluation order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark owning the first complete line (rows, then columns, then diagonals)
    ///
    /// At most one mark can complete a line in a legally played game, so the
    /// scan order only decides which line is inspected first.
    pub fn winner(cells: &[Cell; 9]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&line| Self::line_owner(cells, line))
    }

    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|&line| Self::line_owner(cells, line) == Some(mark))
    }

    /// All complete lines held by the mark
    pub fn completed_lines(cells: &[Cell; 9], mark: Mark) -> Vec<[usize; 3]> {
        WINNING_LINES
            .iter()
            .copied()
            .filter(|&line| Self::line_owner(cells, line) == Some(mark))
            .collect()
    }

    fn line_owner(cells: &[Cell; 9], [a, b, c]: [usize; 3]) -> Option<Mark> {
        if cells[a] == cells[b] && cells[b] == cells[c] {
            cells[a].mark()
        } else {
            None
        }
    }
}
