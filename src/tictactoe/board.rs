//! Board representation, cells, marks and move enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two symbols a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A move as entered by a player: row and column, each expected in 0..=2.
///
/// Coordinates are signed so that input like `(-1, 0)` survives until
/// [`GameState::apply`](super::GameState::apply) rejects it as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row-major cell index, or `None` when the move lies off the board
    pub fn index(self) -> Option<usize> {
        if (0..3).contains(&self.row) && (0..3).contains(&self.col) {
            Some((self.row * 3 + self.col) as usize)
        } else {
            None
        }
    }

    /// Move addressing the given row-major index (0-8)
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 9, "cell index {index} out of range");
        Self::new((index / 3) as i32, (index % 3) as i32)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid, stored row-major
///
/// `Copy` because the search clones it at every branch; it is only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Cell at the given (row, col), or `None` when off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    /// Check if the cell addressed by `mv` exists and is empty
    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Some(Cell::Empty)
    }

    /// Number of cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count cells holding the given mark
    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Winner of the board, if a line is complete
    pub fn winner(&self) -> Option<Mark> {
        super::lines::LineAnalyzer::winner(&self.cells)
    }

    /// Place a mark without any rule checks; callers validate first.
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark.to_cell();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// All empty cells of the board as moves, in row-major order.
///
/// Recomputed on every call; the result has 0 to 9 entries.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Cell::Empty)
        .map(|(i, _)| Move::from_index(i))
        .collect()
}
