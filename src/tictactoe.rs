//! Tic-Tac-Toe rules: board, marks, moves, lines and game state

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Mark, Move, legal_moves};
pub use game::{GameState, Outcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
