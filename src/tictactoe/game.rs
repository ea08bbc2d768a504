//! Game state: the board, whose turn it is, and the move rules

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::{Board, Cell, Mark, Move, legal_moves};
use crate::{Error, Result};

/// Outcome of a game, derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Tied,
}

impl Outcome {
    /// Whether no further moves are accepted
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

impl PieceCount {
    pub fn of(board: &Board) -> Self {
        Self {
            x: board.count(Mark::X),
            o: board.count(Mark::O),
        }
    }
}

/// Complete game state: the board and the mark to play next
///
/// Implements `Copy` (10 bytes) so search branches each own an independent
/// state instead of mutating and undoing a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Mark,
}

impl GameState {
    /// Create a fresh game with the given mark moving first
    pub fn new(first_mover: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first_mover,
        }
    }

    /// Assemble a state from raw parts without checking the turn invariant.
    ///
    /// Use [`GameState::is_valid`] to check the result, or
    /// [`GameState::from_string`] to parse with validation.
    pub fn from_parts(board: Board, to_move: Mark) -> Self {
        Self { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that plays next
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The mark that opened the game, recovered from the piece counts
    pub fn first_mover(&self) -> Mark {
        let count = PieceCount::of(&self.board);
        if count.x == count.o {
            self.to_move
        } else {
            self.to_move.opponent()
        }
    }

    /// Derive the outcome from the board
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.board.winner() {
            Outcome::Won(winner)
        } else if self.board.is_full() {
            Outcome::Tied
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Check whether [`GameState::apply`] would accept the move
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.is_terminal() && self.board.is_empty_at(mv)
    }

    /// Legal moves in row-major order (none once the game is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.board)
    }

    /// Apply a move for the side to play.
    ///
    /// # Errors
    ///
    /// - [`Error::GameAlreadyOver`] if the game is already won or tied
    /// - [`Error::OutOfBounds`] if row or column is outside 0-2
    /// - [`Error::CellOccupied`] if the target cell is not empty
    ///
    /// A failed call leaves the state unchanged.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        *self = self.after(mv)?;
        Ok(())
    }

    /// Return the state after the move, leaving `self` untouched
    #[must_use = "after returns a new game state; the original is unchanged"]
    pub fn after(&self, mv: Move) -> Result<GameState> {
        if self.is_terminal() {
            return Err(Error::GameAlreadyOver);
        }

        let index = mv.index().ok_or(Error::OutOfBounds {
            row: mv.row,
            col: mv.col,
        })?;

        if self.board.cells[index] != Cell::Empty {
            return Err(Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.board.place(index, self.to_move);
        next.to_move = self.to_move.opponent();
        trace!(mark = %self.to_move, %mv, "move applied");
        Ok(next)
    }

    /// Apply a move that was produced by move enumeration.
    ///
    /// A rejection here means the caller broke the enumeration contract, so it
    /// is reported as [`Error::IllegalGeneratedMove`] rather than as input error.
    #[must_use = "after_generated returns a new game state; the original is unchanged"]
    pub fn after_generated(&self, mv: Move) -> Result<GameState> {
        self.after(mv).map_err(|e| Error::IllegalGeneratedMove {
            row: mv.row,
            col: mv.col,
            context: e.to_string(),
        })
    }

    /// Parse a compact board such as `"XO......."` or `"X.O.X.O.._X"`.
    ///
    /// The string holds exactly 9 cells (whitespace ignored; `.`, `_` or space for
    /// empty) and may end with `_X` or `_O` to name the side to move. Without
    /// the suffix the side to move is inferred from the piece counts,
    /// assuming X opened.
    ///
    /// # Errors
    ///
    /// Returns error if the cells are malformed or the position could not
    /// arise in a game.
    pub fn from_string(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let board = Self::parse_cells(&chars, s)?;
        let count = PieceCount::of(&board);

        let to_move = match specified_turn {
            Some(mark) => mark,
            None => Self::determine_turn_from_counts(count, s)?,
        };

        let state = GameState { board, to_move };
        if !state.is_valid() {
            return Err(Error::InvalidPosition {
                context: s.to_string(),
                reason: format!(
                    "piece counts (X={}, O={}) and lines are inconsistent with {} to move",
                    count.x, count.o, to_move
                ),
            });
        }
        Ok(state)
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Mark>)> {
        // '_' also marks an empty cell, so only a suffix after 9 cells names the mover
        match cleaned.rsplit_once('_') {
            Some((board, suffix)) if !suffix.is_empty() && board.chars().count() >= 9 => {
                let mark = Self::parse_mark(suffix, cleaned)?;
                Ok((board, Some(mark)))
            }
            _ => Ok((cleaned, None)),
        }
    }

    fn parse_mark(s: &str, context: &str) -> Result<Mark> {
        match s {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            _ => Err(Error::InvalidMarkString {
                mark: s.to_string(),
                context: context.to_string(),
            }),
        }
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<Board> {
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(board)
    }

    fn determine_turn_from_counts(count: PieceCount, context: &str) -> Result<Mark> {
        if count.x == count.o {
            Ok(Mark::X)
        } else if count.x == count.o + 1 {
            Ok(Mark::O)
        } else {
            Err(Error::InvalidPosition {
                context: context.to_string(),
                reason: format!(
                    "piece counts (X={}, O={}) must be equal or X ahead by one",
                    count.x, count.o
                ),
            })
        }
    }

    /// Compact encoding, e.g. `"XO......._X"`; accepted by [`GameState::from_string`]
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.board
                .cells
                .iter()
                .map(|&c| c.to_char())
                .collect::<String>(),
            self.to_move
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(i32, i32)]) -> GameState {
        let mut state = GameState::new(Mark::X);
        for &(row, col) in moves {
            state.apply(Move::new(row, col)).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(Mark::O);
        assert_eq!(state.to_move(), Mark::O);
        assert_eq!(state.first_mover(), Mark::O);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.legal_moves().len(), 9);
    }

    #[test]
    fn test_apply_places_mark_and_flips_turn() {
        let mut state = GameState::new(Mark::X);
        state.apply(Move::new(1, 1)).unwrap();
        assert_eq!(state.board().get(Move::new(1, 1)), Some(Cell::X));
        assert_eq!(state.to_move(), Mark::O);

        state.apply(Move::new(0, 0)).unwrap();
        assert_eq!(state.board().get(Move::new(0, 0)), Some(Cell::O));
        assert_eq!(state.to_move(), Mark::X);
        assert_eq!(state.first_mover(), Mark::X);
    }

    #[test]
    fn test_after_leaves_original_untouched() {
        let state = GameState::new(Mark::X);
        let next = state.after(Move::new(2, 2)).unwrap();
        assert_eq!(state.board().empty_count(), 9);
        assert_eq!(next.board().empty_count(), 8);
    }

    #[test]
    fn test_win_on_top_row() {
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.outcome(), Outcome::Won(Mark::X));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_tie_when_board_full() {
        // X O X
        // X O O
        // O X X
        let state = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert_eq!(state.outcome(), Outcome::Tied);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut state = GameState::new(Mark::X);
        assert!(matches!(
            state.apply(Move::new(-1, 0)),
            Err(Error::OutOfBounds { row: -1, col: 0 })
        ));
        assert!(matches!(
            state.apply(Move::new(3, 0)),
            Err(Error::OutOfBounds { row: 3, col: 0 })
        ));
        assert!(!state.is_legal(Move::new(0, -1)));
        assert_eq!(state, GameState::new(Mark::X));
    }

    #[test]
    fn test_cell_occupied() {
        let mut state = GameState::new(Mark::X);
        state.apply(Move::new(1, 1)).unwrap();
        let before = state;
        let err = state.apply(Move::new(1, 1)).unwrap_err();
        assert!(matches!(err, Error::CellOccupied { row: 1, col: 1 }));
        assert!(err.to_string().contains("occupied"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_game_already_over() {
        let mut state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let before = state;
        assert!(!state.is_legal(Move::new(2, 2)));
        assert!(matches!(
            state.apply(Move::new(2, 2)),
            Err(Error::GameAlreadyOver)
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_after_generated_wraps_rejection() {
        let state = play(&[(0, 0)]);
        let err = state.after_generated(Move::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::IllegalGeneratedMove { row: 0, col: 0, .. }));
        assert!(!err.is_move_rejection());
    }

    #[test]
    fn test_from_string() {
        let state = GameState::from_string("XOX......").unwrap();
        assert_eq!(state.board().cells[0], Cell::X);
        assert_eq!(state.board().cells[1], Cell::O);
        assert_eq!(state.to_move(), Mark::O);

        assert!(matches!(
            GameState::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            GameState::from_string("XO.......X"),
            Err(Error::InvalidBoardLength { got: 10, .. })
        ));
        assert!(matches!(
            GameState::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(GameState::from_string("XXX......").is_err());
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let state = GameState::from_string("........._O").unwrap();
        assert_eq!(state.to_move(), Mark::O);
        assert_eq!(state.first_mover(), Mark::O);

        let state = GameState::from_string("O........_X").unwrap();
        assert_eq!(state.to_move(), Mark::X);
        assert_eq!(state.first_mover(), Mark::O);

        assert!(GameState::from_string("O........_O").is_err());
    }

    #[test]
    fn test_from_string_accepts_grid_layout() {
        let state = GameState::from_string("X.O\n.X.\n..O").unwrap();
        assert_eq!(state.to_move(), Mark::X);
        assert_eq!(state.board().empty_count(), 5);
    }

    #[test]
    fn test_encode_round_trip() {
        let state = play(&[(1, 1), (0, 0), (2, 2)]);
        assert_eq!(state.encode(), "O...X...X_O");
        assert_eq!(GameState::from_string(&state.encode()).unwrap(), state);
    }
}
