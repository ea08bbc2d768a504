//! Input port - where human moves come from

use crate::{
    Error, Result,
    tictactoe::{GameState, Mark, Move},
};

/// Source of moves for a human player
///
/// The core never parses text itself: an input collaborator turns whatever it
/// reads into a [`Move`], and the game state decides whether the move is legal.
pub trait MoveInput {
    /// Ask for the next move of `mark` in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is exhausted or unreadable. Malformed
    /// text should be handled (re-asked) by the implementation itself.
    fn request_move(&mut self, state: &GameState, mark: Mark) -> Result<Move>;

    /// Tell the source that its last move was rejected by the rules.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn reject(&mut self, _mv: Move, _error: &Error) -> Result<()> {
        Ok(())
    }
}
