//! Player port - the capability every participant of a match provides

use crate::{
    Error, Result,
    tictactoe::{GameState, Mark, Move},
};

/// A participant in a match
///
/// Implementations decide moves; the match driver applies them. Humans ask an
/// input collaborator, bots run the minimax search, and the random baseline
/// samples a legal move.
///
/// # Examples
///
/// ```
/// use minimax_ttt::{
///     pipeline::BotPlayer,
///     ports::Player,
///     tictactoe::{GameState, Mark},
/// };
///
/// let mut bot = BotPlayer::new(Mark::X);
/// let state = GameState::from_string("XX.OO....").unwrap();
/// let mv = bot.select_move(&state).unwrap();
/// assert_eq!((mv.row, mv.col), (0, 2));
/// ```
pub trait Player {
    /// Choose a move for the given state.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (finished game, closed input).
    fn select_move(&mut self, state: &GameState) -> Result<Move>;

    /// The mark this player places
    fn mark(&self) -> Mark;

    /// Display name used in logs and reports
    fn name(&self) -> &str;

    /// Whether rejected moves should be retried instead of aborting the match.
    ///
    /// # Default Implementation
    ///
    /// Returns `false`: automated players only ever propose legal moves, so a
    /// rejection from them is a fault.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Called when the match driver rejected the player's last move.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_rejected(&mut self, _mv: Move, _error: &Error) -> Result<()> {
        Ok(())
    }

    /// Reseed any internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing; deterministic players ignore seeds.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
