//! Exhaustive minimax search over the Tic-Tac-Toe game tree
//!
//! The search walks every line of play from a position, scoring terminal
//! states from the point of view of a fixed *maximizing* mark:
//!
//! - a win for the maximizing mark reached at recursion depth `d` scores `10 - d`
//! - a win for its opponent scores `-(10 - d)`
//! - a tie scores `0`
//!
//! Plies where the maximizing mark is to move take the highest child score,
//! the others take the lowest. Ties between equally scored moves go to the
//! first move in row-major order. The depth term makes the search prefer the
//! fastest win and the slowest loss.
//!
//! Every hypothetical move is applied to an owned copy of the state, so sibling
//! branches never share anything. The tree has at most 9 plies and is explored
//! without pruning or caching.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    tictactoe::{GameState, Mark, Move, Outcome, legal_moves},
};

/// Score of a win found at the root; each ply of depth subtracts one
pub const WIN_SCORE: i32 = 10;

/// Best move found by the search and its depth-adjusted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    pub mv: Move,
}

/// Search options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Answer the first two plies of a game with a fixed reply (center, else a
    /// corner) instead of searching. Both plies are draws under best play, so
    /// this only saves time.
    pub opening_book: bool,
}

impl SearchConfig {
    pub fn with_opening_book(mut self, enabled: bool) -> Self {
        self.opening_book = enabled;
        self
    }
}

/// Counters collected during one call to [`Minimax::best_move`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Hypothetical states created
    pub nodes: u64,
    /// Hypothetical states that were won or tied
    pub terminal_leaves: u64,
}

/// Minimax searcher
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Counters from the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the best move for `maximizing` from a position where the game is still on.
    ///
    /// Equivalent to [`Minimax::search`] at depth 0, except that the opening
    /// shortcut is used when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the game is already over.
    #[instrument(skip(self, state), fields(position = %state.encode()))]
    pub fn best_move(&mut self, state: &GameState, maximizing: Mark) -> Result<SearchResult> {
        self.stats = SearchStats::default();

        if let Some(mv) = opening_reply(state).filter(|_| self.config.opening_book) {
            debug!(%mv, "opening reply");
            return Ok(SearchResult { score: 0, mv });
        }

        let result = self.search(state, maximizing, 0)?;
        debug!(
            mv = %result.mv,
            score = result.score,
            nodes = self.stats.nodes,
            leaves = self.stats.terminal_leaves,
            "search finished"
        );
        Ok(result)
    }

    /// Score every legal move of `state` for `maximizing`, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the game is already over.
    pub fn evaluate_moves(
        &mut self,
        state: &GameState,
        maximizing: Mark,
    ) -> Result<Vec<SearchResult>> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        self.stats = SearchStats::default();
        legal_moves(state.board())
            .into_iter()
            .map(|mv| {
                let child = state.after_generated(mv)?;
                let score = self.score_child(&child, maximizing, 0)?;
                Ok(SearchResult { score, mv })
            })
            .collect()
    }

    /// Recursive minimax step.
    ///
    /// `state` must still be in progress. The ply maximizes when
    /// `state.to_move() == maximizing` and minimizes otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] when called on a finished game. Any
    /// other error means an enumerated move was rejected, which is a bug.
    pub fn search(
        &mut self,
        state: &GameState,
        maximizing: Mark,
        depth: i32,
    ) -> Result<SearchResult> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        let maximizing_ply = state.to_move() == maximizing;
        let mut best: Option<SearchResult> = None;

        // With one empty cell left the child is always won or tied, so the
        // loop below resolves it without recursing.
        for mv in legal_moves(state.board()) {
            let child = state.after_generated(mv)?;
            let score = self.score_child(&child, maximizing, depth)?;

            let improves = match best {
                None => true,
                Some(current) if maximizing_ply => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(SearchResult { score, mv });
            }
        }

        debug_assert!(best.is_some(), "in-progress state had no empty cell");
        best.ok_or(Error::NoValidMoves)
    }

    fn score_child(&mut self, child: &GameState, maximizing: Mark, depth: i32) -> Result<i32> {
        self.stats.nodes += 1;

        match child.outcome() {
            Outcome::Won(winner) => {
                self.stats.terminal_leaves += 1;
                let magnitude = WIN_SCORE - depth;
                Ok(if winner == maximizing {
                    magnitude
                } else {
                    -magnitude
                })
            }
            Outcome::Tied => {
                self.stats.terminal_leaves += 1;
                Ok(0)
            }
            Outcome::InProgress => Ok(self.search(child, maximizing, depth + 1)?.score),
        }
    }
}

/// Run a full search with default options
///
/// # Errors
///
/// See [`Minimax::search`].
pub fn search(state: &GameState, maximizing: Mark, depth: i32) -> Result<SearchResult> {
    Minimax::default().search(state, maximizing, depth)
}

/// Fixed reply for the first two plies: the center if free, else the top-left corner.
///
/// Returns `None` once fewer than 8 cells are empty.
pub fn opening_reply(state: &GameState) -> Option<Move> {
    const CENTER: Move = Move::new(1, 1);
    const CORNER: Move = Move::new(0, 0);

    if state.is_terminal() || state.board().empty_count() < 8 {
        return None;
    }
    if state.board().is_empty_at(CENTER) {
        Some(CENTER)
    } else {
        Some(CORNER)
    }
}
