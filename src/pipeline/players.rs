//! Player implementations: human, minimax bot and random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    ports::{MoveInput, Player},
    search::{Minimax, SearchConfig},
    tictactoe::{GameState, Mark, Move},
};

/// Player whose moves come from an input collaborator
pub struct HumanPlayer {
    name: String,
    mark: Mark,
    input: Box<dyn MoveInput>,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>, mark: Mark, input: Box<dyn MoveInput>) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
        }
    }
}

impl Player for HumanPlayer {
    fn select_move(&mut self, state: &GameState) -> Result<Move> {
        self.input.request_move(state, self.mark)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn on_rejected(&mut self, mv: Move, error: &Error) -> Result<()> {
        self.input.reject(mv, error)
    }
}

/// Minimax player; always returns a legal move for an in-progress state
pub struct BotPlayer {
    name: String,
    mark: Mark,
    minimax: Minimax,
}

impl BotPlayer {
    /// Create a bot that searches every position in full
    pub fn new(mark: Mark) -> Self {
        Self::with_config(mark, SearchConfig::default())
    }

    pub fn with_config(mark: Mark, config: SearchConfig) -> Self {
        Self {
            name: format!("Bot-{mark}"),
            mark,
            minimax: Minimax::new(config),
        }
    }
}

impl Player for BotPlayer {
    #[instrument(skip(self, state), fields(bot = %self.name))]
    fn select_move(&mut self, state: &GameState) -> Result<Move> {
        let result = self.minimax.best_move(state, self.mark)?;
        debug!(mv = %result.mv, score = result.score, "bot chose move");
        Ok(result.mv)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy player (baseline)
pub struct RandomPlayer {
    name: String,
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a random player seeded from entropy
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, random())
    }

    /// Create a random player with a deterministic seed
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            name: format!("Random-{mark}"),
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, state: &GameState) -> Result<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
