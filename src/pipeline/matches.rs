//! Match driver: alternates players until the game is won or tied

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::players::{BotPlayer, HumanPlayer, RandomPlayer};
use crate::{
    Error, Result,
    config::{MatchConfig, PlayerKind},
    ports::{MoveInput, Observer, Player},
    tictactoe::{GameState, Mark, Move, Outcome},
};

/// Two seated players and the mark that opens
pub struct MatchSetup {
    first_mover: Mark,
    x: Box<dyn Player>,
    o: Box<dyn Player>,
}

impl MatchSetup {
    /// Seat two players.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `x` does not play X or `o`
    /// does not play O.
    pub fn new(x: Box<dyn Player>, o: Box<dyn Player>, first_mover: Mark) -> Result<Self> {
        for (player, seat) in [(&x, Mark::X), (&o, Mark::O)] {
            if player.mark() != seat {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "player '{}' plays {} but was seated as {seat}",
                        player.name(),
                        player.mark()
                    ),
                });
            }
        }
        Ok(Self { first_mover, x, o })
    }

    /// Build both players from a configuration.
    ///
    /// `human_input` is called once per human seat to supply its move source.
    /// Random players are seeded from `config.seed`, offset per mark.
    pub fn from_config<F>(config: &MatchConfig, mut human_input: F) -> Result<Self>
    where
        F: FnMut(Mark) -> Box<dyn MoveInput>,
    {
        let mut build = |mark: Mark| -> Box<dyn Player> {
            match config.kind_for(mark) {
                PlayerKind::Human => Box::new(HumanPlayer::new(
                    format!("Human-{mark}"),
                    mark,
                    human_input(mark),
                )),
                PlayerKind::Bot => Box::new(BotPlayer::with_config(mark, config.search_config())),
                PlayerKind::Random => match config.seed {
                    Some(seed) => Box::new(RandomPlayer::with_seed(
                        mark,
                        seed.wrapping_add(seed_offset(mark)),
                    )),
                    None => Box::new(RandomPlayer::new(mark)),
                },
            }
        };
        let x = build(Mark::X);
        let o = build(Mark::O);
        Self::new(x, o, config.first_mover)
    }

    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    pub fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.x.as_ref(),
            Mark::O => self.o.as_ref(),
        }
    }

    pub fn player_mut(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.x.as_mut(),
            Mark::O => self.o.as_mut(),
        }
    }

    /// Reseed both players; O gets `seed + 1`
    pub fn reseed(&mut self, seed: u64) -> Result<()> {
        for mark in [Mark::X, Mark::O] {
            self.player_mut(mark)
                .set_rng_seed(seed.wrapping_add(seed_offset(mark)))?;
        }
        Ok(())
    }
}

fn seed_offset(mark: Mark) -> u64 {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

/// Record of a finished match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub first_mover: Mark,
    /// Accepted moves in play order
    pub moves: Vec<(Mark, Move)>,
    pub outcome: Outcome,
    /// Moves from interactive players that the rules refused
    pub rejected: usize,
    /// Position when the game ended
    pub final_state: GameState,
}

impl MatchReport {
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn is_tie(&self) -> bool {
        self.outcome == Outcome::Tied
    }
}

/// Play one match from an empty board.
///
/// Rejected moves from interactive players are reported back to the player
/// and asked for again. A rejected move from any other player is an error.
///
/// # Errors
///
/// Returns the first error raised by a player, an observer, or by the rules
/// for a non-interactive player.
pub fn play_match(
    setup: &mut MatchSetup,
    match_num: usize,
    observers: &mut [Box<dyn Observer>],
) -> Result<MatchReport> {
    let mut state = GameState::new(setup.first_mover);
    let mut moves = Vec::new();
    let mut rejected = 0;

    debug!(
        match_num,
        x = setup.x.name(),
        o = setup.o.name(),
        first = %setup.first_mover,
        "match started"
    );
    for observer in observers.iter_mut() {
        observer.on_match_start(match_num, &state)?;
    }

    while !state.is_terminal() {
        let mark = state.to_move();
        let player = setup.player_mut(mark);
        let mv = player.select_move(&state)?;

        match state.apply(mv) {
            Ok(()) => {}
            Err(err) if err.is_move_rejection() && player.is_interactive() => {
                warn!(player = player.name(), %mv, error = %err, "move rejected");
                rejected += 1;
                player.on_rejected(mv, &err)?;
                continue;
            }
            Err(err) => {
                return Err(Error::IllegalGeneratedMove {
                    row: mv.row,
                    col: mv.col,
                    context: format!("{} proposed it: {err}", player.name()),
                });
            }
        }

        moves.push((mark, mv));
        for observer in observers.iter_mut() {
            observer.on_move(match_num, mark, mv, &state)?;
        }
    }

    let report = MatchReport {
        first_mover: setup.first_mover,
        moves,
        outcome: state.outcome(),
        rejected,
        final_state: state,
    };
    info!(match_num, outcome = ?report.outcome, plies = report.moves.len(), "match finished");

    for observer in observers.iter_mut() {
        observer.on_match_end(match_num, &report)?;
    }
    Ok(report)
}
