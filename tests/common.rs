//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, collections::HashSet, collections::VecDeque, rc::Rc};

use minimax_ttt::{
    Error, Result,
    ports::MoveInput,
    tictactoe::{GameState, Mark, Move},
};

/// Move source that replays a fixed script and records what was rejected
#[derive(Default)]
pub struct ScriptedInput {
    moves: VecDeque<Move>,
    pub rejected: Rc<RefCell<Vec<Move>>>,
}

impl ScriptedInput {
    pub fn new(moves: &[(i32, i32)]) -> Self {
        Self {
            moves: moves.iter().map(|&(r, c)| Move::new(r, c)).collect(),
            rejected: Rc::default(),
        }
    }
}

impl MoveInput for ScriptedInput {
    fn request_move(&mut self, _state: &GameState, _mark: Mark) -> Result<Move> {
        self.moves.pop_front().ok_or(Error::InputClosed)
    }

    fn reject(&mut self, mv: Move, _error: &Error) -> Result<()> {
        self.rejected.borrow_mut().push(mv);
        Ok(())
    }
}

/// Every state reachable from an empty board, for either first mover
pub fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new(Mark::X), GameState::new(Mark::O)];
    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        for mv in state.legal_moves() {
            stack.push(state.after(mv).unwrap());
        }
    }
    seen.into_iter().collect()
}

/// Every cell of the board plus a ring of out-of-range coordinates
pub fn probe_moves() -> Vec<Move> {
    (-1..=3)
        .flat_map(|row| (-1..=3).map(move |col| Move::new(row, col)))
        .collect()
}
