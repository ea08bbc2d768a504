//! Game rules checked over every reachable position

mod common;

use minimax_ttt::{
    Error,
    tictactoe::{GameState, LineAnalyzer, Mark, Move, Outcome, WINNING_LINES, legal_moves},
};

use common::{probe_moves, reachable_states};

mod outcome_properties {
    use super::*;

    #[test]
    fn test_outcome_matches_board_for_every_reachable_state() {
        for state in reachable_states() {
            let cells = &state.board().cells;
            let line_owner = WINNING_LINES.iter().find_map(|line| {
                let first = cells[line[0]].mark()?;
                line.iter()
                    .all(|&i| cells[i].mark() == Some(first))
                    .then_some(first)
            });

            match state.outcome() {
                Outcome::Won(mark) => assert_eq!(line_owner, Some(mark), "{state:?}"),
                Outcome::Tied => {
                    assert!(line_owner.is_none());
                    assert!(state.board().is_full());
                }
                Outcome::InProgress => {
                    assert!(line_owner.is_none());
                    assert!(!state.board().is_full());
                }
            }
            assert_eq!(LineAnalyzer::winner(cells), line_owner);
        }
    }

    #[test]
    fn test_terminal_states_have_no_moves() {
        for state in reachable_states() {
            assert_eq!(state.is_terminal(), state.legal_moves().is_empty());
            if !state.is_terminal() {
                assert_eq!(state.legal_moves(), legal_moves(state.board()));
            }
        }
    }

    #[test]
    fn test_every_reachable_state_is_valid() {
        let states = reachable_states();
        assert!(states.iter().all(GameState::is_valid));
        // X-first and O-first games never share a state: the side to move differs
        assert_eq!(states.len(), 2 * 5478);
    }
}

mod apply_properties {
    use super::*;

    #[test]
    fn test_apply_succeeds_iff_legal() {
        for state in reachable_states() {
            for mv in probe_moves() {
                let legal = state.is_legal(mv);
                let mut next = state;
                let result = next.apply(mv);
                assert_eq!(result.is_ok(), legal, "{state:?} {mv:?}");

                if legal {
                    assert_eq!(next.to_move(), state.to_move().opponent());
                    assert_eq!(
                        next.board().count(state.to_move()),
                        state.board().count(state.to_move()) + 1
                    );
                } else {
                    assert_eq!(next, state, "failed apply changed the state");
                }
            }
        }
    }

    #[test]
    fn test_error_kind_precedence() {
        // X X X
        // O O .
        // . . .
        let finished = GameState::from_string("XXXOO....").unwrap();
        for mv in [Move::new(0, 0), Move::new(2, 2), Move::new(3, 0), Move::new(-1, 0)] {
            assert!(matches!(
                finished.after(mv),
                Err(Error::GameAlreadyOver)
            ));
        }

        let state = GameState::from_string("X........").unwrap();
        assert!(matches!(
            state.after(Move::new(-1, 0)),
            Err(Error::OutOfBounds { row: -1, col: 0 })
        ));
        assert!(matches!(
            state.after(Move::new(3, 0)),
            Err(Error::OutOfBounds { row: 3, col: 0 })
        ));
        assert!(matches!(
            state.after(Move::new(0, 0)),
            Err(Error::CellOccupied { row: 0, col: 0 })
        ));
    }
}

mod scenarios {
    use super::*;

    fn play(first: Mark, moves: &[(i32, i32)]) -> GameState {
        let mut state = GameState::new(first);
        for &(r, c) in moves {
            state.apply(Move::new(r, c)).unwrap();
        }
        state
    }

    #[test]
    fn scenario_a_top_row_wins() {
        let state = play(Mark::O, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.outcome(), Outcome::Won(Mark::O));
    }

    #[test]
    fn scenario_b_full_board_without_line_ties() {
        // X O X
        // X O O
        // O X X
        let state = play(Mark::X, &[
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
    fn scenario_c_same_cell_twice() {
        let mut state = GameState::new(Mark::X);
        state.apply(Move::new(1, 1)).unwrap();
        let before = state;
        assert!(matches!(
            state.apply(Move::new(1, 1)),
            Err(Error::CellOccupied { row: 1, col: 1 })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn scenario_d_move_after_win() {
        let mut state = play(Mark::X, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.outcome(), Outcome::Won(Mark::X));
        assert!(matches!(
            state.apply(Move::new(2, 2)),
            Err(Error::GameAlreadyOver)
        ));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_encode_parses_back_for_every_reachable_state() {
        for state in reachable_states() {
            let parsed = GameState::from_string(&state.encode()).unwrap();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn test_impossible_positions_are_rejected() {
        // Too many X
        assert!(GameState::from_string("XXX......").is_err());
        // Both sides hold a line
        assert!(GameState::from_string("XXXOOO...").is_err());
        // Winner to move again
        assert!(GameState::from_string("XXXOO...._X").is_err());
        // Bad characters and lengths
        assert!(GameState::from_string("XO?......").is_err());
        assert!(GameState::from_string("XO").is_err());
        // Extra cells are not dropped
        assert!(matches!(
            GameState::from_string("X.O.X.O..X"),
            Err(Error::InvalidBoardLength { got: 10, .. })
        ));
        assert!(matches!(
            GameState::from_string("XO.......hello"),
            Err(Error::InvalidBoardLength { got: 14, .. })
        ));
        assert!(GameState::from_string("XO........_O").is_err());
    }
}
