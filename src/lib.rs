//! Tic-Tac-Toe with an exhaustive minimax opponent
//!
//! - [`tictactoe`]: board, game state and move rules
//! - [`search`]: depth-scored minimax over the full game tree
//! - [`ports`]: traits for players, move input and observers
//! - [`pipeline`]: concrete players, the match driver and simulations
//! - [`config`]: match configuration, loadable from JSON
//! - [`cli`]: console adapters and subcommands

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
