//! Command-line interface for playing, simulating and analyzing games
//!
//! The console adapters here are the only code that touches stdin and stdout.

pub mod commands;
pub mod input;
pub mod output;

pub use input::ConsoleInput;
pub use output::{BoardObserver, outcome_message, render_board};
