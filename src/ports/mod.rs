//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The match driver talks to players, move sources and observers only through
//! these traits; concrete players live in [`crate::pipeline`] and console
//! adapters in [`crate::cli`].

pub mod input;
pub mod observer;
pub mod player;

pub use input::MoveInput;
pub use observer::Observer;
pub use player::Player;
