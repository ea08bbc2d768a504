//! Error types for the minimax-ttt crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: i32, col: i32 },

    #[error("game already over")]
    GameAlreadyOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("illegal move generated at ({row}, {col}) during search: {context}")]
    IllegalGeneratedMove { row: i32, col: i32, context: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark '{mark}' in '{context}' (expected 'X' or 'O')")]
    InvalidMarkString { mark: String, context: String },

    #[error("invalid position '{context}': {reason}")]
    InvalidPosition { context: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error comes from a rejected move rather than an internal fault.
    ///
    /// Interactive players are re-prompted on these; anything else aborts the match.
    pub fn is_move_rejection(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds { .. } | Error::CellOccupied { .. } | Error::GameAlreadyOver
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
