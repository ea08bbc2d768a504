//! Console move input

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use super::output::render_board;
use crate::{
    Error, Result,
    ports::MoveInput,
    tictactoe::{GameState, Mark, Move},
};

/// Parse `"<row> <col>"`; any amount of whitespace between and around the two integers
pub fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

/// Reads moves as text lines, showing the board before every prompt.
///
/// Lines that are not two integers are asked for again here. Well-formed moves
/// outside the board or on taken cells are passed on and rejected by the rules.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Input bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move".to_string(),
                source,
            })?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    fn request_move(&mut self, state: &GameState, mark: Mark) -> Result<Move> {
        write!(self.writer, "{}", render_board(state.board()))?;
        loop {
            write!(self.writer, "{mark} to move (row col): ")?;
            self.writer.flush()?;

            let line = self.read_line()?.ok_or(Error::InputClosed)?;
            match parse_move(&line) {
                Some(mv) => return Ok(mv),
                None => {
                    debug!(input = line.trim(), "unparsable move");
                    writeln!(self.writer, "Enter a row and a column, e.g. `1 2`")?;
                }
            }
        }
    }

    fn reject(&mut self, mv: Move, error: &Error) -> Result<()> {
        writeln!(self.writer, "Cannot play {mv}: {error}")?;
        Ok(())
    }
}
