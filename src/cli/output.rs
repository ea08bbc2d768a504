//! Output formatting, board rendering and progress spinners for the CLI

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    pipeline::MatchReport,
    ports::Observer,
    tictactoe::{Board, Cell, GameState, Mark, Move, Outcome},
};

/// Render the board with row and column labels.
///
/// ```text
///
///    0  1  2
/// 0  X  O
/// 1     X
/// 2        O
///
/// ```
///
/// Every cell is followed by two spaces, so rows keep a fixed width.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("\n   0  1  2\n");
    for row in 0..3 {
        out.push_str(&format!("{row}  "));
        for col in 0..3 {
            let cell = board.get(Move::new(row, col)).unwrap_or(Cell::Empty);
            let symbol = match cell {
                Cell::Empty => ' ',
                marked => marked.to_char(),
            };
            out.push(symbol);
            out.push_str("  ");
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Final message for a finished game, `None` while it is still on
pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Won(Mark::X) => Some("X wins!"),
        Outcome::Won(Mark::O) => Some("O wins!"),
        Outcome::Tied => Some("Tie!"),
        Outcome::InProgress => None,
    }
}

/// Create a spinner for long searches
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Narrates a match on a console: announces automated moves and prints the
/// final board with the outcome message
pub struct BoardObserver<W: Write> {
    out: W,
    announced: Vec<Mark>,
}

impl<W: Write> BoardObserver<W> {
    /// `announced` lists the marks whose moves are printed as they happen
    pub fn new(out: W, announced: Vec<Mark>) -> Self {
        Self { out, announced }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for BoardObserver<W> {
    fn on_move(&mut self, _match_num: usize, mark: Mark, mv: Move, _state: &GameState) -> Result<()> {
        if self.announced.contains(&mark) {
            writeln!(self.out, "{mark} plays {mv}")?;
        }
        Ok(())
    }

    fn on_match_end(&mut self, _match_num: usize, report: &MatchReport) -> Result<()> {
        write!(self.out, "{}", render_board(report.final_state.board()))?;
        if let Some(message) = outcome_message(report.outcome) {
            writeln!(self.out, "{message}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
