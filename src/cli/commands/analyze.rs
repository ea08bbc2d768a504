//! Analyze command - score every move of a position

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use super::parse_mark_token;
use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section, render_board},
    search::{Minimax, SearchConfig, SearchResult},
    tictactoe::{GameState, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax score of every legal move")]
pub struct AnalyzeArgs {
    /// Compact board, e.g. `X...O....` or `X...O...._X` (`.` for empty)
    pub position: String,

    /// Score moves for this mark (defaults to the side to move)
    #[arg(long)]
    pub maximizing: Option<String>,

    /// Let the chosen move come from the fixed opening reply when it applies
    #[arg(long)]
    pub opening_book: bool,
}

/// Scores for every legal move plus the move the bot would pick
#[derive(Debug, Clone)]
pub struct Analysis {
    pub state: GameState,
    pub maximizing: Mark,
    pub scored: Vec<SearchResult>,
    pub chosen: SearchResult,
    pub nodes: u64,
}

pub fn analyze_position(
    position: &str,
    maximizing: Option<Mark>,
    config: SearchConfig,
) -> Result<Analysis> {
    let state = GameState::from_string(position)
        .with_context(|| format!("parsing position '{position}'"))?;
    if state.is_terminal() {
        return Err(anyhow!("position '{position}' is already finished"));
    }
    let maximizing = maximizing.unwrap_or(state.to_move());

    let mut minimax = Minimax::new(config);
    let scored = minimax.evaluate_moves(&state, maximizing)?;
    let nodes = minimax.stats().nodes;
    let chosen = minimax.best_move(&state, maximizing)?;

    Ok(Analysis {
        state,
        maximizing,
        scored,
        chosen,
        nodes,
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let maximizing = args
        .maximizing
        .as_deref()
        .map(|value| parse_mark_token(value, "--maximizing"))
        .transpose()?;
    let config = SearchConfig::default().with_opening_book(args.opening_book);

    let spinner = create_spinner("Searching...")?;
    let analysis = analyze_position(&args.position, maximizing, config);
    spinner.finish_and_clear();
    let analysis = analysis?;

    print_section("Position");
    print!("{}", render_board(analysis.state.board()));
    print_kv("To move", &analysis.state.to_move().to_string());
    print_kv("Scored for", &analysis.maximizing.to_string());
    print_kv("Nodes searched", &format_number(analysis.nodes));

    print_section("Moves");
    for result in &analysis.scored {
        let marker = if result.mv == analysis.chosen.mv { "  <-" } else { "" };
        println!("  {:8} {:>4}{marker}", result.mv.to_string(), result.score);
    }

    println!(
        "\nBest move: {} (score {})",
        analysis.chosen.mv, analysis.chosen.score
    );
    Ok(())
}
