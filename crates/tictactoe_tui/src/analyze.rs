//! `analyze` subcommand: score every empty cell of a board.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use tictactoe_engine::{
    Board, DRAW_SCORE, GameOutcome, LOSS_SCORE, Position, Score, ScoredMove, WIN_SCORE, search,
};
use tracing::{info, instrument};

/// Analysis of one board from Player Two's point of view.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Board in row notation.
    pub board: String,
    /// Outcome of the board as given.
    pub outcome: GameOutcome,
    /// Move the computer would play.
    pub best: Option<Position>,
    /// Score of every empty cell, row-major.
    pub scores: Vec<ScoredMove>,
    /// Positions visited by the search.
    pub nodes: u64,
}

/// Parses `notation` and searches it unless the game is already decided.
#[instrument]
pub fn analyze(notation: &str) -> Result<Analysis> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("parsing board {:?}", notation))?;
    let outcome = board.outcome();

    let (best, scores, nodes) = if outcome.is_over() {
        (None, Vec::new(), 0)
    } else {
        let report = search::search(&board);
        (report.best(), report.scores().to_vec(), report.nodes())
    };

    info!(%outcome, ?best, nodes, "Board analyzed");
    Ok(Analysis {
        board: board.to_string().replace('\n', " "),
        outcome,
        best,
        scores,
        nodes,
    })
}

fn verdict(score: Score) -> &'static str {
    match score {
        WIN_SCORE => "win",
        LOSS_SCORE => "loss",
        DRAW_SCORE => "draw",
        _ => "?",
    }
}

/// Human-readable table of an analysis.
pub fn render_table(analysis: &Analysis) -> String {
    let mut out = String::new();
    for row in analysis.board.split(' ') {
        let _ = writeln!(out, "  {}", row);
    }
    let _ = writeln!(out);

    if analysis.outcome.is_over() {
        let _ = writeln!(out, "{}", analysis.outcome);
        return out;
    }

    let _ = writeln!(out, "{:<16} {:>10}  {}", "cell", "score", "result");
    for scored in &analysis.scores {
        let marker = if Some(scored.position) == analysis.best {
            "  <- best"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{:<16} {:>10}  {}{}",
            format!("{} {}", scored.position, scored.position.label()),
            scored.score,
            verdict(scored.score),
            marker
        );
    }
    let _ = writeln!(out, "\n{} positions searched", analysis.nodes);
    out
}

/// Runs the subcommand, printing to stdout.
pub fn run(notation: &str, json: bool) -> Result<()> {
    let analysis = analyze(notation)?;
    if json {
        let text = serde_json::to_string_pretty(&analysis).context("serializing analysis")?;
        println!("{}", text);
    } else {
        print!("{}", render_table(&analysis));
    }
    Ok(())
}
