//! `chess-rules` command line driver
//!
//! Replays a list of moves in coordinate notation (`e2e4`) from the standard
//! position and reports each outcome. Rejected moves are reported and skipped.
//!
//! ```text
//! chess-rules f2f3 e7e5 g2g4 d8h4 --board
//! RUST_LOG=debug chess-rules --full-mate-search e2e4 e7e5
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chess_rules::core::default_config_path;
use chess_rules::{EscapeSearch, GameState, MoveOutcome, RulesConfig, Square};

#[derive(Debug, Parser)]
#[command(name = "chess-rules", version, about = "Replay chess moves through the rules engine")]
struct Cli {
    /// Moves in coordinate notation, e.g. e2e4
    moves: Vec<String>,

    /// Print the board after the last move
    #[arg(long)]
    board: bool,

    /// Rules config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Consider blocks and captures by any piece when testing for checkmate
    #[arg(long)]
    full_mate_search: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("failed to load rules config from {}", path.display()))?,
        None => RulesConfig::load_or_default(&default_config_path()),
    };
    if cli.full_mate_search {
        config.escape_search = EscapeSearch::AnyPiece;
    }
    info!("[GAME] Starting replay with {:?}", config.escape_search);

    let mut game = GameState::with_config(config);
    let mut skipped = 0usize;
    for text in &cli.moves {
        let (from, to) = match parse_move(text) {
            Ok(squares) => squares,
            Err(e) => {
                warn!("[GAME] Skipping {:?}: {}", text, e);
                println!("{text}: unreadable move ({e})");
                skipped += 1;
                continue;
            }
        };

        let mover = game.side_to_move();
        let outcome = game
            .attempt_move(from, to)
            .with_context(|| format!("rules engine failed on {text}"))?;
        if !outcome.is_applied() {
            skipped += 1;
        }
        match outcome {
            MoveOutcome::Applied => println!("{}. {mover} {from}-{to}", game.history().len()),
            MoveOutcome::AppliedNowInCheck => {
                println!("{}. {mover} {from}-{to} check", game.history().len())
            }
            MoveOutcome::AppliedCheckmate { winner } => {
                println!("{}. {mover} {from}-{to} checkmate, {winner} wins", game.history().len())
            }
            MoveOutcome::Rejected(reason) => println!("{text}: rejected, {reason}"),
        }
    }

    if skipped > 0 {
        println!("{skipped} of {} moves skipped", cli.moves.len());
    }
    if cli.board {
        println!("{}", game.board());
    }
    if let Some(winner) = game.winner() {
        println!("Result: {winner} wins");
    } else {
        println!("{} to move", game.side_to_move());
    }
    Ok(())
}

/// Split `e2e4` into its two squares
fn parse_move(text: &str) -> Result<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        bail!("expected four characters like e2e4");
    }
    let from: Square = text[..2].parse()?;
    let to: Square = text[2..].parse()?;
    Ok((from, to))
}
