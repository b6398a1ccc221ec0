//! Two-player chess rules engine
//!
//! Keeps an 8x8 board, validates moves per piece, refuses moves that leave the
//! mover's king attacked, and reports check and checkmate. Rendering and input
//! handling belong to the caller; everything here is synchronous and pure apart
//! from [`GameState::attempt_move`] committing to its own board.
//!
//! ```
//! use chess_rules::{GameState, MoveOutcome, Square};
//!
//! let mut game = GameState::new();
//! let from: Square = "e2".parse().unwrap();
//! let to: Square = "e4".parse().unwrap();
//! assert_eq!(game.attempt_move(from, to).unwrap(), MoveOutcome::Applied);
//! ```

pub mod api;
pub mod core;
pub mod game;

pub use crate::core::{CoreError, CoreResult, RulesConfig};
pub use crate::game::rules::{Board, EscapeSearch};
pub use crate::game::{
    Color, GameError, GameResult, GameState, IllegalMoveReason, MoveHistory, MoveOutcome,
    MoveRecord, Piece, PieceKind, Square, TurnState,
};
