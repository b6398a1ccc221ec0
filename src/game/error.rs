//! Error types for game module
//!
//! Provides custom error types for game logic including move validation,
//! board setup and rule invariants.
//!
//! Two kinds of failure are kept apart:
//! - [`IllegalMoveReason`] is a user-recoverable rejection. The caller keeps the
//!   same game state and may retry.
//! - The other [`GameError`] variants signal corrupted state or bad input and
//!   are propagated, never swallowed.

use serde::{Deserialize, Serialize};

use super::pieces::Color;

/// Why a proposed move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// Source square is empty or holds an opponent's piece
    #[error("no piece of the side to move on the source square")]
    NotYourPiece,

    /// Destination holds a piece of the mover's own color
    #[error("destination is occupied by a friendly piece")]
    FriendlyFire,

    /// The piece cannot move that way (pattern or blocked path)
    #[error("the piece cannot move that way")]
    IllegalShape,

    /// The move would leave the mover's own king attacked
    #[error("the move would leave the king in check")]
    SelfCheck,

    /// The move would capture the opposing king
    #[error("a king can never be captured")]
    KingCapture,

    /// The game has already ended
    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move refused by the rules
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveReason),

    /// King missing from the board, the board is corrupted
    #[error("No {color} king on the board")]
    KingNotFound { color: Color },

    /// Coordinates outside the 8x8 board
    #[error("Invalid square ({row}, {col}): indices must be 0-7")]
    InvalidSquare { row: u8, col: u8 },

    /// Unparseable square or move text
    #[error("Invalid notation: {input:?}")]
    InvalidNotation { input: String },

    /// Custom position breaks a board invariant
    #[error("Invalid board setup: {message}")]
    InvalidSetup { message: String },
}

impl GameError {
    /// The rejection reason, if this error is a recoverable illegal move
    pub fn illegal_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            GameError::IllegalMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
