//! Move simulator and legality gate
//!
//! A candidate move is applied to a copy of the board, and the copy is checked
//! for the mover's own king being attacked. The input board is never touched,
//! so a rejected hypothetical cannot leak into committed state.

use tracing::debug;

use super::board_state::Board;
use super::check::is_in_check;
use super::piece_moves::{get_possible_moves, is_valid_move};
use crate::game::error::{GameError, GameResult, IllegalMoveReason};
use crate::game::pieces::Color;
use crate::game::types::Square;

/// Validate a move for `mover` and return the resulting board
///
/// # Errors
///
/// - [`GameError::IllegalMove`] with the first failed rule:
///   `NotYourPiece`, `FriendlyFire`, `IllegalShape`, `KingCapture`, `SelfCheck`.
/// - [`GameError::KingNotFound`] if `board` has no `mover` king.
pub fn try_move(board: &Board, from: Square, to: Square, mover: Color) -> GameResult<Board> {
    let piece = match board.get(from) {
        Some(piece) if piece.color == mover => piece,
        _ => return Err(reject(from, to, IllegalMoveReason::NotYourPiece)),
    };

    let captured = board.get(to);
    if captured.map(|p| p.color) == Some(mover) {
        return Err(reject(from, to, IllegalMoveReason::FriendlyFire));
    }

    if !is_valid_move(piece.kind, mover, from, to, board) {
        return Err(reject(from, to, IllegalMoveReason::IllegalShape));
    }

    if captured.is_some_and(|p| p.is_king()) {
        return Err(reject(from, to, IllegalMoveReason::KingCapture));
    }

    let hypothetical = board.with_move(from, to);
    if is_in_check(&hypothetical, mover)? {
        return Err(reject(from, to, IllegalMoveReason::SelfCheck));
    }

    Ok(hypothetical)
}

/// Every destination from `from` that passes the full legality gate
///
/// Empty when `from` does not hold a piece of `mover`.
pub fn legal_destinations(board: &Board, from: Square, mover: Color) -> GameResult<Vec<Square>> {
    let piece = match board.get(from) {
        Some(piece) if piece.color == mover => piece,
        _ => return Ok(Vec::new()),
    };

    let mut legal = Vec::new();
    for to in get_possible_moves(piece.kind, mover, from, board) {
        if passes_gate(board, from, to, mover)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Does `mover` have at least one legal move with any piece?
pub fn has_any_legal_move(board: &Board, mover: Color) -> GameResult<bool> {
    for (from, piece) in board.pieces_of(mover) {
        for to in get_possible_moves(piece.kind, mover, from, board) {
            if passes_gate(board, from, to, mover)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// `try_move` as a boolean, still propagating invariant failures
pub(crate) fn passes_gate(board: &Board, from: Square, to: Square, mover: Color) -> GameResult<bool> {
    match try_move(board, from, to, mover) {
        Ok(_) => Ok(true),
        Err(GameError::IllegalMove(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

fn reject(from: Square, to: Square, reason: IllegalMoveReason) -> GameError {
    debug!("[RULES] {}-{} rejected: {}", from, to, reason);
    GameError::IllegalMove(reason)
}
