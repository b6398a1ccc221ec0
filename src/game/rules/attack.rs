//! Attack scanner
//!
//! Reuses the movement rules offensively: a square is attacked by a color if
//! any of its pieces could move there.

use super::board_state::Board;
use super::piece_moves::is_valid_move;
use crate::game::pieces::Color;
use crate::game::types::Square;

/// True iff `target` is attacked by any piece of `by`
///
/// When `target` holds a piece of the other color (the king, during check
/// detection) the movement rules treat it as a capture, and pawns then only
/// count diagonally. On an empty `target` a straight pawn step also counts.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| is_valid_move(piece.kind, by, from, target, board))
}

/// Squares holding pieces of `by` that attack `target`
pub fn attackers_of(board: &Board, target: Square, by: Color) -> Vec<Square> {
    board
        .pieces_of(by)
        .filter(|&(from, piece)| is_valid_move(piece.kind, by, from, target, board))
        .map(|(from, _)| from)
        .collect()
}
