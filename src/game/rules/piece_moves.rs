//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! These predicates only answer the geometric question: does the pattern fit
//! and is the path clear. Whether the move exposes the mover's king is decided
//! by [`super::simulate::try_move`].

use super::board_state::Board;
use crate::game::pieces::{Color, PieceKind};
use crate::game::types::Square;

/// Check if a move is valid for a given piece kind
///
/// The result depends on `board` only for path blocking, the destination
/// occupant and pawn rules. A destination holding an opposing piece is a
/// capture, including an opposing king, which is what lets the attack scanner
/// reuse these rules.
pub fn is_valid_move(
    kind: PieceKind,
    color: Color,
    from: Square,
    to: Square,
    board: &Board,
) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if board.piece_color(to) == Some(color) {
        return false;
    }

    match kind {
        PieceKind::Pawn => is_valid_pawn_move(from, to, color, board),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(from, to, board),
        PieceKind::Rook => is_valid_rook_move(from, to, board),
        PieceKind::Queen => is_valid_queen_move(from, to, board),
        PieceKind::King => is_valid_king_move(from, to),
    }
}

/// Get all geometrically valid destinations for a piece
pub fn get_possible_moves(
    kind: PieceKind,
    color: Color,
    position: Square,
    board: &Board,
) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(kind, color, position, to, board))
        .collect()
}

fn is_valid_pawn_move(from: Square, to: Square, color: Color, board: &Board) -> bool {
    let direction = color.forward();
    let (dr, dc) = from.delta_to(to);

    // Forward move
    if dc == 0 && dr == direction {
        return board.is_empty(to);
    }

    // Double move from starting row, both squares must be free
    if dc == 0 && dr == 2 * direction && from.row() == color.pawn_start_row() {
        return match from.offset(direction, 0) {
            Some(intermediate) => board.is_empty(intermediate) && board.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally
    if dc.abs() == 1 && dr == direction {
        return board.piece_color(to) == Some(color.opponent());
    }

    false
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    let (dr, dc) = (dr.abs(), dc.abs());
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn is_valid_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = from.delta_to(to);

    // Must move diagonally
    if dr.abs() != dc.abs() || dr == 0 {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_rook_move(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = from.delta_to(to);

    // Exactly one axis changes
    if (dr == 0) == (dc == 0) {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_valid_queen_move(from: Square, to: Square, board: &Board) -> bool {
    // Queen moves like rook or bishop
    is_valid_rook_move(from, to, board) || is_valid_bishop_move(from, to, board)
}

fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);

    // King moves one square in any direction, no castling
    dr.abs().max(dc.abs()) == 1
}

/// Every square strictly between `from` and `to` is empty
///
/// Callers guarantee the two squares share a row, column or diagonal.
fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = from.delta_to(to);
    let (step_r, step_c) = (dr.signum(), dc.signum());

    let mut current = from.offset(step_r, step_c);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_r, step_c);
    }

    false
}
