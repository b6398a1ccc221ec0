//! Move history tracking
//!
//! Maintains an append-only chronological record of committed moves. It is
//! written by the turn controller after a move passes the legality gate and is
//! never consulted by the rules themselves.

use serde::{Deserialize, Serialize};

use crate::game::pieces::{Color, Piece};
use crate::game::types::Square;

/// One committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// The move left the opponent in check
    pub gave_check: bool,
    pub gave_checkmate: bool,
}

/// Complete move history for the current game
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of half-moves (ply) made
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move by zero-based ply index
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// Pieces captured by `color`, in capture order
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.moves
            .iter()
            .filter(|record| record.piece.color == color)
            .filter_map(|record| record.captured)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pieces::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn record(piece: Piece, from: &str, to: &str, captured: Option<Piece>) -> MoveRecord {
        MoveRecord {
            piece,
            from: sq(from),
            to: sq(to),
            captured,
            gave_check: false,
            gave_checkmate: false,
        }
    }

    #[test]
    fn test_history_starts_empty() {
        let history = MoveHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last_move().is_none());
    }

    #[test]
    fn test_history_records_in_order() {
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);

        let mut history = MoveHistory::default();
        history.add_move(record(white_pawn, "e2", "e4", None));
        history.add_move(record(black_pawn, "d7", "d5", None));
        history.add_move(record(white_pawn, "e4", "d5", Some(black_pawn)));

        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).map(|r| r.to), Some(sq("e4")));
        assert_eq!(history.last_move().and_then(|r| r.captured), Some(black_pawn));
        assert_eq!(history.captured_by(Color::White), vec![black_pawn]);
        assert!(history.captured_by(Color::Black).is_empty());
        assert_eq!(history.iter().count(), 3);
    }
}
