//! Piece colors, kinds and the immutable `Piece` value
//!
//! Color carries the orientation data (pawn direction, start row, back rank) so
//! the movement rules are written once and parameterized by color.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this color
    ///
    /// White starts on rows 6-7 and moves towards row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn must stand on to be allowed a double step
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single-letter symbol in English notation (uppercase)
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece on the board
///
/// Pieces are never mutated. Moving a piece copies it to the destination
/// square and clears the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// Diagram symbol: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_orientation_is_symmetric() {
        for color in Color::ALL {
            assert_eq!(color.opponent().opponent(), color);
            assert_eq!(color.forward(), -color.opponent().forward());
            let start = color.pawn_start_row() as i8;
            assert_eq!(start - color.forward(), color.back_rank() as i8);
        }
    }

    #[test]
    fn test_piece_kind_symbols_are_distinct() {
        let mut symbols: Vec<char> = PieceKind::ALL.iter().map(|kind| kind.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), PieceKind::ALL.len());
    }

    #[test]
    fn test_piece_symbols() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).symbol(), 'N');
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).symbol(), 'q');
    }
}
