//! Board state representation for move validation
//!
//! `Board` is a plain 8x8 grid of optional pieces. It is `Copy`, so every
//! hypothetical position built during validation is an isolated value and the
//! committed board can never be observed half-updated.

use std::fmt;

use tracing::error;

use crate::game::error::{GameError, GameResult};
use crate::game::pieces::{Color, Piece, PieceKind};
use crate::game::types::{Square, BOARD_SIZE};

/// Back rank layout from column 0 to 7
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Read-only grid view handed to presentation code
pub type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Represents the state of the board for move validation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Grid,
}

impl Board {
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard starting position
    ///
    /// Black occupies rows 0-1 and White rows 6-7, queens on column 3 and
    /// kings on column 4.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Build a custom position
    ///
    /// Fails with [`GameError::InvalidSetup`] if a square is listed twice or
    /// either color does not have exactly one king.
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> GameResult<Self> {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            if let Some(existing) = board.get(square) {
                return Err(GameError::InvalidSetup {
                    message: format!("{square} holds both {existing} and {piece}"),
                });
            }
            board.set(square, Some(piece));
        }

        for color in Color::ALL {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.is_king())
                .count();
            if kings != 1 {
                return Err(GameError::InvalidSetup {
                    message: format!("expected exactly one {color} king, found {kings}"),
                });
            }
        }

        Ok(board)
    }

    /// Place pieces without the king-count validation, for geometry tests
    #[cfg(test)]
    pub(crate) fn from_pieces_unchecked(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn piece_color(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Read-only 8x8 view, indexed `[row][col]`
    pub fn squares(&self) -> &Grid {
        &self.squares
    }

    /// Every occupied square holding a piece of `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.get(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// Locate the king of `color`
    ///
    /// A missing king means the board is corrupted, so this is an error rather
    /// than an `Option`.
    pub fn find_king(&self, color: Color) -> GameResult<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.is_king())
            .map(|(square, _)| square)
            .ok_or_else(|| {
                error!("[RULES] CRITICAL: Cannot find {:?} King! Board state may be corrupted", color);
                GameError::KingNotFound { color }
            })
    }

    /// Copy of this board with the occupant of `from` moved to `to`
    ///
    /// Whatever stood on `to` is dropped.
    pub(crate) fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let moving = next.get(from);
        next.set(to, moving);
        next.set(from, None);
        next
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/// Text diagram, White at the bottom, for logs and terminal output
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for cell in cells {
                let symbol = cell.map(Piece::symbol).unwrap_or('.');
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
