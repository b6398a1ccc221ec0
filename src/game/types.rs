//! Type definitions for board coordinates
//!
//! Provides the [`Square`] newtype used everywhere in the rules engine. A square
//! is a `(row, col)` pair in array orientation: row 0 is Black's back rank and
//! row 7 is White's back rank. Columns run from file 'a' (0) to file 'h' (7).
//!
//! Squares can only be built in range, so every function taking a `Square` may
//! index the board without bounds checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Board square position (row, col)
///
/// The fields are private so that a `Square` is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row and column indices
    ///
    /// Returns `None` when either index is outside `0..8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Square;
    /// let e2 = Square::new(6, 4).unwrap();
    /// assert_eq!(e2.to_algebraic(), "e2");
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square reached by adding a signed row/column delta, if still on the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(d_row)?;
        let col = (self.col as i8).checked_add(d_col)?;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Signed `(row, col)` delta from `self` to `other`
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Iterate over all 64 squares, row by row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// The up to eight squares adjacent to this one
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        const STEPS: [(i8, i8); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        STEPS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Create a square from algebraic notation (e.g., "e4")
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Square;
    /// let square = Square::from_algebraic("e4").unwrap();
    /// assert_eq!((square.row(), square.col()), (4, 4));
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let col = match file_char.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return None,
        };
        let rank = rank_char.to_digit(10)? as u8;
        if !(1..=BOARD_SIZE).contains(&rank) {
            return None;
        }

        Square::new(BOARD_SIZE - rank, col)
    }

    /// Convert square to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, BOARD_SIZE - self.row)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = GameError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(GameError::InvalidSquare { row, col })
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| GameError::InvalidNotation {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_algebraic() {
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
        assert_eq!(e2.to_algebraic(), "e2");

        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));

        let h1 = Square::from_algebraic("H1").unwrap();
        assert_eq!((h1.row(), h1.col()), (7, 7));

        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn test_square_from_str_error() {
        assert!("d5".parse::<Square>().is_ok());
        let err = "z3".parse::<Square>().unwrap_err();
        assert!(matches!(err, GameError::InvalidNotation { ref input } if input == "z3"));
    }

    #[test]
    fn test_square_try_from_tuple() {
        let sq = Square::try_from((3, 5)).unwrap();
        assert_eq!((sq.row(), sq.col()), (3, 5));
        assert!(matches!(
            Square::try_from((9, 1)),
            Err(GameError::InvalidSquare { row: 9, col: 1 })
        ));
    }

    #[test]
    fn test_square_offset_and_delta() {
        let d4 = Square::from_algebraic("d4").unwrap();
        assert_eq!(d4.offset(-1, 1), Square::from_algebraic("e5"));
        assert_eq!(Square::new(0, 0).unwrap().offset(-1, 0), None);

        let f6 = Square::from_algebraic("f6").unwrap();
        assert_eq!(d4.delta_to(f6), (-2, 2));
    }

    #[test]
    fn test_square_offset_extreme_deltas() {
        let h1 = Square::new(7, 7).unwrap();
        let a8 = Square::new(0, 0).unwrap();

        assert_eq!(h1.offset(127, 0), None, "Overflowing delta is off the board");
        assert_eq!(h1.offset(0, 127), None);
        assert_eq!(a8.offset(-128, 0), None);
        assert_eq!(a8.offset(0, -128), None);
        assert_eq!(h1.offset(-7, -7), Some(a8));
    }

    #[test]
    fn test_square_neighbors() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.neighbors().count(), 3);

        let edge = Square::new(0, 4).unwrap();
        assert_eq!(edge.neighbors().count(), 5);

        let center = Square::new(4, 4).unwrap();
        assert_eq!(center.neighbors().count(), 8);
        assert!(center.neighbors().all(|n| n != center));
    }

    #[test]
    fn test_all_squares() {
        assert_eq!(Square::all().count(), 64);
    }
}
