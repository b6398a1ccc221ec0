//! King safety search
//!
//! Decides whether a checked side can get out of check. The default search only
//! tries king steps to adjacent squares. It ignores blocks and captures by
//! other pieces, so it may declare mate where a full search would not.
//! [`EscapeSearch::AnyPiece`] runs the full test.

use serde::{Deserialize, Serialize};

use super::board_state::Board;
use super::simulate::{has_any_legal_move, passes_gate};
use crate::game::error::GameResult;
use crate::game::pieces::Color;

/// Which replies count as escaping check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeSearch {
    /// Only king moves to the up to eight neighbouring squares
    #[default]
    KingOnly,
    /// Any legal move by any piece
    AnyPiece,
}

/// Can `color`, currently in check, get out of it?
pub fn has_escape(board: &Board, color: Color, mode: EscapeSearch) -> GameResult<bool> {
    match mode {
        EscapeSearch::KingOnly => has_king_escape(board, color),
        EscapeSearch::AnyPiece => has_any_legal_move(board, color),
    }
}

fn has_king_escape(board: &Board, color: Color) -> GameResult<bool> {
    let king = board.find_king(color)?;
    for target in king.neighbors() {
        if passes_gate(board, king, target, color)? {
            return Ok(true);
        }
    }
    Ok(false)
}
