//! Check detection

use super::attack::is_square_attacked;
use super::board_state::Board;
use crate::game::error::GameResult;
use crate::game::pieces::Color;

/// Is the king of `color` attacked by the opposing color?
///
/// # Errors
///
/// [`crate::GameError::KingNotFound`] if `color` has no king on `board`.
pub fn is_in_check(board: &Board, color: Color) -> GameResult<bool> {
    let king = board.find_king(color)?;
    Ok(is_square_attacked(board, king, color.opponent()))
}
