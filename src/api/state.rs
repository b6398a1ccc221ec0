//! Game state queries

use crate::game::rules::Grid;
use crate::game::{Color, GameResult, GameState};

/// Read-only 8x8 view of the board, indexed `[row][col]`
pub fn query_board(state: &GameState) -> &Grid {
    state.board().squares()
}

/// Is `color`'s king currently attacked?
pub fn is_in_check(state: &GameState, color: Color) -> GameResult<bool> {
    state.is_in_check(color)
}

/// Whose turn it is (the mated side once the game is over)
pub fn side_to_move(state: &GameState) -> Color {
    state.side_to_move()
}
