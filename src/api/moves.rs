//! Move execution and hints

use crate::game::{GameResult, GameState, MoveOutcome, Square};

/// Attempt a move and return the resulting state with the outcome
///
/// The input state is not modified. On `MoveOutcome::Rejected` the returned
/// state equals the input.
///
/// # Errors
///
/// Only invariant violations such as a missing king.
///
/// # Examples
///
/// ```
/// use chess_rules::api::{attempt_move, new_game, side_to_move};
/// use chess_rules::{Color, MoveOutcome, Square};
///
/// let game = new_game();
/// let e2 = Square::new(6, 4).unwrap();
/// let e4 = Square::new(4, 4).unwrap();
/// let (game, outcome) = attempt_move(&game, e2, e4).unwrap();
/// assert_eq!(outcome, MoveOutcome::Applied);
/// assert_eq!(side_to_move(&game), Color::Black);
/// ```
pub fn attempt_move(
    state: &GameState,
    from: Square,
    to: Square,
) -> GameResult<(GameState, MoveOutcome)> {
    let mut next = state.clone();
    let outcome = next.attempt_move(from, to)?;
    Ok((next, outcome))
}

/// Legal destinations for the piece on `from`
pub fn legal_moves_from(state: &GameState, from: Square) -> GameResult<Vec<Square>> {
    state.legal_moves_from(from)
}
