//! Chess rules module - Pure game logic
//!
//! Implements chess move validation and check detection using pure functions
//! over a [`Board`] value. Nothing here owns game state; the turn controller in
//! [`crate::game::state`] drives these functions and commits their results.
//!
//! # Module Structure
//!
//! - `board_state` - Board representation and the standard setup
//! - `piece_moves` - Movement rules for each piece kind
//! - `attack` - Whether a square is attacked by a color
//! - `check` - Whether a color's king is attacked
//! - `simulate` - The legality gate: geometry plus self-check on a copy
//! - `escape` - King safety search used to tell check from checkmate

pub mod attack;
pub mod board_state;
pub mod check;
pub mod escape;
pub mod piece_moves;
pub mod simulate;


// Re-export commonly used items
pub use attack::{attackers_of, is_square_attacked};
pub use board_state::{Board, Grid};
pub use check::is_in_check;
pub use escape::{has_escape, EscapeSearch};
pub use piece_moves::{get_possible_moves, is_valid_move};
pub use simulate::{has_any_legal_move, legal_destinations, try_move};
