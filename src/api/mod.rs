//! Public API for the rules engine
//!
//! Free functions for a presentation layer that prefers a functional call
//! style over the methods on [`GameState`](crate::GameState).
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, new_game_with_config)
//! - `moves` - Move execution and hints (attempt_move, legal_moves_from)
//! - `state` - Read-only queries (query_board, is_in_check, side_to_move)

mod game;
mod moves;
mod state;

pub use game::{new_game, new_game_with_config};
pub use moves::{attempt_move, legal_moves_from};
pub use state::{is_in_check, query_board, side_to_move};
