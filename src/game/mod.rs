//! Game module: board model, rules and turn control
//!
//! - `types` / `pieces` - squares, colors, piece kinds
//! - `rules` - pure legality and check functions over a `Board`
//! - `resources` - turn tracking and move history
//! - `state` - `GameState`, the owner of the committed board

pub mod error;
pub mod pieces;
pub mod resources;
pub mod rules;
pub mod state;
pub mod types;

pub use error::{GameError, GameResult, IllegalMoveReason};
pub use pieces::{Color, Piece, PieceKind};
pub use resources::{MoveHistory, MoveRecord, TurnState};
pub use state::{GameState, MoveOutcome};
pub use types::Square;
