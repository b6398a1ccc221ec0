//! Game resources: turn tracking and move history

pub mod history;
pub mod turn;

pub use history::{MoveHistory, MoveRecord};
pub use turn::{CurrentTurn, TurnState};
