//! Turn tracking
//!
//! Manages whose turn it is, the move counter, and the terminal state reached
//! on checkmate. This is the single source of truth for whose turn it is.
//!
//! # Turn Flow
//!
//! ```text
//! WhiteToMove ──move──▶ BlackToMove ──move──▶ WhiteToMove ...
//!       │                    │
//!       └──── checkmate ─────┴──▶ Terminal { winner }
//! ```
//!
//! Move numbers follow standard chess notation and increment after Black moves.

use serde::{Deserialize, Serialize};

use crate::game::pieces::Color;

/// Turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    WhiteToMove,
    BlackToMove,
    /// Game over by checkmate, no further moves are accepted
    Terminal { winner: Color },
}

impl TurnState {
    pub fn to_move(color: Color) -> Self {
        match color {
            Color::White => TurnState::WhiteToMove,
            Color::Black => TurnState::BlackToMove,
        }
    }

    /// The color expected to move, or `None` once the game is over
    pub fn active_color(self) -> Option<Color> {
        match self {
            TurnState::WhiteToMove => Some(Color::White),
            TurnState::BlackToMove => Some(Color::Black),
            TurnState::Terminal { .. } => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Terminal { .. })
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            TurnState::Terminal { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Tracks the turn state and the current move number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub state: TurnState,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            state: TurnState::WhiteToMove,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    pub fn starting_with(color: Color) -> Self {
        Self {
            state: TurnState::to_move(color),
            move_number: 1,
        }
    }

    /// Switch to the other player's turn
    ///
    /// Increments the move number when Black hands the turn back to White.
    /// Does nothing once the game is over.
    pub fn switch(&mut self) {
        match self.state {
            TurnState::WhiteToMove => self.state = TurnState::BlackToMove,
            TurnState::BlackToMove => {
                self.state = TurnState::WhiteToMove;
                self.move_number += 1;
            }
            TurnState::Terminal { .. } => {}
        }
    }

    /// End the game with `winner` as the checkmating side
    pub fn finish(&mut self, winner: Color) {
        self.state = TurnState::Terminal { winner };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_turn_default() {
        let turn = CurrentTurn::default();

        assert_eq!(turn.state, TurnState::WhiteToMove, "White should move first");
        assert_eq!(turn.move_number, 1, "Game should start at move 1");
    }

    #[test]
    fn test_turn_switch_white_to_black() {
        let mut turn = CurrentTurn::default();
        turn.switch();

        assert_eq!(turn.state, TurnState::BlackToMove);
        assert_eq!(turn.move_number, 1, "Move number should not increment when white moves");
    }

    #[test]
    fn test_turn_switch_black_to_white() {
        let mut turn = CurrentTurn::starting_with(Color::Black);
        turn.switch();

        assert_eq!(turn.state, TurnState::WhiteToMove);
        assert_eq!(turn.move_number, 2, "Move number should increment when black completes their turn");
    }

    #[test]
    fn test_terminal_is_sticky() {
        let mut turn = CurrentTurn::default();
        turn.finish(Color::Black);
        turn.switch();

        assert!(turn.state.is_terminal());
        assert_eq!(turn.state.winner(), Some(Color::Black));
        assert_eq!(turn.state.active_color(), None);
        assert_eq!(turn.move_number, 1);
    }
}
