//! Game lifecycle management

use crate::core::RulesConfig;
use crate::game::GameState;

/// Create a new game: standard position, White to move
pub fn new_game() -> GameState {
    GameState::new()
}

/// Create a new game with custom rule settings
pub fn new_game_with_config(config: RulesConfig) -> GameState {
    GameState::with_config(config)
}
