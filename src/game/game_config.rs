use crate::game_state::xiangqi_types::Color;

/// Per-game rule switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side that makes the first move of a new game.
    pub first_to_move: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_to_move: Color::Red,
        }
    }
}

impl GameConfig {
    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }
}
