//! General: one orthogonal step, never leaving its palace.

use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_rules::in_palace;
use crate::game_state::xiangqi_types::Position;

pub const GENERAL_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn general_can_reach(piece: &Piece, destination: Position) -> bool {
    if !in_palace(piece.color, destination) {
        return false;
    }
    GENERAL_STEPS
        .iter()
        .any(|&(d_row, d_col)| piece.position.offset(d_row, d_col) == destination)
}
