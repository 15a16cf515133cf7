//! Soldier: one step forward; one step sideways once across the river;
//! never backward.

use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_rules::forward;
use crate::game_state::xiangqi_types::Position;

pub fn soldier_can_reach(piece: &Piece, destination: Position) -> bool {
    let from = piece.position;
    if from.offset(forward(piece.color), 0) == destination {
        return true;
    }
    piece.has_crossed_river() && (from.offset(0, 1) == destination || from.offset(0, -1) == destination)
}
