//! Elephant: two diagonal steps on its own side of the river, blocked by a
//! piece on the intervening diagonal cell.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_rules::on_own_side;
use crate::game_state::xiangqi_types::Position;

pub const ELEPHANT_JUMPS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

pub fn elephant_can_reach(piece: &Piece, board: &Board, destination: Position) -> bool {
    if !on_own_side(piece.color, destination) {
        return false;
    }
    let from = piece.position;
    for (d_row, d_col) in ELEPHANT_JUMPS {
        if from.offset(d_row, d_col) == destination {
            let eye = from.offset(d_row / 2, d_col / 2);
            return board.is_empty(eye);
        }
    }
    false
}
