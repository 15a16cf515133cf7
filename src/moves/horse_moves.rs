//! Horse: an L of one orthogonal step then one diagonal step outward. The
//! orthogonal leg cell must be empty.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_types::Position;

/// `(jump, leg)` pairs: destination offset and the cell that hobbles it.
pub const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((2, 1), (1, 0)),
    ((2, -1), (1, 0)),
    ((-2, 1), (-1, 0)),
    ((-2, -1), (-1, 0)),
    ((1, 2), (0, 1)),
    ((-1, 2), (0, 1)),
    ((1, -2), (0, -1)),
    ((-1, -2), (0, -1)),
];

pub fn horse_can_reach(piece: &Piece, board: &Board, destination: Position) -> bool {
    let from = piece.position;
    for ((d_row, d_col), (leg_row, leg_col)) in HORSE_JUMPS {
        if from.offset(d_row, d_col) == destination {
            return board.is_empty(from.offset(leg_row, leg_col));
        }
    }
    false
}
