//! Chariot: any distance along a row or column with nothing in between.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_types::Position;
use crate::moves::line_scan::pieces_between;

pub fn chariot_can_reach(piece: &Piece, board: &Board, destination: Position) -> bool {
    pieces_between(board, piece.position, destination) == Some(0)
}
