//! Cannon: slides like a chariot; captures only by jumping exactly one
//! screen.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_types::Position;
use crate::moves::line_scan::pieces_between;

pub fn cannon_can_reach(piece: &Piece, board: &Board, destination: Position) -> bool {
    let screens = if board.is_empty(destination) { 0 } else { 1 };
    pieces_between(board, piece.position, destination) == Some(screens)
}
