//! Single entry point for per-archetype movement legality.
//!
//! The answer only covers shape and blocking. Callers bounds-check the
//! destination beforehand, and the occupant's owner is judged by the caller
//! too: a friendly piece on the destination does not make a shape illegal.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_types::{PieceKind, Position};
use crate::moves::advisor_moves::advisor_can_reach;
use crate::moves::cannon_moves::cannon_can_reach;
use crate::moves::chariot_moves::chariot_can_reach;
use crate::moves::elephant_moves::elephant_can_reach;
use crate::moves::general_moves::general_can_reach;
use crate::moves::horse_moves::horse_can_reach;
use crate::moves::soldier_moves::soldier_can_reach;

#[inline]
pub fn legal(piece: &Piece, board: &Board, destination: Position) -> bool {
    match piece.kind {
        PieceKind::General => general_can_reach(piece, destination),
        PieceKind::Advisor => advisor_can_reach(piece, destination),
        PieceKind::Elephant => elephant_can_reach(piece, board, destination),
        PieceKind::Horse => horse_can_reach(piece, board, destination),
        PieceKind::Chariot => chariot_can_reach(piece, board, destination),
        PieceKind::Cannon => cannon_can_reach(piece, board, destination),
        PieceKind::Soldier => soldier_can_reach(piece, destination),
    }
}
