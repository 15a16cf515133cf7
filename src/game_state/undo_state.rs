use crate::game_state::xiangqi_types::{PieceId, Position};

/// Single-ply rollback record produced by a tentative apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub displaced: Option<PieceId>,
}
