use crate::game_state::board_state::BoardState;
use crate::game_state::xiangqi_types::{Move, PieceKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub mv: Move,
    pub moved_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
    pub annotations: MoveAnnotations,
}

/// Produces every move the controller would accept for the side to move of
/// `state`. Implementations never modify the caller's state.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, state: &BoardState) -> Vec<GeneratedMove>;
}
