//! Checkmate / stalemate detection.
//!
//! The side to move is terminal when no candidate move survives the same
//! veto the controller applies. The General's palace cells are tried first,
//! then every other piece in play against all 90 cells; the search stops at
//! the first escape. Every simulated move is rolled back before the next.

use crate::game_state::board_state::BoardState;
use crate::game_state::xiangqi_types::{Color, PieceId, Position};
use crate::move_generation::legal_move_apply::simulate;
use crate::move_generation::legal_move_checks::is_general_attacked;
use crate::move_generation::legal_move_generator::pseudo_legal_destinations;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndgameVerdict {
    /// At least one move keeps the General safe.
    Escape { piece: PieceId, to: Position },
    Checkmate,
    Stalemate,
}

impl EndgameVerdict {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, EndgameVerdict::Escape { .. })
    }
}

/// Judge `side`'s position. The board is restored before returning.
pub fn evaluate_endgame(state: &mut BoardState, side: Color) -> EndgameVerdict {
    if let Some((piece, to)) = find_escape(state, side) {
        return EndgameVerdict::Escape { piece, to };
    }

    if is_general_attacked(state, side) {
        EndgameVerdict::Checkmate
    } else {
        EndgameVerdict::Stalemate
    }
}

#[inline]
pub fn has_escape(state: &mut BoardState, side: Color) -> bool {
    find_escape(state, side).is_some()
}

fn find_escape(state: &mut BoardState, side: Color) -> Option<(PieceId, Position)> {
    let general = state.general_id(side);
    let others: Vec<PieceId> = state.pieces_in_play(side).filter(|&id| id != general).collect();

    for id in std::iter::once(general).chain(others) {
        for to in pseudo_legal_destinations(state, id) {
            if simulate(state, id, to).is_ok() {
                return Some((id, to));
            }
        }
    }

    None
}
