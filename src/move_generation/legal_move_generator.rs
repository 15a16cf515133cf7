//! Full legal move enumeration.
//!
//! Walks every piece in play for the side to move over its candidate cells,
//! filters by shape and ownership, and keeps the moves that survive the
//! self-exposure veto. Optionally annotates whether each move gives check.

use crate::game_state::board_state::BoardState;
use crate::game_state::xiangqi_rules::palace_cells;
use crate::game_state::xiangqi_types::{Move, PieceId, PieceKind, Position};
use crate::move_generation::legal_move_apply::{apply_tentative, exposure_after_move, rollback, simulate};
use crate::move_generation::legal_move_checks::is_general_attacked;
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};
use crate::moves::piece_rules::legal;

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, state: &BoardState) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, state: &BoardState) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(state, false)
    }
}

/// Cells worth testing for `id`: the palace for a General, the whole board
/// for everything else. The piece's own cell is excluded.
pub fn candidate_destinations(state: &BoardState, id: PieceId) -> Vec<Position> {
    let piece = state.piece(id);
    if piece.kind == PieceKind::General {
        palace_cells(piece.color)
            .filter(|&pos| pos != piece.position)
            .collect()
    } else {
        Position::all().filter(|&pos| pos != piece.position).collect()
    }
}

/// Shape- and ownership-legal destinations, before the exposure veto.
pub fn pseudo_legal_destinations(state: &BoardState, id: PieceId) -> Vec<Position> {
    let piece = state.piece(id);
    candidate_destinations(state, id)
        .into_iter()
        .filter(|&to| legal(piece, &state.board, to))
        .filter(|&to| state.occupant_piece(to).map(|target| target.color) != Some(piece.color))
        .collect()
}

/// Every accepted move for `state.side_to_move`, in piece-handle order.
pub fn legal_moves(state: &BoardState) -> Vec<Move> {
    FastLegalMoveGenerator
        .generate_legal_moves(state)
        .into_iter()
        .map(|generated| generated.mv)
        .collect()
}

fn generate_legal_moves_internal(state: &BoardState, annotate: bool) -> Vec<GeneratedMove> {
    let mut scratch = state.clone();
    let side = scratch.side_to_move;
    let movers: Vec<PieceId> = scratch.pieces_in_play(side).collect();

    let mut out = Vec::with_capacity(64);
    for id in movers {
        let from = scratch.piece(id).position;
        let moved_piece = scratch.piece(id).kind;

        for to in pseudo_legal_destinations(&scratch, id) {
            let captured_piece = scratch.occupant_piece(to).map(|target| target.kind);

            let annotations = if annotate {
                let undo = apply_tentative(&mut scratch, id, to);
                let verdict = exposure_after_move(&scratch, side);
                let gives_check = verdict.is_ok() && is_general_attacked(&scratch, side.opposite());
                rollback(&mut scratch, undo);
                if verdict.is_err() {
                    continue;
                }
                MoveAnnotations { gives_check }
            } else {
                if simulate(&mut scratch, id, to).is_err() {
                    continue;
                }
                MoveAnnotations::default()
            };

            out.push(GeneratedMove {
                mv: Move::new(from, to),
                moved_piece,
                captured_piece,
                annotations,
            });
        }
    }

    out
}
