//! Move validation and reversible application.
//!
//! A move is validated in the same order the controller reports failures:
//! bounds, empty source, no-op, owner, friendly capture, shape. A move that
//! passes is applied tentatively, judged for self-exposure, and either kept
//! or rolled back from its `UndoState`.

use crate::errors::MoveError;
use crate::game_state::board_state::BoardState;
use crate::game_state::undo_state::UndoState;
use crate::game_state::xiangqi_types::{Color, PieceId, Position};
use crate::move_generation::legal_move_checks::{generals_see_each_other, is_general_attacked};
use crate::moves::piece_rules::legal;

/// Checks every pre-application rule for `mover` moving `from` -> `to` and
/// returns the handle of the piece to move.
pub fn validate_request(
    state: &BoardState,
    mover: Color,
    from: Position,
    to: Position,
) -> Result<PieceId, MoveError> {
    if !state.board.is_inside(from) || !state.board.is_inside(to) {
        return Err(MoveError::OutOfBounds);
    }

    let id = state.board.occupant(from).ok_or(MoveError::EmptySource)?;
    if from == to {
        return Err(MoveError::NoOpMove);
    }

    let piece = state.piece(id);
    if piece.color != mover {
        return Err(MoveError::WrongOwner);
    }
    if state.occupant_piece(to).is_some_and(|target| target.color == mover) {
        return Err(MoveError::FriendlyCapture);
    }
    if !legal(piece, &state.board, to) {
        return Err(MoveError::ShapeViolation);
    }

    Ok(id)
}

/// Lift `id` off its cell and drop it on `to`, remembering any displaced
/// occupant. Player piece sets are left untouched.
pub fn apply_tentative(state: &mut BoardState, id: PieceId, to: Position) -> UndoState {
    let from = state.piece(id).position;
    state.board.clear(from);
    let displaced = state.board.place(to, id);
    state.piece_mut(id).position = to;

    UndoState {
        piece: id,
        from,
        to,
        displaced,
    }
}

/// Exact inverse of [`apply_tentative`].
pub fn rollback(state: &mut BoardState, undo: UndoState) {
    state.board.clear(undo.to);
    if let Some(displaced) = undo.displaced {
        state.board.place(undo.to, displaced);
    }
    state.board.place(undo.from, undo.piece);
    state.piece_mut(undo.piece).position = undo.from;
}

/// Standing-condition veto after a tentative apply by `mover`.
pub fn exposure_after_move(state: &BoardState, mover: Color) -> Result<(), MoveError> {
    if generals_see_each_other(state) {
        return Err(MoveError::IllegalGeneralsSight);
    }
    if is_general_attacked(state, mover) {
        return Err(MoveError::SelfCheckExposure);
    }
    Ok(())
}

/// Try `id` -> `to` and always restore the board afterwards. `Ok` means the
/// move would survive the exposure veto.
pub fn simulate(state: &mut BoardState, id: PieceId, to: Position) -> Result<(), MoveError> {
    let mover = state.piece(id).color;
    let undo = apply_tentative(state, id, to);
    let verdict = exposure_after_move(state, mover);
    rollback(state, undo);
    verdict
}
