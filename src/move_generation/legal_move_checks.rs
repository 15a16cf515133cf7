//! Attack and sight queries.
//!
//! Attack reach reuses movement legality: a cell is attacked when some enemy
//! piece in play could legally move onto it. That includes the enemy
//! General's own one-step reach.

use crate::game_state::board_state::BoardState;
use crate::game_state::xiangqi_types::{Color, Position};
use crate::moves::line_scan::pieces_between;
use crate::moves::piece_rules::legal;

#[inline]
pub fn general_position(state: &BoardState, color: Color) -> Position {
    state.general(color).position
}

/// True if any piece of `color`'s opponent could move onto `position`.
pub fn is_attacked(state: &BoardState, color: Color, position: Position) -> bool {
    state
        .pieces_in_play(color.opposite())
        .any(|id| legal(state.piece(id), &state.board, position))
}

#[inline]
pub fn is_general_attacked(state: &BoardState, color: Color) -> bool {
    is_attacked(state, color, general_position(state, color))
}

/// Both generals on one column with nothing between them.
pub fn generals_see_each_other(state: &BoardState) -> bool {
    let red = general_position(state, Color::Red);
    let black = general_position(state, Color::Black);
    red.col() == black.col() && pieces_between(&state.board, red, black) == Some(0)
}

/// Every enemy piece that currently attacks `color`'s general.
pub fn checkers(state: &BoardState, color: Color) -> Vec<Position> {
    let target = general_position(state, color);
    state
        .pieces_in_play(color.opposite())
        .map(|id| state.piece(id))
        .filter(|piece| legal(piece, &state.board, target))
        .map(|piece| piece.position)
        .collect()
}
