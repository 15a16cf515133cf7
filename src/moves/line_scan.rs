//! Straight-line scans shared by the chariot, the cannon and the generals'
//! sight test.

use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::Position;

/// Unit step from `from` toward `to` when both share a row or a column and
/// differ. `None` otherwise.
#[inline]
pub fn line_step(from: Position, to: Position) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }
    if from.row() == to.row() {
        Some((0, (to.col() - from.col()).signum()))
    } else if from.col() == to.col() {
        Some(((to.row() - from.row()).signum(), 0))
    } else {
        None
    }
}

/// Cells strictly between `from` and `to` along their shared line.
pub fn cells_between(from: Position, to: Position) -> Option<impl Iterator<Item = Position>> {
    let (d_row, d_col) = line_step(from, to)?;
    let span = (to.row() - from.row()).abs().max((to.col() - from.col()).abs());
    Some((1..span).map(move |step| from.offset(d_row * step, d_col * step)))
}

/// Number of occupied cells strictly between `from` and `to`, or `None` when
/// they do not share a line.
pub fn pieces_between(board: &Board, from: Position, to: Position) -> Option<usize> {
    let cells = cells_between(from, to)?;
    Some(cells.filter(|&pos| !board.is_empty(pos)).count())
}
