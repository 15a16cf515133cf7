//! The 10x9 grid of piece handles.
//!
//! `Board` is a plain container: it knows which handle sits on which cell and
//! nothing about movement, ownership or turn order. Cells outside the grid
//! read as empty and ignore writes; callers bounds-check first.

use crate::game_state::xiangqi_rules::{COLS, ROWS};
use crate::game_state::xiangqi_types::{PieceId, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    #[inline]
    pub const fn is_inside(&self, pos: Position) -> bool {
        pos.is_inside()
    }

    #[inline]
    pub fn occupant(&self, pos: Position) -> Option<PieceId> {
        if !pos.is_inside() {
            return None;
        }
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.occupant(pos).is_none()
    }

    /// Put `piece` on `pos`, returning whatever handle was there before.
    pub fn place(&mut self, pos: Position, piece: PieceId) -> Option<PieceId> {
        debug_assert!(pos.is_inside(), "place outside board: {pos}");
        self.cell_mut(pos).and_then(|cell| cell.replace(piece))
    }

    /// Empty `pos`, returning the handle that was there.
    pub fn clear(&mut self, pos: Position) -> Option<PieceId> {
        debug_assert!(pos.is_inside(), "clear outside board: {pos}");
        self.cell_mut(pos).and_then(Option::take)
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, PieceId)> + '_ {
        Position::all().filter_map(|pos| self.occupant(pos).map(|id| (pos, id)))
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Option<PieceId>> {
        if !pos.is_inside() {
            return None;
        }
        Some(&mut self.cells[pos.row() as usize][pos.col() as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_clear_report_previous_occupant() {
        let mut board = Board::new();
        let pos = Position::new(3, 4);
        assert_eq!(board.place(pos, PieceId(1)), None);
        assert_eq!(board.occupant(pos), Some(PieceId(1)));
        assert_eq!(board.place(pos, PieceId(2)), Some(PieceId(1)));
        assert_eq!(board.clear(pos), Some(PieceId(2)));
        assert!(board.is_empty(pos));
        assert_eq!(board.clear(pos), None);
    }

    #[test]
    fn outside_cells_read_empty() {
        let board = Board::new();
        assert!(!board.is_inside(Position::new(10, 0)));
        assert_eq!(board.occupant(Position::new(-1, 3)), None);
        assert_eq!(board.occupant(Position::new(0, 9)), None);
    }

    #[test]
    fn occupied_lists_in_row_major_order() {
        let mut board = Board::new();
        board.place(Position::new(9, 0), PieceId(0));
        board.place(Position::new(0, 8), PieceId(1));
        let cells: Vec<_> = board.occupied().collect();
        assert_eq!(cells, vec![(Position::new(0, 8), PieceId(1)), (Position::new(9, 0), PieceId(0))]);
    }
}
