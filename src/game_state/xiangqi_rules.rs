//! Canonical board geometry and the opening layout.
//!
//! Rows run 0..=9 from Red's home rank to Black's, columns 0..=8. The river
//! lies between rows 4 and 5; each palace spans columns 3..=5 and the three
//! home rows of its color.

use crate::game_state::xiangqi_types::{Color, PieceKind, Position};

pub const ROWS: usize = 10;
pub const COLS: usize = 9;

/// Last row on Red's side of the river.
pub const RED_RIVER_BANK: i8 = 4;
/// First row on Black's side of the river.
pub const BLACK_RIVER_BANK: i8 = 5;

pub const PALACE_COLS: std::ops::RangeInclusive<i8> = 3..=5;

/// Opening position in the usual Xiangqi FEN letters, Red to move.
pub const STARTING_POSITION_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

#[inline]
pub const fn palace_rows(color: Color) -> std::ops::RangeInclusive<i8> {
    match color {
        Color::Red => 0..=2,
        Color::Black => 7..=9,
    }
}

#[inline]
pub fn in_palace(color: Color, pos: Position) -> bool {
    palace_rows(color).contains(&pos.row()) && PALACE_COLS.contains(&pos.col())
}

/// The nine palace cells of `color`.
pub fn palace_cells(color: Color) -> impl Iterator<Item = Position> {
    palace_rows(color).flat_map(|row| PALACE_COLS.map(move |col| Position::new(row, col)))
}

/// True while `pos` is on `color`'s own half of the board.
#[inline]
pub const fn on_own_side(color: Color, pos: Position) -> bool {
    match color {
        Color::Red => pos.row() <= RED_RIVER_BANK,
        Color::Black => pos.row() >= BLACK_RIVER_BANK,
    }
}

/// Row delta of one forward step for `color`.
#[inline]
pub const fn forward(color: Color) -> i8 {
    match color {
        Color::Red => 1,
        Color::Black => -1,
    }
}

const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// The 32 opening placements, Red first, each side starting with its General.
pub fn starting_layout() -> Vec<(PieceKind, Color, Position)> {
    let mut layout = Vec::with_capacity(32);
    for color in Color::ALL {
        let (home, cannon_row, soldier_row) = match color {
            Color::Red => (0, 2, 3),
            Color::Black => (9, 7, 6),
        };

        layout.push((PieceKind::General, color, Position::new(home, 4)));
        for (col, kind) in BACK_RANK.iter().enumerate() {
            if *kind != PieceKind::General {
                layout.push((*kind, color, Position::new(home, col as i8)));
            }
        }
        for col in [1, 7] {
            layout.push((PieceKind::Cannon, color, Position::new(cannon_row, col)));
        }
        for col in (0..COLS as i8).step_by(2) {
            layout.push((PieceKind::Soldier, color, Position::new(soldier_row, col)));
        }
    }
    layout
}
