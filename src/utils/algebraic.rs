//! Cell names in column-letter plus row-number form.
//!
//! Columns run `a`..=`i` from column 0, rows `1`..=`10` from row 0, so Red's
//! General starts on `e1` and Black's on `e10`.

use thiserror::Error;

use crate::errors::MoveError;
use crate::game_state::xiangqi_rules::{COLS, ROWS};
use crate::game_state::xiangqi_types::Position;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected a column letter followed by a row number, got {0:?}")]
    Malformed(String),
    #[error("column {0:?} is outside a-i")]
    ColumnOutOfBoard(char),
    #[error("row {0} is outside 1-10")]
    RowOutOfBoard(u32),
    #[error("{0} is not a board cell")]
    PositionOutOfBoard(Position),
}

impl From<NotationError> for MoveError {
    fn from(_: NotationError) -> Self {
        MoveError::OutOfBounds
    }
}

/// Parse a cell name such as `"e1"` or `"A10"`.
pub fn parse_position(text: &str) -> Result<Position, NotationError> {
    let text = text.trim();
    let mut chars = text.chars();
    let column = chars
        .next()
        .filter(|ch| ch.is_ascii_alphabetic())
        .ok_or_else(|| NotationError::Malformed(text.to_owned()))?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::Malformed(text.to_owned()));
    }

    let column = column.to_ascii_lowercase();
    let col = u32::from(column) - u32::from('a');
    if col >= COLS as u32 {
        return Err(NotationError::ColumnOutOfBoard(column));
    }

    let row: u32 = digits
        .parse()
        .map_err(|_| NotationError::Malformed(text.to_owned()))?;
    if !(1..=ROWS as u32).contains(&row) {
        return Err(NotationError::RowOutOfBoard(row));
    }

    Ok(Position::new((row - 1) as i8, col as i8))
}

pub fn position_to_algebraic(pos: Position) -> Result<String, NotationError> {
    if !pos.is_inside() {
        return Err(NotationError::PositionOutOfBoard(pos));
    }

    let column = char::from(b'a' + pos.col() as u8);
    Ok(format!("{column}{}", pos.row() + 1))
}
