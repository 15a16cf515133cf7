//! Position-string parser.
//!
//! Reads the board field row 9 first, down to row 0, with `/` between rows,
//! digits for runs of empty cells and the letters `k a b n r c p` (uppercase
//! Red). The second field is `w` (Red) or `b` (Black). Trailing fields such as
//! move counters are accepted and ignored.

use thiserror::Error;

use crate::errors::SetupError;
use crate::game_state::board_state::{BoardState, Placement};
use crate::game_state::xiangqi_rules::{COLS, ROWS};
use crate::game_state::xiangqi_types::{Color, PieceKind, Position};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("missing board layout")]
    MissingBoard,
    #[error("missing side-to-move field")]
    MissingSideToMove,
    #[error("board layout must contain 10 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} does not sum to 9 columns")]
    RowWidth { row: usize },
    #[error("invalid piece character {0:?}")]
    InvalidPiece(char),
    #[error("invalid side-to-move field {0:?}")]
    InvalidSideToMove(String),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

pub fn parse_fen(fen: &str) -> Result<BoardState, FenError> {
    let mut parts = fen.split_whitespace();
    let board_part = parts.next().ok_or(FenError::MissingBoard)?;
    let side_part = parts.next().ok_or(FenError::MissingSideToMove)?;

    let placements = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    Ok(BoardState::from_placements(side_to_move, &placements)?)
}

fn parse_board(board_part: &str) -> Result<Vec<Placement>, FenError> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != ROWS {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut placements = Vec::with_capacity(32);
    for (fen_row_idx, row_str) in rows.iter().enumerate() {
        let row = ROWS - 1 - fen_row_idx;
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=COLS as u32).contains(&empty_count) {
                    return Err(FenError::RowWidth { row });
                }
                col += empty_count as usize;
                continue;
            }

            let (kind, color) = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if col >= COLS {
                return Err(FenError::RowWidth { row });
            }
            placements.push((kind, color, Position::new(row as i8, col as i8)));
            col += 1;
        }

        if col != COLS {
            return Err(FenError::RowWidth { row });
        }
    }

    Ok(placements)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" | "r" => Ok(Color::Red),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(PieceKind, Color)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Red
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_fen_char(ch.to_ascii_lowercase()).map(|kind| (kind, color))
}
