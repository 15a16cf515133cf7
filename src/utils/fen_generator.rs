use crate::game_state::board_state::BoardState;
use crate::game_state::xiangqi_rules::{COLS, ROWS};
use crate::game_state::xiangqi_types::{Color, Position};

/// Board field and side to move, in the form `parse_fen` reads.
pub fn generate_fen(state: &BoardState) -> String {
    let side_to_move = match state.side_to_move {
        Color::Red => "w",
        Color::Black => "b",
    };

    format!("{} {}", generate_board_field(state), side_to_move)
}

fn generate_board_field(state: &BoardState) -> String {
    let mut out = String::new();

    for row in (0..ROWS as i8).rev() {
        let mut empty_count = 0u8;

        for col in 0..COLS as i8 {
            match state.occupant_piece(Position::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}
