//! Text board renderer.
//!
//! Draws row 9 at the top so Red sits at the bottom, with a river line
//! between rows 5 and 4 and column letters above and below.

use crate::game_state::board_state::BoardState;
use crate::game_state::xiangqi_rules::{BLACK_RIVER_BANK, COLS, ROWS};
use crate::game_state::xiangqi_types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Traditional characters; each takes two terminal columns.
    #[default]
    Glyph,
    /// Position-string letters, uppercase Red.
    Letter,
}

pub fn render_game_state(state: &BoardState) -> String {
    render_with_style(state, RenderStyle::Glyph)
}

pub fn render_with_style(state: &BoardState, style: RenderStyle) -> String {
    let header = column_header(style);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in (0..ROWS as i8).rev() {
        out.push_str(&format!("{:>2} ", row + 1));

        for col in 0..COLS as i8 {
            match state.occupant_piece(Position::new(row, col)) {
                Some(piece) => match style {
                    RenderStyle::Glyph => out.push(piece.glyph()),
                    RenderStyle::Letter => out.push(piece.fen_char()),
                },
                None => match style {
                    RenderStyle::Glyph => out.push_str("· "),
                    RenderStyle::Letter => out.push('·'),
                },
            }

            if col < COLS as i8 - 1 {
                out.push(' ');
            }
        }

        out.push_str(&format!(" {}", row + 1));
        out.push('\n');

        if row == BLACK_RIVER_BANK {
            out.push_str(&river_line(style));
            out.push('\n');
        }
    }

    out.push_str(&header);
    out
}

fn column_header(style: RenderStyle) -> String {
    let sep = match style {
        RenderStyle::Glyph => "  ",
        RenderStyle::Letter => " ",
    };
    let letters: Vec<String> = (b'a'..b'a' + COLS as u8).map(|c| char::from(c).to_string()).collect();
    format!("   {}", letters.join(sep))
}

fn river_line(style: RenderStyle) -> String {
    let width = match style {
        RenderStyle::Glyph => COLS * 3 - 1,
        RenderStyle::Letter => COLS * 2 - 1,
    };
    format!("   {}", "~".repeat(width))
}
