use crate::game_state::xiangqi_rules::on_own_side;
use crate::game_state::xiangqi_types::{Color, PieceKind, Position};

/// One of the pieces created at setup.
///
/// The owning player is `players[color.index()]` of the enclosing
/// `BoardState`; a piece holds no reference to the board or its player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }

    /// Whether the piece stands on the far side of the river. Derived from the
    /// current position every time; only meaningful for soldiers.
    #[inline]
    pub const fn has_crossed_river(&self) -> bool {
        !on_own_side(self.color, self.position)
    }

    /// Glyph used by the board renderer.
    pub const fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::General) => '帥',
            (Color::Red, PieceKind::Advisor) => '仕',
            (Color::Red, PieceKind::Elephant) => '相',
            (Color::Red, PieceKind::Horse) => '傌',
            (Color::Red, PieceKind::Chariot) => '俥',
            (Color::Red, PieceKind::Cannon) => '炮',
            (Color::Red, PieceKind::Soldier) => '兵',
            (Color::Black, PieceKind::General) => '將',
            (Color::Black, PieceKind::Advisor) => '士',
            (Color::Black, PieceKind::Elephant) => '象',
            (Color::Black, PieceKind::Horse) => '馬',
            (Color::Black, PieceKind::Chariot) => '車',
            (Color::Black, PieceKind::Cannon) => '砲',
            (Color::Black, PieceKind::Soldier) => '卒',
        }
    }

    /// Position-string letter: uppercase for Red, lowercase for Black.
    pub const fn fen_char(&self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_is_a_function_of_position_and_color() {
        let red = Piece::new(PieceKind::Soldier, Color::Red, Position::new(4, 0));
        assert!(!red.has_crossed_river());
        let red = Piece { position: Position::new(5, 0), ..red };
        assert!(red.has_crossed_river());
        // Querying twice never changes the answer.
        assert!(red.has_crossed_river());

        let black = Piece::new(PieceKind::Soldier, Color::Black, Position::new(5, 8));
        assert!(!black.has_crossed_river());
        let black = Piece { position: Position::new(4, 8), ..black };
        assert!(black.has_crossed_river());
    }

    #[test]
    fn fen_letter_case_follows_color() {
        assert_eq!(Piece::new(PieceKind::Horse, Color::Red, Position::new(0, 1)).fen_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Horse, Color::Black, Position::new(9, 1)).fen_char(), 'n');
    }
}
