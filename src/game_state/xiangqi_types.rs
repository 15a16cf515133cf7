//! Value types shared by the board, the rule set and the game controller.
//!
//! Everything here is `Copy` and compared by value. Board geometry (palace,
//! river, extent) lives in `xiangqi_rules`; this module only names things.

use std::fmt;

use crate::game_state::xiangqi_rules::{COLS, ROWS};

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece archetype. Color is carried separately on `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::General => 0,
            PieceKind::Advisor => 1,
            PieceKind::Elephant => 2,
            PieceKind::Horse => 3,
            PieceKind::Chariot => 4,
            PieceKind::Cannon => 5,
            PieceKind::Soldier => 6,
        }
    }

    /// Lowercase letter used by the position-string format.
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::General => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'b',
            PieceKind::Horse => 'n',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        }
    }

    pub fn from_fen_char(value: char) -> Option<Self> {
        let kind = match value.to_ascii_lowercase() {
            'k' => PieceKind::General,
            'a' => PieceKind::Advisor,
            'b' | 'e' => PieceKind::Elephant,
            'n' | 'h' => PieceKind::Horse,
            'r' => PieceKind::Chariot,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Soldier,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::General => "general",
            PieceKind::Advisor => "advisor",
            PieceKind::Elephant => "elephant",
            PieceKind::Horse => "horse",
            PieceKind::Chariot => "chariot",
            PieceKind::Cannon => "cannon",
            PieceKind::Soldier => "soldier",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board intersection. Row 0 is Red's home rank, row 9 is Black's.
///
/// Construction is unchecked so that out-of-range requests can be carried to
/// the controller and rejected there; use [`Position::is_inside`] (or
/// `Board::is_inside`) before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    #[inline]
    pub const fn is_inside(self) -> bool {
        self.row >= 0 && self.row < ROWS as i8 && self.col >= 0 && self.col < COLS as i8
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Row-major cell index. Only meaningful for positions inside the board.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= ROWS * COLS {
            return None;
        }
        Some(Self::new((index / COLS) as i8, (index % COLS) as i8))
    }

    /// Every cell of the board, row by row starting at row 0.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS * COLS).filter_map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Stable handle to one of the pieces created when a game is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Source and destination of a requested or generated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Outcome state of a game. Once terminal it never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won(Color),
}

impl GameState {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::Won(color) => Some(color),
            GameState::InProgress => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::InProgress => write!(f, "in progress"),
            GameState::Won(color) => write!(f, "{color} won"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_opposite_round_trips() {
        for color in Color::ALL {
            assert_eq!(color.opposite().opposite(), color);
            assert_ne!(color.opposite(), color);
        }
    }

    #[test]
    fn position_bounds_cover_ten_by_nine() {
        assert!(Position::new(0, 0).is_inside());
        assert!(Position::new(9, 8).is_inside());
        assert!(!Position::new(10, 0).is_inside());
        assert!(!Position::new(0, 9).is_inside());
        assert!(!Position::new(-1, 4).is_inside());
        assert_eq!(Position::all().count(), 90);
    }

    #[test]
    fn index_matches_from_index() {
        let pos = Position::new(7, 3);
        assert_eq!(Position::from_index(pos.index()), Some(pos));
        assert_eq!(Position::from_index(90), None);
    }

    #[test]
    fn fen_letters_accept_common_aliases() {
        assert_eq!(PieceKind::from_fen_char('N'), Some(PieceKind::Horse));
        assert_eq!(PieceKind::from_fen_char('h'), Some(PieceKind::Horse));
        assert_eq!(PieceKind::from_fen_char('e'), Some(PieceKind::Elephant));
        assert_eq!(PieceKind::from_fen_char('x'), None);
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_fen_char(kind.fen_char()), Some(kind));
        }
    }

    #[test]
    fn terminal_states_report_over() {
        assert!(!GameState::InProgress.is_over());
        assert!(GameState::Won(Color::Red).is_over());
        assert_eq!(GameState::Won(Color::Black).winner(), Some(Color::Black));
        assert_eq!(GameState::InProgress.winner(), None);
    }
}
