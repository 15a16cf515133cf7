//! Central position model.
//!
//! `BoardState` owns the board grid, the arena of pieces created at setup,
//! both players and the side to move. Pieces are addressed by `PieceId`
//! (their arena index); the board stores handles, never pieces.

use crate::errors::SetupError;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::player::{PieceSet, Player};
use crate::game_state::xiangqi_rules::{in_palace, on_own_side, starting_layout, COLS, ROWS};
use crate::game_state::xiangqi_types::{Color, PieceId, PieceKind, Position};
use crate::move_generation::legal_move_checks::{generals_see_each_other, is_general_attacked};

/// A piece to create at setup: archetype, owner, cell.
pub type Placement = (PieceKind, Color, Position);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pieces: Vec<Piece>,
    players: [Player; 2],
    generals: [PieceId; 2],
}

impl BoardState {
    pub fn new_game() -> Self {
        Self::from_placements(Color::Red, &starting_layout())
            .expect("opening layout should always validate")
    }

    /// Build a position from explicit placements. Handles are assigned in
    /// placement order.
    pub fn from_placements(side_to_move: Color, placements: &[Placement]) -> Result<Self, SetupError> {
        if placements.len() > PieceSet::MAX_PIECES {
            return Err(SetupError::TooManyPieces(PieceSet::MAX_PIECES));
        }

        let mut board = Board::new();
        let mut pieces = Vec::with_capacity(placements.len());
        let mut players = [Player::new(Color::Red), Player::new(Color::Black)];
        let mut generals: [Option<PieceId>; 2] = [None, None];

        for (index, &(kind, color, position)) in placements.iter().enumerate() {
            validate_placement(kind, color, position)?;
            if !board.is_empty(position) {
                return Err(SetupError::CellTaken(position));
            }

            let id = PieceId(index as u8);
            if kind == PieceKind::General {
                if generals[color.index()].is_some() {
                    return Err(SetupError::DuplicateGeneral(color));
                }
                generals[color.index()] = Some(id);
            }

            board.place(position, id);
            pieces.push(Piece::new(kind, color, position));
            players[color.index()].enlist(id);
        }

        let generals = [
            generals[0].ok_or(SetupError::MissingGeneral(Color::Red))?,
            generals[1].ok_or(SetupError::MissingGeneral(Color::Black))?,
        ];

        let mut state = Self {
            board,
            side_to_move,
            pieces,
            players,
            generals,
        };
        state.validate_standing()?;
        Ok(state)
    }

    /// Reject positions the side to move could never have been handed, and
    /// derive both check flags from the board.
    pub(crate) fn validate_standing(&mut self) -> Result<(), SetupError> {
        if generals_see_each_other(self) {
            return Err(SetupError::GeneralsFacing);
        }
        let idle = self.side_to_move.opposite();
        if is_general_attacked(self, idle) {
            return Err(SetupError::IdleSideInCheck(idle));
        }
        let side = self.side_to_move;
        let in_check = is_general_attacked(self, side);
        self.player_mut(side).set_in_check(in_check);
        self.player_mut(idle).set_in_check(false);
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// All pieces ever created, captured ones included.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub(crate) fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    #[inline]
    pub fn general_id(&self, color: Color) -> PieceId {
        self.generals[color.index()]
    }

    #[inline]
    pub fn general(&self, color: Color) -> &Piece {
        self.piece(self.general_id(color))
    }

    pub fn occupant_piece(&self, pos: Position) -> Option<&Piece> {
        self.board.occupant(pos).map(|id| self.piece(id))
    }

    /// True when the board still holds `id` at the piece's stored position.
    /// A piece displaced by a tentative apply is active but not in play.
    #[inline]
    pub fn is_in_play(&self, id: PieceId) -> bool {
        self.board.occupant(self.piece(id).position) == Some(id)
    }

    /// Active pieces of `color` that currently stand on the board.
    pub fn pieces_in_play(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.player(color)
            .active()
            .into_iter()
            .filter(move |&id| self.is_in_play(id))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[None; COLS]; ROWS];
        for (pos, id) in self.board.occupied() {
            let piece = self.piece(id);
            cells[pos.row() as usize][pos.col() as usize] = Some((piece.kind, piece.color));
        }
        BoardSnapshot { cells }
    }
}

fn validate_placement(kind: PieceKind, color: Color, position: Position) -> Result<(), SetupError> {
    if !position.is_inside() {
        return Err(SetupError::OffBoard {
            kind,
            color,
            position,
        });
    }
    match kind {
        PieceKind::General | PieceKind::Advisor if !in_palace(color, position) => {
            Err(SetupError::OutsidePalace {
                kind,
                color,
                position,
            })
        }
        PieceKind::Elephant if !on_own_side(color, position) => {
            Err(SetupError::ElephantAcrossRiver { color, position })
        }
        PieceKind::Soldier => {
            let behind = match color {
                Color::Red => position.row() < 3,
                Color::Black => position.row() > 6,
            };
            if behind {
                Err(SetupError::SoldierBehindStart { color, position })
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Read-only copy of the grid as `(archetype, color)` per cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    cells: [[Option<(PieceKind, Color)>; COLS]; ROWS],
}

impl BoardSnapshot {
    pub fn get(&self, pos: Position) -> Option<(PieceKind, Color)> {
        if !pos.is_inside() {
            return None;
        }
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Rows indexed from row 0 (Red's home rank).
    pub fn rows(&self) -> &[[Option<(PieceKind, Color)>; COLS]; ROWS] {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_generals() -> Vec<Placement> {
        vec![
            (PieceKind::General, Color::Red, Position::new(0, 3)),
            (PieceKind::General, Color::Black, Position::new(9, 5)),
        ]
    }

    #[test]
    fn new_game_places_thirty_two_pieces() {
        let state = BoardState::new_game();
        assert_eq!(state.snapshot().count(), 32);
        assert_eq!(state.side_to_move, Color::Red);
        for color in Color::ALL {
            assert_eq!(state.player(color).active().len(), 16);
            assert!(state.player(color).inactive().is_empty());
            assert!(!state.player(color).in_check());
        }
        assert_eq!(state.general(Color::Red).position, Position::new(0, 4));
        assert_eq!(state.general(Color::Black).position, Position::new(9, 4));
    }

    #[test]
    fn every_stored_position_matches_its_cell() {
        let state = BoardState::new_game();
        for (pos, id) in state.board.occupied() {
            assert_eq!(state.piece(id).position, pos);
        }
    }

    #[test]
    fn rejects_missing_and_duplicate_generals() {
        let only_red = [(PieceKind::General, Color::Red, Position::new(0, 4))];
        assert_eq!(
            BoardState::from_placements(Color::Red, &only_red),
            Err(SetupError::MissingGeneral(Color::Black))
        );

        let mut doubled = bare_generals();
        doubled.push((PieceKind::General, Color::Red, Position::new(1, 4)));
        assert_eq!(
            BoardState::from_placements(Color::Red, &doubled),
            Err(SetupError::DuplicateGeneral(Color::Red))
        );
    }

    #[test]
    fn rejects_illegal_standing_regions() {
        let mut advisor_out = bare_generals();
        advisor_out.push((PieceKind::Advisor, Color::Red, Position::new(3, 4)));
        assert!(matches!(
            BoardState::from_placements(Color::Red, &advisor_out),
            Err(SetupError::OutsidePalace { .. })
        ));

        let mut elephant_over = bare_generals();
        elephant_over.push((PieceKind::Elephant, Color::Black, Position::new(2, 2)));
        assert!(matches!(
            BoardState::from_placements(Color::Red, &elephant_over),
            Err(SetupError::ElephantAcrossRiver { .. })
        ));

        let mut stacked = bare_generals();
        stacked.push((PieceKind::Chariot, Color::Red, Position::new(0, 3)));
        assert_eq!(
            BoardState::from_placements(Color::Red, &stacked),
            Err(SetupError::CellTaken(Position::new(0, 3)))
        );
    }

    #[test]
    fn rejects_facing_generals_and_idle_check() {
        let facing = [
            (PieceKind::General, Color::Red, Position::new(0, 4)),
            (PieceKind::General, Color::Black, Position::new(9, 4)),
        ];
        assert_eq!(
            BoardState::from_placements(Color::Red, &facing),
            Err(SetupError::GeneralsFacing)
        );

        let mut idle_check = bare_generals();
        idle_check.push((PieceKind::Chariot, Color::Red, Position::new(5, 5)));
        assert_eq!(
            BoardState::from_placements(Color::Red, &idle_check),
            Err(SetupError::IdleSideInCheck(Color::Black))
        );
    }

    #[test]
    fn revalidation_catches_a_flipped_turn() {
        let placements = [
            (PieceKind::General, Color::Red, Position::new(0, 4)),
            (PieceKind::Chariot, Color::Black, Position::new(0, 0)),
            (PieceKind::General, Color::Black, Position::new(9, 3)),
        ];
        let mut state = BoardState::from_placements(Color::Red, &placements).expect("valid setup");
        assert!(state.player(Color::Red).in_check());
        assert_eq!(state.validate_standing(), Ok(()));

        state.side_to_move = Color::Black;
        assert_eq!(
            state.validate_standing(),
            Err(SetupError::IdleSideInCheck(Color::Red))
        );
    }

    #[test]
    fn side_to_move_check_flag_is_derived() {
        let mut placements = bare_generals();
        placements.push((PieceKind::Chariot, Color::Red, Position::new(5, 5)));
        let state = BoardState::from_placements(Color::Black, &placements).expect("valid setup");
        assert!(state.player(Color::Black).in_check());
        assert!(!state.player(Color::Red).in_check());
    }
}
