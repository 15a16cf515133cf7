//! Game controller.
//!
//! `XiangqiGame` is the only type that mutates a position. Each call to
//! `make_move` either commits one whole ply (capture bookkeeping, check
//! flags, turn switch, endgame verdict) or returns a `MoveError` with the
//! board and turn exactly as they were.

use std::fmt;

use crate::errors::{MoveError, MoveResult, SetupError};
use crate::game::game_config::GameConfig;
use crate::game::move_observer::{LogObserver, MoveObserver, MoveRecord};
use crate::game_state::board_state::{BoardSnapshot, BoardState, Placement};
use crate::game_state::piece::Piece;
use crate::game_state::xiangqi_types::{Color, GameState, Move, PieceId, PieceKind, Position};
use crate::move_generation::endgame::{evaluate_endgame, EndgameVerdict};
use crate::move_generation::legal_move_apply::{apply_tentative, exposure_after_move, rollback, validate_request};
use crate::move_generation::legal_move_checks::is_general_attacked;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::algebraic::parse_position;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, FenError};
use crate::utils::render_game_state::render_game_state;

pub struct XiangqiGame {
    state: BoardState,
    game_state: GameState,
    config: GameConfig,
    last_move: Option<MoveRecord>,
    captured: [Vec<PieceId>; 2],
    observer: Box<dyn MoveObserver>,
}

impl Default for XiangqiGame {
    fn default() -> Self {
        Self::new()
    }
}

impl XiangqiGame {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut state = BoardState::new_game();
        state.side_to_move = config.first_to_move;
        Self::start(state, config)
    }

    /// Start from `state` after re-checking its standing conditions and
    /// re-deriving both check flags. The game state is judged immediately,
    /// so a position with no escape for the side to move starts out finished.
    pub fn from_state(mut state: BoardState, config: GameConfig) -> Result<Self, SetupError> {
        state.validate_standing()?;
        Ok(Self::start(state, config))
    }

    fn start(state: BoardState, config: GameConfig) -> Self {
        let mut game = Self {
            state,
            game_state: GameState::InProgress,
            config,
            last_move: None,
            captured: [Vec::new(), Vec::new()],
            observer: Box::new(LogObserver),
        };
        game.game_state = game.judge_side_to_move();
        game
    }

    pub fn from_placements(side_to_move: Color, placements: &[Placement]) -> Result<Self, SetupError> {
        let state = BoardState::from_placements(side_to_move, placements)?;
        Ok(Self::start(state, GameConfig::default()))
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let state = parse_fen(fen)?;
        Ok(Self::start(state, GameConfig::default()))
    }

    /// Replace the observer that receives move events.
    pub fn with_observer(mut self, observer: impl MoveObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn MoveObserver>) {
        self.observer = observer;
    }

    pub fn make_move(&mut self, from: Position, to: Position) -> MoveResult {
        let mover = self.state.side_to_move;
        match self.try_move(mover, from, to) {
            Ok(game_state) => Ok(game_state),
            Err(error) => {
                self.observer.on_rejected(mover, from, to, error);
                Err(error)
            }
        }
    }

    /// `make_move` with cells named like `"b3"`. A name that is not a board
    /// cell is rejected as `OutOfBounds`.
    pub fn make_move_str(&mut self, from: &str, to: &str) -> MoveResult {
        let from = parse_position(from)?;
        let to = parse_position(to)?;
        self.make_move(from, to)
    }

    fn try_move(&mut self, mover: Color, from: Position, to: Position) -> MoveResult {
        if self.game_state.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let id = validate_request(&self.state, mover, from, to)?;
        let undo = apply_tentative(&mut self.state, id, to);
        if let Err(error) = exposure_after_move(&self.state, mover) {
            rollback(&mut self.state, undo);
            return Err(error);
        }

        let opponent = mover.opposite();
        let mut captured = None;
        if let Some(victim) = undo.displaced {
            if self.state.player_mut(opponent).capture(victim) {
                self.captured[opponent.index()].push(victim);
            }
            captured = Some(self.state.piece(victim).kind);
        }

        let gives_check = is_general_attacked(&self.state, opponent);
        self.state.player_mut(opponent).set_in_check(gives_check);
        self.state.player_mut(mover).set_in_check(false);
        self.state.side_to_move = opponent;

        let record = MoveRecord {
            mover,
            kind: self.state.piece(id).kind,
            from,
            to,
            captured,
            gives_check,
        };
        self.last_move = Some(record);
        self.observer.on_accepted(&record);
        if gives_check {
            self.observer.on_check(opponent);
        }

        self.game_state = self.judge_side_to_move();
        if self.game_state.is_over() {
            self.observer.on_game_over(self.game_state);
        }

        Ok(self.game_state)
    }

    fn judge_side_to_move(&mut self) -> GameState {
        let side = self.state.side_to_move;
        match evaluate_endgame(&mut self.state, side) {
            EndgameVerdict::Escape { .. } => GameState::InProgress,
            EndgameVerdict::Checkmate | EndgameVerdict::Stalemate => GameState::Won(side.opposite()),
        }
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.player(color).in_check()
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.state.occupant_piece(pos).copied()
    }

    /// Archetypes of `color`'s captured pieces, oldest capture first.
    pub fn captured(&self, color: Color) -> Vec<PieceKind> {
        self.captured[color.index()]
            .iter()
            .map(|&id| self.state.piece(id).kind)
            .collect()
    }

    pub fn active_count(&self, color: Color) -> usize {
        self.state.player(color).active().len()
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Every move `make_move` would accept right now. Empty once the game
    /// is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.game_state.is_over() {
            return Vec::new();
        }
        legal_moves(&self.state)
    }

    pub fn fen(&self) -> String {
        generate_fen(&self.state)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }
}

impl fmt::Display for XiangqiGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_game_state(&self.state))?;
        match self.game_state {
            GameState::InProgress if self.is_in_check(self.side_to_move()) => {
                write!(f, "{} to move (in check)", self.side_to_move())
            }
            GameState::InProgress => write!(f, "{} to move", self.side_to_move()),
            over => write!(f, "{over}"),
        }
    }
}
