//! Error types returned by the engine.
//!
//! Every rejection is a value. `MoveError` is the reason a requested move was
//! refused; the board and the turn are unchanged whenever one is returned.
//! `SetupError` covers custom positions that violate the standing invariants
//! of the game (one general per side, pieces on their legal regions).

use thiserror::Error;

use crate::game_state::xiangqi_types::{Color, GameState, PieceKind, Position};

/// `Ok` carries the game state after an accepted move.
pub type MoveResult = Result<GameState, MoveError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    #[error("coordinate outside the 10x9 board")]
    OutOfBounds,
    #[error("no piece on the source cell")]
    EmptySource,
    #[error("source and destination are the same cell")]
    NoOpMove,
    #[error("piece does not belong to the side to move")]
    WrongOwner,
    #[error("destination holds a piece of the same color")]
    FriendlyCapture,
    #[error("piece cannot move that way")]
    ShapeViolation,
    #[error("move would leave own general in check")]
    SelfCheckExposure,
    #[error("move would leave the generals facing each other")]
    IllegalGeneralsSight,
    #[error("game is already over")]
    GameAlreadyOver,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{kind} of {color} placed off the board at {position}")]
    OffBoard {
        kind: PieceKind,
        color: Color,
        position: Position,
    },
    #[error("two pieces placed on {0}")]
    CellTaken(Position),
    #[error("{0} has no general")]
    MissingGeneral(Color),
    #[error("{0} has more than one general")]
    DuplicateGeneral(Color),
    #[error("{kind} of {color} at {position} must stay in its palace")]
    OutsidePalace {
        kind: PieceKind,
        color: Color,
        position: Position,
    },
    #[error("elephant of {color} at {position} is across the river")]
    ElephantAcrossRiver { color: Color, position: Position },
    #[error("soldier of {color} at {position} is behind its starting rank")]
    SoldierBehindStart { color: Color, position: Position },
    #[error("more than {0} pieces")]
    TooManyPieces(usize),
    #[error("generals face each other on an open file")]
    GeneralsFacing,
    #[error("{0} is in check but it is not their move")]
    IdleSideInCheck(Color),
}
