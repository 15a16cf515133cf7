//! Hooks the controller calls as moves are judged.
//!
//! A game owns one boxed observer. The default forwards to the `log` facade;
//! hosts that want the events themselves can install a `RecordingObserver`.

use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::errors::MoveError;
use crate::game_state::xiangqi_types::{Color, GameState, PieceKind, Position};

/// One accepted ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mover: Color,
    pub kind: PieceKind,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceKind>,
    pub gives_check: bool,
}

pub trait MoveObserver: Send {
    fn on_rejected(&mut self, _mover: Color, _from: Position, _to: Position, _error: MoveError) {}

    fn on_accepted(&mut self, _record: &MoveRecord) {}

    fn on_check(&mut self, _color: Color) {}

    fn on_game_over(&mut self, _state: GameState) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MoveObserver for LogObserver {
    fn on_rejected(&mut self, mover: Color, from: Position, to: Position, error: MoveError) {
        debug!("{mover} move {from} -> {to} rejected: {error}");
    }

    fn on_accepted(&mut self, record: &MoveRecord) {
        match record.captured {
            Some(captured) => debug!(
                "{} {} {} -> {} captures {}",
                record.mover, record.kind, record.from, record.to, captured
            ),
            None => debug!("{} {} {} -> {}", record.mover, record.kind, record.from, record.to),
        }
    }

    fn on_check(&mut self, color: Color) {
        debug!("{color} is in check");
    }

    fn on_game_over(&mut self, state: GameState) {
        info!("game over: {state}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MoveObserver for NullObserver {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedEvent {
    Rejected {
        mover: Color,
        from: Position,
        to: Position,
        error: MoveError,
    },
    Accepted(MoveRecord),
    Check(Color),
    GameOver(GameState),
}

/// Collects every event into a shared list. Clones share the same list, so
/// a host keeps one clone and hands the other to the game.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut events) => events.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn push(&self, event: ObservedEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl MoveObserver for RecordingObserver {
    fn on_rejected(&mut self, mover: Color, from: Position, to: Position, error: MoveError) {
        self.push(ObservedEvent::Rejected {
            mover,
            from,
            to,
            error,
        });
    }

    fn on_accepted(&mut self, record: &MoveRecord) {
        self.push(ObservedEvent::Accepted(*record));
    }

    fn on_check(&mut self, color: Color) {
        self.push(ObservedEvent::Check(color));
    }

    fn on_game_over(&mut self, state: GameState) {
        self.push(ObservedEvent::GameOver(state));
    }
}
