//! Crate root module declarations for the Plum Xiangqi rules engine.
//!
//! This file exposes the position model, per-piece movement rules, move
//! validation and generation, the game controller, and text utilities so
//! binaries, tests, and host applications can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_state;
    pub mod piece;
    pub mod player;
    pub mod undo_state;
    pub mod xiangqi_rules;
    pub mod xiangqi_types;
}

pub mod moves {
    pub mod advisor_moves;
    pub mod cannon_moves;
    pub mod chariot_moves;
    pub mod elephant_moves;
    pub mod general_moves;
    pub mod horse_moves;
    pub mod line_scan;
    pub mod piece_rules;
    pub mod soldier_moves;
}

pub mod move_generation {
    pub mod endgame;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod game {
    pub mod game_config;
    pub mod move_observer;
    pub mod xiangqi_game;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
