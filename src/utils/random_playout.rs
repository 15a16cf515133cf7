//! Seeded random self-play.
//!
//! Plays uniformly random legal moves until the game ends or a ply limit is
//! reached. Used by the soak binary and by invariant tests; there is no
//! evaluation, every legal move is equally likely.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::game_config::GameConfig;
use crate::game::xiangqi_game::XiangqiGame;
use crate::game_state::xiangqi_types::{Color, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutReport {
    pub plies: usize,
    pub outcome: GameState,
    pub captures: usize,
    pub checks: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub games: usize,
    pub red_wins: usize,
    pub black_wins: usize,
    /// Games stopped by the ply limit.
    pub unfinished: usize,
    pub total_plies: usize,
}

impl PlayoutSummary {
    fn record(&mut self, report: &PlayoutReport) {
        self.games += 1;
        self.total_plies += report.plies;
        match report.outcome {
            GameState::Won(Color::Red) => self.red_wins += 1,
            GameState::Won(Color::Black) => self.black_wins += 1,
            GameState::InProgress => self.unfinished += 1,
        }
    }
}

/// Play one random game on `game`, calling `inspect` after every accepted
/// ply. Returns `Err` with the rejection if the controller refuses a move
/// the enumerator produced.
pub fn play_random_game<R, F>(
    game: &mut XiangqiGame,
    rng: &mut R,
    max_plies: usize,
    mut inspect: F,
) -> Result<PlayoutReport, String>
where
    R: Rng + ?Sized,
    F: FnMut(&XiangqiGame),
{
    let mut report = PlayoutReport {
        plies: 0,
        outcome: game.game_state(),
        captures: 0,
        checks: 0,
    };

    while report.plies < max_plies && !game.game_state().is_over() {
        let moves = game.legal_moves();
        let picked = *moves
            .as_slice()
            .choose(rng)
            .ok_or("no legal move in a position judged in progress")?;

        report.outcome = game
            .make_move(picked.from, picked.to)
            .map_err(|e| format!("enumerated move {} -> {} rejected: {e}", picked.from, picked.to))?;
        report.plies += 1;

        if let Some(record) = game.last_move() {
            report.captures += usize::from(record.captured.is_some());
            report.checks += usize::from(record.gives_check);
        }
        inspect(game);
    }

    Ok(report)
}

/// Play `games` random games from the opening. Game `i` is seeded with
/// `seed + i`, so any single game can be replayed on its own.
pub fn run_playouts(
    seed: u64,
    games: usize,
    max_plies: usize,
    config: GameConfig,
) -> Result<PlayoutSummary, String> {
    let mut summary = PlayoutSummary::default();

    for index in 0..games {
        let game_seed = seed.wrapping_add(index as u64);
        let mut rng = StdRng::seed_from_u64(game_seed);
        let mut game = XiangqiGame::with_config(config);
        let report = play_random_game(&mut game, &mut rng, max_plies, |_| {})?;
        debug!(
            "playout {index} (seed {game_seed}): {} after {} plies, {} captures, {} checks",
            report.outcome, report.plies, report.captures, report.checks
        );
        summary.record(&report);
    }

    Ok(summary)
}
