//! Random self-play soak runner.
//!
//! Run with:
//! `cargo run --release --bin random_playout -- --games 200 --seed 7`
//! `cargo run --release --bin random_playout -- --verbose`

use std::io::Write;

use chrono::Local;
use clap::Parser;
use log::{info, LevelFilter};

use plum_xiangqi::game::game_config::GameConfig;
use plum_xiangqi::utils::random_playout::run_playouts;

#[derive(Parser)]
#[command(about = "Play seeded random Xiangqi games and report the outcomes")]
struct Arguments {
    /// Number of games to play.
    #[arg(short, long, default_value_t = 100)]
    games: usize,
    /// Stop a game unfinished after this many plies.
    #[arg(short, long, default_value_t = 300)]
    max_plies: usize,
    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(short, long, default_value_t = 1234)]
    seed: u64,
    /// Log every ply.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), String> {
    let arguments = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if arguments.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .init();

    let config = GameConfig::default();
    let started = std::time::Instant::now();
    let summary = run_playouts(arguments.seed, arguments.games, arguments.max_plies, config)?;
    let elapsed = started.elapsed();

    info!(
        "{} games, {} plies in {:.2?}: red {} / black {} / unfinished {}",
        summary.games,
        summary.total_plies,
        elapsed,
        summary.red_wins,
        summary.black_wins,
        summary.unfinished
    );
    Ok(())
}
