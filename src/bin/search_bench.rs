//! Search performance runner.
//!
//! Reports the average time to finish fixed-depth searches and the average
//! depth completed under a fixed time budget over a suite of middlegame
//! positions. A fresh engine is built per search so every run starts with an
//! empty transposition table.
//!
//! Usage:
//! `cargo run --release --bin search_bench`
//! `cargo run --release --bin search_bench -- --depths 4,5 --move-time-ms 250 --rounds 3`

use std::time::Duration;

use chrono::Local;
use tracing::info;

use chess_ai::chess_errors::ChessErrors;
use chess_ai::game_state::game_state::GameState;
use chess_ai::search::iterative_deepening::Engine;
use chess_ai::search::search_config::{parse_value, SearchConfig};
use chess_ai::utils::logging::init_logging;

const MIDDLEGAME_POSITIONS: &[&str] = &[
    "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
    "rn1qkb1r/pp2pppp/2p2n2/3p1b2/2PP4/4PN2/PP3PPP/RNBQKB1R w KQkq - 1 5",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    "r1bq1rk1/pp2bppp/2n1pn2/2pp4/3P4/2PBPN2/PP1N1PPP/R1BQ1RK1 w - - 0 8",
    "2rq1rk1/pp1bppbp/2np1np1/8/3NP3/1BN1BP2/PPPQ2PP/2KR3R b - - 4 11",
];

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_depths(raw: &str) -> Result<Vec<u32>, ChessErrors> {
    raw.split(',')
        .map(|part| parse_value::<u32>("--depths", part))
        .collect()
}

fn run_fixed_depth(games: &[GameState], depth: u32, rounds: u32) {
    let config = SearchConfig::default()
        .with_time_limit(Duration::from_secs(3600))
        .with_depth_limit(depth);

    let mut total = Duration::ZERO;
    let mut nodes = 0u64;
    let mut count = 0u32;

    for _ in 0..rounds {
        for game in games {
            let result = Engine::new(config).find_best_move(game);
            total += result.elapsed;
            nodes += result.nodes;
            count += 1;
        }
    }

    let avg_ms = total.as_millis() as f64 / f64::from(count.max(1));
    println!(
        "find_best_move(depth = {depth}): average time = {avg_ms:.1} ms, average nodes = {}",
        nodes / u64::from(count.max(1))
    );
}

fn run_fixed_time(games: &[GameState], move_time: Duration, rounds: u32) {
    let config = SearchConfig::default().with_time_limit(move_time);

    let mut depth_sum = 0u64;
    let mut count = 0u32;

    for _ in 0..rounds {
        for game in games {
            let result = Engine::new(config).find_best_move(game);
            depth_sum += u64::from(result.depth_reached);
            count += 1;
        }
    }

    println!(
        "find_best_move(time limit = {} ms): average depth reached = {:.3}",
        move_time.as_millis(),
        depth_sum as f64 / f64::from(count.max(1))
    );
}

fn main() -> Result<(), ChessErrors> {
    let args: Vec<String> = std::env::args().collect();
    init_logging(&arg_value(&args, "--log").unwrap_or_else(|| "warn".to_owned()));

    let depths = match arg_value(&args, "--depths") {
        Some(raw) => parse_depths(&raw)?,
        None => vec![4, 5, 6],
    };
    let move_time = match arg_value(&args, "--move-time-ms") {
        Some(raw) => Duration::from_millis(parse_value("--move-time-ms", &raw)?),
        None => Duration::from_millis(500),
    };
    let rounds: u32 = match arg_value(&args, "--rounds") {
        Some(raw) => parse_value("--rounds", &raw)?,
        None => 1,
    };

    let games = MIDDLEGAME_POSITIONS
        .iter()
        .map(|fen| GameState::from_fen(fen))
        .collect::<Result<Vec<_>, _>>()?;

    println!(
        "search benchmark {} ({} positions x {} rounds)",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        games.len(),
        rounds
    );
    info!(?depths, move_time_ms = move_time.as_millis() as u64, rounds, "benchmark settings");

    for depth in depths {
        run_fixed_depth(&games, depth, rounds);
    }
    run_fixed_time(&games, move_time, rounds);

    Ok(())
}
