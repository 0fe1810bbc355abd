//! Console front end for the chess_ai engine.
//!
//! Usage:
//! `cargo run --release -- --engine black --move-time-ms 2000`
//!
//! Moves are typed in long algebraic form (`e2e4`, `e7e8q`). Other commands:
//! `undo`, `fen`, `board`, `history`, `go` (engine plays the side to move)
//! and `quit`.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use chess_ai::chess_errors::ChessErrors;
use chess_ai::game_state::chess_types::Color;
use chess_ai::game_state::end_of_game::EndOfGame;
use chess_ai::game_state::game_history::GameHistory;
use chess_ai::game_state::game_state::GameState;
use chess_ai::search::iterative_deepening::Engine;
use chess_ai::search::search_config::{parse_value, SearchConfig};
use chess_ai::utils::logging::init_logging;
use chess_ai::utils::long_algebraic::parse_long_algebraic;
use chess_ai::utils::render_game_state::render_game_state;
use chess_ai::utils::standard_algebraic::move_to_san;

struct ConsoleOptions {
    fen: Option<String>,
    engine_side: Option<Color>,
    log_directive: String,
    config: SearchConfig,
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_options(args: &[String]) -> Result<ConsoleOptions, ChessErrors> {
    let mut config = SearchConfig::from_env()?;

    if let Some(raw) = arg_value(args, "--move-time-ms") {
        config.time_limit = Duration::from_millis(parse_value("--move-time-ms", &raw)?);
    }
    if let Some(raw) = arg_value(args, "--max-depth") {
        config.depth_limit = parse_value("--max-depth", &raw)?;
    }
    config.validate()?;

    let engine_side = match arg_value(args, "--engine").as_deref() {
        None | Some("black") => Some(Color::Dark),
        Some("white") => Some(Color::Light),
        Some("none") => None,
        Some(other) => {
            return Err(ChessErrors::InvalidConfig {
                key: "--engine".to_owned(),
                message: format!("expected white, black or none, got '{other}'"),
            })
        }
    };

    Ok(ConsoleOptions {
        fen: arg_value(args, "--fen"),
        engine_side,
        log_directive: arg_value(args, "--log").unwrap_or_else(|| "warn".to_owned()),
        config,
    })
}

fn announce(state: EndOfGame, history: &GameHistory) {
    match state {
        EndOfGame::Ongoing => {}
        EndOfGame::Checkmate => {
            let winner = match history.current().side_to_move {
                Color::Light => "Black",
                Color::Dark => "White",
            };
            println!("Checkmate. {winner} wins.");
        }
        EndOfGame::Stalemate => println!("Stalemate."),
    }
}

fn engine_reply(engine: &mut Engine, history: &mut GameHistory) -> Result<(), ChessErrors> {
    let before = *history.current();
    let result = engine.find_best_move(&before);
    let Some(best) = result.best_move else {
        println!("Engine has no legal move.");
        return Ok(());
    };

    let san = move_to_san(&before, best)?;
    let state = history.try_move(best)?;
    println!(
        "Engine plays {san} (depth {}, score {}, {} ms)",
        result.depth_reached,
        result.score,
        result.elapsed.as_millis()
    );
    announce(state, history);
    Ok(())
}

fn print_history(history: &GameHistory) -> Result<(), ChessErrors> {
    let san = history.move_history_san()?;
    let first_move = history.positions()[0].fullmove_number();
    let dark_first = history.positions()[0].side_to_move == Color::Dark;

    let mut line = String::new();
    for (i, text) in san.iter().enumerate() {
        let ply = i + usize::from(dark_first);
        if ply % 2 == 0 {
            line.push_str(&format!("{}. ", first_move as usize + ply / 2));
        } else if i == 0 {
            line.push_str(&format!("{}... ", first_move));
        }
        line.push_str(text);
        line.push(' ');
    }
    println!("{}", line.trim_end());
    Ok(())
}

fn main() -> Result<(), ChessErrors> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_options(&args)?;
    init_logging(&options.log_directive);

    let initial = match options.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let mut history = GameHistory::new(initial);
    let mut engine = Engine::new(options.config);

    println!("{}", render_game_state(history.current()));

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        let status = history.status();
        if !status.is_over() && options.engine_side == Some(history.current().side_to_move) {
            engine_reply(&mut engine, &mut history)?;
            println!("{}", render_game_state(history.current()));
            continue;
        }

        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        let read = stdin.lock().read_line(&mut input).unwrap_or(0);
        if read == 0 {
            break;
        }

        match input.trim() {
            "" => {}
            "quit" | "exit" => break,
            "board" => println!("{}", render_game_state(history.current())),
            "fen" => println!("{}", history.current().get_fen()),
            "history" => print_history(&history)?,
            "undo" => {
                // Take back the engine's reply as well so the human stays on move.
                let undone = history.undo();
                if undone && options.engine_side == Some(history.current().side_to_move) {
                    history.undo();
                }
                if !undone {
                    println!("Nothing to undo.");
                }
                println!("{}", render_game_state(history.current()));
            }
            "go" => {
                if status.is_over() {
                    announce(status, &history);
                } else {
                    engine_reply(&mut engine, &mut history)?;
                    println!("{}", render_game_state(history.current()));
                }
            }
            text => {
                if status.is_over() {
                    announce(status, &history);
                    continue;
                }
                let result = parse_long_algebraic(text).and_then(|candidate| {
                    let before = *history.current();
                    let state = history.try_move(candidate)?;
                    Ok((before, state))
                });
                match result {
                    Ok((before, state)) => {
                        if let Some(played) = history.last_move() {
                            println!("You play {}", move_to_san(&before, played)?);
                        }
                        println!("{}", render_game_state(history.current()));
                        announce(state, &history);
                    }
                    Err(err) => println!("Rejected: {err}"),
                }
            }
        }
    }

    Ok(())
}
