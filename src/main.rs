//! Diagnostic driver.
//!
//! Usage: `bitchess [depth] [fen]`
//!
//! Loads the position (the starting position when no FEN is given), prints
//! its status and legal moves, then searches it at `depth` (default 3) and
//! prints the chosen move. `RUST_LOG` controls search logging.

use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use bitchess::engines::engine_alpha_beta::AlphaBetaEngine;
use bitchess::game_state::board::Board;
use bitchess::search::alpha_beta::SearchConfig;
use bitchess::ChessResult;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let depth: u8 = parse_arg(&args, 1, SearchConfig::default().depth);
    let fen = (args.len() > 2).then(|| args[2..].join(" "));

    match run(depth, fen.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "bitchess failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(depth: u8, fen: Option<&str>) -> ChessResult<()> {
    let board = match fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::new(),
    };

    println!("side to move: {:?}", board.side_to_move());
    println!("status: {:?}", board.status());

    let moves: Vec<String> = board.legal_moves().iter().map(ToString::to_string).collect();
    println!("legal moves ({}): {}", moves.len(), moves.join(" "));

    if board.status().is_over() {
        return Ok(());
    }

    let result = AlphaBetaEngine::new().search(&board, depth)?;
    println!(
        "best move: {} (score {}, depth {}, nodes {})",
        result.best_move, result.best_score, depth, result.nodes
    );

    Ok(())
}
