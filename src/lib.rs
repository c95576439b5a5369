//! Crate root module declarations for the bitchess engine.
//!
//! Exposes the rules core (positions, move generation, status), the notation
//! codec, and the fixed-depth search so binaries, tests and benches can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_status;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod step_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod perft;
    pub mod position_view;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod root_parallel;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
}

pub use engines::engine_alpha_beta::AlphaBetaEngine;
pub use engines::engine_trait::Engine;
pub use errors::{ChessError, ChessResult};
pub use game_state::board::{Board, MoveOutcome};
pub use game_state::board_status::BoardStatus;
pub use game_state::chess_types::{CastleRights, Color, PieceKind, Square};
pub use moves::chess_move::Move;
