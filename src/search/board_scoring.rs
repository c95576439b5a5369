//! Pluggable board evaluation.
//!
//! Search delegates static scoring to [`BoardScorer`], so heuristics can be
//! swapped without touching search code. Scores are relative to the side to
//! move: positive favors the mover.

use crate::game_state::board::Board;
use crate::game_state::board_status::BoardStatus;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Score of a checkmated position for the side to move.
pub const MATE_SCORE: i32 = -1_000_000;

const PASSED_PAWN_BONUS: i32 = 20;
const CONNECTED_PAWN_BONUS: i32 = 15;
const KING_SHIELD_BONUS: i32 = 40;
const DEVELOPED_PIECE_BONUS: i32 = 50;
const PUSHED_PAWN_BONUS_PER_RANK: i32 = 5;
const DEVELOPMENT_PIECE_THRESHOLD: u32 = 25;
const ENDGAME_PIECE_THRESHOLD: u32 = 20;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 310,
            PieceKind::Bishop => 320,
            PieceKind::Rook => 460,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    /// Mover's material minus the opponent's.
    pub fn material_balance(game_state: &GameState) -> i32 {
        let mover = game_state.side_to_move();
        PieceKind::ALL
            .into_iter()
            .map(|piece| {
                let own = game_state.pieces(mover, piece).count_ones() as i32;
                let theirs = game_state.pieces(mover.opposite(), piece).count_ones() as i32;
                (own - theirs) * Self::piece_value(piece)
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        Self::material_balance(board.state())
    }
}

/// Material plus positional terms, with terminal handling.
///
/// Checkmate scores [`MATE_SCORE`]. Any draw negates the accumulated score,
/// so a draw is unattractive to whichever side the position favors.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl BoardScorer for HeuristicScorer {
    fn score(&self, board: &Board) -> i32 {
        let status = board.status();
        if status == BoardStatus::Checkmate {
            return MATE_SCORE;
        }

        let points = MaterialScorer::material_balance(board.state()) + positional_balance(board);
        if status.is_draw() {
            -points
        } else {
            points
        }
    }
}

/// Positional terms, mover minus opponent where the term is symmetric.
///
/// Mobility and the check penalty only look at the side to move.
pub fn positional_balance(board: &Board) -> i32 {
    let state = board.state();
    let mover = state.side_to_move();
    let opponent = mover.opposite();
    let mut points = 0;

    if board.status() == BoardStatus::Check {
        points -= 1;
    }
    points += board.legal_moves().len() as i32;

    points += pawn_structure(state, mover) - pawn_structure(state, opponent);
    points += king_safety(state, mover) - king_safety(state, opponent);

    let total_pieces = state.occupancy_all().count_ones();
    if total_pieces >= DEVELOPMENT_PIECE_THRESHOLD {
        points += piece_development(state, mover) - piece_development(state, opponent);
    }
    if total_pieces < ENDGAME_PIECE_THRESHOLD {
        points += pushed_pawns(state, mover) - pushed_pawns(state, opponent);
    }

    points
}

fn pawn_structure(state: &GameState, color: Color) -> i32 {
    let pawns = state.pieces(color, PieceKind::Pawn);
    let enemy_pawns = state.pieces(color.opposite(), PieceKind::Pawn);
    let direction = color.pawn_direction();
    let mut points = 0;

    for pawn in squares_of_mask(pawns) {
        if enemy_pawns & front_span(pawn, direction) == 0 {
            points += PASSED_PAWN_BONUS;
        }

        for file_delta in [-1, 1] {
            if let Some(neighbour) = pawn.offset(file_delta, direction) {
                if pawns & neighbour.mask() != 0 {
                    points += CONNECTED_PAWN_BONUS;
                }
            }
        }
    }

    points
}

/// Squares on the pawn's own and adjacent files, strictly ahead of it.
fn front_span(pawn: Square, direction: i8) -> u64 {
    let mut span = 0u64;
    let mut rank_delta = direction;
    while let Some(ahead) = pawn.offset(0, rank_delta) {
        for file_delta in [-1, 0, 1] {
            if let Some(square) = ahead.offset(file_delta, 0) {
                span |= square.mask();
            }
        }
        rank_delta += direction;
    }
    span
}

fn king_safety(state: &GameState, color: Color) -> i32 {
    let mut points = match state.castle_rights(color) {
        CastleRights::Both => 2,
        CastleRights::KingSide | CastleRights::QueenSide => 1,
        CastleRights::NoRights => 0,
    };

    if let Some(king) = state.king_square(color) {
        let own = state.occupancy(color);
        for file_delta in [-1, 0, 1] {
            if let Some(shield) = king.offset(file_delta, color.pawn_direction()) {
                if own & shield.mask() != 0 {
                    points += KING_SHIELD_BONUS;
                }
            }
        }
    }

    points
}

/// Knights, bishops and rooks on the two ranks just past the pawn rank.
fn piece_development(state: &GameState, color: Color) -> i32 {
    let developed_ranks = [1, 2].map(|step| {
        let rank = color.pawn_rank() as i8 + step * color.pawn_direction();
        0xFFu64 << (rank as u32 * 8)
    });
    let zone = developed_ranks[0] | developed_ranks[1];
    let pieces = state.pieces(color, PieceKind::Knight)
        | state.pieces(color, PieceKind::Bishop)
        | state.pieces(color, PieceKind::Rook);

    (pieces & zone).count_ones() as i32 * DEVELOPED_PIECE_BONUS
}

fn pushed_pawns(state: &GameState, color: Color) -> i32 {
    squares_of_mask(state.pieces(color, PieceKind::Pawn))
        .map(|pawn| {
            let advanced = match color {
                Color::White => pawn.rank(),
                Color::Black => 7 - pawn.rank(),
            };
            advanced as i32 * PUSHED_PAWN_BONUS_PER_RANK
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("valid fen")
    }

    #[test]
    fn material_balance_is_mover_relative() {
        assert_eq!(MaterialScorer.score(&Board::new()), 0);
        assert_eq!(
            MaterialScorer.score(&board("4kbnr/4pppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQk - 0 1")),
            2390
        );
        assert_eq!(
            MaterialScorer.score(&board("1k6/1rrbb3/1pp5/8/8/8/1RRBBNQ1/1K6 b - - 0 1")),
            -1010
        );
    }

    #[test]
    fn start_position_is_balanced_apart_from_mobility() {
        // Both sides are symmetric, so only the mover's 20 moves remain.
        assert_eq!(HeuristicScorer.score(&Board::new()), 20);
    }

    #[test]
    fn checkmate_scores_mate_constant() {
        let mated = board("k7/1Q6/1K6/8/8/8/8/8 b - - 0 1");
        assert_eq!(mated.status(), BoardStatus::Checkmate);
        assert_eq!(HeuristicScorer.score(&mated), MATE_SCORE);
    }

    #[test]
    fn winning_side_sees_positive_score() {
        let winning = board("1k5R/8/1K6/8/8/8/8/8 b - - 0 1");
        assert!(-HeuristicScorer.score(&winning) > 0);
    }

    #[test]
    fn stalemate_negates_the_favourable_score() {
        let stalemate = board("k7/1R6/2K5/8/8/8/8/8 b - - 0 1");
        assert_eq!(stalemate.status(), BoardStatus::DrawByStalemate);
        assert!(-HeuristicScorer.score(&stalemate) < 0);
    }

    #[test]
    fn passed_and_connected_pawns() {
        let state = board("4k3/8/8/8/8/2P5/1P6/4K3 w - - 0 1");
        // b2 and c3 are both passed; b2 has c3 diagonally ahead.
        assert_eq!(pawn_structure(state.state(), Color::White), 2 * 20 + 15);

        let state = board("4k3/2p5/8/8/8/8/1P6/4K3 w - - 0 1");
        assert_eq!(pawn_structure(state.state(), Color::White), 0);
        assert_eq!(pawn_structure(state.state(), Color::Black), 0);
    }

    #[test]
    fn king_safety_counts_rights_and_shield() {
        let start = Board::new();
        assert_eq!(king_safety(start.state(), Color::White), 2 + 3 * 40);

        let bare = board("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(king_safety(bare.state(), Color::Black), 0);
    }

    fn mobility(board: &Board) -> i32 {
        board.legal_moves().len() as i32
    }

    #[test]
    fn endgame_adds_pushed_pawns_without_development() {
        let lone = board("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1");
        assert_eq!(pushed_pawns(lone.state(), Color::White), 20);
        // Mobility 6, passed pawn 20, pushed pawn 20.
        assert_eq!(mobility(&lone), 6);
        assert_eq!(positional_balance(&lone), 46);

        // The c3 knight sits in the development zone but is not rewarded.
        let knight = board("4k3/8/8/4P3/8/2N5/8/4K3 w - - 0 1");
        assert_eq!(piece_development(knight.state(), Color::White), 50);
        assert_eq!(positional_balance(&knight), mobility(&knight) + 20 + 20);
    }

    #[test]
    fn middle_piece_counts_skip_both_phase_bonuses() {
        let middle = board("r3k2r/pppppppp/8/8/4P3/2N5/PPPP1PPP/R3K2R w - - 0 1");
        let state = middle.state();
        assert_eq!(state.occupancy_all().count_ones(), 23);

        let development = piece_development(state, Color::White) - piece_development(state, Color::Black);
        let pushed = pushed_pawns(state, Color::White) - pushed_pawns(state, Color::Black);
        assert_eq!(development, 50);
        assert_eq!(pushed, 10);

        let expected = mobility(&middle)
            + pawn_structure(state, Color::White)
            - pawn_structure(state, Color::Black)
            + king_safety(state, Color::White)
            - king_safety(state, Color::Black);
        assert_eq!(positional_balance(&middle), expected);
    }

    #[test]
    fn check_costs_one_point() {
        let checked = board("k7/8/1K6/8/8/8/8/Q7 b - - 0 1");
        assert_eq!(checked.status(), BoardStatus::Check);
        assert_eq!(mobility(&checked), 1);
        assert_eq!(positional_balance(&checked), 1 - 1);
    }

    #[test]
    fn development_ranks_are_mirrored() {
        let state = board("4k3/8/2b5/8/8/2N5/8/4K3 w - - 0 1");
        assert_eq!(piece_development(state.state(), Color::White), 50);
        assert_eq!(piece_development(state.state(), Color::Black), 50);
    }
}
