//! FEN-to-GameState parser.
//!
//! Builds a position from the six Forsyth-Edwards Notation fields, separated
//! by single spaces. Every structural or range problem yields the same
//! `ChessError::InvalidNotation`; the fullmove field must be present but its
//! value is ignored.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::FIFTY_MOVE_LIMIT;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let parsed = parse_fields(fen);
    if parsed.is_err() {
        debug!(fen, "rejected fen");
    }
    parsed
}

fn parse_fields(fen: &str) -> ChessResult<GameState> {
    let parts: Vec<&str> = fen.split(' ').collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts.as_slice()
    else {
        return Err(ChessError::InvalidNotation);
    };
    if fullmove_part.is_empty() {
        return Err(ChessError::InvalidNotation);
    }

    let mut game_state = GameState::empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castle_rights = parse_castle_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = parse_halfmove_clock(halfmove_part)?;
    game_state.recalc_occupancy();

    for color in Color::ALL {
        if game_state.pieces(color, PieceKind::King).count_ones() != 1 {
            return Err(ChessError::InvalidNotation);
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidNotation);
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidNotation);
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessError::InvalidNotation);
                }
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or(ChessError::InvalidNotation)?;

            if file >= 8 {
                return Err(ChessError::InvalidNotation);
            }

            game_state.pieces[color.index()][piece.index()] |= Square::new(file, board_rank).mask();
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidNotation);
        }
    }

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    PieceKind::from_letter(ch.to_ascii_uppercase()).map(|kind| (color, kind))
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidNotation),
    }
}

/// `-`, or one to four distinct letters out of `KQkq` in any order. Rights
/// start at Both for each color and lose every wing whose letter is absent.
fn parse_castle_rights(castling_part: &str) -> ChessResult<[CastleRights; 2]> {
    if castling_part == "-" {
        return Ok([CastleRights::NoRights; 2]);
    }

    if castling_part.is_empty() || castling_part.len() > 4 {
        return Err(ChessError::InvalidNotation);
    }

    let mut seen = [false; 4];
    for ch in castling_part.chars() {
        let slot = match ch {
            'K' => 0,
            'Q' => 1,
            'k' => 2,
            'q' => 3,
            _ => return Err(ChessError::InvalidNotation),
        };
        if seen[slot] {
            return Err(ChessError::InvalidNotation);
        }
        seen[slot] = true;
    }

    let rights_for = |king_side: bool, queen_side: bool| {
        let mut rights = CastleRights::Both;
        if !king_side {
            rights = rights.without_king_side();
        }
        if !queen_side {
            rights = rights.without_queen_side();
        }
        rights
    };

    Ok([rights_for(seen[0], seen[1]), rights_for(seen[2], seen[3])])
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .ok_or(ChessError::InvalidNotation)
}

fn parse_halfmove_clock(halfmove_part: &str) -> ChessResult<u8> {
    match halfmove_part.parse::<u8>() {
        Ok(clock) if clock <= FIFTY_MOVE_LIMIT => Ok(clock),
        _ => Err(ChessError::InvalidNotation),
    }
}
