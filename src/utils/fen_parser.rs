//! FEN-to-StartPosition parser.
//!
//! Rebuilds a two-sided starting position from the setup encoding, checking
//! the variant's fixed shape: six ranks of six files, back ranks on the top
//! and bottom rows, nothing in between.

use crate::setup::chess_rules::{RANK_COUNT, RANK_WIDTH, SETUP_PIECES};
use crate::setup::chess_types::{BackRank, Color, PieceKind, PIECE_KIND_COUNT};
use crate::setup::start_position::StartPosition;

pub fn parse_setup_fen(fen: &str) -> Result<StartPosition, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let (dark_rank, light_rank) = parse_board(board_part)?;

    if castling_part != "-" {
        return Err(format!(
            "Variant setup carries no castling rights, got '{castling_part}'"
        ));
    }
    if en_passant_part != "-" {
        return Err(format!(
            "Variant setup carries no en-passant square, got '{en_passant_part}'"
        ));
    }

    Ok(StartPosition {
        dark_rank,
        light_rank,
        side_to_move: parse_side_to_move(side_part)?,
        halfmove_clock: halfmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?,
        fullmove_number: fullmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?,
    })
}

fn parse_board(board_part: &str) -> Result<(BackRank, BackRank), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != RANK_COUNT {
        return Err(format!("Board layout must contain {RANK_COUNT} ranks"));
    }

    let empty_marker = RANK_WIDTH.to_string();
    for middle in &ranks[1..RANK_COUNT - 1] {
        if *middle != empty_marker {
            return Err(format!(
                "Interior ranks must be empty ('{empty_marker}'), got '{middle}'"
            ));
        }
    }

    let dark_rank = parse_back_rank(ranks[0], Color::Dark)?;
    let light_rank = parse_back_rank(ranks[RANK_COUNT - 1], Color::Light)?;
    Ok((dark_rank, light_rank))
}

fn parse_back_rank(rank_str: &str, color: Color) -> Result<BackRank, String> {
    let mut rank = [PieceKind::Pawn; RANK_WIDTH];
    let mut file = 0usize;

    for ch in rank_str.chars() {
        if file >= RANK_WIDTH {
            return Err(format!("Back rank '{rank_str}' has too many files"));
        }

        let (piece_color, piece) = piece_from_fen_char(ch)
            .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
        if piece_color != color {
            return Err(format!("Piece '{ch}' is on the wrong side's back rank"));
        }

        rank[file] = piece;
        file += 1;
    }

    if file != RANK_WIDTH {
        return Err(format!(
            "Back rank '{rank_str}' does not cover {RANK_WIDTH} files"
        ));
    }

    check_setup_multiset(&rank, rank_str)?;
    Ok(rank)
}

/// A back rank must rearrange exactly the variant's piece multiset.
fn check_setup_multiset(rank: &BackRank, rank_str: &str) -> Result<(), String> {
    let mut expected = [0u8; PIECE_KIND_COUNT];
    for piece in &SETUP_PIECES {
        expected[piece.index()] += 1;
    }

    let mut found = [0u8; PIECE_KIND_COUNT];
    for piece in rank {
        found[piece.index()] += 1;
    }

    if found != expected {
        return Err(format!(
            "Back rank '{rank_str}' does not match the variant piece set"
        ));
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
