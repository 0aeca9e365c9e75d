//! Terminal-oriented Unicode renderer for starting positions.
//!
//! Creates a human-readable board view from a start position for debugging,
//! tests, and diagnostics in text environments.

use crate::setup::chess_rules::{RANK_COUNT, RANK_WIDTH};
use crate::setup::chess_types::{Color, PieceKind};
use crate::setup::start_position::StartPosition;

/// Render the starting position to a Unicode string for terminal output.
///
/// Ranks print top to bottom, so the dark back rank appears first.
pub fn render_start_position(position: &StartPosition) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f\n");

    for rank in (0..RANK_COUNT).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..RANK_WIDTH {
            match piece_on_square(position, rank, file) {
                Some((color, piece)) => out.push(piece_to_unicode(color, piece)),
                None => out.push('·'),
            }

            if file < RANK_WIDTH - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f");

    out
}

fn piece_on_square(
    position: &StartPosition,
    rank: usize,
    file: usize,
) -> Option<(Color, PieceKind)> {
    if rank == RANK_COUNT - 1 {
        Some((Color::Dark, position.dark_rank[file]))
    } else if rank == 0 {
        Some((Color::Light, position.light_rank[file]))
    } else {
        None
    }
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
