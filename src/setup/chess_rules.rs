//! Canonical shuffle-chess rule constants.
//!
//! This module stores the fixed board shape, the back-rank piece multiset
//! every starting arrangement rearranges, and the reference setup FEN used
//! to initialize and validate setup state.

use crate::setup::chess_types::PieceKind;

/// Files per rank on the variant board.
pub const RANK_WIDTH: usize = 6;

/// Ranks on the variant board.
pub const RANK_COUNT: usize = 6;

/// The back-rank piece multiset: two pawns, one of everything else. Every
/// starting arrangement is a rearrangement of exactly these six pieces.
pub const SETUP_PIECES: [PieceKind; RANK_WIDTH] = [
    PieceKind::King,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Pawn,
    PieceKind::Pawn,
];

/// Reference starting position (light back rank `KRNBPP`) in the setup FEN
/// encoding.
pub const REFERENCE_SETUP_FEN: &str = "pprnbk/6/6/6/6/KRNBPP w - - 0 1";
