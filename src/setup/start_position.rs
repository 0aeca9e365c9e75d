//! Two-sided starting position derived from one back-rank selection.
//!
//! The light side receives the selected arrangement directly; the dark side
//! receives its mirror image, so the two back ranks are horizontal
//! reflections of one another with ownership told apart by case in the
//! serialized form.

use crate::setup::chess_rules::REFERENCE_SETUP_FEN;
use crate::setup::chess_types::{BackRank, Color};
use crate::setup::enumerator::SetupEnumerator;
use crate::setup::setup_errors::SetupError;
use crate::utils::fen_generator::generate_setup_fen;
use crate::utils::fen_parser::parse_setup_fen;

/// A complete starting position for one selected arrangement.
///
/// Built fresh on every request; only the enumerator's table is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPosition {
    /// Dark back rank, occupying the top rank of the board.
    pub dark_rank: BackRank,

    /// Light back rank, occupying the bottom rank of the board.
    pub light_rank: BackRank,

    pub side_to_move: Color,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl StartPosition {
    /// Build the two-sided position for a one-based selection index.
    pub fn from_selection(
        selection: usize,
        enumerator: &SetupEnumerator,
    ) -> Result<Self, SetupError> {
        let light_rank = enumerator.back_rank(selection)?;
        Ok(Self {
            dark_rank: mirror_rank(&light_rank),
            light_rank,
            side_to_move: Color::Light,
            halfmove_clock: 0,
            fullmove_number: 1,
        })
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_setup_fen(REFERENCE_SETUP_FEN).expect("reference setup FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_setup_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_setup_fen(self)
    }
}

/// Mirror a back rank for the opposing side.
///
/// Reversing the file order twice restores the original rank; the case flip
/// of the mirrored side happens when it is serialized as dark.
#[inline]
pub fn mirror_rank(rank: &BackRank) -> BackRank {
    let mut mirrored = *rank;
    mirrored.reverse();
    mirrored
}
