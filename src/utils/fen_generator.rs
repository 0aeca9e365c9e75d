//! StartPosition-to-FEN serializer.
//!
//! Writes the row-based setup encoding: dark back rank first, the interior
//! ranks as run-length empty markers, light back rank last, then the fixed
//! side/castling/en-passant/clock trailer fields.

use crate::setup::chess_rules::{RANK_COUNT, RANK_WIDTH};
use crate::setup::chess_types::{BackRank, Color, PieceKind};
use crate::setup::start_position::StartPosition;

/// Serialize a starting position into the setup FEN encoding.
pub fn generate_setup_fen(position: &StartPosition) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };

    // No castling rights and no en-passant square exist at setup time.
    format!(
        "{} {} - - {} {}",
        board, side_to_move, position.halfmove_clock, position.fullmove_number
    )
}

fn generate_board_field(position: &StartPosition) -> String {
    let mut ranks = Vec::with_capacity(RANK_COUNT);

    ranks.push(rank_field(&position.dark_rank, Color::Dark));
    for _ in 0..RANK_COUNT - 2 {
        ranks.push(RANK_WIDTH.to_string());
    }
    ranks.push(rank_field(&position.light_rank, Color::Light));

    ranks.join("/")
}

fn rank_field(rank: &BackRank, color: Color) -> String {
    rank.iter()
        .map(|&piece| piece_to_fen_char(color, piece))
        .collect()
}

fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    let base = piece.fen_letter();
    match color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_setup_fen;
    use crate::setup::chess_rules::REFERENCE_SETUP_FEN;
    use crate::setup::enumerator::SetupEnumerator;
    use crate::setup::start_position::StartPosition;
    use crate::utils::fen_parser::parse_setup_fen;

    #[test]
    fn selection_one_matches_the_literal_encoding() {
        let enumerator = SetupEnumerator::new();
        let position =
            StartPosition::from_selection(1, &enumerator).expect("selection 1 should resolve");

        assert_eq!(
            generate_setup_fen(&position),
            "rppnkb/6/6/6/6/BKNPPR w - - 0 1"
        );
    }

    #[test]
    fn dark_rank_serializes_lowercase_and_reversed() {
        let enumerator = SetupEnumerator::new();
        let position =
            StartPosition::from_selection(42, &enumerator).expect("selection 42 should resolve");

        let fen = generate_setup_fen(&position);
        let board = fen.split(' ').next().expect("FEN should have a board field");
        let ranks: Vec<&str> = board.split('/').collect();

        let reflected: String = ranks[5]
            .chars()
            .rev()
            .map(|c| c.to_ascii_lowercase())
            .collect();
        assert_eq!(ranks[0], reflected);
        assert_eq!(&ranks[1..5], &["6", "6", "6", "6"]);
    }

    #[test]
    fn encoding_is_deterministic_across_instances() {
        let a = SetupEnumerator::new();
        let b = SetupEnumerator::new();

        let first = StartPosition::from_selection(200, &a)
            .expect("selection 200 should resolve")
            .get_fen();
        let again = StartPosition::from_selection(200, &a)
            .expect("selection 200 should resolve")
            .get_fen();
        let other = StartPosition::from_selection(200, &b)
            .expect("selection 200 should resolve")
            .get_fen();

        assert_eq!(first, again);
        assert_eq!(first, other);
    }

    #[test]
    fn round_trip_reference_setup_fen() {
        let parsed = parse_setup_fen(REFERENCE_SETUP_FEN).expect("reference FEN should parse");
        let generated = generate_setup_fen(&parsed);

        assert_eq!(generated, REFERENCE_SETUP_FEN);

        let reparsed = parse_setup_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }
}
