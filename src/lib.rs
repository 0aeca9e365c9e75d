//! Crate root module declarations for the Shuffle Chess setup library.
//!
//! This file exposes the setup subsystems (piece types, arrangement
//! enumeration, start-position modeling) and utility helpers (FEN, PGN,
//! rendering) so binaries, tests, and external tooling can import stable
//! module paths.

pub mod setup {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod enumerator;
    pub mod setup_errors;
    pub mod start_position;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_setup;
}
