//! Crate root module declarations for the bitboard debug printer.
//!
//! Exposes the grid renderer, the wide-input conversion and literal parsing
//! helpers, and the timestamped debug log line so binaries, benches and
//! external tooling can import stable module paths.

pub mod bitboard_errors;

pub mod utils {
    pub mod bitboard_literal;
    pub mod bitboard_sample;
    pub mod debug_log;
    pub mod render_bitboard;
    pub mod render_config;
}
