//! Timestamped debug dumps of a bitboard.
//!
//! Lines use the same `info string` prefix the UCI front end emits, so a dump
//! interleaved with engine output is still a valid UCI info line.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::utils::render_bitboard::render_bitboard;

/// Write an `info string <timestamp> <label>` header followed by the grid.
pub fn log_bitboard<W: Write>(
    out: &mut W,
    label: &str,
    bitboard: u64,
    at: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(
        out,
        "info string {} {}",
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        label
    )?;
    writeln!(out, "{}", render_bitboard(bitboard))
}

/// `log_bitboard` to standard error, stamped with the current time.
pub fn log_bitboard_stderr(label: &str, bitboard: u64) {
    let stderr = io::stderr();
    let mut lock = stderr.lock();
    let _ = log_bitboard(&mut lock, label, bitboard, Utc::now());
}
