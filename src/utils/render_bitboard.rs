//! Terminal-oriented binary bitboard renderer.
//!
//! Creates an 8x8 grid of `'0'`/`'1'` cells from a raw `u64` for debugging,
//! tests, and diagnostics in text environments. The most significant bit is
//! the first cell of the first row; no square naming is implied.

use std::fmt;
use std::io::{self, Write};

use crate::bitboard_errors::BitboardErrors;
use crate::utils::render_config::{bitboard_from_wide, RenderConfig};

pub const GRID_ROWS: usize = 8;
pub const GRID_COLUMNS: usize = 8;

/// Render the bitboard as 8 lines of 8 binary digits joined by `'\n'`,
/// without a trailing newline.
pub fn render_bitboard(bitboard: u64) -> String {
    let mut out = String::with_capacity(GRID_ROWS * (GRID_COLUMNS + 1));

    for row in 0..GRID_ROWS {
        let row_bits = row_byte(bitboard, row);

        for column in 0..GRID_COLUMNS {
            let bit = (row_bits >> (GRID_COLUMNS - 1 - column)) & 1;
            out.push(if bit == 1 { '1' } else { '0' });
        }

        if row + 1 < GRID_ROWS {
            out.push('\n');
        }
    }

    out
}

/// Write the grid and a final newline to `out`.
pub fn write_bitboard<W: Write>(out: &mut W, bitboard: u64) -> io::Result<()> {
    writeln!(out, "{}", render_bitboard(bitboard))
}

/// Print the grid to standard output.
pub fn print_bitboard(bitboard: u64) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    // Write errors on stdout are ignored.
    let _ = write_bitboard(&mut lock, bitboard);
    lock.flush().ok();
}

/// Convert `value` under `config` and render it.
pub fn render_wide(value: i128, config: &RenderConfig) -> Result<String, BitboardErrors> {
    Ok(render_bitboard(bitboard_from_wide(value, config)?))
}

/// Read a rendered grid back into its value.
///
/// Accepts exactly 8 rows of exactly 8 `'0'`/`'1'` cells. A single trailing
/// newline is allowed, so the output of `write_bitboard` parses as well.
pub fn parse_bitboard_grid(text: &str) -> Result<u64, BitboardErrors> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let rows: Vec<&str> = body.split('\n').collect();

    if rows.len() != GRID_ROWS {
        return Err(BitboardErrors::InvalidGridShape { lines: rows.len() });
    }

    let mut bitboard = 0u64;
    for (row, line) in rows.iter().enumerate() {
        let len = line.chars().count();
        if len != GRID_COLUMNS {
            return Err(BitboardErrors::InvalidGridRow { row, len });
        }

        for ch in line.chars() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(BitboardErrors::InvalidGridChar { row, ch }),
            };
            bitboard = (bitboard << 1) | bit;
        }
    }

    Ok(bitboard)
}

/// `Display` adapter producing the same text as `render_bitboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitboardGrid(pub u64);

impl fmt::Display for BitboardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_bitboard(self.0))
    }
}

#[inline]
fn row_byte(bitboard: u64, row: usize) -> u64 {
    (bitboard >> ((GRID_ROWS - 1 - row) * GRID_COLUMNS)) & 0xFF
}
