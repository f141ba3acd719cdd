//! Errors used throughout the bitboard printer.
//!
//! `BitboardErrors` is the single error type returned by the conversion,
//! literal-parsing and grid-reading helpers. Rendering a `u64` itself cannot
//! fail, so the plain printer entry points never return it.

use thiserror::Error;

/// Unified error type for the bitboard printer.
///
/// Input-related variants (`NegativeValue`, `OutOfRange`, `InvalidLiteral`)
/// are meant to be shown to whoever typed the value. Grid variants describe
/// text that is not a well-formed 8x8 rendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitboardErrors {
    /// A negative value was offered as a bitboard.
    ///
    /// Negative input is always rejected rather than reinterpreted as two's
    /// complement.
    #[error("bitboard value must not be negative: {0}")]
    NegativeValue(i128),

    /// The value does not fit in 64 bits and the overflow policy is `Reject`.
    #[error("bitboard value does not fit in 64 bits: {0}")]
    OutOfRange(i128),

    /// An integer literal could not be parsed.
    ///
    /// Payload: the original string.
    #[error("invalid bitboard literal: {0:?}")]
    InvalidLiteral(String),

    /// The grid did not have exactly 8 rows.
    #[error("bitboard grid must have 8 rows, found {lines}")]
    InvalidGridShape { lines: usize },

    /// A grid row did not have exactly 8 cells.
    #[error("bitboard grid row {row} must have 8 cells, found {len}")]
    InvalidGridRow { row: usize, len: usize },

    /// A grid cell was something other than `'0'` or `'1'`.
    #[error("bitboard grid row {row} contains invalid cell {ch:?}")]
    InvalidGridChar { row: usize, ch: char },
}
