//! Configuration for turning wide or signed input into a 64-bit bitboard.
//!
//! The printer itself only ever sees a `u64`. Values arriving from text or
//! from wider arithmetic pass through `bitboard_from_wide` first, which applies
//! the overflow policy and then the mask mode.

use crate::bitboard_errors::BitboardErrors;

/// Keeps only the low 64 bits.
pub const LOW_WORD_MASK: u128 = (1u128 << 64) - 1;

/// The mask the original debug helper used. It isolates bit 64 only, so every
/// value that fits in a word masks to zero.
pub const LEGACY_HIGH_BIT_MASK: u128 = 1u128 << 64;

/// Which mask is applied before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Mask with `2^64 - 1`.
    #[default]
    LowWord,
    /// Mask with `2^64`, the documented masking defect. Every value renders
    /// as an all-zero grid.
    LegacyHighBit,
}

/// What to do with values above `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    #[default]
    Reject,
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub mask_mode: MaskMode,
    pub overflow: OverflowPolicy,
}

impl RenderConfig {
    /// Config matching the original helper's output.
    pub fn legacy() -> Self {
        Self {
            mask_mode: MaskMode::LegacyHighBit,
            ..Self::default()
        }
    }
}

/// Apply `mode` to a value of up to 128 bits and return the 64 bits that get
/// rendered.
#[inline]
pub fn apply_mask(value: u128, mode: MaskMode) -> u64 {
    match mode {
        MaskMode::LowWord => (value & LOW_WORD_MASK) as u64,
        // The masked value is either 0 or 2^64. The legacy slicing dropped the
        // leading one, which leaves the low word of the masked value.
        MaskMode::LegacyHighBit => ((value & LEGACY_HIGH_BIT_MASK) & LOW_WORD_MASK) as u64,
    }
}

/// Convert a signed, possibly wider value into the bitboard that would be
/// rendered under `config`.
pub fn bitboard_from_wide(value: i128, config: &RenderConfig) -> Result<u64, BitboardErrors> {
    if value < 0 {
        return Err(BitboardErrors::NegativeValue(value));
    }

    let magnitude = value as u128;
    if magnitude > u64::MAX as u128 && config.overflow == OverflowPolicy::Reject {
        return Err(BitboardErrors::OutOfRange(value));
    }

    Ok(apply_mask(magnitude, config.mask_mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_keeps_low_word_and_rejects_overflow() {
        let config = RenderConfig::default();
        assert_eq!(config.mask_mode, MaskMode::LowWord);
        assert_eq!(config.overflow, OverflowPolicy::Reject);

        assert_eq!(bitboard_from_wide(0, &config), Ok(0));
        assert_eq!(bitboard_from_wide(u64::MAX as i128, &config), Ok(u64::MAX));
        assert_eq!(
            bitboard_from_wide(u64::MAX as i128 + 1, &config),
            Err(BitboardErrors::OutOfRange(u64::MAX as i128 + 1))
        );
    }

    #[test]
    fn negative_values_are_rejected_under_every_policy() {
        for overflow in [OverflowPolicy::Reject, OverflowPolicy::Truncate] {
            let config = RenderConfig {
                overflow,
                ..RenderConfig::default()
            };
            assert_eq!(
                bitboard_from_wide(-1, &config),
                Err(BitboardErrors::NegativeValue(-1))
            );
        }
    }

    #[test]
    fn truncate_keeps_low_sixty_four_bits() {
        let config = RenderConfig {
            overflow: OverflowPolicy::Truncate,
            ..RenderConfig::default()
        };
        let wide = (0xABCDi128 << 64) | 0x1234;
        assert_eq!(bitboard_from_wide(wide, &config), Ok(0x1234));
        assert_eq!(bitboard_from_wide(1i128 << 64, &config), Ok(0));
    }

    #[test]
    fn legacy_mask_always_yields_zero() {
        for value in [0u128, 1, 0xFF00, u64::MAX as u128, 1u128 << 64, u128::MAX] {
            assert_eq!(apply_mask(value, MaskMode::LegacyHighBit), 0);
        }

        let config = RenderConfig::legacy();
        assert_eq!(bitboard_from_wide(0xDEAD_BEEF, &config), Ok(0));
        assert_eq!(
            bitboard_from_wide(1i128 << 64, &config),
            Err(BitboardErrors::OutOfRange(1i128 << 64))
        );
    }

    #[test]
    fn low_word_mask_is_identity_on_u64() {
        for value in [0u64, 1, 1 << 63, 0x8100_0000_0000_0081, u64::MAX] {
            assert_eq!(apply_mask(value as u128, MaskMode::LowWord), value);
        }
    }
}
