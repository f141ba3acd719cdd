use crate::bitboard_errors::BitboardErrors;

/// Parse an integer literal as typed on a command line or copied from a log.
///
/// Accepts an optional leading `-`, an optional `0x`, `0b` or `0o` prefix and
/// `_` digit separators. The result is wider than a bitboard on purpose; range
/// and sign checks belong to `bitboard_from_wide`.
pub fn parse_bitboard_literal(text: &str) -> Result<i128, BitboardErrors> {
    let invalid = || BitboardErrors::InvalidLiteral(text.to_owned());

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (radix, digits) = split_radix_prefix(unsigned);
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || digits.starts_with('+') || digits.starts_with('-') {
        return Err(invalid());
    }

    let magnitude = u128::from_str_radix(&digits, radix).map_err(|_| invalid())?;
    if negative {
        if magnitude > i128::MAX as u128 + 1 {
            return Err(invalid());
        }
        Ok((magnitude as i128).wrapping_neg())
    } else {
        i128::try_from(magnitude).map_err(|_| invalid())
    }
}

fn split_radix_prefix(text: &str) -> (u32, &str) {
    let lower = text.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &text[2..]),
        Some("0b") => (2, &text[2..]),
        Some("0o") => (8, &text[2..]),
        _ => (10, text),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bitboard_literal;
    use crate::bitboard_errors::BitboardErrors;

    #[test]
    fn parses_each_radix() {
        assert_eq!(parse_bitboard_literal("42"), Ok(42));
        assert_eq!(parse_bitboard_literal("0xFF00"), Ok(0xFF00));
        assert_eq!(parse_bitboard_literal("0X00ff"), Ok(0xFF));
        assert_eq!(parse_bitboard_literal("0b1010"), Ok(10));
        assert_eq!(parse_bitboard_literal("0o17"), Ok(15));
    }

    #[test]
    fn accepts_separators_sign_and_whitespace() {
        assert_eq!(
            parse_bitboard_literal(" 0xFFFF_FFFF_FFFF_FFFF "),
            Ok(u64::MAX as i128)
        );
        assert_eq!(parse_bitboard_literal("-7"), Ok(-7));
        assert_eq!(parse_bitboard_literal("-0x10"), Ok(-16));
        assert_eq!(
            parse_bitboard_literal("0x1_0000_0000_0000_0000"),
            Ok(1i128 << 64)
        );
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "-", "0x", "0b102", "e4", "--1", "0x-1", "+5"] {
            assert_eq!(
                parse_bitboard_literal(text),
                Err(BitboardErrors::InvalidLiteral(text.to_owned())),
                "{text:?} should not parse"
            );
        }
    }
}
