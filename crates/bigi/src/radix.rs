//! Radix bounds and the digit alphabet shared by the parser and formatter.

use crate::error::{BigIntError, BigIntResult};

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (`0-9` then `A-Z`).
pub const MAX_RADIX: u32 = 36;

/// Radix used when none is given.
pub const DECIMAL_RADIX: u32 = 10;

/// Canonical digit alphabet; a radix `r` uses the first `r` entries.
pub(crate) const NUMERALS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Validate a requested radix, narrowing it for table lookups.
pub(crate) fn check(radix: u32) -> BigIntResult<u8> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        u8::try_from(radix).map_err(|_| BigIntError::InvalidRadix { radix })
    } else {
        Err(BigIntError::InvalidRadix { radix })
    }
}

/// Value of an ASCII digit character in `radix`, case-insensitive.
///
/// Returns `None` for characters outside the radix's alphabet.
#[inline]
pub(crate) fn digit_value(byte: u8, radix: u8) -> Option<u8> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };
    (value < radix).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_bounds() {
        assert_eq!(check(2), Ok(2));
        assert_eq!(check(10), Ok(10));
        assert_eq!(check(36), Ok(36));
    }

    #[test]
    fn check_rejects_out_of_range() {
        assert_eq!(check(0), Err(BigIntError::InvalidRadix { radix: 0 }));
        assert_eq!(check(1), Err(BigIntError::InvalidRadix { radix: 1 }));
        assert_eq!(check(37), Err(BigIntError::InvalidRadix { radix: 37 }));
        assert_eq!(
            check(u32::MAX),
            Err(BigIntError::InvalidRadix { radix: u32::MAX })
        );
    }

    #[test]
    fn digit_value_is_case_insensitive() {
        assert_eq!(digit_value(b'f', 16), Some(15));
        assert_eq!(digit_value(b'F', 16), Some(15));
        assert_eq!(digit_value(b'z', 36), Some(35));
        assert_eq!(digit_value(b'Z', 36), Some(35));
    }

    #[test]
    fn digit_value_truncates_alphabet_to_radix() {
        assert_eq!(digit_value(b'1', 2), Some(1));
        assert_eq!(digit_value(b'2', 2), None);
        assert_eq!(digit_value(b'8', 8), None);
        assert_eq!(digit_value(b'9', 10), Some(9));
        assert_eq!(digit_value(b'a', 10), None);
        assert_eq!(digit_value(b'g', 16), None);
    }

    #[test]
    fn digit_value_rejects_punctuation() {
        assert_eq!(digit_value(b'.', 36), None);
        assert_eq!(digit_value(b'-', 36), None);
        assert_eq!(digit_value(b' ', 36), None);
    }

    #[test]
    fn numerals_round_trip_with_digit_value() {
        for (i, &c) in NUMERALS.iter().enumerate() {
            assert_eq!(digit_value(c, 36).map(usize::from), Some(i));
        }
    }
}
