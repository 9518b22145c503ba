//! The digit representation underlying [`Natural`](crate::Natural).
//!
//! A value is a little-endian vector of fixed-width digits. All carry and
//! product arithmetic widens into a [`DoubleDigit`] so that no
//! intermediate step can overflow.

/// One digit of the positional representation.
pub type Digit = u32;

/// Twice the width of [`Digit`]; holds any digit sum or product plus carry.
pub type DoubleDigit = u64;

/// The numeric base of the representation: 2^32.
pub const RADIX: DoubleDigit = (Digit::MAX as DoubleDigit) + 1;

/// Extracts the high digit of a double-digit value.
#[inline]
#[must_use]
pub fn high_digit(t: DoubleDigit) -> Digit {
    (t >> Digit::BITS) as Digit
}

/// Extracts the low digit of a double-digit value.
#[inline]
#[must_use]
pub fn low_digit(t: DoubleDigit) -> Digit {
    t as Digit
}

/// Places a digit in the high half of a double-digit value.
#[inline]
#[must_use]
pub fn to_high_digit(d: Digit) -> DoubleDigit {
    DoubleDigit::from(d) << Digit::BITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_round_trip() {
        let t: DoubleDigit = 0x1234_5678_9abc_def0;
        assert_eq!(high_digit(t), 0x1234_5678);
        assert_eq!(low_digit(t), 0x9abc_def0);
        assert_eq!(to_high_digit(high_digit(t)) + DoubleDigit::from(low_digit(t)), t);
    }

    #[test]
    fn test_radix() {
        assert_eq!(RADIX, 1 << 32);
        assert_eq!(high_digit(RADIX), 1);
        assert_eq!(low_digit(RADIX), 0);
    }
}
