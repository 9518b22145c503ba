//! Karatsuba multiplication algorithm.
//!
//! This module provides the Karatsuba divide-and-conquer multiplication
//! algorithm, which achieves O(n^1.58) complexity, alongside the
//! schoolbook O(n·m) routine it bottoms out on.

use crate::digit::{high_digit, low_digit, Digit, DoubleDigit};
use crate::natural::Natural;

/// Karatsuba multiplication threshold.
///
/// Operands with fewer digits than this are multiplied schoolbook; a
/// single digit is the true base case of the recursion.
pub const KARATSUBA_THRESHOLD: usize = 2;

/// Performs schoolbook long multiplication: O(n·m).
///
/// Each column accumulates into a double-digit buffer, so no step can
/// overflow regardless of operand length.
#[must_use]
pub fn schoolbook_mul(m: &Natural, n: &Natural) -> Natural {
    let a = m.as_digits();
    let b = n.as_digits();
    if a.is_empty() || b.is_empty() {
        return Natural::default();
    }
    let mut c = vec![0 as Digit; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry: Digit = 0;
        for (j, &bj) in b.iter().enumerate() {
            let t = DoubleDigit::from(c[i + j])
                + DoubleDigit::from(ai) * DoubleDigit::from(bj)
                + DoubleDigit::from(carry);
            c[i + j] = low_digit(t);
            carry = high_digit(t);
        }
        // The column above b's top digit held no product yet, so the
        // final carry cannot overflow it.
        c[i + b.len()] += carry;
    }
    Natural::from_digits(c)
}

/// Performs Karatsuba multiplication.
///
/// Splits each operand at `p = max(len) / 2` and recombines the three
/// sub-products with digit shifts:
/// `z2 * RADIX^2p + z1 * RADIX^p + z0`.
#[must_use]
pub fn karatsuba_mul(a: &Natural, b: &Natural) -> Natural {
    if a.is_zero() || b.is_zero() {
        return Natural::default();
    }
    if a.digit_len() < KARATSUBA_THRESHOLD || b.digit_len() < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let p = a.digit_len().max(b.digit_len()) / 2;
    let (a_hi, a_lo) = a.split_at_digit(p);
    let (b_hi, b_lo) = b.split_at_digit(p);

    let z2 = karatsuba_mul(&a_hi, &b_hi);
    let z0 = karatsuba_mul(&a_lo, &b_lo);

    // (a_hi + a_lo)(b_hi + b_lo) >= z2 + z0 for non-negative halves,
    // so neither subtraction can underflow.
    let cross = karatsuba_mul(&(&a_hi + &a_lo), &(&b_hi + &b_lo));
    let z1 = &(&cross - &z2) - &z0;

    &(&z2.shl_digits(2 * p) + &z1.shl_digits(p)) + &z0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(s: &str) -> Natural {
        s.parse().unwrap()
    }

    #[test]
    fn test_schoolbook() {
        assert_eq!(
            schoolbook_mul(&nat("65536"), &nat("65536")),
            nat("4294967296")
        );
        assert_eq!(
            schoolbook_mul(&nat("2147483648"), &nat("2")),
            nat("4294967296")
        );
        assert_eq!(schoolbook_mul(&nat("0"), &nat("12345")), Natural::default());
    }

    #[test]
    fn test_karatsuba_small() {
        // Single-digit operands take the schoolbook base case.
        assert_eq!(
            karatsuba_mul(&nat("65536"), &nat("65536")),
            nat("4294967296")
        );
    }

    #[test]
    fn test_karatsuba_boundary_sizes() {
        // 1, 2 and 3 digit operands straddle the split point.
        let samples = [
            nat("1"),
            nat("4294967295"),
            nat("4294967296"),
            nat("18446744073709551615"),
            nat("18446744073709551616"),
            nat("79228162514264337593543950335"),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(
                    karatsuba_mul(a, b),
                    schoolbook_mul(a, b),
                    "mismatch for {a} * {b}"
                );
            }
        }
    }

    #[test]
    fn test_karatsuba_large() {
        // Wide enough to recurse several levels.
        let a = nat(&"9".repeat(200));
        let b = nat(&"8".repeat(163));
        assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
    }

    #[test]
    fn test_karatsuba_saturated_digits() {
        // All-ones digit vectors force carries out of every half-sum.
        let a = Natural::from_digits(vec![u32::MAX; 4]);
        let b = Natural::from_digits(vec![u32::MAX; 3]);
        assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
    }
}
