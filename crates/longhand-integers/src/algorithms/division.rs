//! Long division with quotient-digit estimation.
//!
//! Quotient chunks are estimated from the top two digits of the working
//! remainder over the top digit of the divisor, then corrected downward
//! by trial subtraction. The estimates stay conservative, so the
//! correction loop runs a bounded number of steps and no normalized
//! divisor is needed; an undershot chunk is simply retried on the next
//! pass at the recomputed alignment.

use num_traits::One;

use crate::digit::{low_digit, to_high_digit, Digit, DoubleDigit};
use crate::natural::Natural;

/// Computes `(a / b, a % b)`.
///
/// Precondition (checked by [`Natural::try_divmod`]): `b` is non-zero.
pub(crate) fn divmod(a: &Natural, b: &Natural) -> (Natural, Natural) {
    debug_assert!(!b.is_zero());
    if a < b {
        return (Natural::default(), a.clone());
    }

    let bd = b.as_digits();
    let bl = bd.len();
    let mut quotient = Natural::default();
    let mut rem = a.clone();

    // Each pass peels one quotient chunk at the remainder's current top
    // alignment, so `rem` strictly decreases by at least `b` per pass.
    while rem >= *b {
        let rd = rem.as_digits();
        let rl = rd.len();
        let i = rl - bl;
        let (chunk, step) = if i >= 1 {
            // Top two remainder digits over the top divisor digit,
            // scaled down one position so the estimate cannot exceed
            // two digits. Dividing by one more than the top digit keeps
            // the chunk from overshooting even when the divisor's lower
            // digits are large; any shortfall is picked up on the next
            // pass at the recomputed alignment.
            let t = (to_high_digit(rd[rl - 1]) + DoubleDigit::from(rd[rl - 2]))
                / (DoubleDigit::from(bd[bl - 1]) + 1);
            let step = Natural::one().shl_digits(i - 1);
            // `rem >= b * RADIX^(i-1)` at this alignment, so a floor of
            // one whole step is always a valid chunk.
            let chunk = Natural::from(t.max(1)).shl_digits(i - 1);
            (chunk, step)
        } else {
            // Same digit length: a single-digit guess from the top one
            // or two digits of each operand.
            let guess: Digit = if bl == 1 {
                rd[0] / bd[0]
            } else {
                let num = to_high_digit(rd[rl - 1]) + DoubleDigit::from(rd[rl - 2]);
                let den = to_high_digit(bd[bl - 1]) + DoubleDigit::from(bd[bl - 2]);
                low_digit(num / den)
            };
            (Natural::new(guess), Natural::one())
        };

        // `rem >= b * step` holds at this alignment, so the correction
        // stops no lower than one step.
        let mut x = chunk;
        while rem < b * &x {
            x -= &step;
        }

        rem = &rem - &(b * &x);
        quotient += &x;
    }

    debug_assert_eq!(&(&quotient * b) + &rem, *a);
    debug_assert!(rem < *b);
    (quotient, rem)
}
