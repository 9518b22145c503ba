//! Arbitrary precision unsigned integers.
//!
//! [`Natural`] stores a value as little-endian base-2^32 digits in
//! canonical form: the digit vector never ends in a zero digit, and the
//! empty vector is the value zero. Every operation normalizes before
//! returning, so two equal values always have identical digit vectors.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Rem, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::algorithms::{division, karatsuba};
use crate::digit::{high_digit, low_digit, to_high_digit, Digit, DoubleDigit, RADIX};
use crate::error::{ArithmeticError, ParseError};

/// An arbitrary precision unsigned integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Natural {
    pub(crate) digits: Vec<Digit>,
}

impl Natural {
    /// Creates a natural from a single digit.
    #[must_use]
    pub fn new(value: Digit) -> Self {
        let mut n = Self::default();
        if value != 0 {
            n.digits.push(value);
        }
        n
    }

    /// Creates a natural from a raw little-endian digit vector.
    ///
    /// The vector is normalized, so trailing zero digits are accepted
    /// and stripped.
    #[must_use]
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        let mut n = Self { digits };
        n.normalize();
        n
    }

    /// Returns the little-endian digits; empty for zero.
    #[must_use]
    pub fn as_digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the number of digits; zero has no digits.
    #[must_use]
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the digit vector is in canonical form.
    ///
    /// Public operations always return canonical values; this is the
    /// predicate the tests assert.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.digits.last() != Some(&0)
    }

    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        debug_assert!(self.is_canonical());
    }

    /// Adds one in place, rippling the carry through saturated digits.
    pub fn increment(&mut self) {
        for d in &mut self.digits {
            let (v, overflow) = d.overflowing_add(1);
            *d = v;
            if !overflow {
                return;
            }
        }
        self.digits.push(1);
    }

    /// Subtracts one in place.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Underflow`] if the value is zero.
    pub fn try_decrement(&mut self) -> Result<(), ArithmeticError> {
        if self.digits.is_empty() {
            return Err(ArithmeticError::Underflow);
        }
        for d in &mut self.digits {
            let (v, borrow) = d.overflowing_sub(1);
            *d = v;
            if !borrow {
                break;
            }
        }
        self.normalize();
        Ok(())
    }

    /// Computes `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Underflow`] if `rhs > self`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if *self < *rhs {
            return Err(ArithmeticError::Underflow);
        }
        let mut a = self.digits.clone();
        let b = &rhs.digits;
        for i in 0..b.len() {
            if a[i] < b[i] {
                a[i] = low_digit(RADIX + DoubleDigit::from(a[i]) - DoubleDigit::from(b[i]));
                // Ripple the borrow through zero digits; `self >= rhs`
                // guarantees a non-zero digit absorbs it.
                let mut j = i + 1;
                while a[j] == 0 {
                    a[j] = Digit::MAX;
                    j += 1;
                }
                a[j] -= 1;
            } else {
                a[i] -= b[i];
            }
        }
        Ok(Self::from_digits(a))
    }

    /// Computes quotient and remainder in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn try_divmod(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(division::divmod(self, rhs))
    }

    /// Computes quotient and remainder in one pass.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn divmod(&self, rhs: &Self) -> (Self, Self) {
        match self.try_divmod(rhs) {
            Ok(pair) => pair,
            Err(e) => panic!("{e}"),
        }
    }

    /// Multiplies by `RADIX^k`, appending `k` zero digits at the low end.
    #[must_use]
    pub fn shl_digits(&self, k: usize) -> Self {
        if self.digits.is_empty() || k == 0 {
            return self.clone();
        }
        let mut digits = vec![0; self.digits.len() + k];
        digits[k..].copy_from_slice(&self.digits);
        // Top digit is unchanged, so the result is already canonical.
        Self { digits }
    }

    /// Divides by `RADIX^k`, dropping the `k` low digits.
    #[must_use]
    pub fn shr_digits(&self, k: usize) -> Self {
        if k >= self.digits.len() {
            return Self::default();
        }
        Self {
            digits: self.digits[k..].to_vec(),
        }
    }

    /// Splits into `(high, low)` at digit position `p`, so that
    /// `self == high * RADIX^p + low`.
    ///
    /// Both halves are new owned values; nothing aliases `self`.
    #[must_use]
    pub fn split_at_digit(&self, p: usize) -> (Self, Self) {
        if p >= self.digits.len() {
            return (Self::default(), self.clone());
        }
        let high = Self {
            digits: self.digits[p..].to_vec(),
        };
        let low = Self::from_digits(self.digits[..p].to_vec());
        (high, low)
    }

    /// Multiplies by a single digit.
    #[must_use]
    pub fn mul_digit(&self, rhs: Digit) -> Self {
        if self.digits.is_empty() || rhs == 0 {
            return Self::default();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        let mut carry: Digit = 0;
        for &d in &self.digits {
            let t = DoubleDigit::from(d) * DoubleDigit::from(rhs) + DoubleDigit::from(carry);
            digits.push(low_digit(t));
            carry = high_digit(t);
        }
        if carry != 0 {
            digits.push(carry);
        }
        Self { digits }
    }

    /// Converts to a `u64` by reading only the lowest two digits.
    ///
    /// This is a **lossy, silently truncating** conversion: values that
    /// do not fit in two digits lose their high digits without any
    /// indication. It exists as a best-effort convenience, not a
    /// validated narrowing cast.
    #[must_use]
    pub fn to_u64_lossy(&self) -> u64 {
        let mut t: DoubleDigit = 0;
        if self.digits.len() > 1 {
            t += to_high_digit(self.digits[1]);
        }
        if let Some(&d) = self.digits.first() {
            t += DoubleDigit::from(d);
        }
        t
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        let b = &rhs.digits;
        let len = self.digits.len().max(b.len()) + 1;
        self.digits.resize(len, 0);
        let mut carry = false;
        for i in 0..b.len() {
            let t = DoubleDigit::from(self.digits[i])
                + DoubleDigit::from(b[i])
                + DoubleDigit::from(carry);
            self.digits[i] = low_digit(t);
            carry = high_digit(t) != 0;
        }
        if carry {
            for d in &mut self.digits[b.len()..] {
                let (v, overflow) = d.overflowing_add(1);
                *d = v;
                if !overflow {
                    break;
                }
            }
        }
        self.normalize();
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form makes digit count decisive; ties compare from
        // the most significant digit down.
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => self.digits.iter().rev().cmp(other.digits.iter().rev()),
            ord => ord,
        }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for Natural {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self.digits == [1]
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self::from_digits(vec![low_digit(value), high_digit(value)])
    }
}

impl FromStr for Natural {
    type Err = ParseError;

    /// Parses a decimal string by Horner's method.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let mut acc = Self::default();
        for b in s.bytes() {
            if !b.is_ascii_digit() {
                return Err(ParseError::InvalidDigit);
            }
            acc = acc.mul_digit(10);
            acc += &Self::new(Digit::from(b - b'0'));
        }
        Ok(acc)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let ten = Self::new(10);
        let mut out = String::new();
        let mut a = self.clone();
        while !a.is_zero() {
            let (q, r) = division::divmod(&a, &ten);
            // The remainder is a single digit in 0..=9.
            out.push(char::from(b'0' + r.to_u64_lossy() as u8));
            a = q;
        }
        f.write_str(&out.chars().rev().collect::<String>())
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

// Arithmetic operations

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        self.add_assign_ref(rhs);
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Natural) {
        self.add_assign_ref(&rhs);
    }
}

impl Add for Natural {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_assign_ref(&rhs);
        self
    }
}

impl Add<&Natural> for Natural {
    type Output = Self;

    fn add(mut self, rhs: &Natural) -> Self::Output {
        self.add_assign_ref(rhs);
        self
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.add_assign_ref(rhs);
        out
    }
}

impl SubAssign<&Natural> for Natural {
    fn sub_assign(&mut self, rhs: &Natural) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, rhs: Natural) {
        *self = &*self - &rhs;
    }
}

impl Sub for Natural {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Natural> for Natural {
    type Output = Self;

    fn sub(self, rhs: &Natural) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Natural {
    type Output = Natural;

    /// # Panics
    ///
    /// Panics on underflow; use [`Natural::try_sub`] for the checked form.
    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(diff) => diff,
            Err(e) => panic!("{e}"),
        }
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Natural) {
        *self = &*self * &rhs;
    }
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Natural> for Natural {
    type Output = Self;

    fn mul(self, rhs: &Natural) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        karatsuba::karatsuba_mul(self, rhs)
    }
}

impl Div for Natural {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Natural> for Natural {
    type Output = Self;

    fn div(self, rhs: &Natural) -> Self::Output {
        &self / rhs
    }
}

impl Div for &Natural {
    type Output = Natural;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Natural::try_divmod`] for the
    /// checked form.
    fn div(self, rhs: Self) -> Self::Output {
        self.divmod(rhs).0
    }
}

impl Rem for Natural {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem<&Natural> for Natural {
    type Output = Self;

    fn rem(self, rhs: &Natural) -> Self::Output {
        &self % rhs
    }
}

impl Rem for &Natural {
    type Output = Natural;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Natural::try_divmod`] for the
    /// checked form.
    fn rem(self, rhs: Self) -> Self::Output {
        self.divmod(rhs).1
    }
}
