//! Arbitrary precision signed integers.
//!
//! [`Integer`] is a sign-magnitude pair: an explicit [`Sign`] plus a
//! [`Natural`] magnitude. Every signed operation reduces to magnitude
//! arithmetic plus sign bookkeeping, and zero is always `Positive`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{ArithmeticError, ParseError};
use crate::natural::Natural;

/// The sign of an [`Integer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// Zero or greater.
    #[default]
    Positive,
    /// Strictly less than zero.
    Negative,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// Returns the sign of a product of values with these signs.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    sign: Sign,
    magnitude: Natural,
}

impl Integer {
    /// Creates an integer from an explicit sign and magnitude.
    ///
    /// A zero magnitude is normalized to `Positive` regardless of the
    /// sign passed in.
    #[must_use]
    pub fn new(sign: Sign, magnitude: Natural) -> Self {
        let mut n = Self { sign, magnitude };
        n.normalize();
        n
    }

    /// Returns the sign; zero is `Positive`.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// Consumes the integer and returns its magnitude.
    #[must_use]
    pub fn into_magnitude(self) -> Natural {
        self.magnitude
    }

    /// Returns true if this integer is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Adds one in place; total, unlike the `Natural` decrement side.
    pub fn increment(&mut self) {
        *self += &Self::one();
    }

    /// Subtracts one in place, crossing zero into the negatives.
    pub fn decrement(&mut self) {
        *self -= &Self::one();
    }

    /// Computes `self / rhs`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let (q, _) = self.magnitude.try_divmod(&rhs.magnitude)?;
        Ok(Self::new(self.sign.combine(rhs.sign), q))
    }

    /// Converts to an `i64` by reading only the lowest two magnitude
    /// digits and applying the sign.
    ///
    /// This is a **lossy, silently truncating** conversion, with the
    /// same caveats as [`Natural::to_u64_lossy`]; values outside the
    /// `i64` range additionally wrap.
    #[must_use]
    pub fn to_i64_lossy(&self) -> i64 {
        let t = self.magnitude.to_u64_lossy() as i64;
        match self.sign {
            Sign::Positive => t,
            Sign::Negative => t.wrapping_neg(),
        }
    }

    fn normalize(&mut self) {
        if self.magnitude.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        if self.sign == rhs.sign {
            self.magnitude += &rhs.magnitude;
        } else if self.magnitude >= rhs.magnitude {
            self.magnitude = &self.magnitude - &rhs.magnitude;
            self.normalize();
        } else {
            self.sign = rhs.sign;
            self.magnitude = &rhs.magnitude - &self.magnitude;
        }
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::from(Natural::new(1))
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }
}

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude,
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, Natural::from(value.unsigned_abs()))
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    /// Parses a decimal string with an optional leading `-`.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        match s.strip_prefix('-') {
            Some(rest) => Ok(Self::new(Sign::Negative, rest.parse()?)),
            None => Ok(Self::from(s.parse::<Natural>()?)),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

// Arithmetic operations

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        self.add_assign_ref(rhs);
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        self.add_assign_ref(&rhs);
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_assign_ref(&rhs);
        self
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(mut self, rhs: &Integer) -> Self::Output {
        self.add_assign_ref(rhs);
        self
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.add_assign_ref(rhs);
        out
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        self.add_assign_ref(&(-rhs));
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        self.add_assign_ref(&(-rhs));
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(mut self, rhs: &Integer) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        self.magnitude = &self.magnitude * &rhs.magnitude;
        self.sign = self.sign.combine(rhs.sign);
        self.normalize();
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        *self *= &rhs;
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= &rhs;
        self
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(mut self, rhs: &Integer) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Integer> for Integer {
    type Output = Self;

    fn div(self, rhs: &Integer) -> Self::Output {
        &self / rhs
    }
}

impl Div for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Integer::try_div`] for the
    /// checked form.
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.sign = self.sign.flip();
        self.normalize();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
