//! # longhand-integers
//!
//! Arbitrary precision natural and signed integer arithmetic, built from
//! scratch on a base-2^32 digit vector.
//!
//! This crate provides:
//! - [`Natural`]: an unsigned magnitude stored as little-endian `u32`
//!   digits in canonical form (no most-significant zero digit)
//! - [`Integer`]: a sign-magnitude signed integer on top of `Natural`
//! - Karatsuba multiplication with a schoolbook base case
//! - Long division with two-digit quotient estimation
//! - Exact decimal string conversion in both directions
//!
//! ## Algorithm Selection
//!
//! Multiplication dispatches on operand length:
//! - Either operand a single digit: schoolbook O(n·m)
//! - Both operands two or more digits: Karatsuba O(n^1.58)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod digit;
pub mod error;
pub mod integer;
pub mod natural;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, ParseError};
pub use integer::{Integer, Sign};
pub use natural::Natural;
