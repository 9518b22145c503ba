//! Error types for arithmetic preconditions and decimal parsing.

use thiserror::Error;

/// A violated arithmetic precondition.
///
/// These correspond to operations that have no result in the naturals:
/// the fallible `try_*` methods return them, while the operator traits
/// panic with the same message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Subtraction or decrement would produce a negative magnitude.
    #[error("natural subtraction underflow: subtrahend exceeds minuend")]
    Underflow,

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

/// A malformed decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty (or `"-"` with no magnitude digits).
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character outside `0-9` (or a misplaced sign) was found.
    #[error("invalid decimal digit in input")]
    InvalidDigit,
}
