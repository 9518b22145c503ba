//! Multiplication and division algorithms for [`Natural`](crate::Natural).

pub mod division;
pub mod karatsuba;
