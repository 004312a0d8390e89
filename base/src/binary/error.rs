//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Represents a failure in one of the binary arithmetic operations
/// defined in the base crate.
///
/// Callers are expected to branch on the variant; the `Display`
/// rendering is for human eyes only and carries no stability
/// guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MathError {
    /// The input is not a well-formed binary string: it is empty,
    /// contains a character other than `0` or `1` after stripping an
    /// optional `0b`/`0B` prefix, or its value does not fit in 32
    /// bits.  Carries the offending input.
    InvalidFormat(String),
    /// A numeric parameter falls outside the encodable range
    /// [`i32::MIN`, `u32::MAX`].
    InvalidNumber(i64),
    /// A shift amount is negative.
    InvalidShiftAmount(i64),
    /// The divisor decoded to zero.
    DivisionByZero,
    /// The mathematical result of the operation does not fit in 32
    /// bits.
    ResultOverflow,
    /// The operand of a square root was negative.  [`decode`] only
    /// produces unsigned values, so no current caller can observe
    /// this variant; it records the mathematical precondition.
    ///
    /// [`decode`]: super::convert::decode
    NegativeOperand,
}

impl Error for MathError {}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            MathError::InvalidFormat(s) => {
                write!(f, "'{s}' is not a valid binary number")
            }
            MathError::InvalidNumber(n) => {
                write!(f, "{n} cannot be represented in 32 bits")
            }
            MathError::InvalidShiftAmount(n) => {
                write!(f, "shift amount {n} is negative")
            }
            MathError::DivisionByZero => f.write_str("division by zero"),
            MathError::ResultOverflow => f.write_str("result does not fit in 32 bits"),
            MathError::NegativeOperand => f.write_str("operand is negative"),
        }
    }
}
