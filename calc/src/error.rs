//! Calculator-level error classification.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::MathError;

/// Describes why the calculator rejected an input event or a
/// calculation.
///
/// Each entry point produces at most one of these per invocation,
/// and the variants are mutually exclusive, so a frontend can branch
/// on the variant to decide whether to retry, discard the input, or
/// reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CalcError {
    /// A digit or operator token the calculator does not accept.
    InvalidInput(char),
    /// An operand is not a well-formed binary string.
    InvalidFormat(String),
    DivisionByZero,
    /// A subtraction came out negative.  The calculator only
    /// displays unsigned binary, so such results are refused rather
    /// than wrapped.
    NegativeResult,
    /// An operand or result does not fit in 32 bits.
    Overflow,
}

impl Error for CalcError {}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CalcError::InvalidInput(ch) => {
                write!(f, "'{ch}' is not a binary digit or an operator")
            }
            CalcError::InvalidFormat(s) => {
                write!(f, "'{s}' is not a valid binary number")
            }
            CalcError::DivisionByZero => f.write_str("division by zero"),
            CalcError::NegativeResult => f.write_str("result would be negative"),
            CalcError::Overflow => f.write_str("result does not fit in 32 bits"),
        }
    }
}

/// The single point where library failures become calculator errors.
impl From<MathError> for CalcError {
    fn from(e: MathError) -> CalcError {
        match e {
            MathError::InvalidFormat(s) => CalcError::InvalidFormat(s),
            MathError::DivisionByZero => CalcError::DivisionByZero,
            MathError::NegativeOperand => CalcError::NegativeResult,
            // The infix operations can only overflow beyond this
            // point; the parameter-validation variants cannot reach
            // the controller but must still map somewhere total.
            MathError::InvalidNumber(_)
            | MathError::InvalidShiftAmount(_)
            | MathError::ResultOverflow => CalcError::Overflow,
        }
    }
}
