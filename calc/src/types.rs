//! Shared vocabulary of the calculator state machine.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::MathError;

/// The controller's position in its finite-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// The default state; digits extend the current operand.
    Input,
    /// An operator has been chosen and the second operand is awaited.
    OperatorPending,
    /// The last action completed a calculation.
    Result,
    /// The last action failed validation or computation.
    Error,
}

/// One of the four infix operations the calculator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        })
    }
}

#[derive(Debug)]
pub struct UnknownOperator(pub char);

impl Display for UnknownOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;
    fn try_from(symbol: char) -> Result<Operator, UnknownOperator> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(UnknownOperator(other)),
        }
    }
}

impl Operator {
    /// Runs the matching library operation on two binary strings.
    pub(crate) fn apply(&self, lhs: &str, rhs: &str) -> Result<String, MathError> {
        match self {
            Operator::Add => base::add(lhs, rhs),
            Operator::Subtract => base::subtract(lhs, rhs),
            Operator::Multiply => base::multiply(lhs, rhs),
            Operator::Divide => base::divide(lhs, rhs),
        }
    }
}

/// An immutable snapshot of the controller, for a frontend to
/// render.  The snapshot serializes, so a web or RPC frontend can
/// ship it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub phase: Phase,
    /// The binary string being typed or last displayed.
    pub current_input: String,
    /// The operand captured when an operator was selected.
    pub previous_value: Option<String>,
    pub operator: Option<Operator>,
    /// `current_input` decoded to its numeric value.
    pub decimal_value: u32,
    pub has_error: bool,
    pub error_message: Option<String>,
}
