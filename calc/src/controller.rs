//! The calculator's control unit.
//!
//! [`Calculator`] owns the whole of the session state: the operand
//! being typed, the captured first operand, the pending operator,
//! the machine's phase and the history of completed calculations.
//! Every input event mutates it in place.  Within this crate the
//! controller performs the following functions:
//!
//! - Digit accumulation and validation against the 32-bit ceiling
//! - Operator capture, including implicit chained calculation
//! - Dispatch to the arithmetic library and range policy on results
//! - Conversion of every failure into the `Error` phase
//! - Recording completed calculations

use tracing::{event, Level};

use base::prelude::{decode, WORD_BITS};

use crate::error::CalcError;
use crate::history::HistoryLog;
use crate::types::{Operator, Phase, StateSnapshot, UnknownOperator};

/// Widest operand the display accepts, in digits.  A 32-digit binary
/// string is at most 2^32 - 1, so staying within this width keeps
/// every operand in range.
const INPUT_DIGIT_LIMIT: usize = WORD_BITS as usize;

/// The calculator state machine.  See the [crate docs](crate) for
/// the interaction model.
#[derive(Debug)]
pub struct Calculator {
    current_input: String,
    previous_value: Option<String>,
    operator: Option<Operator>,
    phase: Phase,
    fresh_input: bool,
    error: Option<CalcError>,
    history: HistoryLog,
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new()
    }
}

impl Calculator {
    #[must_use]
    pub fn new() -> Calculator {
        Calculator {
            current_input: "0".to_string(),
            previous_value: None,
            operator: None,
            phase: Phase::Input,
            fresh_input: true,
            error: None,
            history: HistoryLog::default(),
        }
    }

    /// Feeds one digit into the current operand.
    ///
    /// Digit entry is also the recovery path out of the `Error`
    /// phase: the error is dropped and the digit starts a fresh
    /// operand.  A digit which would push the operand past 32 digits
    /// is rolled back and reported as `Overflow` without disturbing
    /// the phase or the operand already typed.
    pub fn input_digit(&mut self, digit: char) -> Result<(), CalcError> {
        if self.phase == Phase::Error {
            self.recover();
        }
        if digit != '0' && digit != '1' {
            event!(Level::WARN, "rejecting non-binary digit {digit:?}");
            return Err(self.fail(CalcError::InvalidInput(digit)));
        }
        if self.fresh_input {
            self.current_input.clear();
            self.current_input.push(digit);
            self.fresh_input = false;
        } else if self.current_input == "0" {
            // A lone leading zero is never kept.
            self.current_input.clear();
            self.current_input.push(digit);
        } else {
            self.current_input.push(digit);
            if self.current_input.len() > INPUT_DIGIT_LIMIT {
                self.current_input.pop();
                event!(
                    Level::WARN,
                    "operand is already {INPUT_DIGIT_LIMIT} digits wide, dropping {digit:?}"
                );
                return Err(CalcError::Overflow);
            }
        }
        self.phase = Phase::Input;
        Ok(())
    }

    /// Selects an infix operator, capturing the current operand.
    ///
    /// With an operator and a freshly-typed second operand already
    /// pending, the pending calculation runs first, which is what
    /// makes chains like `1 + 1 + 1 =` evaluate left to right.
    /// Operators are ignored in the `Error` phase; only digit entry
    /// or an explicit clear leaves it.
    pub fn input_operator(&mut self, symbol: char) -> Result<(), CalcError> {
        if self.phase == Phase::Error {
            return Ok(());
        }
        let op = match Operator::try_from(symbol) {
            Ok(op) => op,
            Err(UnknownOperator(ch)) => {
                event!(Level::WARN, "rejecting unknown operator {ch:?}");
                return Err(self.fail(CalcError::InvalidInput(ch)));
            }
        };
        if self.operator.is_some() && !self.fresh_input {
            self.calculate()?;
        }
        self.previous_value = Some(self.current_input.clone());
        self.operator = Some(op);
        self.fresh_input = true;
        self.phase = Phase::OperatorPending;
        event!(Level::DEBUG, "operator {op} selected, awaiting second operand");
        Ok(())
    }

    /// Runs the pending calculation.
    ///
    /// Does nothing in the `Error` phase or when no operator and
    /// first operand are pending.  On success the result becomes the
    /// current input, the calculation is recorded in the history and
    /// the phase moves to `Result`.  On failure the phase moves to
    /// `Error` with the operands and operator left in place so a
    /// caller can inspect what failed.
    pub fn calculate(&mut self) -> Result<(), CalcError> {
        if self.phase == Phase::Error {
            return Ok(());
        }
        let (Some(op), Some(previous)) = (self.operator, self.previous_value.clone()) else {
            return Ok(());
        };
        let current = self.current_input.clone();
        let lhs = self.decode_operand(&previous)?;
        let rhs = self.decode_operand(&current)?;
        // The display only shows unsigned binary, so a negative
        // difference is refused here before the library's wrapping
        // subtract would produce its two's-complement pattern.
        if op == Operator::Subtract && rhs > lhs {
            event!(Level::WARN, "{previous} - {current} would be negative");
            return Err(self.fail(CalcError::NegativeResult));
        }
        let result = match op.apply(&previous, &current) {
            Ok(result) => result,
            Err(e) => {
                event!(Level::WARN, "{previous} {op} {current} failed: {e}");
                return Err(self.fail(CalcError::from(e)));
            }
        };
        event!(Level::DEBUG, "{previous} {op} {current} = {result}");
        self.history.record(format!("{previous} {op} {current} = {result}"));
        self.current_input = result;
        self.previous_value = None;
        self.operator = None;
        self.fresh_input = true;
        self.phase = Phase::Result;
        Ok(())
    }

    /// Deletes the last digit of the current operand.
    ///
    /// A no-op while a fresh second operand is awaited or when the
    /// display already shows `"0"`.  In the `Error` phase a
    /// backspace recovers instead of deleting.
    pub fn backspace(&mut self) {
        if self.phase == Phase::Error {
            self.recover();
            return;
        }
        if (self.phase == Phase::OperatorPending && self.fresh_input)
            || self.current_input == "0"
        {
            return;
        }
        self.current_input.pop();
        if self.current_input.is_empty() {
            self.current_input.push('0');
        }
        // The shortened operand is now the one being typed.
        self.fresh_input = false;
    }

    /// Restores every field to its initial value.  The history is
    /// kept; use [`Calculator::reset`] to drop it too.
    pub fn clear(&mut self) {
        self.recover();
    }

    /// Like [`Calculator::clear`], and also clears the history.
    pub fn reset(&mut self) {
        self.recover();
        self.history.clear();
    }

    /// An immutable snapshot of the controller for rendering.
    #[must_use]
    pub fn state(&self) -> StateSnapshot {
        StateSnapshot {
            phase: self.phase,
            current_input: self.current_input.clone(),
            previous_value: self.previous_value.clone(),
            operator: self.operator,
            decimal_value: decode(&self.current_input)
                .expect("current input is always a valid binary string"),
            has_error: self.error.is_some(),
            error_message: self.error.as_ref().map(|e| e.to_string()),
        }
    }

    /// The most recent `limit` completed calculations, most recent
    /// first.
    #[must_use]
    pub fn history(&self, limit: usize) -> Vec<String> {
        self.history.most_recent(limit)
    }

    /// The error which put the controller into the `Error` phase, if
    /// that is where it is.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    fn decode_operand(&mut self, operand: &str) -> Result<u32, CalcError> {
        match decode(operand) {
            Ok(value) => Ok(value),
            Err(e) => Err(self.fail(CalcError::from(e))),
        }
    }

    fn fail(&mut self, error: CalcError) -> CalcError {
        self.phase = Phase::Error;
        self.error = Some(error.clone());
        error
    }

    fn recover(&mut self) {
        self.current_input.clear();
        self.current_input.push('0');
        self.previous_value = None;
        self.operator = None;
        self.phase = Phase::Input;
        self.fresh_input = true;
        self.error = None;
    }
}
