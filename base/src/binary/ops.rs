//! The arithmetic and bitwise operations of the calculator.
//!
//! All functions here are pure: they take binary strings, decode
//! them, compute, and encode the result.  Both operands of every
//! two-operand function go through [`decode`] before any arithmetic
//! happens, so a malformed operand fails the same way no matter
//! which position it occupies or which operation it was given to.

use super::convert::{decode, encode, WORD_BITS};
use super::error::MathError;

/// Adds two binary strings.  Fails with `ResultOverflow` when the
/// sum needs more than 32 bits.
pub fn add(augend: &str, addend: &str) -> Result<String, MathError> {
    let sum = u64::from(decode(augend)?) + u64::from(decode(addend)?);
    if sum > u64::from(u32::MAX) {
        return Err(MathError::ResultOverflow);
    }
    encode(sum as i64)
}

/// Subtracts one binary string from another.  A difference below
/// zero wraps modulo 2^32, coming out as the two's-complement bit
/// pattern of the negative value.
pub fn subtract(minuend: &str, subtrahend: &str) -> Result<String, MathError> {
    let difference = decode(minuend)?.wrapping_sub(decode(subtrahend)?);
    encode(i64::from(difference))
}

/// Multiplies two binary strings.  Fails with `ResultOverflow` when
/// the product needs more than 32 bits.
pub fn multiply(multiplicand: &str, multiplier: &str) -> Result<String, MathError> {
    let product = u64::from(decode(multiplicand)?) * u64::from(decode(multiplier)?);
    if product > u64::from(u32::MAX) {
        return Err(MathError::ResultOverflow);
    }
    encode(product as i64)
}

/// Divides one binary string by another, rounding toward zero.
pub fn divide(dividend: &str, divisor: &str) -> Result<String, MathError> {
    let dividend = decode(dividend)?;
    match decode(divisor)? {
        0 => Err(MathError::DivisionByZero),
        divisor => encode(i64::from(dividend / divisor)),
    }
}

/// Bitwise AND of two binary strings.
pub fn bitwise_and(lhs: &str, rhs: &str) -> Result<String, MathError> {
    encode(i64::from(decode(lhs)? & decode(rhs)?))
}

/// Bitwise OR of two binary strings.
pub fn bitwise_or(lhs: &str, rhs: &str) -> Result<String, MathError> {
    encode(i64::from(decode(lhs)? | decode(rhs)?))
}

/// Bitwise XOR of two binary strings.
pub fn bitwise_xor(lhs: &str, rhs: &str) -> Result<String, MathError> {
    encode(i64::from(decode(lhs)? ^ decode(rhs)?))
}

/// Bitwise complement of a binary string, reinterpreted as a 32-bit
/// unsigned value (so `not("0")` is 32 one-bits).
pub fn bitwise_not(operand: &str) -> Result<String, MathError> {
    encode(i64::from(!decode(operand)?))
}

/// Shifts a binary string left by `amount` bit positions.
///
/// Bits carried past bit 31 are discarded, and a shift of 32 or more
/// positions moves the whole value out, leaving zero.  A negative
/// amount fails with `InvalidShiftAmount`.
pub fn shift_left(operand: &str, amount: i64) -> Result<String, MathError> {
    let value = decode(operand)?;
    if amount < 0 {
        return Err(MathError::InvalidShiftAmount(amount));
    }
    let shifted = if amount >= i64::from(WORD_BITS) {
        0
    } else {
        ((u64::from(value) << amount) & u64::from(u32::MAX)) as u32
    };
    encode(i64::from(shifted))
}

/// Shifts a binary string right by `amount` bit positions.
///
/// Bits shifted past bit 0 are discarded; a shift of 32 or more
/// positions leaves zero.  A negative amount fails with
/// `InvalidShiftAmount`.
pub fn shift_right(operand: &str, amount: i64) -> Result<String, MathError> {
    let value = decode(operand)?;
    if amount < 0 {
        return Err(MathError::InvalidShiftAmount(amount));
    }
    let shifted = if amount >= i64::from(WORD_BITS) {
        0
    } else {
        value >> amount
    };
    encode(i64::from(shifted))
}

/// Raises a binary string to the given power.  Fails with
/// `ResultOverflow` when the result needs more than 32 bits.
pub fn power(base: &str, exponent: u32) -> Result<String, MathError> {
    match decode(base)?.checked_pow(exponent) {
        Some(result) => encode(i64::from(result)),
        None => Err(MathError::ResultOverflow),
    }
}

/// Integer square root of a binary string: the largest `r` with
/// `r * r <= n`.
///
/// A square root of a negative number would fail with
/// `NegativeOperand`, but [`decode`] only produces unsigned values,
/// so that case has no constructor path here.
pub fn square_root(operand: &str) -> Result<String, MathError> {
    let n = u64::from(decode(operand)?);
    // Start from the float estimate and fix it up; near the top of
    // the range the estimate can be off by one.
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    encode(root as i64)
}

#[cfg(test)]
mod tests;
