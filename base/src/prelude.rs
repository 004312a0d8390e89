//! The prelude exports the functions and types which are useful in
//! working with binary-string values.  Providing this prelude is the
//! main purpose of the base crate.
pub use super::binary::convert::{decode, encode, WORD_BITS};
pub use super::binary::error::MathError;
pub use super::binary::ops::{
    add, bitwise_and, bitwise_not, bitwise_or, bitwise_xor, divide, multiply, power, shift_left,
    shift_right, square_root, subtract,
};
