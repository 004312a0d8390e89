//! The `base` crate defines the binary-number handling which is
//! useful in both a calculator and other associated tools.  The idea
//! is that if you want to write a different front end (a TUI, say,
//! or a web page), it would depend on the base crate but would not
//! need to depend on the calculator state machine itself.

mod binary;

pub mod prelude;

pub use crate::binary::convert::{decode, encode, WORD_BITS};
pub use crate::binary::error::MathError;
pub use crate::binary::ops::*;
