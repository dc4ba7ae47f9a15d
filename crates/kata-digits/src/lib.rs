//! Arbitrary-size non-negative integers stored as decimal digit sequences.
//!
//! Numbers are kept least significant digit first, so addition can walk both
//! operands from the front and grow the result at the back.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of a single decimal digit 0-9
//! - [`digit_seq`]: [`DigitSeq`], the number itself, with conversions to and
//!   from integers and decimal strings
//! - [`add`]: Schoolbook addition with carry
//!
//! # Examples
//!
//! ```
//! use kata_digits::{DigitSeq, add};
//!
//! let a = DigitSeq::try_from_values(&[2, 4, 3])?; // 342
//! let b = DigitSeq::try_from_values(&[5, 6, 4])?; // 465
//!
//! let sum = add(&a, &b);
//! assert_eq!(sum, DigitSeq::try_from_values(&[7, 0, 8])?); // 807
//! # Ok::<(), kata_digits::DigitError>(())
//! ```

pub use self::{adder::add, digit::Digit, digit_seq::DigitSeq, error::DigitError};

mod adder;
pub mod digit;
pub mod digit_seq;
mod error;
