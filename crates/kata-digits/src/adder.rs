//! Schoolbook addition over digit sequences.

use crate::{Digit, DigitSeq};

/// Adds two numbers stored as least-significant-first digit sequences.
///
/// Both inputs are walked place by place from the least significant digit;
/// an exhausted input contributes `0`. Each place emits `sum % 10` and
/// carries `1` into the next place when `sum > 9`. A carry left over after
/// the last place becomes a final `1` digit.
///
/// The result is always in canonical form, so adding two empty sequences
/// gives `[0]` and zero padding on the inputs never reaches the output.
///
/// # Examples
///
/// ```
/// use kata_digits::{DigitSeq, add};
///
/// let a: DigitSeq = "342".parse()?;
/// let b: DigitSeq = "465".parse()?;
/// assert_eq!(add(&a, &b).to_string(), "807");
///
/// // Carry overflow grows the result by one digit
/// let a: DigitSeq = "99".parse()?;
/// let b: DigitSeq = "1".parse()?;
/// assert_eq!(add(&a, &b).to_string(), "100");
///
/// assert_eq!(add(&DigitSeq::new(), &DigitSeq::new()), DigitSeq::zero());
/// # Ok::<(), kata_digits::DigitError>(())
/// ```
#[must_use]
pub fn add(a: &DigitSeq, b: &DigitSeq) -> DigitSeq {
    let places = a.len().max(b.len());
    let mut digits = Vec::with_capacity(places + 1);
    let mut carry = false;
    for place in 0..places {
        let x = digit_at(a, place);
        let y = digit_at(b, place);
        let (digit, carry_out) = x.add_with_carry(y, carry);
        digits.push(digit);
        carry = carry_out;
    }
    if carry {
        digits.push(Digit::D1);
    }

    let sum = DigitSeq::from_digits(digits).normalized();
    log::trace!("{a} + {b} = {sum}");
    sum
}

fn digit_at(seq: &DigitSeq, place: usize) -> Digit {
    seq.digits().get(place).copied().unwrap_or(Digit::D0)
}
