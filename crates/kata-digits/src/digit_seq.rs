//! Non-negative integers stored as least-significant-first digit sequences.

use std::{
    fmt::{self, Display},
    ops::Add,
    slice,
    str::FromStr,
};

use crate::{Digit, DigitError, adder};

/// A non-negative integer stored as decimal digits, least significant first.
///
/// `DigitSeq` keeps its digits exactly as they were given: constructing one
/// never trims or pads. Sequences produced by this crate (sums, conversions
/// from integers, [`DigitSeq::normalized`]) are always in *canonical form*:
/// no most-significant zero digits, with zero written as the single digit
/// `[0]`. The empty sequence is accepted as input and reads as zero.
///
/// Equality is structural, so `[7, 0, 8]` and `[7, 0, 8, 0]` compare unequal
/// even though they represent the same number. Compare
/// [`normalized`](DigitSeq::normalized) sequences to compare values.
///
/// # Examples
///
/// ```
/// use kata_digits::DigitSeq;
///
/// // 342 + 465 = 807
/// let a = DigitSeq::try_from_values(&[2, 4, 3])?;
/// let b = DigitSeq::try_from_values(&[5, 6, 4])?;
/// let sum = &a + &b;
///
/// assert_eq!(sum, DigitSeq::try_from_values(&[7, 0, 8])?);
/// assert_eq!(sum.to_string(), "807");
/// assert_eq!(sum.to_u128(), Some(807));
/// # Ok::<(), kata_digits::DigitError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitSeq {
    digits: Vec<Digit>,
}

impl DigitSeq {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// Creates the canonical zero, `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            digits: vec![Digit::D0],
        }
    }

    /// Creates a sequence from digits given least significant first.
    #[must_use]
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Self { digits }
    }

    /// Creates a sequence from raw values given least significant first.
    ///
    /// # Errors
    ///
    /// Returns [`DigitError::OutOfRange`] for the first value greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::{DigitError, DigitSeq};
    ///
    /// assert_eq!(DigitSeq::try_from_values(&[1, 2])?.to_u128(), Some(21));
    /// assert_eq!(
    ///     DigitSeq::try_from_values(&[1, 12]),
    ///     Err(DigitError::OutOfRange { value: 12 })
    /// );
    /// # Ok::<(), DigitError>(())
    /// ```
    pub fn try_from_values(values: &[u8]) -> Result<Self, DigitError> {
        values.iter().map(|&value| Digit::try_from(value)).collect()
    }

    /// Creates the canonical sequence for `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::DigitSeq;
    ///
    /// assert_eq!(DigitSeq::from_u128(0), DigitSeq::zero());
    /// assert_eq!(DigitSeq::from_u128(120).to_string(), "120");
    /// ```
    #[must_use]
    pub fn from_u128(mut value: u128) -> Self {
        let mut digits = Vec::new();
        loop {
            // `value % 10` is always below 10
            #[expect(clippy::cast_possible_truncation)]
            digits.push(Digit::from_value((value % 10) as u8));
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits }
    }

    /// Returns the integer value, or `None` if it does not fit in a `u128`.
    ///
    /// Both `[]` and `[0]` read as `0`.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.iter().rev().try_fold(0_u128, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u128::from(digit.value()))
        })
    }

    /// Returns the number of stored digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if no digits are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns an iterator over the digits, least significant first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Digit> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }

    /// Returns `true` if the sequence represents zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&digit| digit == Digit::D0)
    }

    /// Returns `true` if the sequence is in canonical form.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::DigitSeq;
    ///
    /// assert!(DigitSeq::zero().is_canonical());
    /// assert!(!DigitSeq::new().is_canonical());
    /// assert!(!DigitSeq::try_from_values(&[1, 0])?.is_canonical());
    /// # Ok::<(), kata_digits::DigitError>(())
    /// ```
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        match self.digits.last() {
            None => false,
            Some(&Digit::D0) => self.digits.len() == 1,
            Some(_) => true,
        }
    }

    /// Converts the sequence to canonical form.
    ///
    /// Drops most-significant zero digits; an all-zero or empty sequence
    /// becomes `[0]`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        while self.digits.last() == Some(&Digit::D0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(Digit::D0);
        }
        self
    }
}

impl From<Vec<Digit>> for DigitSeq {
    fn from(digits: Vec<Digit>) -> Self {
        Self::from_digits(digits)
    }
}

impl From<u128> for DigitSeq {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl TryFrom<&[u8]> for DigitSeq {
    type Error = DigitError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_values(values)
    }
}

impl FromIterator<Digit> for DigitSeq {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DigitSeq {
    type Item = &'a Digit;
    type IntoIter = slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl Display for DigitSeq {
    /// Writes the number most significant digit first, the way it is read.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        for digit in self.digits.iter().rev() {
            Display::fmt(digit, f)?;
        }
        Ok(())
    }
}

impl FromStr for DigitSeq {
    type Err = DigitError;

    /// Parses a decimal string written most significant digit first.
    ///
    /// Leading zeros are kept as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DigitError::Empty);
        }
        let mut digits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                Digit::try_from(ch).map_err(|_| DigitError::InvalidChar { ch, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        digits.reverse();
        Ok(Self { digits })
    }
}

impl Add for &DigitSeq {
    type Output = DigitSeq;

    fn add(self, rhs: Self) -> Self::Output {
        adder::add(self, rhs)
    }
}

impl Add for DigitSeq {
    type Output = DigitSeq;

    fn add(self, rhs: Self) -> Self::Output {
        adder::add(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seq(values: &[u8]) -> DigitSeq {
        DigitSeq::try_from_values(values).unwrap()
    }

    #[test]
    fn test_zero_convention() {
        // construction
        assert_eq!(DigitSeq::from_u128(0), seq(&[0]));
        assert_eq!(DigitSeq::new().normalized(), seq(&[0]));
        assert_eq!(seq(&[0, 0, 0]).normalized(), seq(&[0]));

        // decomposition
        assert_eq!(DigitSeq::new().to_u128(), Some(0));
        assert_eq!(seq(&[0]).to_u128(), Some(0));
        assert!(DigitSeq::new().is_zero());
        assert!(seq(&[0, 0]).is_zero());
        assert_eq!(DigitSeq::new().to_string(), "0");
    }

    #[test]
    fn test_construction_keeps_digits() {
        let s = seq(&[1, 0, 0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_u128(), Some(1));
        assert!(!s.is_canonical());
        assert_eq!(s.normalized(), seq(&[1]));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            DigitSeq::try_from_values(&[3, 10, 2]),
            Err(DigitError::OutOfRange { value: 10 })
        );
        assert_eq!(
            DigitSeq::try_from([255_u8].as_slice()),
            Err(DigitError::OutOfRange { value: 255 })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let s: DigitSeq = "807".parse().unwrap();
        assert_eq!(s, seq(&[7, 0, 8]));
        assert_eq!(s.to_string(), "807");

        let padded: DigitSeq = "0042".parse().unwrap();
        assert_eq!(padded, seq(&[2, 4, 0, 0]));
        assert_eq!(padded.to_string(), "0042");

        assert_eq!("".parse::<DigitSeq>(), Err(DigitError::Empty));
        assert_eq!(
            "12a4".parse::<DigitSeq>(),
            Err(DigitError::InvalidChar {
                ch: 'a',
                position: 2
            })
        );
        assert_eq!(
            "-1".parse::<DigitSeq>(),
            Err(DigitError::InvalidChar {
                ch: '-',
                position: 0
            })
        );
    }

    #[test]
    fn test_to_u128_overflow() {
        let max = DigitSeq::from_u128(u128::MAX);
        assert_eq!(max.to_u128(), Some(u128::MAX));

        let too_big = &max + &seq(&[1]);
        assert_eq!(too_big.to_u128(), None);
    }

    #[test]
    fn test_iteration_order() {
        let s = seq(&[2, 4, 3]);
        let collected: Vec<u8> = s.iter().map(u8::from).collect();
        assert_eq!(collected, vec![2, 4, 3]);
        let borrowed: Vec<Digit> = (&s).into_iter().copied().collect();
        assert_eq!(borrowed, s.digits());
    }

    proptest! {
        #[test]
        fn prop_u128_conversion(x: u128) {
            let s = DigitSeq::from_u128(x);
            prop_assert!(s.is_canonical());
            prop_assert_eq!(s.to_u128(), Some(x));
            prop_assert_eq!(s.to_string(), x.to_string());
            prop_assert_eq!(x.to_string().parse::<DigitSeq>(), Ok(s));
        }

        #[test]
        fn prop_normalized_keeps_value(values in prop::collection::vec(0_u8..10, 0..20)) {
            let s = seq(&values);
            let normalized = s.clone().normalized();
            prop_assert!(normalized.is_canonical());
            prop_assert_eq!(normalized.to_u128(), s.to_u128());
        }
    }
}
