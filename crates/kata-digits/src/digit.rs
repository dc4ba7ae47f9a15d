//! Decimal digit representation.

use std::fmt::{self, Display};

use crate::DigitError;

/// A decimal digit in the range 0-9.
///
/// This enum provides type-safe representation of a single place value in a
/// [`DigitSeq`](crate::DigitSeq), preventing invalid values at compile time.
///
/// # Examples
///
/// ```
/// use kata_digits::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Fallible construction
/// assert!(Digit::try_from_value(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 0 to 9, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 10);
    /// assert_eq!(Digit::ALL[0], Digit::D0);
    /// assert_eq!(Digit::ALL[9], Digit::D9);
    /// ```
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9. Use [`Digit::try_from_value`]
    /// for input that has not been validated yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::Digit;
    ///
    /// assert_eq!(Digit::from_value(0), Digit::D0);
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use kata_digits::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Ok(digit) => digit,
            Err(_) => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from a u8 value, rejecting values greater than 9.
    ///
    /// # Errors
    ///
    /// Returns [`DigitError::OutOfRange`] if `value` is not in the range 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::{Digit, DigitError};
    ///
    /// assert_eq!(Digit::try_from_value(3), Ok(Digit::D3));
    /// assert_eq!(
    ///     Digit::try_from_value(12),
    ///     Err(DigitError::OutOfRange { value: 12 })
    /// );
    /// ```
    pub const fn try_from_value(value: u8) -> Result<Self, DigitError> {
        let digit = match value {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => return Err(DigitError::OutOfRange { value }),
        };
        Ok(digit)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Adds two digits and an incoming carry.
    ///
    /// Returns the resulting place digit and whether a carry goes out to the
    /// next place.
    ///
    /// # Examples
    ///
    /// ```
    /// use kata_digits::Digit;
    ///
    /// assert_eq!(Digit::D4.add_with_carry(Digit::D3, false), (Digit::D7, false));
    /// assert_eq!(Digit::D9.add_with_carry(Digit::D9, true), (Digit::D9, true));
    /// ```
    #[must_use]
    pub fn add_with_carry(self, other: Self, carry: bool) -> (Self, bool) {
        let sum = self.value() + other.value() + u8::from(carry);
        (Self::from_value(sum % 10), sum > 9)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self::from_value)
            .ok_or(DigitError::InvalidChar { ch, position: 0 })
    }
}
