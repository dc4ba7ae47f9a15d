/// Errors raised when building digits or digit sequences from unchecked input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DigitError {
    /// A raw value does not fit in a single decimal digit.
    #[display("digit value out of range: {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
    /// A decimal string contains a character that is not an ASCII digit.
    #[display("invalid digit character {ch:?} at position {position}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
        /// Character position in the input, counted from the start.
        position: usize,
    },
    /// A decimal string contains no digits at all.
    #[display("empty decimal string")]
    Empty,
}
