/// Errors raised when a string scan is called outside its input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScanError {
    /// The scan needs at least one character.
    #[display("input string is empty")]
    EmptyInput,
}
