//! Contiguous character ranges over a scanned string.

use std::ops::Range;

/// A non-empty contiguous run of characters inside a scanned string.
///
/// `left` and `right` are inclusive character positions, so
/// `0 <= left <= right < s.chars().count()`. The matching byte range is kept
/// alongside so the run can be sliced out of the original `&str` without
/// rescanning.
///
/// # Examples
///
/// ```
/// use kata_strings::longest_unique_window;
///
/// let s = "pwwkew";
/// let window = longest_unique_window(s).unwrap();
/// assert_eq!((window.left(), window.right()), (2, 4));
/// assert_eq!(window.len(), 3);
/// assert_eq!(window.slice(s), "wke");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    left: usize,
    right: usize,
    start_byte: usize,
    end_byte: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Window {
    pub(crate) fn new(left: usize, right: usize, start_byte: usize, end_byte: usize) -> Self {
        debug_assert!(left <= right);
        debug_assert!(start_byte < end_byte);
        Self {
            left,
            right,
            start_byte,
            end_byte,
        }
    }

    /// Returns the position of the first character in the window.
    #[must_use]
    pub fn left(&self) -> usize {
        self.left
    }

    /// Returns the position of the last character in the window.
    #[must_use]
    pub fn right(&self) -> usize {
        self.right
    }

    /// Returns the number of characters in the window. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Returns the byte range of the window in the scanned string.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    /// Returns the windowed text.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not the string the window was computed from and the
    /// byte range does not fall on its character boundaries.
    #[must_use]
    pub fn slice<'a>(&self, s: &'a str) -> &'a str {
        &s[self.byte_range()]
    }
}
