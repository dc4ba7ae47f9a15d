//! Longest palindromic substring by expansion around centers.

use crate::{ScanError, Window};

/// Returns `true` if `s` reads the same forward and backward.
///
/// Compares characters, so multi-byte text works as expected. The empty
/// string is a palindrome.
///
/// # Examples
///
/// ```
/// use kata_strings::is_palindrome;
///
/// assert!(is_palindrome("racecar"));
/// assert!(is_palindrome("abba"));
/// assert!(is_palindrome("あいあ"));
/// assert!(!is_palindrome("ab"));
/// ```
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Returns one longest palindromic substring of `s`.
///
/// When several palindromes share the maximal length, the leftmost one is
/// returned. See [`longest_palindrome_window`] for the search itself.
///
/// # Errors
///
/// Returns [`ScanError::EmptyInput`] if `s` is empty.
///
/// # Examples
///
/// ```
/// use kata_strings::longest_palindromic_substring;
///
/// assert_eq!(longest_palindromic_substring("babad")?, "bab");
/// assert_eq!(longest_palindromic_substring("cbbd")?, "bb");
/// assert_eq!(longest_palindromic_substring("a")?, "a");
/// assert!(longest_palindromic_substring("").is_err());
/// # Ok::<(), kata_strings::ScanError>(())
/// ```
pub fn longest_palindromic_substring(s: &str) -> Result<&str, ScanError> {
    longest_palindrome_window(s).map(|window| window.slice(s))
}

/// Locates the leftmost longest palindromic substring of `s`.
///
/// Every character and every gap between two adjacent characters is tried
/// as a center, left to right. From each center the span grows one
/// character on each side while both ends match. A span replaces the best
/// one found so far only when it is strictly longer, which makes the
/// earliest-starting palindrome win among equal lengths.
///
/// Runs in `O(n²)` time and `O(n)` extra space for `n` characters.
///
/// # Errors
///
/// Returns [`ScanError::EmptyInput`] if `s` is empty.
pub fn longest_palindrome_window(s: &str) -> Result<Window, ScanError> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    if chars.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    // a single character is always a palindrome
    let mut best = (0, 0);
    for center in 0..(2 * chars.len() - 1) {
        let lo = center / 2;
        let hi = lo + center % 2;
        let Some((left, right)) = expand_around(&chars, lo, hi) else {
            continue;
        };
        if right - left > best.1 - best.0 {
            log::trace!("new longest palindrome at [{left}, {right}]");
            best = (left, right);
        }
    }

    let (left, right) = best;
    let start_byte = chars[left].0;
    let (last_byte, last_char) = chars[right];
    Ok(Window::new(
        left,
        right,
        start_byte,
        last_byte + last_char.len_utf8(),
    ))
}

/// Grows `[lo, hi]` outward while the characters at both ends match.
///
/// Returns `None` when the center itself does not match, which only happens
/// for a gap between two different characters.
fn expand_around(
    chars: &[(usize, char)],
    mut lo: usize,
    mut hi: usize,
) -> Option<(usize, usize)> {
    if chars[lo].1 != chars[hi].1 {
        return None;
    }
    while lo > 0 && hi + 1 < chars.len() && chars[lo - 1].1 == chars[hi + 1].1 {
        lo -= 1;
        hi += 1;
    }
    Some((lo, hi))
}
