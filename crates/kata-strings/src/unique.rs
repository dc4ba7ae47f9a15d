//! Longest run of pairwise-distinct characters.

use std::collections::HashMap;

use crate::Window;

/// Returns the length of the longest substring with no repeated character.
///
/// Lengths are counted in characters. The empty string yields `0`.
///
/// # Examples
///
/// ```
/// use kata_strings::longest_unique_substring_length;
///
/// assert_eq!(longest_unique_substring_length("abcabcbb"), 3);
/// assert_eq!(longest_unique_substring_length("bbbbb"), 1);
/// assert_eq!(longest_unique_substring_length("pwwkew"), 3);
/// assert_eq!(longest_unique_substring_length(""), 0);
/// ```
#[must_use]
pub fn longest_unique_substring_length(s: &str) -> usize {
    longest_unique_window(s).map_or(0, |window| window.len())
}

/// Finds the first longest substring with no repeated character.
///
/// Scans `s` once with a sliding window `[left, idx]`, remembering where each
/// character was last seen. When the character at `idx` was last seen at
/// `found >= left`, the window drops everything up to and including that
/// occurrence by moving `left` to `found + 1`. Occurrences before `left`
/// are already outside the window and are ignored, so `left` never moves
/// backward and the window never holds a repeated character.
///
/// When several windows share the maximal length, the leftmost one is
/// returned. Returns `None` only for the empty string.
///
/// # Examples
///
/// ```
/// use kata_strings::longest_unique_window;
///
/// let s = "abba";
/// let window = longest_unique_window(s).unwrap();
/// assert_eq!(window.slice(s), "ab");
///
/// assert!(longest_unique_window("").is_none());
/// ```
#[must_use]
pub fn longest_unique_window(s: &str) -> Option<Window> {
    // character -> (position, byte offset just past it)
    let mut last_seen: HashMap<char, (usize, usize)> = HashMap::new();
    let mut left = 0;
    let mut left_byte = 0;
    let mut best: Option<Window> = None;

    for (idx, (byte, ch)) in s.char_indices().enumerate() {
        let end_byte = byte + ch.len_utf8();
        let in_window = last_seen.get(&ch).filter(|&&(found, _)| found >= left);
        if let Some(&(found, found_end)) = in_window {
            left = found + 1;
            left_byte = found_end;
            log::trace!("repeated {ch:?} at {idx}, window now starts at {left}");
        }
        last_seen.insert(ch, (idx, end_byte));

        let len = idx - left + 1;
        if best.is_none_or(|window| len > window.len()) {
            let window = Window::new(left, idx, left_byte, end_byte);
            log::trace!("new longest window {:?}", window.slice(s));
            best = Some(window);
        }
    }

    best
}
