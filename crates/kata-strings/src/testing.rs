//! Brute-force oracles and assertions shared by the scan tests.
//!
//! The oracles enumerate every substring, so they are only suitable for the
//! short inputs that property tests generate.

use std::collections::HashSet;

use crate::is_palindrome;

/// Returns every non-empty substring of `s` as `(start_char, text)`.
fn substrings(s: &str) -> Vec<(usize, &str)> {
    let bounds: Vec<usize> = s
        .char_indices()
        .map(|(byte, _)| byte)
        .chain([s.len()])
        .collect();
    let mut out = Vec::new();
    for start in 0..bounds.len() {
        for end in start + 1..bounds.len() {
            out.push((start, &s[bounds[start]..bounds[end]]));
        }
    }
    out
}

fn has_distinct_chars(s: &str) -> bool {
    let mut seen = HashSet::new();
    s.chars().all(|ch| seen.insert(ch))
}

/// Length in characters of the longest substring without a repeated character.
pub(crate) fn oracle_longest_unique_length(s: &str) -> usize {
    substrings(s)
        .into_iter()
        .filter(|(_, sub)| has_distinct_chars(sub))
        .map(|(_, sub)| sub.chars().count())
        .max()
        .unwrap_or(0)
}

/// Length in characters of the longest palindromic substring.
pub(crate) fn oracle_longest_palindrome_len(s: &str) -> usize {
    substrings(s)
        .into_iter()
        .filter(|(_, sub)| is_palindrome(sub))
        .map(|(_, sub)| sub.chars().count())
        .max()
        .unwrap_or(0)
}

/// Asserts that no character occurs twice in `s`.
#[track_caller]
pub(crate) fn assert_distinct_chars(s: &str) {
    assert!(has_distinct_chars(s), "{s:?} repeats a character");
}

/// Asserts that `result` is a leftmost longest palindromic substring of `s`.
///
/// Checks that `result` lies inside `s` by address, reads the same both ways,
/// and that no palindrome in `s` is longer or equally long but further left.
#[track_caller]
pub(crate) fn assert_longest_palindrome(s: &str, result: &str) {
    let base = s.as_ptr() as usize;
    let offset = (result.as_ptr() as usize)
        .checked_sub(base)
        .filter(|offset| offset + result.len() <= s.len());
    let Some(offset) = offset else {
        panic!("{result:?} is not a substring of {s:?}");
    };
    assert!(is_palindrome(result), "{result:?} is not a palindrome");

    let len = result.chars().count();
    let start = s[..offset].chars().count();
    for (sub_start, sub) in substrings(s) {
        if !is_palindrome(sub) {
            continue;
        }
        let sub_len = sub.chars().count();
        assert!(
            sub_len <= len,
            "{sub:?} in {s:?} is a longer palindrome than {result:?}"
        );
        assert!(
            sub_len < len || sub_start >= start,
            "{sub:?} in {s:?} is as long as {result:?} but starts earlier"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substrings() {
        let subs: Vec<&str> = substrings("abc").into_iter().map(|(_, sub)| sub).collect();
        assert_eq!(subs, ["a", "ab", "abc", "b", "bc", "c"]);
        assert!(substrings("").is_empty());
    }

    #[test]
    fn test_oracles() {
        assert_eq!(oracle_longest_unique_length("abcabcbb"), 3);
        assert_eq!(oracle_longest_unique_length(""), 0);
        assert_eq!(oracle_longest_palindrome_len("babad"), 3);
        assert_eq!(oracle_longest_palindrome_len("cbbd"), 2);
    }

    #[test]
    #[should_panic(expected = "starts earlier")]
    fn test_rejects_later_tie() {
        let s = "babad";
        assert_longest_palindrome(s, &s[1..4]);
    }
}
