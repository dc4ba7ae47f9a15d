//! Substring scans over text: longest run of distinct characters and longest
//! palindrome.
//!
//! Both scans work on Unicode scalar values (`char`), not bytes. Positions
//! and lengths they report are counted in characters, and every located
//! substring comes back as a [`Window`] that can slice the scanned `&str`.
//!
//! # Overview
//!
//! - [`longest_unique_substring_length`] / [`longest_unique_window`]:
//!   sliding window with a last-seen index per character
//! - [`longest_palindromic_substring`] / [`longest_palindrome_window`]:
//!   expansion around every center, leftmost result on ties
//! - [`is_palindrome`]: plain forward/backward comparison
//!
//! # Examples
//!
//! ```
//! use kata_strings::{longest_palindromic_substring, longest_unique_substring_length};
//!
//! assert_eq!(longest_unique_substring_length("abcabcbb"), 3);
//! assert_eq!(longest_palindromic_substring("cbbd")?, "bb");
//! # Ok::<(), kata_strings::ScanError>(())
//! ```

pub use self::{
    error::ScanError,
    palindrome::{is_palindrome, longest_palindrome_window, longest_palindromic_substring},
    unique::{longest_unique_substring_length, longest_unique_window},
    window::Window,
};

mod error;
mod palindrome;
mod unique;
mod window;

#[cfg(test)]
mod testing;
