//! Runs both substring scans over a list of words.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scan_strings
//! ```
//!
//! Scan your own input:
//!
//! ```sh
//! cargo run --example scan_strings -- babad cbbd "oi eu sou o goku"
//! ```
//!
//! Window moves are logged at `trace` level:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example scan_strings -- abba
//! ```

use clap::Parser;
use kata_strings::{longest_palindrome_window, longest_unique_window};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Strings to scan.
    #[arg(
        value_name = "INPUT",
        default_values = ["abcabcbb", "pwwkew", "pwpwkew", "au", "abba"]
    )]
    inputs: Vec<String>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    for input in &args.inputs {
        let unique = longest_unique_window(input)
            .map_or_else(|| "-".to_owned(), |window| format_window(input, window));
        let palindrome = longest_palindrome_window(input)
            .map_or_else(|e| e.to_string(), |window| format_window(input, window));
        println!("{input:?}");
        println!("  longest unique:     {unique}");
        println!("  longest palindrome: {palindrome}");
    }
}

fn format_window(input: &str, window: kata_strings::Window) -> String {
    format!(
        "{:?} (len {}, chars {}..={})",
        window.slice(input),
        window.len(),
        window.left(),
        window.right()
    )
}
