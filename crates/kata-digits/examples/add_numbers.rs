//! Adds two decimal numbers through their least-significant-first digit sequences.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example add_numbers
//! ```
//!
//! Pass the operands as ordinary decimal numbers:
//!
//! ```sh
//! cargo run --example add_numbers -- 9999999 9999
//! ```
//!
//! Carry traces are logged at `trace` level:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example add_numbers
//! ```

use std::process;

use clap::Parser;
use kata_digits::{DigitSeq, add};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Left operand, most significant digit first.
    #[arg(value_name = "LHS", default_value = "342")]
    lhs: String,

    /// Right operand, most significant digit first.
    #[arg(value_name = "RHS", default_value = "465")]
    rhs: String,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let (lhs, rhs) = match (args.lhs.parse::<DigitSeq>(), args.rhs.parse::<DigitSeq>()) {
        (Ok(lhs), Ok(rhs)) => (lhs, rhs),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Invalid operand: {e}");
            process::exit(2);
        }
    };

    let sum = add(&lhs, &rhs);
    println!("{} = {lhs}", format_digits(&lhs));
    println!("{} = {rhs}", format_digits(&rhs));
    println!("{} = {sum}", format_digits(&sum));
}

fn format_digits(seq: &DigitSeq) -> String {
    let digits = seq
        .iter()
        .map(|digit| digit.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{digits}]")
}
