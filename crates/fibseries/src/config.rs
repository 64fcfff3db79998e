//! Application configuration from the two positional arguments.

use std::ffi::OsString;
use std::str::FromStr;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;

use fibseries_core::calculator::{Algorithm, FibError};

/// fibseries — times and prints Fibonacci numbers with three algorithms.
#[derive(Parser, Debug)]
#[command(name = "fibseries", version, about)]
pub struct AppConfig {
    /// Method: iterative, recursive, dp, print_iter, print_rec or print_dp.
    #[arg(allow_hyphen_values = true, value_parser = lossy_string())]
    pub method: Option<String>,

    /// Fibonacci index to time, or number of terms to print.
    #[arg(allow_hyphen_values = true, value_parser = lossy_string())]
    pub n: Option<String>,

    /// Ignored trailing arguments.
    #[arg(hide = true, allow_hyphen_values = true, value_parser = lossy_string())]
    pub rest: Vec<String>,

    /// Program name shown in the usage line.
    #[arg(skip = String::from("fibseries"))]
    pub program: String,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os())
    }

    /// Parse from an explicit argument list whose first item is the program name.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut config = <Self as Parser>::parse_from(args.clone());
        if let Some(program) = args.first() {
            config.program = program.to_string_lossy().into_owned();
        }
        config
    }
}

/// Accept any OS string; invalid UTF-8 becomes U+FFFD instead of a clap error.
fn lossy_string() -> impl TypedValueParser<Value = String> {
    OsStringValueParser::new().map(|s| s.to_string_lossy().into_owned())
}

/// What the dispatcher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Time a single F(n) evaluation.
    Time(Algorithm),
    /// Print terms 1..=n and an operation count.
    Series(Algorithm),
}

impl FromStr for Mode {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(Self::Time(Algorithm::Iterative)),
            "recursive" => Ok(Self::Time(Algorithm::Recursive)),
            "dp" => Ok(Self::Time(Algorithm::Memoized)),
            "print_iter" => Ok(Self::Series(Algorithm::Iterative)),
            "print_rec" => Ok(Self::Series(Algorithm::Recursive)),
            "print_dp" => Ok(Self::Series(Algorithm::Memoized)),
            other => Err(FibError::UnknownMode(other.to_string())),
        }
    }
}

/// Parse an index the way C's `atoi` does, clamped to be non-negative.
///
/// Leading whitespace is skipped, then an optional sign and the longest run
/// of digits are read. Anything unparsable yields 0, negatives yield 0, and
/// values past `u64::MAX` saturate.
#[must_use]
pub fn parse_index(s: &str) -> u64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });
    if negative {
        0
    } else {
        value
    }
}
