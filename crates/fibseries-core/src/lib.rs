//! # fibseries-core
//!
//! Fibonacci computation library for the fibseries tool.
//! Implements iterative, naive recursive, and memoized algorithms, the
//! series printers built on them, and a timing wrapper.

pub mod calculator;
pub mod constants;
pub mod iterative;
pub mod memo;
pub mod recursive;
pub mod series;
pub mod timing;

// Re-exports
pub use calculator::{Algorithm, FibError};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_I64, MEMO_UNSET};
pub use iterative::fib_iterative;
pub use memo::{fib_dp, fib_memoized, MemoTable};
pub use recursive::fib_recursive;
pub use series::{series_printer, IterativeSeries, MemoizedSeries, RecursiveSeries, SeriesPrinter};
pub use timing::{time_function, timed};

/// Compute F(n) using the iterative algorithm.
///
/// Results past F(92) wrap around in 64-bit arithmetic.
///
/// # Example
/// ```
/// assert_eq!(fibseries_core::fibonacci(10), 55);
/// assert_eq!(fibseries_core::fibonacci(0), 0);
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> i64 {
    fib_iterative(n)
}
