//! Algorithm selection and the error type shared by the workspace.
//!
//! `Algorithm` names the three computation strategies and dispatches a single
//! `fib(n)` evaluation to the matching free function.

use crate::iterative::fib_iterative;
use crate::memo::fib_dp;
use crate::recursive::fib_recursive;

/// Error type for Fibonacci computations and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// A memoization table was asked for an index it has no slot for.
    #[error("memo table too small: index {index} needs {needed} slots, table has {len}")]
    TableTooSmall {
        /// Requested index.
        index: u64,
        /// Slots required to hold the index.
        needed: u64,
        /// Slots available.
        len: usize,
    },

    /// The memoization table for index `n` cannot be allocated.
    #[error("cannot allocate memo table for n = {n}")]
    TableAllocation {
        /// Requested index.
        n: u64,
    },

    /// The requested method is not one of the known modes.
    #[error("unknown method: {0}")]
    UnknownMode(String),

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// The three Fibonacci strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Constant-space forward loop.
    Iterative,
    /// Naive two-way recursion, exponential cost.
    Recursive,
    /// Top-down recursion backed by a memoization table.
    Memoized,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 3] = [Self::Iterative, Self::Recursive, Self::Memoized];

    /// Human-readable algorithm name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Iterative => "Iterative",
            Self::Recursive => "Recursive",
            Self::Memoized => "Memoized",
        }
    }

    /// Compute F(n) with this algorithm.
    ///
    /// The memoized variant allocates a table scoped to this call.
    #[must_use]
    pub fn compute(self, n: u64) -> i64 {
        match self {
            Self::Iterative => fib_iterative(n),
            Self::Recursive => fib_recursive(n),
            Self::Memoized => fib_dp(n),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_small_values() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.compute(0), 0, "{algo}");
            assert_eq!(algo.compute(1), 1, "{algo}");
            assert_eq!(algo.compute(2), 1, "{algo}");
            assert_eq!(algo.compute(10), 55, "{algo}");
            assert_eq!(algo.compute(20), 6765, "{algo}");
        }
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Iterative.name(), "Iterative");
        assert_eq!(Algorithm::Recursive.to_string(), "Recursive");
        assert_eq!(Algorithm::Memoized.name(), "Memoized");
    }

    #[test]
    fn fib_error_display() {
        let err = FibError::UnknownMode("bogus".into());
        assert_eq!(err.to_string(), "unknown method: bogus");

        let err = FibError::TableTooSmall {
            index: 7,
            needed: 8,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "memo table too small: index 7 needs 8 slots, table has 4"
        );

        let err = FibError::TableAllocation { n: u64::MAX };
        assert_eq!(
            err.to_string(),
            "cannot allocate memo table for n = 18446744073709551615"
        );
    }
}
