//! Naive recursive Fibonacci.
//!
//! No caching: the call tree has Θ(φⁿ) nodes, so anything much past n = 35
//! takes impractically long. This is the baseline the other two algorithms
//! are compared against.

/// Compute F(n) by two-way self-recursion.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn fib_recursive(n: u64) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn base_cases() {
        assert_eq!(fib_recursive(0), 0);
        assert_eq!(fib_recursive(1), 1);
    }

    #[test]
    fn matches_reference_table() {
        for n in 0..=25 {
            assert_eq!(fib_recursive(n), FIB_TABLE[n as usize], "F({n})");
        }
    }
}
