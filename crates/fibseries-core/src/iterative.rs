//! Iterative Fibonacci.

/// Compute F(n) with a single forward loop over the last two values.
///
/// Uses constant extra space. Values past F(92) wrap around silently.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn fib_iterative(n: u64) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 2..=n {
        let c = a.wrapping_add(b);
        a = b;
        b = c;
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn base_cases() {
        assert_eq!(fib_iterative(0), 0);
        assert_eq!(fib_iterative(1), 1);
        assert_eq!(fib_iterative(2), 1);
    }

    #[test]
    fn matches_reference_table() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(fib_iterative(n as u64), expected, "F({n})");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(fib_iterative(50), fib_iterative(50));
        assert_eq!(fib_iterative(50), 12_586_269_025);
    }

    #[test]
    fn overflow_wraps() {
        // F(93) = F(92) + F(91), computed in wrapping arithmetic.
        let expected = FIB_TABLE[92].wrapping_add(FIB_TABLE[91]);
        assert_eq!(fib_iterative(93), expected);
        assert!(fib_iterative(93) < 0);
    }
}
