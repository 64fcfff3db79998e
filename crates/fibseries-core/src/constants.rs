//! Constants shared by the Fibonacci algorithms and the dispatcher.

/// Sentinel marking a memoization slot that has not been computed yet.
pub const MEMO_UNSET: i64 = -1;

/// Maximum Fibonacci index whose value fits in an `i64`.
/// F(92) = 7540113804746346429
pub const MAX_FIB_I64: u64 = 92;

/// Precomputed Fibonacci values for n = 0..=92.
///
/// F(93) = 12,200,160,415,121,876,738 already exceeds `i64::MAX`
/// (9,223,372,036,854,775,807), so every algorithm in this crate wraps past
/// this point.
pub const FIB_TABLE: [i64; 93] = {
    let mut table = [0i64; 93];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including an unrecognized method.
    pub const SUCCESS: i32 = 0;
    /// Missing positional arguments.
    pub const USAGE: i32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[92], 7_540_113_804_746_346_429);
        assert_eq!(FIB_TABLE.len() as u64, MAX_FIB_I64 + 1);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..93 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }

    #[test]
    fn sentinel_is_not_a_fibonacci_value() {
        assert!(!FIB_TABLE.contains(&MEMO_UNSET));
    }
}
