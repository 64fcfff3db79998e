//! Memoized (top-down dynamic programming) Fibonacci.
//!
//! The table is an owned, caller-scoped buffer. Each slot holds either
//! [`MEMO_UNSET`] or the true F(i), and a slot is written at most once
//! between resets.

use crate::calculator::FibError;
use crate::constants::MEMO_UNSET;

/// Memoization table for F(0)..=F(n).
#[derive(Debug, Clone)]
pub struct MemoTable {
    slots: Vec<i64>,
    computations: u64,
}

impl MemoTable {
    /// Create a table with `n + 1` unset slots.
    ///
    /// # Panics
    ///
    /// Panics if the table cannot be allocated; use [`MemoTable::try_new`]
    /// for sizes that come from user input.
    #[must_use]
    pub fn new(n: u64) -> Self {
        match Self::try_new(n) {
            Ok(table) => table,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a table with `n + 1` unset slots, failing instead of aborting
    /// when the size does not fit in memory.
    ///
    /// # Errors
    ///
    /// Returns [`FibError::TableAllocation`] if `n + 1` slots overflow `usize`
    /// or the allocator refuses the request.
    pub fn try_new(n: u64) -> Result<Self, FibError> {
        let len = usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or(FibError::TableAllocation { n })?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| FibError::TableAllocation { n })?;
        slots.resize(len, MEMO_UNSET);
        Ok(Self {
            slots,
            computations: 0,
        })
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Cached F(i), if it has been computed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get(&self, i: u64) -> Option<i64> {
        self.slots
            .get(i as usize)
            .copied()
            .filter(|&v| v != MEMO_UNSET)
    }

    /// Number of slots filled since creation or the last reset.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Mark every slot unset again so the table can serve a new top-level call.
    pub fn reset(&mut self) {
        self.slots.fill(MEMO_UNSET);
        self.computations = 0;
    }

    /// Compute F(n), reusing and filling cached slots.
    ///
    /// # Errors
    ///
    /// Returns [`FibError::TableTooSmall`] if the table has no slot for `n`.
    pub fn fibonacci(&mut self, n: u64) -> Result<i64, FibError> {
        let Some(i) = usize::try_from(n).ok().filter(|&i| i < self.slots.len()) else {
            return Err(FibError::TableTooSmall {
                index: n,
                needed: n.saturating_add(1),
                len: self.slots.len(),
            });
        };
        Ok(self.fill(i))
    }

    /// Recursive fill. `i` must be in range.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn fill(&mut self, i: usize) -> i64 {
        let cached = self.slots[i];
        if cached != MEMO_UNSET {
            return cached;
        }
        let value = if i <= 1 {
            i as i64
        } else {
            self.fill(i - 1).wrapping_add(self.fill(i - 2))
        };
        self.slots[i] = value;
        self.computations += 1;
        value
    }
}

/// Compute F(n) against a caller-owned table.
///
/// # Errors
///
/// Returns [`FibError::TableTooSmall`] if `table` cannot hold index `n`.
pub fn fib_memoized(table: &mut MemoTable, n: u64) -> Result<i64, FibError> {
    table.fibonacci(n)
}

/// Compute F(n) with a fresh table allocated and dropped within this call.
///
/// # Panics
///
/// Panics if the table for `n` cannot be allocated.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fib_dp(n: u64) -> i64 {
    let mut table = MemoTable::new(n);
    let value = table.fill(n as usize);
    tracing::trace!(
        n,
        slots = table.len(),
        computations = table.computations(),
        "memo table released"
    );
    value
}
