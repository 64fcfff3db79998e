#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseries_core::constants::{FIB_TABLE, MAX_FIB_I64};
use fibseries_core::iterative::fib_iterative;
use fibseries_core::memo::MemoTable;
use fibseries_core::recursive::fib_recursive;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as table size, capped to keep recursion shallow
    let len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as u64 % 5_000;
    let mut table = MemoTable::new(len);

    // Remaining bytes are lookups into the same table, some out of range
    for &b in &data[4..] {
        let n = u64::from(b) * 20;
        match table.fibonacci(n) {
            Ok(value) => {
                assert_eq!(value, fib_iterative(n), "memoized != iterative at n={n}");
                if n <= MAX_FIB_I64 {
                    assert_eq!(value, FIB_TABLE[n as usize]);
                }
            }
            Err(_) => assert!(n > len, "n={n} rejected by table of len {}", table.len()),
        }
    }

    let small = len % 20;
    assert_eq!(fib_recursive(small), fib_iterative(small));
});
