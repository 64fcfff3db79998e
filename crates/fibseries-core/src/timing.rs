//! Wall-clock timing around a single computation.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run `f(n)` once and return its result with the elapsed wall-clock time.
pub fn timed<T, F>(f: F, n: u64) -> (T, Duration)
where
    F: FnOnce(u64) -> T,
{
    let start = Instant::now();
    let value = black_box(f(black_box(n)));
    let elapsed = start.elapsed();
    tracing::debug!(n, elapsed = ?elapsed, "timed computation");
    (value, elapsed)
}

/// Run `f(n)` once and return the elapsed seconds.
pub fn time_function<T, F>(f: F, n: u64) -> f64
where
    F: FnOnce(u64) -> T,
{
    timed(f, n).1.as_secs_f64()
}
