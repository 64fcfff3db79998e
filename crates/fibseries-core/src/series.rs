//! Series printers.
//!
//! Each printer writes lines `"<i>: <F(i-1)>"` for i in 1..=n (term 1 is 0,
//! term 2 is 1) and returns a diagnostic operation count. The counting rule
//! differs per printer and never drives control flow.

use std::io::Write;

use crate::calculator::{Algorithm, FibError};
use crate::memo::MemoTable;
use crate::recursive::fib_recursive;

/// Trait for printing the first `n` terms of the sequence.
pub trait SeriesPrinter {
    /// Print terms 1..=n to `out` and return the operation count.
    fn print_series(&self, n: u64, out: &mut dyn Write) -> Result<u64, FibError>;

    /// Get the name of this printer.
    fn name(&self) -> &str;
}

/// Prints by carrying the last two values forward.
///
/// Counts one operation per loop step from term 3 onward.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeSeries;

impl SeriesPrinter for IterativeSeries {
    fn print_series(&self, n: u64, out: &mut dyn Write) -> Result<u64, FibError> {
        let mut ops = 0;
        if n >= 1 {
            writeln!(out, "1: 0")?;
        }
        if n >= 2 {
            writeln!(out, "2: 1")?;
        }
        let mut a: i64 = 0;
        let mut b: i64 = 1;
        for i in 3..=n {
            let c = a.wrapping_add(b);
            writeln!(out, "{i}: {c}")?;
            a = b;
            b = c;
            ops += 1;
        }
        Ok(ops)
    }

    fn name(&self) -> &'static str {
        "IterativeSeries"
    }
}

/// Recomputes every term from scratch with the naive recursion.
///
/// Counts one operation per term beyond the first.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveSeries;

impl SeriesPrinter for RecursiveSeries {
    fn print_series(&self, n: u64, out: &mut dyn Write) -> Result<u64, FibError> {
        let mut ops = 0;
        for i in 1..=n {
            writeln!(out, "{i}: {}", fib_recursive(i - 1))?;
            if i > 1 {
                ops += 1;
            }
        }
        Ok(ops)
    }

    fn name(&self) -> &'static str {
        "RecursiveSeries"
    }
}

/// Reads every term through a memo table owned by the call.
///
/// Counts one operation per printed term.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoizedSeries;

impl SeriesPrinter for MemoizedSeries {
    #[allow(clippy::cast_possible_truncation)]
    fn print_series(&self, n: u64, out: &mut dyn Write) -> Result<u64, FibError> {
        let mut ops = 0;
        let mut table = MemoTable::try_new(n)?;
        for i in 1..=n {
            writeln!(out, "{i}: {}", table.fill((i - 1) as usize))?;
            ops += 1;
        }
        tracing::trace!(
            n,
            computations = table.computations(),
            "series memo table released"
        );
        Ok(ops)
    }

    fn name(&self) -> &'static str {
        "MemoizedSeries"
    }
}

/// Get the series printer for an algorithm.
#[must_use]
pub fn series_printer(algo: Algorithm) -> Box<dyn SeriesPrinter> {
    match algo {
        Algorithm::Iterative => Box::new(IterativeSeries),
        Algorithm::Recursive => Box::new(RecursiveSeries),
        Algorithm::Memoized => Box::new(MemoizedSeries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(printer: &dyn SeriesPrinter, n: u64) -> (String, u64) {
        let mut buf = Vec::new();
        let ops = printer.print_series(n, &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), ops)
    }

    #[test]
    fn iterative_first_five() {
        let (out, ops) = render(&IterativeSeries, 5);
        assert_eq!(out, "1: 0\n2: 1\n3: 1\n4: 2\n5: 3\n");
        assert_eq!(ops, 3);
    }

    #[test]
    fn recursive_first_five() {
        let (out, ops) = render(&RecursiveSeries, 5);
        assert_eq!(out, "1: 0\n2: 1\n3: 1\n4: 2\n5: 3\n");
        assert_eq!(ops, 4);
    }

    #[test]
    fn memoized_first_five() {
        let (out, ops) = render(&MemoizedSeries, 5);
        assert_eq!(out, "1: 0\n2: 1\n3: 1\n4: 2\n5: 3\n");
        assert_eq!(ops, 5);
    }

    #[test]
    fn all_printers_agree() {
        let expected = render(&IterativeSeries, 25).0;
        for algo in Algorithm::ALL {
            let (out, _) = render(series_printer(algo).as_ref(), 25);
            assert_eq!(out, expected, "{algo}");
        }
    }

    #[test]
    fn zero_terms_prints_nothing() {
        for algo in Algorithm::ALL {
            let (out, ops) = render(series_printer(algo).as_ref(), 0);
            assert!(out.is_empty(), "{algo}");
            assert_eq!(ops, 0, "{algo}");
        }
    }

    #[test]
    fn short_series_counts() {
        assert_eq!(render(&IterativeSeries, 1), ("1: 0\n".to_string(), 0));
        assert_eq!(render(&IterativeSeries, 2), ("1: 0\n2: 1\n".to_string(), 0));
        assert_eq!(render(&RecursiveSeries, 1).1, 0);
        assert_eq!(render(&RecursiveSeries, 2).1, 1);
        assert_eq!(render(&MemoizedSeries, 1).1, 1);
        assert_eq!(render(&MemoizedSeries, 2).1, 2);
    }

    #[test]
    fn last_line_is_previous_term() {
        let (out, _) = render(&MemoizedSeries, 21);
        assert_eq!(out.lines().last(), Some("21: 6765"));
    }

    #[test]
    fn memoized_unallocatable_length_errors() {
        let mut buf = Vec::new();
        let result = MemoizedSeries.print_series(u64::MAX, &mut buf);
        assert!(matches!(result, Err(FibError::TableAllocation { .. })));
        assert!(buf.is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let result = IterativeSeries.print_series(3, &mut Closed);
        assert!(matches!(result, Err(FibError::Io(_))));
    }

    #[test]
    fn printer_names() {
        assert_eq!(series_printer(Algorithm::Iterative).name(), "IterativeSeries");
        assert_eq!(series_printer(Algorithm::Recursive).name(), "RecursiveSeries");
        assert_eq!(series_printer(Algorithm::Memoized).name(), "MemoizedSeries");
    }
}
