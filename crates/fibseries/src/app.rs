//! Command dispatch.

use std::io;

use anyhow::Result;

use fibseries_cli::output::format_duration;
use fibseries_cli::presenter::{CLIResultPresenter, ResultPresenter};
use fibseries_core::calculator::Algorithm;
use fibseries_core::constants::MAX_FIB_I64;
use fibseries_core::memo::{fib_memoized, MemoTable};
use fibseries_core::series::{series_printer, SeriesPrinter};
use fibseries_core::timing::timed;

use crate::config::{parse_index, AppConfig, Mode};

/// Largest n the naive recursion finishes in reasonable time.
const RECURSIVE_PRACTICAL_LIMIT: u64 = 40;

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A mode ran to completion.
    Completed,
    /// Fewer than two arguments were given.
    Usage,
    /// The method matched no mode.
    InvalidMethod,
}

/// Run the application against stdout.
pub fn run(config: &AppConfig) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut presenter = CLIResultPresenter::new(stdout.lock());
    run_with(config, &mut presenter)
}

/// Run the application against the given presenter.
pub fn run_with(config: &AppConfig, presenter: &mut dyn ResultPresenter) -> Result<Outcome> {
    let (Some(method), Some(raw_n)) = (config.method.as_deref(), config.n.as_deref()) else {
        presenter.present_usage(&config.program)?;
        return Ok(Outcome::Usage);
    };

    let n = parse_index(raw_n);
    let mode = match method.parse::<Mode>() {
        Ok(mode) => mode,
        Err(e) => {
            tracing::debug!(error = %e, "dispatch rejected");
            presenter.present_invalid_method(method)?;
            return Ok(Outcome::InvalidMethod);
        }
    };
    tracing::debug!(?mode, n, "dispatching");

    if n > MAX_FIB_I64 {
        tracing::warn!("F({n}) exceeds the 64-bit range; values past F({MAX_FIB_I64}) wrap");
    }

    match mode {
        Mode::Time(algo) => run_timing(algo, n, presenter)?,
        Mode::Series(algo) => run_series(algo, n, presenter)?,
    }
    Ok(Outcome::Completed)
}

fn run_timing(algo: Algorithm, n: u64, presenter: &mut dyn ResultPresenter) -> Result<()> {
    if algo == Algorithm::Recursive && n > RECURSIVE_PRACTICAL_LIMIT {
        tracing::warn!("naive recursion is exponential; F({n}) may take very long");
    }

    let elapsed = match algo {
        Algorithm::Memoized => {
            // Allocation stays outside the timed region.
            let mut table = MemoTable::try_new(n)?;
            let (value, elapsed) = timed(|n| fib_memoized(&mut table, n), n);
            let value = value?;
            tracing::debug!(value, computations = table.computations(), "memoized result");
            elapsed
        }
        Algorithm::Iterative | Algorithm::Recursive => {
            let (value, elapsed) = timed(|n| algo.compute(n), n);
            tracing::debug!(value, %algo, "result");
            elapsed
        }
    };
    tracing::info!(%algo, n, elapsed = %format_duration(elapsed), "computation finished");

    presenter.present_timing(algo, n, elapsed.as_secs_f64())?;
    Ok(())
}

fn run_series(algo: Algorithm, n: u64, presenter: &mut dyn ResultPresenter) -> Result<()> {
    if algo == Algorithm::Recursive && n > RECURSIVE_PRACTICAL_LIMIT {
        tracing::warn!("naive recursion is exponential; printing {n} terms may take very long");
    }

    let printer: Box<dyn SeriesPrinter> = series_printer(algo);
    tracing::debug!(printer = printer.name(), n, "printing series");
    let ops = printer.print_series(n, presenter.series_output())?;
    presenter.present_operations(ops)?;
    Ok(())
}
