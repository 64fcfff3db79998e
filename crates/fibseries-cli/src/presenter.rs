//! CLI result presenter.

use std::io::{self, Write};

use fibseries_core::calculator::Algorithm;

use crate::output::{format_operations, format_seconds, format_usage};

/// Trait for presenting dispatcher results to the user.
pub trait ResultPresenter {
    /// Present the elapsed time of a single computation.
    fn present_timing(&mut self, algorithm: Algorithm, n: u64, seconds: f64) -> io::Result<()>;

    /// Present the operation count that follows a printed series.
    fn present_operations(&mut self, ops: u64) -> io::Result<()>;

    /// Present the usage line.
    fn present_usage(&mut self, program: &str) -> io::Result<()>;

    /// Report a method that matches no known mode.
    fn present_invalid_method(&mut self, method: &str) -> io::Result<()>;

    /// Writer the series printers emit their lines to.
    fn series_output(&mut self) -> &mut dyn Write;
}

/// Plain-text presenter over any writer (locked stdout in the binary).
pub struct CLIResultPresenter<W: Write> {
    out: W,
}

impl<W: Write> CLIResultPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for CLIResultPresenter<W> {
    fn present_timing(&mut self, algorithm: Algorithm, n: u64, seconds: f64) -> io::Result<()> {
        tracing::debug!(%algorithm, n, seconds, "presenting timing");
        writeln!(self.out, "{}", format_seconds(seconds))
    }

    fn present_operations(&mut self, ops: u64) -> io::Result<()> {
        writeln!(self.out, "{}", format_operations(ops))
    }

    fn present_usage(&mut self, program: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format_usage(program))
    }

    fn present_invalid_method(&mut self, method: &str) -> io::Result<()> {
        tracing::debug!(method, "unrecognized method");
        writeln!(self.out, "Invalid method")
    }

    fn series_output(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}
