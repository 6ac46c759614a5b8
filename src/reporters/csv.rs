use core::fmt::Debug;
use std::io::Write;

use super::Reporter;
use crate::metrics::{Metric, MetricFmtAdapter};
use crate::Error;

/// Writes one `<benchmark>,<input>,<measurement>` line per run, after a
/// single header line.
///
/// Inputs are rendered with their `Debug` impl and measurements with
/// [`Metric::print`]. Nothing is quoted; benchmark names and inputs are
/// expected to be plain identifiers and numbers.
#[derive(Debug)]
pub struct CsvReporter<W: Write> {
    out: W,
    header: &'static str,
}

impl<W: Write> CsvReporter<W> {
    pub const DEFAULT_HEADER: &'static str = "alg,n,tempo";

    pub fn new(out: W) -> Self {
        CsvReporter {
            out,
            header: Self::DEFAULT_HEADER,
        }
    }

    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = header;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, M: Metric> Reporter<M> for CsvReporter<W> {
    type Error = Error;

    fn top_level_benchmarks<I: Iterator<Item = &'static str> + Clone>(
        &mut self,
        _names: I,
    ) -> Result<(), Error> {
        writeln!(self.out, "{}", self.header)?;
        Ok(())
    }

    fn suite_benchmark_run(
        &mut self,
        _input_idx: usize,
        input: &dyn Debug,
        _benchmark_idx: usize,
        benchmark_name: &'static str,
        _iteration_idx: usize,
        measurement: M::Unit,
    ) -> Result<(), Error> {
        writeln!(
            self.out,
            "{},{:?},{}",
            benchmark_name,
            input,
            MetricFmtAdapter::<M>(&measurement),
        )?;
        Ok(())
    }

    fn ended(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }
}
