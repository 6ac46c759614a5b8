//! The two measurement programs: recursive vs. iterative fibonacci and
//! factorial, timed with [`ProcessCpuTime`] and written out as CSV.

use core::ops::RangeInclusive;
use std::io::Write;

use crate::algorithms::{factorial, fibonacci};
use crate::runner::RunnableBenchmarkList;
use crate::{suite, BenchmarkRunner, CsvReporter, ProcessCpuTime, Result};

pub const RECURSIVE: &str = "recursivo";
pub const ITERATIVE: &str = "iterativo";

/// Loop bounds for a run.
///
/// The binaries always use [`HarnessConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub sizes: RangeInclusive<u64>,
    pub trials: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            sizes: 1..=35,
            trials: 10,
        }
    }
}

impl HarnessConfig {
    /// Number of data rows a run with this config emits.
    pub fn expected_rows(&self) -> usize {
        self.sizes.clone().count() * self.trials * 2
    }
}

pub fn fibonacci<W: Write>(config: &HarnessConfig, out: W) -> Result<W> {
    run(
        config,
        suite("fibonacci", config.sizes.clone())
            .add(RECURSIVE, fibonacci::Recursive)
            .add(ITERATIVE, fibonacci::Iterative),
        out,
    )
}

pub fn factorial<W: Write>(config: &HarnessConfig, out: W) -> Result<W> {
    run(
        config,
        suite("factorial", config.sizes.clone())
            .add(RECURSIVE, factorial::Recursive)
            .add(ITERATIVE, factorial::Iterative),
        out,
    )
}

fn run<S, W: Write>(config: &HarnessConfig, suite: S, out: W) -> Result<W>
where
    (S, ()): RunnableBenchmarkList,
{
    let mut metric = ProcessCpuTime::new()?;
    let mut reporter = CsvReporter::new(out);

    BenchmarkRunner::new()
        .set_iterations(config.trials)
        .add(suite)
        .run(&mut metric, &mut reporter)?;

    Ok(reporter.into_inner())
}
