use core::{convert::Infallible, fmt::Debug};

use crate::Metric;

mod csv;
pub use csv::*;

mod summary;
pub use summary::*;

/// Receives the stream of events produced by a
/// [`BenchmarkRunner`](crate::BenchmarkRunner).
///
/// Every hook defaults to doing nothing. The first `Err` returned from any
/// hook stops the run and is handed back by
/// [`BenchmarkRunner::run`](crate::BenchmarkRunner::run).
#[allow(unused_variables)]
pub trait Reporter<M: Metric> {
    type Error;

    fn top_level_benchmarks<I: Iterator<Item = &'static str> + Clone>(
        &mut self,
        names: I,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn num_iterations(&mut self, iterations: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    // benchmark suites go in this order:
    // input 1:
    //   - `starting_input`
    //   - iteration 1
    //     + benchmark A
    //     + benchmark B
    //   - iteration 2
    //     + benchmark A
    //     + benchmark B
    //     ...
    //   - `ending_input`
    // input 2:
    //  ...
    //
    fn starting_new_benchmark_suite<I: Iterator<Item = &'static str> + Clone>(
        &mut self,
        name: &'static str,
        inputs_size_hint: (usize, Option<usize>),
        benchmark_names: I,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn starting_input(&mut self, input_idx: usize, input: &dyn Debug) -> Result<(), Self::Error> {
        Ok(())
    }
    #[allow(clippy::too_many_arguments)]
    fn suite_benchmark_run(
        &mut self,
        input_idx: usize,
        input: &dyn Debug,
        benchmark_idx: usize,
        benchmark_name: &'static str,
        iteration_idx: usize,
        measurement: M::Unit,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn ending_input(&mut self, input_idx: usize, input: &dyn Debug) -> Result<(), Self::Error> {
        Ok(())
    }
    fn ending_benchmark_suite(&mut self, name: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn ended(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A placeholder reporter that does nothing.
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl<M: Metric> Reporter<M> for NoOpReporter {
    type Error = Infallible;
}
