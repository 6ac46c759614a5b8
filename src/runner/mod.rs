use super::{Metric, Reporter};

mod support;
pub use support::black_box;
use support::{Append, HListIterator};

mod suite;
pub use suite::build_suite as suite;

pub struct BenchmarkRunner<L: RunnableBenchmarkList = ()> {
    iterations: usize,
    list: L,
}

impl Default for BenchmarkRunner<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkRunner {
    pub const fn new() -> BenchmarkRunner<()> {
        BenchmarkRunner {
            iterations: 1,
            list: (),
        }
    }
}

impl<L: RunnableBenchmarkList> BenchmarkRunner<L> {
    pub const fn set_iterations(mut self, it: usize) -> Self {
        self.iterations = it;
        self
    }

    /// Top-level benchmarks run in the order they're added.
    #[allow(clippy::should_implement_trait)]
    pub fn add<X>(self, top_level_benchmark: X) -> BenchmarkRunner<L::Output>
    where
        L: Append<X>,
        L::Output: RunnableBenchmarkList,
    {
        BenchmarkRunner {
            iterations: self.iterations,
            list: self.list.append(top_level_benchmark),
        }
    }

    /// Runs everything, stopping at the first error the reporter hands back.
    pub fn run<M: Metric, R: Reporter<M>>(
        self,
        metric: &mut M,
        reporter: &mut R,
    ) -> Result<(), R::Error> {
        tracing::debug!(
            benchmarks = self.list.len(),
            iterations = self.iterations,
            "starting benchmark run"
        );

        reporter.top_level_benchmarks(HListIterator(&self.list as &dyn RunnableBenchmarkList))?;
        reporter.num_iterations(self.iterations)?;

        self.list.run(metric, reporter, self.iterations)?;

        reporter.ended()
    }
}

#[allow(clippy::len_without_is_empty)]
pub trait RunnableBenchmarkList {
    fn run<M: Metric, R: Reporter<M>>(
        self,
        m: &mut M,
        r: &mut R,
        iterations: usize,
    ) -> Result<(), R::Error>
    where
        Self: Sized;

    /// Yields this list's head's name and the rest of the list.
    ///
    /// The benchmarks in a list all have different types; going through a
    /// trait object here erases them so reporters can just be handed an
    /// iterator of names. Performance isn't a concern for this part and the
    /// indirection is outside of every timed region anyways.
    fn name_and_next<'a>(&'a self) -> Option<(&'static str, &'a (dyn RunnableBenchmarkList + 'a))>;
    fn len(&self) -> usize;
}

impl<'a> Iterator for HListIterator<'a, (dyn RunnableBenchmarkList + 'a)> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, next) = self.0.name_and_next()?;
        self.0 = next;

        Some(name)
    }
}

impl RunnableBenchmarkList for () {
    fn run<M: Metric, R: Reporter<M>>(
        self,
        _m: &mut M,
        _r: &mut R,
        _iterations: usize,
    ) -> Result<(), R::Error> {
        Ok(())
    }

    fn name_and_next(&self) -> Option<(&'static str, &dyn RunnableBenchmarkList)> {
        None
    }
    fn len(&self) -> usize {
        0
    }
}
