use core::{any::Any, fmt::Debug, marker::PhantomData};

use super::support::{Append, HListIterator};
use super::{black_box, RunnableBenchmarkList};
use crate::{Benchmark, Metric, Reporter};

pub fn build_suite<Inp: Any + Debug, I: IntoIterator<Item = Inp>>(
    name: &'static str,
    inputs: I,
) -> Suite<Inp, I, ()> {
    Suite {
        name,
        benchmark_list: (),
        inputs,
        _p: PhantomData,
    }
}

/// A set of benchmarks that are all run against the same inputs.
pub struct Suite<Inp, I, L = ()> {
    name: &'static str,
    benchmark_list: L,
    inputs: I,
    _p: PhantomData<Inp>,
}

impl<Inp: Any + Debug, I: IntoIterator<Item = Inp>, L: RunnableSuiteBenchmarkList<Inp>> Suite<Inp, I, L> {
    /// Benchmarks within a suite run in the order they're added.
    #[allow(clippy::should_implement_trait)]
    pub fn add<B: Benchmark<Inp>>(
        self,
        name: &'static str,
        benchmark: B,
    ) -> Suite<Inp, I, L::Output>
    where
        L: Append<SuiteMember<B, Inp>>,
        L::Output: RunnableSuiteBenchmarkList<Inp>,
    {
        let x = SuiteMember {
            name,
            benchmark,
            _p: PhantomData,
        };

        Suite {
            name: self.name,
            benchmark_list: self.benchmark_list.append(x),
            inputs: self.inputs,
            _p: PhantomData,
        }
    }
}

#[doc(hidden)]
pub struct SuiteMember<B: Benchmark<Inp>, Inp: Any + Debug> {
    name: &'static str,
    benchmark: B,
    _p: PhantomData<Inp>,
}

// Like `RunnableBenchmarkList` but specific to suites; we cannot just
// use `RunnableBenchmarkList` because we do not want to allow _recursion_ (i.e.
// we would not know how to handle a benchmark suite being nested within a
// benchmark suite).
//
// `run` runs a *single* iteration of every member, in order; the suite drives
// the iteration loop so that trials of different members interleave.
#[allow(clippy::len_without_is_empty)]
pub trait RunnableSuiteBenchmarkList<Inp: Debug> {
    #[allow(clippy::too_many_arguments)]
    fn run<M: Metric, R: Reporter<M>>(
        &mut self,
        m: &mut M,
        r: &mut R,
        inp_idx: usize,
        inp: &Inp,
        it_idx: usize,
        benchmark_idx: usize,
    ) -> Result<(), R::Error>
    where
        Self: Sized;

    fn name_and_next(&self) -> Option<(&'static str, &dyn RunnableSuiteBenchmarkList<Inp>)>;

    fn len(&self) -> usize;
}

impl<I: Debug> RunnableSuiteBenchmarkList<I> for () {
    fn run<M: Metric, R: Reporter<M>>(
        &mut self,
        _m: &mut M,
        _r: &mut R,
        _inp_idx: usize,
        _inp: &I,
        _it_idx: usize,
        _benchmark_idx: usize,
    ) -> Result<(), R::Error> {
        Ok(())
    }
    fn name_and_next(&self) -> Option<(&'static str, &dyn RunnableSuiteBenchmarkList<I>)> {
        None
    }
    fn len(&self) -> usize {
        0
    }
}

impl<'a, I: Debug> Iterator for HListIterator<'a, (dyn RunnableSuiteBenchmarkList<I> + 'a)> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, next) = self.0.name_and_next()?;
        self.0 = next;

        Some(name)
    }
}

impl<I, B, Rest> RunnableSuiteBenchmarkList<I> for (SuiteMember<B, I>, Rest)
where
    I: Any + Debug,
    B: Benchmark<I>,
    Rest: RunnableSuiteBenchmarkList<I>,
{
    fn run<M: Metric, R: Reporter<M>>(
        &mut self,
        m: &mut M,
        r: &mut R,
        inp_idx: usize,
        inp: &I,
        it_idx: usize,
        benchmark_idx: usize,
    ) -> Result<(), R::Error> {
        let (this, rest) = self;

        this.benchmark.setup(inp);
        let before = m.start();
        let res = black_box(this.benchmark.run(black_box(inp)));
        let measurement = m.end(before);
        this.benchmark.teardown(inp, res);

        tracing::trace!(
            benchmark = this.name,
            input = ?inp,
            iteration = it_idx,
            measurement = ?measurement,
            "measured"
        );
        r.suite_benchmark_run(inp_idx, inp, benchmark_idx, this.name, it_idx, measurement)?;

        rest.run(m, r, inp_idx, inp, it_idx, benchmark_idx + 1)
    }

    fn name_and_next(&self) -> Option<(&'static str, &dyn RunnableSuiteBenchmarkList<I>)> {
        Some((self.0.name, &self.1))
    }

    fn len(&self) -> usize {
        self.1.len() + 1
    }
}

impl<Inp, I, L, Rest> RunnableBenchmarkList for (Suite<Inp, I, L>, Rest)
where
    Inp: Any + Debug,
    I: IntoIterator<Item = Inp>,
    L: RunnableSuiteBenchmarkList<Inp>,
    Rest: RunnableBenchmarkList,
{
    // suites go in this order:
    // input 1:
    //   + iteration 1
    //     - benchmark A
    //     - benchmark B
    //   + iteration 2
    //     - benchmark A
    //     - benchmark B
    //     ...
    // input 2:
    //  ...
    fn run<M: Metric, R: Reporter<M>>(
        self,
        m: &mut M,
        r: &mut R,
        iterations: usize,
    ) -> Result<(), R::Error> {
        let (mut this, rest) = self;

        let inputs = this.inputs.into_iter();
        tracing::debug!(suite = this.name, benchmarks = this.benchmark_list.len(), "starting suite");
        r.starting_new_benchmark_suite(
            this.name,
            inputs.size_hint(),
            HListIterator(&this.benchmark_list as &dyn RunnableSuiteBenchmarkList<Inp>),
        )?;

        for (inp_idx, inp) in inputs.enumerate() {
            tracing::debug!(suite = this.name, input = ?inp, "starting input");
            r.starting_input(inp_idx, &inp)?;

            for it_idx in 0..iterations {
                this.benchmark_list.run(m, r, inp_idx, &inp, it_idx, 0)?;
            }

            r.ending_input(inp_idx, &inp)?;
        }

        r.ending_benchmark_suite(this.name)?;

        rest.run(m, r, iterations)
    }

    fn name_and_next(&self) -> Option<(&'static str, &dyn RunnableBenchmarkList)> {
        Some((self.0.name, &self.1))
    }

    fn len(&self) -> usize {
        self.1.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{suite, BenchmarkRunner, NoOpMetric, NoOpReporter};

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Setup(&'static str, u64),
        Run(&'static str, u64),
        Teardown(&'static str, u64),
    }

    struct Logged<'l> {
        name: &'static str,
        log: &'l RefCell<Vec<Event>>,
    }

    impl Benchmark<u64> for Logged<'_> {
        type Res = u64;

        fn setup(&mut self, inp: &u64) {
            self.log.borrow_mut().push(Event::Setup(self.name, *inp));
        }
        fn run(&mut self, inp: &u64) -> u64 {
            self.log.borrow_mut().push(Event::Run(self.name, *inp));
            *inp * 2
        }
        fn teardown(&mut self, inp: &u64, res: u64) {
            assert_eq!(res, *inp * 2);
            self.log.borrow_mut().push(Event::Teardown(self.name, *inp));
        }
    }

    #[test]
    fn members_run_in_insertion_order_with_interleaved_iterations() {
        use Event::*;

        let log = RefCell::new(Vec::new());
        let s = suite("order", 1..=2u64)
            .add("a", Logged { name: "a", log: &log })
            .add("b", Logged { name: "b", log: &log });

        BenchmarkRunner::new()
            .set_iterations(2)
            .add(s)
            .run(&mut NoOpMetric, &mut NoOpReporter)
            .unwrap();

        let mut expected = Vec::new();
        for inp in 1..=2 {
            for _ in 0..2 {
                for name in ["a", "b"] {
                    expected.extend([Setup(name, inp), Run(name, inp), Teardown(name, inp)]);
                }
            }
        }
        assert_eq!(log.into_inner(), expected);
    }

    #[test]
    fn names_are_listed_in_insertion_order() {
        let s = suite("names", [0u64])
            .add("first", |_: &u64| ())
            .add("second", |_: &u64| ())
            .add("third", |_: &u64| ());

        assert_eq!(s.benchmark_list.len(), 3);
        let names: Vec<_> =
            HListIterator(&s.benchmark_list as &dyn RunnableSuiteBenchmarkList<u64>).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
