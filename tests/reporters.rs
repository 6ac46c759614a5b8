use recbench::reporters::FormatOptions;
use recbench::{suite, BenchmarkRunner, CsvReporter, ProcessCpuTime, Reporter, SummaryReporter};

use recbench::algorithms::fibonacci;

/// Sends every event to both reporters.
struct Both<A, B>(A, B);

impl<M, A, B> Reporter<M> for Both<A, B>
where
    M: recbench::Metric,
    M::Unit: Clone,
    A: Reporter<M, Error = recbench::Error>,
    B: Reporter<M, Error = recbench::Error>,
{
    type Error = recbench::Error;

    fn top_level_benchmarks<I: Iterator<Item = &'static str> + Clone>(
        &mut self,
        names: I,
    ) -> recbench::Result<()> {
        self.0.top_level_benchmarks(names.clone())?;
        self.1.top_level_benchmarks(names)
    }
    fn num_iterations(&mut self, iterations: usize) -> recbench::Result<()> {
        self.0.num_iterations(iterations)?;
        self.1.num_iterations(iterations)
    }
    fn starting_new_benchmark_suite<I: Iterator<Item = &'static str> + Clone>(
        &mut self,
        name: &'static str,
        hint: (usize, Option<usize>),
        names: I,
    ) -> recbench::Result<()> {
        self.0.starting_new_benchmark_suite(name, hint, names.clone())?;
        self.1.starting_new_benchmark_suite(name, hint, names)
    }
    fn starting_input(&mut self, idx: usize, input: &dyn std::fmt::Debug) -> recbench::Result<()> {
        self.0.starting_input(idx, input)?;
        self.1.starting_input(idx, input)
    }
    fn suite_benchmark_run(
        &mut self,
        input_idx: usize,
        input: &dyn std::fmt::Debug,
        benchmark_idx: usize,
        benchmark_name: &'static str,
        iteration_idx: usize,
        measurement: M::Unit,
    ) -> recbench::Result<()> {
        self.0.suite_benchmark_run(
            input_idx,
            input,
            benchmark_idx,
            benchmark_name,
            iteration_idx,
            measurement.clone(),
        )?;
        self.1.suite_benchmark_run(
            input_idx,
            input,
            benchmark_idx,
            benchmark_name,
            iteration_idx,
            measurement,
        )
    }
    fn ending_input(&mut self, idx: usize, input: &dyn std::fmt::Debug) -> recbench::Result<()> {
        self.0.ending_input(idx, input)?;
        self.1.ending_input(idx, input)
    }
    fn ending_benchmark_suite(&mut self, name: &'static str) -> recbench::Result<()> {
        self.0.ending_benchmark_suite(name)?;
        self.1.ending_benchmark_suite(name)
    }
    fn ended(&mut self) -> recbench::Result<()> {
        self.0.ended()?;
        self.1.ended()
    }
}

#[test]
fn summary_agrees_with_raw_measurements() {
    const TRIALS: usize = 4;

    let mut both = Both(
        CsvReporter::new(Vec::new()),
        SummaryReporter::<_, u64>::new(Vec::new()).set_format_options(FormatOptions::plain()),
    );

    BenchmarkRunner::new()
        .set_iterations(TRIALS)
        .add(
            suite("fibonacci", [12u64, 18])
                .add("recursivo", fibonacci::Recursive)
                .add("iterativo", fibonacci::Iterative),
        )
        .run(&mut ProcessCpuTime::new().unwrap(), &mut both)
        .unwrap();

    let Both(csv, summary) = both;
    let csv = String::from_utf8(csv.into_inner()).unwrap();
    let summary = String::from_utf8(summary.into_inner()).unwrap();

    for (n, alg) in [(12, "recursivo"), (12, "iterativo"), (18, "recursivo"), (18, "iterativo")] {
        let times: Vec<u64> = csv
            .lines()
            .skip(1)
            .filter(|l| l.starts_with(&format!("{alg},{n},")))
            .map(|l| l.rsplit(',').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(times.len(), TRIALS);

        let min = *times.iter().min().unwrap();
        let max = *times.iter().max().unwrap();
        let avg = times.iter().sum::<u64>() / TRIALS as u64;
        assert!(min <= avg && avg <= max);

        let range = (max - avg).max(avg - min);
        let line = format!("{alg}: {avg} ± {range} ({min} to {max})");
        assert!(summary.contains(&line), "missing {line:?} in:\n{summary}");
    }

    assert!(summary.contains("Inputs (4 iterations each, measuring CPU nanoseconds):"));
    assert!(summary.contains(" 1. `12`\n"));
    assert!(summary.contains(" 2. `18`\n"));
}
