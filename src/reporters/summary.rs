use core::fmt::Debug;
use std::io::{self, Write};

use owo_colors::{OwoColorize, Style};

use super::Reporter;
use crate::metrics::{Metric, MetricFmtAdapter};
use crate::Error;

/// Human readable digest of a run: for every input, each benchmark's mean
/// with its spread and extremes.
///
/// Individual measurements are not printed; use
/// [`CsvReporter`](super::CsvReporter) for those.
pub struct SummaryReporter<W: Write, U = u64> {
    out: W,
    iterations: usize,
    pub format_options: FormatOptions,
    suite: Option<SuiteState<U>>,
}

impl<W: Write, U> SummaryReporter<W, U> {
    pub fn new(out: W) -> Self {
        SummaryReporter {
            out,
            iterations: 0,
            format_options: Default::default(),
            suite: None,
        }
    }

    pub fn set_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = options;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub struct FormatOptions {
    pub prefix: Option<fn(&mut dyn Write) -> io::Result<()>>,
    pub suite_box_style: Style,
    pub suite_box_spec: support::BoxSpec,
    pub iteration_count_style: Style,
    pub suite_name_style: Style,
    pub input_style: Style,
    pub unit_style: Style,
    pub avg_style: Style,
    pub range_style: Style,
    pub min_style: Style,
    pub max_style: Style,
    pub bench_name_style: Style,
    pub punctuation_style: Style,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            prefix: Some(|f| f.write_all("┆ ".as_bytes())),
            suite_box_style: Style::new().green(),
            suite_box_spec: support::DOUBLE_LINED_BOX,
            iteration_count_style: Style::new(),
            suite_name_style: Style::new().bold(),
            input_style: Style::new().magenta(),
            unit_style: Style::new().bold(),
            avg_style: Style::new().green().bold(),
            range_style: Style::new().dimmed(),
            min_style: Style::new().yellow(),
            max_style: Style::new().red(),
            bench_name_style: Style::new().cyan().italic(),
            punctuation_style: Style::new().dimmed(),
        }
    }
}

impl FormatOptions {
    /// No colors and no prefix; for logs and anything that isn't a terminal.
    pub fn plain() -> Self {
        FormatOptions {
            prefix: None,
            suite_box_style: Style::new(),
            suite_box_spec: support::SINGLE_LINED_BOX,
            iteration_count_style: Style::new(),
            suite_name_style: Style::new(),
            input_style: Style::new(),
            unit_style: Style::new(),
            avg_style: Style::new(),
            range_style: Style::new(),
            min_style: Style::new(),
            max_style: Style::new(),
            bench_name_style: Style::new(),
            punctuation_style: Style::new(),
        }
    }
}

#[derive(Debug)]
struct SuiteState<U> {
    benchmark_names: Vec<&'static str>,
    benchmark_name_max_width: usize,
    est_num_inputs: usize,
    // One slot per benchmark, for the current input.
    stats: Vec<Option<Stats<U>>>,
}

#[derive(Debug, Clone, Copy)]
struct Stats<U> {
    min: U,
    max: U,
    sum: U,
    count: usize,
}

impl<U: Copy + Ord + core::ops::Add<Output = U>> Stats<U> {
    fn new(measurement: U) -> Self {
        Stats {
            min: measurement,
            max: measurement,
            sum: measurement,
            count: 1,
        }
    }

    fn record(self, measurement: U) -> Self {
        Stats {
            min: self.min.min(measurement),
            max: self.max.max(measurement),
            sum: self.sum + measurement,
            count: self.count + 1,
        }
    }
}

mod support {
    use core::fmt::{self, Display};
    use std::io::{self, Write};

    use owo_colors::{OwoColorize, Style};

    // When `unicode-width` is not enabled, this is bad and ignores the fact
    // that printed chars (i.e. emoji) can be wide.
    pub(crate) fn estimated_str_width(s: &str) -> usize {
        #[cfg(not(feature = "unicode-width"))]
        let res = s.chars().count();

        #[cfg(feature = "unicode-width")]
        let res = {
            use unicode_width::UnicodeWidthStr;
            UnicodeWidthStr::width(s)
        };

        res
    }

    pub(crate) fn estimated_num_width(n: usize) -> usize {
        n.checked_ilog10().unwrap_or(0) as usize + 1
    }

    pub(crate) struct Repeat<T>(T, usize);
    impl<T: Display> Display for Repeat<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for _ in 0..self.1 {
                self.0.fmt(f)?
            }

            Ok(())
        }
    }

    pub(crate) struct Joined<A, B>(A, B);
    impl<A: Display, B: Display> Display for Joined<A, B> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt(f)?;
            self.1.fmt(f)
        }
    }
    pub(crate) trait FmtUtil: Sized {
        fn join<O>(self, other: O) -> Joined<Self, O> {
            Joined(self, other)
        }

        fn repeat(self, times: usize) -> Repeat<Self> {
            Repeat(self, times)
        }
    }
    impl<A> FmtUtil for A {}

    #[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
    pub struct BoxSpec {
        top_left: char,
        top_right: char,
        bot_left: char,
        bot_right: char,
        vertical: char,
        horizontal: char,
    }

    pub const SINGLE_LINED_BOX: BoxSpec = BoxSpec {
        top_left: '┌',
        top_right: '┐',
        bot_left: '└',
        bot_right: '┘',
        vertical: '│',
        horizontal: '─',
    };

    pub const DOUBLE_LINED_BOX: BoxSpec = BoxSpec {
        top_left: '╔',
        top_right: '╗',
        bot_left: '╚',
        bot_right: '╝',
        vertical: '║',
        horizontal: '═',
    };

    pub(crate) fn draw_boxed<W: Write>(
        f: &mut W,
        prefix: Option<fn(&mut dyn Write) -> io::Result<()>>,
        spec: &BoxSpec,
        content: &str,
        box_style: Style,
        content_style: Style,
    ) -> io::Result<()> {
        let lines = content.split_terminator('\n');
        let width = lines.clone().map(estimated_str_width).max().unwrap_or(0);

        macro_rules! line {
            ($(
                ($($tt:tt)+)
            ),* $(,)?) => {
                if let Some(p) = prefix {
                    p(&mut *f)?;
                }

                $(
                    write!(f, $($tt)+)?;
                )*

                writeln!(f)?;
            };
        }

        // Top:
        line! {
            ("{}", spec.top_left.join(spec.horizontal.repeat(width + 2))
                .join(spec.top_right)
                .style(box_style)
            ),
        }

        // Content:
        for l in lines {
            line! {
                ("{} ", spec.vertical.style(box_style)),
                ("{}{}", l.style(content_style), " ".repeat(width - estimated_str_width(l))),
                (" {}", spec.vertical.style(box_style)),
            }
        }

        // End:
        line! {
            ("{}", spec.bot_left.join(spec.horizontal.repeat(width + 2))
                    .join(spec.bot_right)
                    .style(box_style)
            ),
        }

        Ok(())
    }
}
use support::*;
pub use support::{BoxSpec, DOUBLE_LINED_BOX, SINGLE_LINED_BOX};

macro_rules! prefixed {
    (($self:ident) <- $(
        ($($tt:tt)+)
    ),* $(,)?) => {
        if let Some(p) = $self.format_options.prefix {
            p(&mut $self.out)?;
        }

        prefixed![($self) ++  $(
            ($($tt)+),
        )*];
    };

    // Omit prefix!
    (($self:ident) ++ $(
        ($($tt:tt)+)
    ),* $(,)?) => {
        $(
            write!($self.out, $($tt)+)?;
        )*
    }
}

impl<W: Write, U> SummaryReporter<W, U> {
    fn print_stats<M: Metric<Unit = U>>(&mut self, indent: usize, stats: Stats<U>) -> Result<(), Error>
    where
        // rustc can't prove these are already satisfied by the `M: Metric<Unit
        // = U>` impl, for some reason...
        U: core::ops::Div<M::Divisor, Output = U>,
        U: core::ops::Sub<Output = U>,
        U: Ord,
        U: Copy,
    {
        let avg: U = {
            let count: M::Divisor = stats.count.try_into().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "iteration count does not fit the metric's divisor",
                )
            })?;
            stats.sum / count
        };
        let range = {
            let upper = stats.max - avg;
            let lower = avg - stats.min;

            upper.max(lower)
        };
        let punct = self.format_options.punctuation_style;
        prefixed![(self) ++
            ("{}", " ".repeat(indent)),
            ("{} ± {} ",
                MetricFmtAdapter::<M>(&avg).style(self.format_options.avg_style),
                MetricFmtAdapter::<M>(&range).style(self.format_options.range_style),
            ),
            ("{}{} {} {}{}\n",
                "(".style(punct),
                MetricFmtAdapter::<M>(&stats.min).style(self.format_options.min_style),
                "to".style(punct),
                MetricFmtAdapter::<M>(&stats.max).style(self.format_options.max_style),
                ")".style(punct),
            ),
        ];

        Ok(())
    }
}

impl<W, M> Reporter<M> for SummaryReporter<W, M::Unit>
where
    W: Write,
    M: Metric,
    M::Unit: Copy + Ord,
{
    type Error = Error;

    fn num_iterations(&mut self, iterations: usize) -> Result<(), Error> {
        debug_assert!(iterations > 0);
        self.iterations = iterations;
        Ok(())
    }

    fn starting_new_benchmark_suite<I: Iterator<Item = &'static str> + Clone>(
        &mut self,
        name: &'static str,
        input_size_hint: (usize, Option<usize>),
        benchmark_names: I,
    ) -> Result<(), Error> {
        debug_assert!(self.suite.is_none());
        let benchmark_names: Vec<_> = benchmark_names.collect();
        self.suite = Some(SuiteState {
            benchmark_name_max_width: benchmark_names
                .iter()
                .copied()
                .map(estimated_str_width)
                .max()
                .unwrap_or(0),
            stats: vec![None; benchmark_names.len()],
            benchmark_names,
            est_num_inputs: input_size_hint.1.unwrap_or(input_size_hint.0),
        });

        draw_boxed(
            &mut self.out,
            self.format_options.prefix,
            &self.format_options.suite_box_spec,
            name,
            self.format_options.suite_box_style,
            self.format_options.suite_name_style,
        )?;
        let punct = self.format_options.punctuation_style;
        prefixed![(self) <- ("\n")];
        prefixed![(self) <- (
            "{}{}{}{}{}\n",
            "Inputs (".style(punct),
            self.iterations.style(self.format_options.iteration_count_style),
            " iterations each, measuring ".style(punct),
            M::UNIT_NAME.style(self.format_options.unit_style),
            "):".style(punct),
        )];

        Ok(())
    }

    fn starting_input(&mut self, input_idx: usize, input: &dyn Debug) -> Result<(), Error> {
        let Some(suite) = &mut self.suite else {
            unreachable!("inputs only happen within a suite")
        };
        suite.stats.iter_mut().for_each(|s| *s = None);

        let input_num_width = estimated_num_width(suite.est_num_inputs);
        let punct = self.format_options.punctuation_style;
        prefixed![(self) <-
            (" "),
            ("{: >num_width$}{} ", input_idx + 1, '.'.style(punct), num_width = input_num_width),
            ("{}{:?}{}", '`'.style(punct), input.style(self.format_options.input_style), '`'.style(punct)),
            ("\n"),
        ];

        Ok(())
    }

    fn suite_benchmark_run(
        &mut self,
        _input_idx: usize,
        _input: &dyn Debug,
        benchmark_idx: usize,
        _benchmark_name: &'static str,
        _iteration_idx: usize,
        measurement: M::Unit,
    ) -> Result<(), Error> {
        let Some(suite) = &mut self.suite else {
            unreachable!("runs only happen within a suite")
        };

        let slot = &mut suite.stats[benchmark_idx];
        *slot = Some(match slot.take() {
            None => Stats::new(measurement),
            Some(s) => s.record(measurement),
        });

        Ok(())
    }

    fn ending_input(&mut self, _input_idx: usize, _input: &dyn Debug) -> Result<(), Error> {
        let Some(suite) = self.suite.take() else {
            unreachable!("inputs only happen within a suite")
        };

        let input_num_width = estimated_num_width(suite.est_num_inputs);
        let punct = self.format_options.punctuation_style;
        for (name, stats) in suite.benchmark_names.iter().zip(&suite.stats) {
            // No iterations, nothing to say.
            let Some(stats) = *stats else { continue };
            debug_assert_eq!(stats.count, self.iterations);

            // Benchmark name, right aligned:
            prefixed![(self) <-
                (" "),
                ("{: >input_num_width$}  ", "", input_num_width = input_num_width), // Account for the input number alignment
                ("{}{}{}",
                    ' '.repeat(suite.benchmark_name_max_width - estimated_str_width(name)),
                    name.style(self.format_options.bench_name_style),
                    ':'.style(punct),
                ),
            ];

            // And then the stats:
            self.print_stats::<M>(1, stats)?;
        }

        self.suite = Some(suite);
        Ok(())
    }

    fn ending_benchmark_suite(&mut self, _name: &'static str) -> Result<(), Error> {
        debug_assert!(self.suite.is_some());
        self.suite = None;

        prefixed![(self) <- ("\n")];
        writeln!(self.out)?;
        Ok(())
    }

    fn ended(&mut self) -> Result<(), Error> {
        debug_assert!(self.suite.is_none());
        self.out.flush()?;
        Ok(())
    }
}
