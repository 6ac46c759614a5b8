use core::{
    fmt::{self, Debug, Display},
    ops::{Add, Div, Sub},
};
use std::io;

use crate::Error;

pub trait Metric {
    type Unit: PartialOrd
        + PartialEq
        + Add<Output = Self::Unit>
        + Sub<Output = Self::Unit>
        + Div<Self::Divisor, Output = Self::Unit>
        + Debug;
    type Divisor: TryFrom<usize> /* = Self::Unit */;
    type Start;

    const UNIT_NAME: &'static str = "unknown";

    fn start(&mut self) -> Self::Start;
    fn end(&mut self, start: Self::Start) -> Self::Unit;
    fn print(u: &Self::Unit, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(u, f)
    }
}

/// Renders a measurement using its metric's [`Metric::print`].
pub struct MetricFmtAdapter<'u, M: Metric>(pub &'u M::Unit);

impl<M: Metric> Display for MetricFmtAdapter<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::print(self.0, f)
    }
}

/// A placeholder metric that just returns 1.
///
/// Using this with [`BenchmarkRunner`](crate::BenchmarkRunner) should
/// yield `1` as the "result" for every benchmark.
#[derive(Debug, Default)]
pub struct NoOpMetric;

impl Metric for NoOpMetric {
    type Unit = u64;
    type Start = ();
    type Divisor = u64;

    fn start(&mut self) {}
    fn end(&mut self, (): ()) -> u64 {
        1
    }
}

/// CPU time consumed by the whole process, in nanoseconds.
///
/// Backed by `clock_gettime(CLOCK_PROCESS_CPUTIME_ID)`, so time spent
/// blocked or descheduled is not counted.
#[derive(Debug)]
pub struct ProcessCpuTime {
    resolution_ns: u64,
}

impl ProcessCpuTime {
    /// Probes the clock once; fails if the platform doesn't provide a
    /// per-process CPU-time clock.
    pub fn new() -> Result<Self, Error> {
        let mut res = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: `res` is a valid, writable `timespec`.
        if unsafe { libc::clock_getres(libc::CLOCK_PROCESS_CPUTIME_ID, &mut res) } != 0 {
            return Err(Error::Clock(io::Error::last_os_error()));
        }

        let resolution_ns = to_nanos(&res);
        tracing::debug!(resolution_ns, "process CPU-time clock ready");

        Ok(ProcessCpuTime { resolution_ns })
    }

    pub fn resolution_ns(&self) -> u64 {
        self.resolution_ns
    }

    #[inline(always)]
    fn now() -> u64 {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: `ts` is a valid, writable `timespec` and the clock id was
        // already accepted by `clock_getres` in `new`.
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
        debug_assert_eq!(rc, 0);

        to_nanos(&ts)
    }
}

fn to_nanos(ts: &libc::timespec) -> u64 {
    (ts.tv_sec as u64)
        .saturating_mul(1_000_000_000)
        .saturating_add(ts.tv_nsec as u64)
}

impl Metric for ProcessCpuTime {
    type Start = u64;
    type Unit = u64;
    type Divisor = u64;

    const UNIT_NAME: &'static str = "CPU nanoseconds";

    fn start(&mut self) -> u64 {
        Self::now()
    }

    // The clock is monotonic for a single process but we still saturate
    // so that a measurement can never come out negative (or wrap).
    fn end(&mut self, s: u64) -> u64 {
        Self::now().saturating_sub(s)
    }

    fn print(u: &u64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(u, f)
    }
}
