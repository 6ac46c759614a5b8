#![doc = include_str!("../README.md")]

#[cfg(not(unix))]
compile_error!("the process CPU-time clock needs `clock_gettime`; build for a unix target!");

mod bench;
pub use bench::Benchmark;

mod error;
pub use error::{Error, Result};

mod runner;
pub use runner::{black_box, suite, BenchmarkRunner};

pub mod metrics;
pub use metrics::{Metric, NoOpMetric, ProcessCpuTime};

pub mod reporters;
pub use reporters::{CsvReporter, NoOpReporter, Reporter, SummaryReporter};

pub mod algorithms;
pub mod harness;
pub mod logging;
