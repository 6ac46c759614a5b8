//! The functions being measured, plus a [`Benchmark`](crate::Benchmark) impl
//! for each of them.
//!
//! Every benchmark drops its result in `teardown`, outside of the timed
//! region.

pub mod factorial;
pub mod fibonacci;
