use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::Benchmark;

pub fn recursive(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::one();
    }

    BigUint::from(n) * recursive(n - 1)
}
pub struct Recursive;
impl Benchmark<u64> for Recursive {
    type Res = BigUint;
    fn run(&mut self, inp: &u64) -> Self::Res {
        recursive(*inp)
    }
}

/// Product of `1..=n`, accumulated in a loop.
///
/// NOTE: **always returns 0**. The accumulator starts at zero rather than
/// one, so every multiplication keeps it at zero. This is the behaviour of
/// the program these timings are compared against and is kept as-is so the
/// numbers stay comparable; it is not a correct factorial.
pub fn iterative(n: u64) -> BigUint {
    let mut value = BigUint::zero();
    for i in 1..=n {
        value *= i;
    }

    value
}
pub struct Iterative;
impl Benchmark<u64> for Iterative {
    type Res = BigUint;
    fn run(&mut self, inp: &u64) -> Self::Res {
        iterative(*inp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial_by_fold(n: u64) -> BigUint {
        (1..=n).fold(BigUint::one(), |acc, i| acc * i)
    }

    #[test]
    fn recursive_is_the_factorial() {
        for n in 1..=35 {
            assert_eq!(recursive(n), factorial_by_fold(n), "input: {n}");
        }
    }

    #[test]
    fn recursive_known_values() {
        assert_eq!(recursive(0), BigUint::from(1u32));
        assert_eq!(recursive(1), BigUint::from(1u32));
        assert_eq!(recursive(5), BigUint::from(120u32));
        assert_eq!(recursive(20), BigUint::from(2_432_902_008_176_640_000u64));
        assert_eq!(
            recursive(35).to_string(),
            "10333147966386144929666651337523200000000"
        );
    }

    #[test]
    fn iterative_accumulator_starts_at_zero() {
        for n in 0..=35 {
            assert!(iterative(n).is_zero(), "input: {n}");
        }
    }
}
