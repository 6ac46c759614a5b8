use crate::Benchmark;

pub fn recursive(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        n => recursive(n - 2) + recursive(n - 1),
    }
}
pub struct Recursive;
impl Benchmark<u64> for Recursive {
    type Res = u64;
    fn run(&mut self, inp: &u64) -> Self::Res {
        recursive(*inp)
    }
}

pub fn iterative(n: u64) -> u64 {
    if let 0 | 1 = n {
        return n;
    }

    let mut a = 0;
    let mut b = 1;
    for _ in 0..(n - 1) {
        let next = a + b;
        a = b;
        b = next;
    }

    b
}
pub struct Iterative;
impl Benchmark<u64> for Iterative {
    type Res = u64;
    fn run(&mut self, inp: &u64) -> Self::Res {
        iterative(*inp)
    }
}
