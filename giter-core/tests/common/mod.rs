use core::fmt::Debug;
use giter_core::{BigUint, Error, GIter, Random};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::VecDeque;

/// Assert that the sequence yields exactly the given values and then stops.
pub fn gives<T: PartialEq + Debug, const N: usize>(seq: Result<GIter<T>, Error>, ys: [T; N]) {
    let mut seq = seq.unwrap();
    assert_eq!(seq.by_ref().collect::<Vec<_>>(), ys);
    assert_eq!(seq.next(), None);
}

pub fn fail<T>(seq: Result<GIter<T>, Error>, err: Error) {
    assert_eq!(seq.err(), Some(err));
}

pub fn big<const N: usize>(xs: [u64; N]) -> [BigUint; N] {
    xs.map(BigUint::from)
}

pub fn seeded() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Randomness source that replays predetermined values.
#[derive(Default)]
pub struct Scripted {
    floats: VecDeque<f64>,
    ints: VecDeque<i64>,
}

impl Scripted {
    pub fn floats(xs: impl IntoIterator<Item = f64>) -> Self {
        Self {
            floats: xs.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn ints(xs: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ints: xs.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Random for Scripted {
    fn uniform_float(&mut self) -> f64 {
        self.floats.pop_front().expect("script has no more floats")
    }

    fn uniform_int(&mut self, a: i64, b: i64) -> i64 {
        let x = self.ints.pop_front().expect("script has no more integers");
        assert!((a..=b).contains(&x), "{x} is not in [{a}, {b}]");
        x
    }
}

#[macro_export]
macro_rules! yields {
    ($func_name:ident, $seq:expr, $output: expr) => {
        #[test]
        fn $func_name() {
            gives($seq, $output)
        }
    };
}
