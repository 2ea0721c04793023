//! Source of randomness for random sequences.

/// Uniformly distributed random numbers.
///
/// This is implemented for every [`rand::Rng`],
/// such as `rand::thread_rng()` or a seeded `rand::rngs::StdRng`.
/// Implement it yourself to feed sequences with predetermined values.
pub trait Random {
    /// Return a float in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;

    /// Return an integer in `[a, b]`.
    ///
    /// Callers guarantee that `a <= b`.
    fn uniform_int(&mut self, a: i64, b: i64) -> i64;
}

impl<R: rand::Rng> Random for R {
    fn uniform_float(&mut self) -> f64 {
        self.gen()
    }

    fn uniform_int(&mut self, a: i64, b: i64) -> i64 {
        self.gen_range(a..=b)
    }
}

/// Limit on the number of values that a producer may still yield.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Limit {
    Unbounded,
    Remaining(u64),
}

impl Limit {
    /// Create a limit from an optional user-given count,
    /// where `name` identifies the count in case that it is negative.
    pub fn new(name: &'static str, n: Option<i64>) -> Result<Self, crate::Error> {
        match n {
            None => Ok(Self::Unbounded),
            Some(n) => u64::try_from(n)
                .map(Self::Remaining)
                .map_err(|_| crate::Error::Negative(name, n)),
        }
    }

    pub fn exhausted(&self) -> bool {
        *self == Self::Remaining(0)
    }

    /// Account for one yielded value.
    pub fn take_one(&mut self) {
        if let Self::Remaining(n) = self {
            *n = n.saturating_sub(1)
        }
    }

    pub fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Unbounded => (usize::MAX, None),
            Self::Remaining(n) => match usize::try_from(*n) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
        }
    }
}

#[test]
fn limit() {
    assert_eq!(Limit::new("iterations", None), Ok(Limit::Unbounded));
    assert_eq!(
        Limit::new("iterations", Some(-1)),
        Err(crate::Error::Negative("iterations", -1))
    );

    let mut limit = Limit::new("iterations", Some(2)).unwrap();
    limit.take_one();
    assert!(!limit.exhausted());
    limit.take_one();
    assert!(limit.exhausted());
    limit.take_one();
    assert_eq!(limit, Limit::Remaining(0));

    let mut unbounded = Limit::Unbounded;
    (0..1000).for_each(|_| unbounded.take_one());
    assert!(!unbounded.exhausted());
}
