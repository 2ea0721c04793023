//! Uniformly distributed random numbers.

use crate::random::{Limit, Random};

/// Random floats in `[min, max)`, drawn from `[0, 1)`.
///
/// Draws outside of `[min, max)` are discarded and do not count towards the limit.
pub struct Floats<R> {
    rng: R,
    min: f64,
    max: f64,
    limit: Limit,
}

impl<R> Floats<R> {
    pub(crate) fn new(rng: R, min: f64, max: f64, limit: Limit) -> Self {
        if min >= max {
            log::warn!("random floats in empty interval [{min}, {max}) yield nothing");
        }
        Self {
            rng,
            min,
            max,
            limit,
        }
    }

    fn is_empty(&self) -> bool {
        self.limit.exhausted() || self.min >= self.max
    }
}

impl<R: Random> Iterator for Floats<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        loop {
            let r = self.rng.uniform_float();
            if self.min <= r && r < self.max {
                self.limit.take_one();
                return Some(r);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_empty() {
            (0, Some(0))
        } else {
            self.limit.size_hint()
        }
    }
}

/// Random integers in `[min, max]`.
pub struct Ints<R> {
    rng: R,
    min: i64,
    max: i64,
    limit: Limit,
}

impl<R> Ints<R> {
    pub(crate) fn new(rng: R, min: i64, max: i64, limit: Limit) -> Self {
        debug_assert!(min <= max);
        Self {
            rng,
            min,
            max,
            limit,
        }
    }
}

impl<R: Random> Iterator for Ints<R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.limit.exhausted() {
            return None;
        }
        self.limit.take_one();
        Some(self.rng.uniform_int(self.min, self.max))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.limit.size_hint()
    }
}

impl<R: Random> core::iter::FusedIterator for Floats<R> {}
impl<R: Random> core::iter::FusedIterator for Ints<R> {}
