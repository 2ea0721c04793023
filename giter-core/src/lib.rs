//! Lazy sequences.
//!
//! This crate provides [`GIter`], a single-pass sequence that
//! computes its values one at a time, on demand.
//! Sequences can be constructed from any iterator or from one of the
//! named constructors for ranges, random numbers,
//! random samples from a collection, and Syracuse sequences.
//!
//! ~~~
//! use giter_core::GIter;
//!
//! let mut seq = GIter::syracuse(6, true)?.map(|x| x.to_string());
//! assert_eq!(seq.next().as_deref(), Some("6"));
//! assert_eq!(seq.by_ref().collect::<Vec<_>>().join(" "), "3 10 5 16 8 4 2 1");
//!
//! // a sequence is consumed, not replayed
//! assert_eq!(seq.next(), None);
//! # Ok::<(), giter_core::Error>(())
//! ~~~
//!
//! Random sequences draw from a [`Random`] source.
//! By default, this is `rand::thread_rng()`, but
//! any other source can be passed to the `*_with` constructors:
//!
//! ~~~
//! use giter_core::GIter;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let rng = StdRng::seed_from_u64(0);
//! let dice = GIter::randint_with(rng, 1, 6, Some(10))?;
//! assert!(dice.into_iter().all(|x| (1..=6).contains(&x)));
//! # Ok::<(), giter_core::Error>(())
//! ~~~
//!
//! Sequences hold all their state exclusively and
//! can only be advanced via a mutable reference.
//! Sequences that are not bounded may be infinite;
//! it is up to the consumer to stop pulling values from them.
#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod choice;
mod error;
pub mod random;
mod range;
mod syracuse;
mod uniform;

pub use error::Error;
pub use num_bigint::BigUint;
pub use random::Random;

use alloc::{boxed::Box, vec::Vec};
use core::iter::Fuse;
use random::Limit;

/// A boxed iterator.
pub type BoxIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

type Function<'a, T> = Box<dyn FnMut(T) + 'a>;

/// Lazy, single-pass sequence of values.
///
/// A sequence owns exactly one producer, which is advanced
/// every time that a value is requested.
/// Once the producer is exhausted, the sequence yields no more values.
pub struct GIter<'a, T> {
    producer: Fuse<BoxIter<'a, T>>,
    function: Option<Function<'a, T>>,
}

impl<'a, T: 'a> GIter<'a, T> {
    /// Wrap a producer into a sequence.
    pub fn new(producer: impl Iterator<Item = T> + 'a) -> Self {
        let producer: BoxIter<'a, T> = Box::new(producer);
        Self {
            producer: producer.fuse(),
            function: None,
        }
    }

    /// Wrap a producer into a sequence, attaching a function for [`Self::run`].
    pub fn with_function<U>(
        producer: impl Iterator<Item = T> + 'a,
        f: impl FnMut(T) -> U + 'a,
    ) -> Self {
        Self::new(producer).attach(f)
    }

    /// Return the producer of the sequence.
    ///
    /// This does not restart the sequence:
    /// every call returns the same producer,
    /// which has advanced by all values that were taken from it before.
    pub fn iter(&mut self) -> &mut (dyn Iterator<Item = T> + 'a) {
        &mut self.producer
    }

    /// Replace the function that [`Self::run`] calls on every value.
    ///
    /// The outputs of the function are discarded.
    pub fn attach<U>(mut self, mut f: impl FnMut(T) -> U + 'a) -> Self {
        self.function = Some(Box::new(move |x| {
            f(x);
        }));
        self
    }

    /// Consume all remaining values, calling the attached function on each of them.
    ///
    /// This does not return if the sequence is infinite.
    pub fn run(&mut self) {
        match &mut self.function {
            Some(f) => self.producer.by_ref().for_each(f),
            None => self.producer.by_ref().for_each(drop),
        }
    }
}

impl<'a, T> Iterator for GIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.producer.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.producer.size_hint()
    }
}

impl<'a, T> core::iter::FusedIterator for GIter<'a, T> {}

impl<'a> GIter<'a, i64> {
    /// Integers from 0 up to `stop` (exclusive).
    pub fn range_to(stop: i64) -> Self {
        Self::range(0, stop)
    }

    /// Integers from `start` (inclusive) up to `stop` (exclusive).
    pub fn range(start: i64, stop: i64) -> Self {
        log::debug!("range({start}, {stop})");
        Self::new(range::Range::new(start, stop, 1))
    }

    /// Integers from `start` (inclusive) up to `stop` (exclusive), advancing by `step`.
    ///
    /// A negative step yields no values.
    ///
    /// ~~~
    /// # use giter_core::{Error, GIter};
    /// assert_eq!(GIter::range_step(0, 10, 2)?.collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
    /// assert!(GIter::range_step(0, 10, 0).is_err());
    /// # Ok::<(), Error>(())
    /// ~~~
    pub fn range_step(start: i64, stop: i64, step: i64) -> Result<Self, Error> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        log::debug!("range({start}, {stop}, {step})");
        Ok(Self::new(range::Range::new(start, stop, step)))
    }

    /// Random integers in `[int_min, int_max]`.
    ///
    /// If `iterations` is given, yield exactly that many integers,
    /// else yield integers forever.
    pub fn randint_with<R: Random + 'a>(
        rng: R,
        int_min: i64,
        int_max: i64,
        iterations: Option<i64>,
    ) -> Result<Self, Error> {
        if int_min > int_max {
            return Err(Error::IntRange(int_min, int_max));
        }
        let limit = Limit::new("iterations", iterations)?;
        log::debug!("randint({int_min}, {int_max}, {limit:?})");
        Ok(Self::new(uniform::Ints::new(rng, int_min, int_max, limit)))
    }

    /// Random integers drawn from [`rand::thread_rng`], see [`Self::randint_with`].
    #[cfg(feature = "std")]
    pub fn randint(int_min: i64, int_max: i64, iterations: Option<i64>) -> Result<Self, Error> {
        Self::randint_with(rand::thread_rng(), int_min, int_max, iterations)
    }
}

impl<'a> GIter<'a, BigUint> {
    /// Integers that follow `starting` in its Syracuse sequence, ending with 1.
    ///
    /// For example, `6` yields `3, 10, 5, 16, 8, 4, 2, 1`.
    /// If `include_starting` is set, `starting` itself is yielded first.
    /// Values are [`BigUint`]s and may grow beyond any fixed-width integer type.
    ///
    /// This sequence is finite if the Collatz conjecture holds.
    pub fn syracuse(starting: i64, include_starting: bool) -> Result<Self, Error> {
        let start = match u64::try_from(starting) {
            Ok(start) if start > 0 => BigUint::from(start),
            _ => return Err(Error::Start(starting)),
        };
        log::debug!("syracuse({starting}, include_starting: {include_starting})");
        Ok(Self::new(syracuse::Syracuse::new(start, include_starting)))
    }
}

impl<'a> GIter<'a, f64> {
    /// Random floats in `[min, max)`, where `min` and `max` lie in `[0, 1]`.
    ///
    /// Floats are drawn from `[0, 1)`;
    /// those falling outside `[min, max)` are discarded.
    /// If `iterations` is given, yield exactly that many floats,
    /// else yield floats forever.
    /// If `[min, max)` is empty, yield nothing.
    pub fn random_with<R: Random + 'a>(
        rng: R,
        min: f64,
        max: f64,
        iterations: Option<i64>,
    ) -> Result<Self, Error> {
        let unit = 0.0..=1.0;
        if !unit.contains(&min) {
            return Err(Error::Bound("min", min));
        }
        if !unit.contains(&max) {
            return Err(Error::Bound("max", max));
        }
        let limit = Limit::new("iterations", iterations)?;
        log::debug!("random({min}, {max}, {limit:?})");
        Ok(Self::new(uniform::Floats::new(rng, min, max, limit)))
    }

    /// Random floats drawn from [`rand::thread_rng`], see [`Self::random_with`].
    #[cfg(feature = "std")]
    pub fn random(min: f64, max: f64, iterations: Option<i64>) -> Result<Self, Error> {
        Self::random_with(rand::thread_rng(), min, max, iterations)
    }

    /// Random floats in `[0, 1)`.
    ///
    /// This is the same as `random_with(rng, 0., 1., iterations)`,
    /// where no draw is ever discarded.
    ///
    /// ~~~
    /// # use giter_core::GIter;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let floats = GIter::unit_with(StdRng::seed_from_u64(0), Some(3))?;
    /// assert!(floats.into_iter().all(|x| (0.0..1.0).contains(&x)));
    /// # Ok::<(), giter_core::Error>(())
    /// ~~~
    pub fn unit_with<R: Random + 'a>(rng: R, iterations: Option<i64>) -> Result<Self, Error> {
        Self::random_with(rng, 0., 1., iterations)
    }

    /// Random floats in `[0, 1)` drawn from [`rand::thread_rng`], see [`Self::unit_with`].
    #[cfg(feature = "std")]
    pub fn unit(iterations: Option<i64>) -> Result<Self, Error> {
        Self::unit_with(rand::thread_rng(), iterations)
    }
}

impl<'a, T: Clone + 'a> GIter<'a, T> {
    /// Randomly picked elements of `seq`.
    ///
    /// The elements of `seq` are copied into a private working list.
    /// If `consume` is set, every picked element is removed from the working list,
    /// so no element is yielded more often than it occurs in `seq`.
    /// Otherwise, the working list stays unchanged and
    /// elements may be yielded any number of times.
    ///
    /// If `max_size` is given, yield at most that many elements.
    /// If neither `consume` nor `max_size` is given and `seq` is not empty,
    /// the sequence is infinite.
    ///
    /// Remember when you learned probability at school using bags filled with balls?
    /// That is basically this.
    pub fn choice_with<R: Random + 'a>(
        rng: R,
        seq: impl IntoIterator<Item = T>,
        consume: bool,
        max_size: Option<i64>,
    ) -> Result<Self, Error> {
        let limit = Limit::new("max size", max_size)?;
        let items: Vec<T> = seq.into_iter().collect();
        log::debug!("choice({} items, consume: {consume}, {limit:?})", items.len());
        Ok(Self::new(choice::Choice::new(rng, items, consume, limit)))
    }

    /// Random elements picked with [`rand::thread_rng`], see [`Self::choice_with`].
    #[cfg(feature = "std")]
    pub fn choice(
        seq: impl IntoIterator<Item = T>,
        consume: bool,
        max_size: Option<i64>,
    ) -> Result<Self, Error> {
        Self::choice_with(rand::thread_rng(), seq, consume, max_size)
    }
}
