//! Syracuse sequences, see <https://en.wikipedia.org/wiki/Collatz_conjecture>.

use num_bigint::BigUint;
use num_traits::One;

/// Integers following a positive start in the Syracuse sequence, up to and including 1.
///
/// Values are unbounded integers, so no start makes the sequence overflow.
/// That every such sequence reaches 1 is the Collatz conjecture,
/// so termination is not guaranteed, only conjectured.
pub struct Syracuse {
    /// start, if it is still to be yielded
    start: Option<BigUint>,
    /// last value
    value: BigUint,
}

impl Syracuse {
    pub(crate) fn new(start: BigUint, include_start: bool) -> Self {
        debug_assert!(start.bits() > 0);
        Self {
            start: include_start.then(|| start.clone()),
            value: start,
        }
    }
}

fn successor(v: BigUint) -> BigUint {
    if v.bit(0) {
        v * 3u32 + 1u32
    } else {
        v >> 1u32
    }
}

impl Iterator for Syracuse {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        if self.value.is_one() {
            return None;
        }
        self.value = successor(core::mem::take(&mut self.value));
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let start = usize::from(self.start.is_some());
        if self.value.is_one() {
            (start, Some(start))
        } else {
            (start + 1, None)
        }
    }
}

impl core::iter::FusedIterator for Syracuse {}
