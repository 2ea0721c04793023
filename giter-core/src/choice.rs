//! Random sampling from a collection, with or without replacement.

use crate::random::{Limit, Random};
use alloc::vec::Vec;

/// Randomly picked elements of a private working list.
///
/// When `consume` is set, every picked element is removed from the list,
/// so that the sequence ends at the latest when the list is empty.
pub struct Choice<T, R> {
    rng: R,
    items: Vec<T>,
    consume: bool,
    limit: Limit,
}

impl<T, R> Choice<T, R> {
    pub(crate) fn new(rng: R, items: Vec<T>, consume: bool, limit: Limit) -> Self {
        Self {
            rng,
            items,
            consume,
            limit,
        }
    }
}

impl<T: Clone, R: Random> Iterator for Choice<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.items.is_empty() || self.limit.exhausted() {
            return None;
        }
        // vectors never hold more than `isize::MAX` elements
        let last = (self.items.len() - 1) as i64;
        let i = self.rng.uniform_int(0, last) as usize;
        self.limit.take_one();
        Some(if self.consume {
            self.items.remove(i)
        } else {
            self.items[i].clone()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.items.len();
        match (self.consume, self.limit.size_hint()) {
            _ if len == 0 => (0, Some(0)),
            (true, (_, Some(n))) => (n.min(len), Some(n.min(len))),
            (true, (_, None)) => (len, Some(len)),
            (false, hint) => hint,
        }
    }
}

impl<T: Clone, R: Random> core::iter::FusedIterator for Choice<T, R> {}
