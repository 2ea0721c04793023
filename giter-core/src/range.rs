//! Arithmetic progressions.

/// Integers from `start`, advancing by `step`, up to `stop` (exclusive).
pub struct Range {
    start: i64,
    stop: i64,
    step: i64,
    /// `None` once the range is exhausted
    next: Option<i64>,
}

impl Range {
    /// Create a range; `step` must not be zero.
    pub fn new(start: i64, stop: i64, step: i64) -> Self {
        debug_assert!(step != 0);
        Self {
            start,
            stop,
            step,
            next: Some(start),
        }
    }

    /// Return whether `i` is still part of the range.
    ///
    /// The first condition makes negative steps yield nothing,
    /// the second one makes the range half-open.
    fn contains(&self, i: i64) -> bool {
        let ahead = match i.checked_add(self.step) {
            Some(j) => self.start <= j,
            None => self.step > 0,
        };
        ahead && i < self.stop
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let i = self.next.filter(|&i| self.contains(i));
        // an overflowing successor lies beyond any `stop`
        self.next = i.and_then(|i| i.checked_add(self.step));
        i
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.next {
            Some(i) if self.contains(i) => {
                let (i, stop, step) = (i128::from(i), i128::from(self.stop), i128::from(self.step));
                usize::try_from((stop - i + step - 1) / step).ok()
            }
            _ => Some(0),
        };
        (len.unwrap_or(usize::MAX), len)
    }
}

impl core::iter::FusedIterator for Range {}
