//! Bounded top-k insertion strategy
//!
//! Streams the input once through a fixed-capacity buffer kept in
//! descending order. Each accepted element costs at most `K` shifts, so the
//! whole pass is O(n·k) with O(k) extra space and no heap allocation.

use crate::{
    constants::RANK,
    error::{AppError, AppResult},
};

/// The `K` largest values seen so far, in descending order
#[derive(Debug, Clone)]
pub struct TopKBuffer<const K: usize> {
    slots: [i32; K],
    len: usize,
}

impl<const K: usize> TopKBuffer<K> {
    pub fn new() -> Self {
        Self {
            slots: [0; K],
            len: 0,
        }
    }

    /// Offer a value; it is kept only if it belongs among the top `K`
    #[inline]
    pub fn offer(&mut self, x: i32) {
        if self.len == K && x <= self.slots[K - 1] {
            return;
        }

        // Strict `<` keeps earlier arrivals ahead of equal values
        let mut pos = self.len;
        while pos > 0 && self.slots[pos - 1] < x {
            pos -= 1;
        }

        // Shift the tail right by one; when full the last slot falls off
        let end = if self.len < K { self.len } else { K - 1 };
        self.slots.copy_within(pos..end, pos + 1);
        self.slots[pos] = x;

        if self.len < K {
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_full(&self) -> bool {
        self.len == K
    }

    /// The K-th largest value offered, once `K` values have been seen
    pub fn kth(&self) -> Option<i32> {
        if self.is_full() {
            self.as_slice().last().copied()
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.slots[..self.len]
    }
}

impl<const K: usize> Default for TopKBuffer<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream the input through a `TopKBuffer<RANK>`
///
/// A buffer that never fills means fewer than RANK values were offered.
pub fn select(values: &[i32]) -> AppResult<i32> {
    let mut top = TopKBuffer::<RANK>::new();
    for &x in values {
        top.offer(x);
    }

    top.kth().ok_or(AppError::InsufficientInput {
        required: RANK,
        actual: top.len(),
    })
}
