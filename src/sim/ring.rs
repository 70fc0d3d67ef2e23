//! Fixed-capacity history buffer
//!
//! Used for trails and magnitude plots. Pushing onto a full buffer evicts the
//! oldest element, so the newest element is always last.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer. A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest element
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Newest element
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl RingBuffer<f32> {
    /// Largest value, or `None` when empty
    pub fn max(&self) -> Option<f32> {
        self.items.iter().copied().reduce(f32::max)
    }
}
