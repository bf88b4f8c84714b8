use std::fmt;

use log::{debug, trace};

use crate::{Accumulator, WindowError, WindowResult};

/// Fixed-capacity circular storage for the most recent samples.
///
/// Logical offset `i` (oldest first) lives in slot `(head + i) % capacity`.
/// Storage is allocated once in [`RingBuffer::new`] and never grows.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    len: usize,
    head: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    pub fn new(capacity: usize) -> WindowResult<Self> {
        if capacity == 0 {
            return Err(WindowError::InvalidCapacity);
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| WindowError::Allocation { capacity })?;
        data.resize(capacity, T::default());

        debug!("allocated ring buffer with {capacity} slots");

        Ok(RingBuffer {
            data,
            capacity,
            len: 0,
            head: 0,
        })
    }
}

impl<T: Copy> RingBuffer<T> {
    /// Forgets every live element. Slot contents are left as they are.
    pub fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity
    }

    // No logical bounds check: callers have already ensured offset < capacity.
    #[inline]
    fn slot_mut(&mut self, offset: usize) -> &mut T {
        let slot = self.slot(offset);
        &mut self.data[slot]
    }

    /// Element at `offset` from the oldest live sample.
    pub fn at(&self, offset: usize) -> WindowResult<&T> {
        if offset >= self.len {
            return Err(WindowError::OutOfRange {
                offset,
                len: self.len,
            });
        }

        Ok(&self.data[self.slot(offset)])
    }

    pub fn push_back(&mut self, value: T) -> WindowResult<()> {
        if self.is_full() {
            return Err(WindowError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let len = self.len;
        *self.slot_mut(len) = value;
        self.len += 1;

        Ok(())
    }

    pub fn pop_front(&mut self) -> WindowResult<T> {
        if self.is_empty() {
            return Err(WindowError::Empty);
        }

        let value = self.data[self.head];
        self.len -= 1;
        self.head = (self.head + 1) % self.capacity;

        Ok(value)
    }

    /// Drops the oldest sample and appends `value`, returning the dropped one.
    pub fn push_and_evict(&mut self, value: T) -> WindowResult<T> {
        let evicted = self.pop_front()?;
        self.push_back(value)?;

        trace!("evicted oldest sample, head now at slot {}", self.head);

        Ok(evicted)
    }

    /// Sum of the live elements, computed by walking the whole window.
    ///
    /// Every partial sum has to fit in `S`, so a signed `S` as narrow as the
    /// samples can overflow on mixed-sign windows whose total would fit.
    pub fn sum<S>(&self) -> WindowResult<S>
    where
        S: Accumulator,
        T: Into<S>,
    {
        self.iter().try_fold(S::zero(), |acc, value| {
            acc.accumulate((*value).into()).ok_or(WindowError::Overflow)
        })
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        (0..self.len).map(move |offset| &self.data[self.slot(offset)])
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

/// Renders samples oldest first as `[a, b, c]`.
pub fn join_samples<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let joined = values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{joined}]")
}

impl<T: Copy + fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_samples(self.iter()))
    }
}
