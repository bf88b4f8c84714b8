use std::iter::once;
use std::marker::PhantomData;

use crate::{Accumulator, RingBuffer, WindowAverage, WindowError, WindowResult};

/// Re-sums the whole window on every sample, O(window size) each time.
/// Kept as the baseline the incremental strategy is measured against.
#[derive(Clone, Debug)]
pub struct RecomputeAverager<T, S> {
    buffer: RingBuffer<T>,
    domain: PhantomData<S>,
}

impl<T, S> RecomputeAverager<T, S>
where
    T: Copy + Default + Into<S>,
    S: Accumulator,
{
    pub fn with_window(size: usize) -> WindowResult<Self> {
        Ok(Self::new(RingBuffer::new(size)?))
    }
}

impl<T, S> RecomputeAverager<T, S>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
    pub fn new(buffer: RingBuffer<T>) -> Self {
        RecomputeAverager {
            buffer,
            domain: PhantomData,
        }
    }
}

impl<T, S> WindowAverage<T, S> for RecomputeAverager<T, S>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
    fn name(&self) -> &'static str {
        "recompute"
    }

    fn observe(&mut self, value: T) -> WindowResult<S> {
        // Sum the window as it will look after this sample, then commit.
        let evicting = self.buffer.is_full();
        let len = if evicting {
            self.buffer.len()
        } else {
            self.buffer.len() + 1
        };

        let average = self
            .buffer
            .iter()
            .skip(evicting as usize)
            .chain(once(&value))
            .try_fold(S::zero(), |acc, sample| {
                acc.accumulate((*sample).into()).ok_or(WindowError::Overflow)
            })?
            .divide_by_count(len)
            .ok_or(WindowError::Overflow)?;

        if evicting {
            self.buffer.push_and_evict(value)?;
        } else {
            self.buffer.push_back(value)?;
        }

        Ok(average)
    }

    fn average(&self) -> WindowResult<S> {
        if self.buffer.is_empty() {
            return Err(WindowError::EmptyWindow);
        }

        self.buffer
            .sum::<S>()?
            .divide_by_count(self.buffer.len())
            .ok_or(WindowError::Overflow)
    }

    fn window(&self) -> &RingBuffer<T> {
        &self.buffer
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_growing_then_sliding_window() {
        let mut averager = RecomputeAverager::<i32, i64>::with_window(3).unwrap();
        let mut seen = vec![];
        for value in [10, 20, 30, 40, 50] {
            let average = averager.observe(value).unwrap();
            seen.push((averager.window().to_vec(), average));
        }

        assert_eq!(
            seen,
            vec![
                (vec![10], 10),
                (vec![10, 20], 15),
                (vec![10, 20, 30], 20),
                (vec![20, 30, 40], 30),
                (vec![30, 40, 50], 40),
            ]
        );
    }

    #[test]
    fn single_slot_window() {
        let mut averager = RecomputeAverager::<i32, i32>::with_window(1).unwrap();
        assert_eq!(averager.observe(5).unwrap(), 5);
        assert_eq!(averager.observe(7).unwrap(), 7);
        assert_eq!(averager.window().to_vec(), vec![7]);
    }

    #[test]
    fn empty_window_has_no_average() {
        let mut averager = RecomputeAverager::<i32, i64>::with_window(2).unwrap();
        assert_eq!(averager.average().unwrap_err(), WindowError::EmptyWindow);

        averager.observe(1).unwrap();
        averager.reset();
        assert_eq!(averager.average().unwrap_err(), WindowError::EmptyWindow);
    }

    #[test]
    fn overflow_is_reported() {
        let mut averager = RecomputeAverager::<u8, u8>::with_window(2).unwrap();
        averager.observe(200).unwrap();
        assert_eq!(averager.observe(100).unwrap_err(), WindowError::Overflow);
        assert_eq!(averager.window().to_vec(), vec![200]);
    }

    #[test]
    fn overflow_while_evicting_keeps_window() {
        let mut averager = RecomputeAverager::<u8, u8>::with_window(2).unwrap();
        averager.observe(100).unwrap();
        averager.observe(100).unwrap();

        assert_eq!(averager.observe(200).unwrap_err(), WindowError::Overflow);
        assert_eq!(averager.window().to_vec(), vec![100, 100]);
        assert_eq!(averager.observe(50).unwrap(), 75);
    }
}
