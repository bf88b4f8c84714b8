use log::trace;

use crate::{Accumulator, RingBuffer, WindowAverage, WindowError, WindowResult};

/// Keeps a running sum next to the window so each sample costs O(1).
#[derive(Clone, Debug)]
pub struct IncrementalAverager<T, S> {
    buffer: RingBuffer<T>,
    running_sum: S,
}

impl<T, S> IncrementalAverager<T, S>
where
    T: Copy + Default + Into<S>,
    S: Accumulator,
{
    pub fn with_window(size: usize) -> WindowResult<Self> {
        Self::new(RingBuffer::new(size)?)
    }
}

impl<T, S> IncrementalAverager<T, S>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
    /// Takes over `buffer`; samples already in it are folded into the sum.
    pub fn new(buffer: RingBuffer<T>) -> WindowResult<Self> {
        let running_sum = buffer.sum()?;

        Ok(IncrementalAverager {
            buffer,
            running_sum,
        })
    }

    pub fn running_sum(&self) -> S {
        self.running_sum
    }
}

impl<T, S> WindowAverage<T, S> for IncrementalAverager<T, S>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
    fn name(&self) -> &'static str {
        "incremental"
    }

    fn observe(&mut self, value: T) -> WindowResult<S> {
        // The new sum and average are settled before the window changes so a failure leaves both intact.
        if self.buffer.is_full() {
            let oldest = *self.buffer.at(0)?;
            let sum = self
                .running_sum
                .release(oldest.into())
                .and_then(|sum| sum.accumulate(value.into()))
                .ok_or(WindowError::Overflow)?;

            let average = sum
                .divide_by_count(self.buffer.len())
                .ok_or(WindowError::Overflow)?;

            self.buffer.push_and_evict(value)?;
            self.running_sum = sum;

            trace!("running sum over {} samples updated", self.buffer.len());
            Ok(average)
        } else {
            let sum = self
                .running_sum
                .accumulate(value.into())
                .ok_or(WindowError::Overflow)?;

            let average = sum
                .divide_by_count(self.buffer.len() + 1)
                .ok_or(WindowError::Overflow)?;

            self.buffer.push_back(value)?;
            self.running_sum = sum;

            trace!("running sum over {} samples updated", self.buffer.len());
            Ok(average)
        }
    }

    fn average(&self) -> WindowResult<S> {
        if self.buffer.is_empty() {
            return Err(WindowError::EmptyWindow);
        }

        self.running_sum
            .divide_by_count(self.buffer.len())
            .ok_or(WindowError::Overflow)
    }

    fn window(&self) -> &RingBuffer<T> {
        &self.buffer
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.running_sum = S::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_growing_then_sliding_window() {
        let mut averager = IncrementalAverager::<i32, i64>::with_window(3).unwrap();
        let averages: Vec<i64> = [10, 20, 30, 40, 50]
            .into_iter()
            .map(|value| averager.observe(value).unwrap())
            .collect();

        assert_eq!(averages, vec![10, 15, 20, 30, 40]);
        assert_eq!(averager.window().to_vec(), vec![30, 40, 50]);
        assert_eq!(averager.running_sum(), 120);
    }

    #[test]
    fn running_sum_tracks_window() {
        let mut averager = IncrementalAverager::<i32, i64>::with_window(4).unwrap();
        for value in [5, -3, 12, 7, 0, 9, 9, -20, 1] {
            averager.observe(value).unwrap();
            assert_eq!(
                averager.running_sum(),
                averager.window().sum::<i64>().unwrap()
            );
        }
    }

    #[test]
    fn empty_window_has_no_average() {
        let averager = IncrementalAverager::<i32, i64>::with_window(3).unwrap();
        assert_eq!(averager.average().unwrap_err(), WindowError::EmptyWindow);
    }

    #[test]
    fn reset_clears_sum() {
        let mut averager = IncrementalAverager::<i32, i64>::with_window(2).unwrap();
        averager.observe(8).unwrap();
        averager.observe(4).unwrap();
        averager.reset();

        assert_eq!(averager.running_sum(), 0);
        assert_eq!(averager.average().unwrap_err(), WindowError::EmptyWindow);
        assert_eq!(averager.observe(3).unwrap(), 3);
    }

    #[test]
    fn overflow_leaves_state_untouched() {
        let mut averager = IncrementalAverager::<i32, i32>::with_window(2).unwrap();
        averager.observe(i32::MAX).unwrap();

        assert_eq!(averager.observe(1).unwrap_err(), WindowError::Overflow);
        assert_eq!(averager.window().to_vec(), vec![i32::MAX]);
        assert_eq!(averager.running_sum(), i32::MAX);
    }

    #[test]
    fn adopts_prefilled_buffer() {
        let mut buffer = RingBuffer::<u8>::new(3).unwrap();
        buffer.push_back(200).unwrap();
        buffer.push_back(100).unwrap();

        let mut averager = IncrementalAverager::<u8, u32>::new(buffer).unwrap();
        assert_eq!(averager.running_sum(), 300);
        assert_eq!(averager.observe(60).unwrap(), 120);
        assert_eq!(averager.observe(0).unwrap(), 53);
    }

    #[test]
    fn float_domain() {
        let mut averager = IncrementalAverager::<f32, f64>::with_window(2).unwrap();
        assert_eq!(averager.observe(1.0).unwrap(), 1.0);
        assert_eq!(averager.observe(2.0).unwrap(), 1.5);
        assert_eq!(averager.observe(4.0).unwrap(), 3.0);
    }
}
