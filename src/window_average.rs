use crate::{RingBuffer, WindowResult};

/// A sliding-window averaging strategy over samples of type `T`,
/// accumulated in domain `S`.
pub trait WindowAverage<T, S> {
    fn name(&self) -> &'static str;

    /// Admits `value` into the window, evicting the oldest sample once the
    /// window is full, and returns the new average.
    fn observe(&mut self, value: T) -> WindowResult<S>;

    fn average(&self) -> WindowResult<S>;

    fn window(&self) -> &RingBuffer<T>;

    fn reset(&mut self);
}
