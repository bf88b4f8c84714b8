use thiserror::Error;

pub type WindowResult<T> = Result<T, WindowError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("window capacity must be greater than zero")]
    InvalidCapacity,
    #[error("unable to allocate storage for {capacity} samples")]
    Allocation { capacity: usize },
    #[error("push on a full window (capacity {capacity}) without eviction")]
    CapacityExceeded { capacity: usize },
    #[error("window is empty")]
    Empty,
    #[error("offset {offset} is out of range for a window of {len} samples")]
    OutOfRange { offset: usize, len: usize },
    #[error("average requested over an empty window")]
    EmptyWindow,
    #[error("accumulator overflow")]
    Overflow,
}
