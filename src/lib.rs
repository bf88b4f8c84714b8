pub use accumulator::Accumulator;
pub use compare_strategies::{compare_strategies, Comparison};
pub use generate_samples::{generate_samples, SAMPLE_UPPER_BOUND};
pub use incremental_averager::IncrementalAverager;
pub use recompute_averager::RecomputeAverager;
pub use ring_buffer::{join_samples, RingBuffer};
pub use run_strategy::{run_strategy, Step, StrategyReport};
pub use window_average::WindowAverage;
pub use window_error::{WindowError, WindowResult};

mod accumulator;
mod compare_strategies;
mod generate_samples;
mod incremental_averager;
mod recompute_averager;
mod ring_buffer;
mod run_strategy;
mod window_average;
mod window_error;
