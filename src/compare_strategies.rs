use log::{debug, warn};
use serde::Serialize;

use crate::{
    run_strategy, Accumulator, IncrementalAverager, RecomputeAverager, StrategyReport,
    WindowResult,
};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison<T, S> {
    pub window_size: usize,
    pub samples: usize,
    pub identical: bool,
    pub incremental: StrategyReport<T, S>,
    pub recompute: StrategyReport<T, S>,
}

impl<T, S> Comparison<T, S> {
    /// How many times faster the incremental run was.
    pub fn speedup(&self) -> Option<f64> {
        if self.incremental.elapsed_secs > 0.0 {
            Some(self.recompute.elapsed_secs / self.incremental.elapsed_secs)
        } else {
            None
        }
    }
}

/// Runs both strategies over the same samples with the same window and
/// checks that they produced the same sequence of averages.
pub fn compare_strategies<T, S>(
    window_size: usize,
    samples: &[T],
    record_steps: bool,
) -> WindowResult<Comparison<T, S>>
where
    T: Copy + Default + Into<S>,
    S: Accumulator,
{
    let mut incremental = IncrementalAverager::<T, S>::with_window(window_size)?;
    let incremental = run_strategy(&mut incremental, samples, record_steps)?;

    let mut recompute = RecomputeAverager::<T, S>::with_window(window_size)?;
    let recompute = run_strategy(&mut recompute, samples, record_steps)?;

    let identical = incremental.averages == recompute.averages;
    if identical {
        debug!("strategies agree on {} averages", samples.len());
    } else {
        warn!("strategies disagree over a window of {window_size}");
    }

    Ok(Comparison {
        window_size,
        samples: samples.len(),
        identical,
        incremental,
        recompute,
    })
}
