use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::{WindowAverage, WindowResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step<T, S> {
    pub sample: T,
    pub window: Vec<T>,
    pub average: S,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyReport<T, S> {
    pub strategy: String,
    pub window_size: usize,
    pub samples: usize,
    pub final_average: Option<S>,
    pub elapsed_secs: f64,
    #[serde(skip_serializing)]
    pub averages: Vec<S>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step<T, S>>,
}

/// Feeds every sample through `averager` once, in order.
///
/// With `record_steps` each step keeps a copy of the window, which is only
/// meant for small runs that are printed afterwards.
pub fn run_strategy<A, T, S>(
    averager: &mut A,
    samples: &[T],
    record_steps: bool,
) -> WindowResult<StrategyReport<T, S>>
where
    A: WindowAverage<T, S>,
    T: Copy,
    S: Copy,
{
    debug!(
        "{}: averaging {} samples over a window of {}",
        averager.name(),
        samples.len(),
        averager.window().capacity()
    );

    let mut averages = Vec::with_capacity(samples.len());
    let mut steps = vec![];

    let start = Instant::now();
    for &sample in samples {
        let average = averager.observe(sample)?;
        averages.push(average);

        if record_steps {
            steps.push(Step {
                sample,
                window: averager.window().to_vec(),
                average,
            });
        }
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    debug!("{}: done in {elapsed_secs:.3}s", averager.name());

    Ok(StrategyReport {
        strategy: averager.name().to_string(),
        window_size: averager.window().capacity(),
        samples: samples.len(),
        final_average: averages.last().copied(),
        elapsed_secs,
        averages,
        steps,
    })
}
