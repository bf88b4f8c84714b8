use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_UPPER_BOUND: i32 = 1 << 12;

/// Reproducible stream of `size` samples in `[0, SAMPLE_UPPER_BOUND)`.
pub fn generate_samples(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| rng.gen_range(0..SAMPLE_UPPER_BOUND))
        .collect()
}
