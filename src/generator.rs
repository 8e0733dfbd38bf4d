use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_LOW: i64 = 10;
pub const DEFAULT_HIGH: i64 = 50;

/// Closed interval `[low, high]` that sample values are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRange {
    low: i64,
    high: i64,
}

impl SampleRange {
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

/// Produces fixed-length sequences of uniformly distributed integers.
#[derive(Clone, Copy, Debug)]
pub struct Generator {
    count: usize,
    range: SampleRange,
}

impl Generator {
    pub fn new(count: usize, range: SampleRange) -> Self {
        Self { count, range }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// Draw `count` values, each independently uniform over the range.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let sample: Vec<i64> = (0..self.count)
            .map(|_| rng.gen_range(self.range.low..=self.range.high))
            .collect();

        debug!(
            count = sample.len(),
            low = self.range.low,
            high = self.range.high,
            "generated sample"
        );
        sample
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, SampleRange::default())
    }
}

/// Build the random source for a run. The same seed always yields the same stream;
/// without one the generator is seeded from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
