use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::{DatasetError, DatasetResult};

pub const DEFAULT_SAMPLE_LOW: i64 = 0;
pub const DEFAULT_SAMPLE_HIGH: i64 = 10;

/// `RandomSource` is the explicit, caller owned source of randomness for
/// fixture data. Determinism is a property of the seed handed to the source,
/// never of process wide state or call order elsewhere.
pub trait RandomSource {
    /// Reseeds the source; identical seeds replay identical draws.
    fn seed(&mut self, value: u64);

    /// Draws an integer in `low..=high`. Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;
}

/// `SeededSource` is a [`RandomSource`] backed by `ChaCha8Rng`, whose output
/// stream is stable across platforms for a given seed.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeds from the operating system for callers that do not need replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl RandomSource for SeededSource {
    fn seed(&mut self, value: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(value);
    }

    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn seed(&mut self, value: u64) {
        (**self).seed(value);
    }

    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        (**self).next_in_range(low, high)
    }
}

/// Produces `size` integers in `0..=10` drawn from `source`.
///
/// ```
/// use foundation_datasets::{generate_sample, RandomSource, SeededSource};
///
/// let mut source = SeededSource::new(42);
/// let first = generate_sample(3, &mut source);
///
/// source.seed(42);
/// assert_eq!(generate_sample(3, &mut source), first);
/// ```
pub fn generate_sample<R: RandomSource>(size: usize, source: &mut R) -> Vec<i64> {
    (0..size)
        .map(|_| source.next_in_range(DEFAULT_SAMPLE_LOW, DEFAULT_SAMPLE_HIGH))
        .collect()
}

/// Like [`generate_sample`] with caller chosen inclusive bounds. Bounds must
/// describe a non-empty, non-negative range so every draw is a valid sample.
pub fn generate_sample_in<R: RandomSource>(
    size: usize,
    low: i64,
    high: i64,
    source: &mut R,
) -> DatasetResult<Vec<i64>> {
    if low < 0 || low > high {
        tracing::warn!(low, high, "rejected sample bounds");
        return Err(DatasetError::InvalidBounds { low, high });
    }

    Ok((0..size).map(|_| source.next_in_range(low, high)).collect())
}
