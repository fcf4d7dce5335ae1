//! Pluggable randomness for series generation.
//!
//! Production code injects an [`RngSource`] backed by the OS entropy pool;
//! tests inject a seeded one or a [`SequenceSource`] replaying fixed values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `0..bound`; `bound` of zero yields zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = (self.next_unit() * f64::from(bound)).floor() as u32;
        value.min(bound.saturating_sub(1))
    }
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn from_os_rng() -> Self {
        RngSource(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed cycle of values, each clamped into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceSource {
            values,
            position: 0,
        }
    }

    /// Always yields the same value.
    pub fn constant(value: f64) -> Self {
        SequenceSource::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
