//! Random Source Module
//!
//! Injectable source of uniform integers for the catch simulator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// == Random Source Trait ==
/// Produces uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `[0, upper)`. `upper` is never zero.
    fn next_below(&mut self, upper: u32) -> u32;
}

// == Rng Adapter ==
/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    // == Constructor ==
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    // == Standard Generators ==
    /// Seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.rng.gen_range(0..upper)
    }
}
