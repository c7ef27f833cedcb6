//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every random draw in a run (node positions, packet loads, rendezvous
//! choice) comes from one `SmallRng` seeded from the run's configured seed.
//! Draws happen in a fixed order on a single thread, so the same seed and
//! parameters always reproduce the same network and the same energy totals.
//!
//! Library functions take `&mut R where R: rand::Rng` rather than `SimRng`
//! itself; pass [`SimRng::inner`] to them, or any other `Rng` in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts: the orchestrator draws every
/// rendezvous point before any parallel work starts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types and
    /// with functions generic over `R: Rng`.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
