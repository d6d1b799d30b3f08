//! Injectable randomness.
//!
//! Every stochastic draw in the crate goes through `RandomSource`. Any
//! `rand::Rng` is a source, so callers pass a seeded `StdRng` for
//! reproducible runs; tests may substitute a scripted source.

use rand::Rng;

/// Uniform draws consumed by sampling, selection, crossover, mutation and acceptance.
pub trait RandomSource {
    /// Uniform float over `[min, max)`. A degenerate range yields `min`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// Uniform index over `[0, n)`. Callers guarantee `n > 0`.
    fn below(&mut self, n: usize) -> usize;

    /// Bernoulli trial: true with probability `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.uniform(0.0, 1.0) < p
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        // Not `gen_range`: it panics on empty ranges, which occur for clamped sub-boxes.
        min + self.gen::<f64>() * (max - min)
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}
