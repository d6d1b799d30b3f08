//! Path search: candidate encoding and the optimizers built on it.
//!
//! - `chromosome`: (angle, launch point) encoding, sampling, fitness.
//! - `genetic`: generational GA with tournament selection, no elitism.
//! - `annealing`: single-trajectory simulated annealing.
//! - `composer`: two-leg "V" composition over two genetic runs.

mod annealing;
mod chromosome;
mod composer;
mod genetic;

pub use annealing::AnnealingOptimizer;
pub use chromosome::{evaluate, fitness, sample_candidate, Chromosome, Leg};
pub use composer::{PathComposer, Solution};
pub use genetic::GeneticOptimizer;

#[cfg(test)]
mod tests;
