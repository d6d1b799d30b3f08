//! Simulated annealing over a single chromosome trajectory.
//!
//! Acceptance (kept as the product defines it, pending clarification):
//! with `delta = fitness(neighbor) - fitness(current)`, a strictly worse
//! neighbor (`delta < 0`) is always accepted; otherwise it is accepted with
//! probability `exp(-delta / T)`. Temperature cools geometrically every step.
//! The best-ever candidate is tracked separately and returned.

use std::f64::consts::PI;

use tracing::{debug, info};

use super::chromosome::{fitness, sample_candidate, Chromosome, Leg};
use crate::cfg::{AnnealingParams, SolverCfg};
use crate::field::Field;
use crate::rng::RandomSource;

/// Annealing optimizer bound to one field.
pub struct AnnealingOptimizer<'a> {
    field: &'a Field,
    params: AnnealingParams,
    cfg: SolverCfg,
}

impl<'a> AnnealingOptimizer<'a> {
    pub fn new(field: &'a Field, params: AnnealingParams, cfg: SolverCfg) -> Self {
        Self { field, params, cfg }
    }

    /// Run from a freshly sampled start until the temperature reaches the stop value.
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Leg {
        let initial = sample_candidate(self.field, None, rng);
        self.run_from(initial, rng)
    }

    /// Run from a given start candidate.
    pub fn run_from<R: RandomSource + ?Sized>(&self, initial: Chromosome, rng: &mut R) -> Leg {
        let mut current = initial;
        let mut current_fitness = fitness(&current, self.field);
        let mut best = current;
        let mut best_fitness = current_fitness;
        let mut temperature = self.params.initial_temperature;
        let mut steps = 0usize;
        let mut accepted = 0usize;

        while temperature > self.params.stopping_temperature {
            let neighbor = self.neighbor(&current, rng);
            let neighbor_fitness = fitness(&neighbor, self.field);
            let delta = neighbor_fitness as f64 - current_fitness as f64;

            if accept(delta, temperature, rng) {
                current = neighbor;
                current_fitness = neighbor_fitness;
                accepted += 1;
                if current_fitness > best_fitness {
                    best = current;
                    best_fitness = current_fitness;
                    debug!(steps, temperature, best_fitness, "annealing improved");
                }
            }

            temperature *= self.params.cooling_factor;
            steps += 1;
        }

        info!(steps, accepted, best_fitness, "annealing finished");
        Leg::evaluate(best, self.field)
    }

    /// Perturb angle and launch height, clamped to `[0, π]` and `[0, y_max]`.
    fn neighbor<R: RandomSource + ?Sized>(&self, c: &Chromosome, rng: &mut R) -> Chromosome {
        let da = self.cfg.neighbor_angle;
        let angle = (c.angle + rng.uniform(-da, da)).clamp(0.0, PI);
        let dy = self.field.y_max / self.cfg.neighbor_coord;
        let y = (c.point.y + rng.uniform(-dy, dy)).clamp(0.0, self.field.y_max);
        let mut point = c.point;
        point.y = y;
        Chromosome::new(angle, point)
    }
}

fn accept<R: RandomSource + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    rng.chance((-delta / temperature).exp())
}
