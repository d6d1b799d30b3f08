//! Two-leg ("V") path composition on top of the genetic optimizer.
//!
//! The start leg is optimized on the full field. Obstacles it crosses are masked
//! out, and the finish leg is optimized on the masked field with its right-edge
//! crossing pinned to the start leg's end height. Exactly two runs, outer then
//! inner.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::chromosome::Leg;
use super::genetic::GeneticOptimizer;
use crate::cfg::{GeneticParams, SolverCfg};
use crate::field::Field;
use crate::rng::RandomSource;

/// Two-leg path with combined statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub start: Leg,
    pub finish: Leg,
    /// One-based obstacle indices: start leg's, then finish leg's. Not deduplicated.
    pub intersected: Vec<usize>,
    /// `intersected.len() / obstacle count * 100`; 0 for a field without obstacles.
    pub percent: f64,
}

impl Solution {
    pub fn combine(start: Leg, finish: Leg, total_obstacles: usize) -> Self {
        let intersected: Vec<usize> = start
            .intersected
            .iter()
            .chain(finish.intersected.iter())
            .map(|k| k + 1)
            .collect();
        let percent = if total_obstacles == 0 {
            0.0
        } else {
            (intersected.len() as f64 / total_obstacles as f64) * 100.0
        };
        Self {
            start,
            finish,
            intersected,
            percent,
        }
    }
}

/// Chains genetic runs into single- or two-leg results.
pub struct PathComposer<'a> {
    field: &'a Field,
    params: GeneticParams,
    cfg: SolverCfg,
}

impl<'a> PathComposer<'a> {
    pub fn new(field: &'a Field, params: GeneticParams, cfg: SolverCfg) -> Self {
        Self { field, params, cfg }
    }

    /// One genetic run on the full field, optionally pinned to a right-edge height.
    pub fn single_leg<R: RandomSource + ?Sized>(
        &self,
        target_y: Option<f64>,
        rng: &mut R,
    ) -> Option<Leg> {
        optimize(self.field, self.params, self.cfg, target_y, rng)
    }

    /// Start leg on the full field, finish leg on the masked field aimed at the start leg's end.
    pub fn two_leg<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Solution> {
        let start = optimize(self.field, self.params, self.cfg, None, rng)?;
        let derived = self.field.masked(&start.intersected);
        let finish = optimize(&derived, self.params, self.cfg, Some(start.end.y), rng)?;
        let solution = Solution::combine(start, finish, self.field.obstacles.len());
        info!(
            hits = solution.intersected.len(),
            percent = solution.percent,
            "two-leg solution"
        );
        Some(solution)
    }
}

fn optimize<R: RandomSource + ?Sized>(
    field: &Field,
    params: GeneticParams,
    cfg: SolverCfg,
    target_y: Option<f64>,
    rng: &mut R,
) -> Option<Leg> {
    let opt = GeneticOptimizer::new(field, params, cfg);
    match target_y {
        Some(t) => opt.with_target(t).run(rng),
        None => opt.run(rng),
    }
}
