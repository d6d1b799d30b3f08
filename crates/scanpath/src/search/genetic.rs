//! Generational genetic search over chromosomes.
//!
//! Model
//! - Fixed population size, exactly `iterations_count` generations, no elitism
//!   and no early stopping. Each generation is replaced wholesale.
//! - Parents come from independent 2-way tournaments (draws with replacement;
//!   strictly fitter first draw wins, ties go to the second draw).
//! - Uniform crossover per gene with `SolverCfg::crossover_bias` toward the father.
//!   With a target height the inherited launch point is kept and the angle is
//!   re-aimed at the target.
//! - Mutation replaces the whole child with a fresh sample.

use tracing::{debug, info};

use super::chromosome::{fitness, sample_candidate, Chromosome, Leg};
use crate::cfg::{GeneticParams, SolverCfg};
use crate::field::Field;
use crate::rng::RandomSource;

/// Genetic optimizer bound to one field.
pub struct GeneticOptimizer<'a> {
    field: &'a Field,
    params: GeneticParams,
    cfg: SolverCfg,
    target_y: Option<f64>,
}

impl<'a> GeneticOptimizer<'a> {
    pub fn new(field: &'a Field, params: GeneticParams, cfg: SolverCfg) -> Self {
        Self {
            field,
            params,
            cfg,
            target_y: None,
        }
    }

    /// Force every candidate to cross the right edge at `target_y`.
    pub fn with_target(mut self, target_y: f64) -> Self {
        self.target_y = Some(target_y);
        self
    }

    /// Run all generations and return the fittest final individual.
    ///
    /// `None` only for an empty population.
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Leg> {
        info!(
            population = self.params.population_size,
            iterations = self.params.iterations_count,
            targeted = self.target_y.is_some(),
            "genetic run"
        );
        let mut population: Vec<Chromosome> = (0..self.params.population_size)
            .map(|_| self.sample(rng))
            .collect();

        for generation in 0..self.params.iterations_count {
            let scores = self.score(&population);
            debug!(
                generation,
                best = scores.iter().copied().max().unwrap_or(0),
                "generation"
            );
            population = (0..population.len())
                .map(|_| {
                    let father = self.select(&population, &scores, rng);
                    let mother = self.select(&population, &scores, rng);
                    let child = self.crossover(father, mother, rng);
                    self.mutate(child, rng)
                })
                .collect();
        }

        let scores = self.score(&population);
        let best = first_max(&scores)?;
        let leg = Leg::evaluate(population[best], self.field);
        info!(fitness = leg.fitness(), "genetic run finished");
        Some(leg)
    }

    fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Chromosome {
        sample_candidate(self.field, self.target_y, rng)
    }

    fn score(&self, population: &[Chromosome]) -> Vec<usize> {
        population.iter().map(|c| fitness(c, self.field)).collect()
    }

    fn select<R: RandomSource + ?Sized>(
        &self,
        population: &[Chromosome],
        scores: &[usize],
        rng: &mut R,
    ) -> Chromosome {
        let a = rng.below(population.len());
        let b = rng.below(population.len());
        if scores[a] > scores[b] {
            population[a]
        } else {
            population[b]
        }
    }

    fn crossover<R: RandomSource + ?Sized>(
        &self,
        father: Chromosome,
        mother: Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        let bias = self.cfg.crossover_bias;
        match self.target_y {
            Some(t) => {
                let point = if rng.chance(bias) { father.point } else { mother.point };
                Chromosome::aimed(point, self.field.x_max, t)
            }
            None => {
                let angle = if rng.chance(bias) { father.angle } else { mother.angle };
                let point = if rng.chance(bias) { father.point } else { mother.point };
                Chromosome::new(angle, point)
            }
        }
    }

    fn mutate<R: RandomSource + ?Sized>(&self, child: Chromosome, rng: &mut R) -> Chromosome {
        if rng.chance(self.params.mutation_rate) {
            self.sample(rng)
        } else {
            child
        }
    }
}

/// Index of the first maximum.
fn first_max(scores: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (k, &s) in scores.iter().enumerate() {
        if best.map_or(true, |b| s > scores[b]) {
            best = Some(k);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Coord;
    use crate::rng::scripted::ScriptedSource;

    fn field() -> Field {
        Field::new(10.0, 10.0, vec![])
    }

    fn params(mutation_rate: f64) -> GeneticParams {
        GeneticParams {
            population_size: 2,
            iterations_count: 1,
            mutation_rate,
        }
    }

    fn pair() -> [Chromosome; 2] {
        [
            Chromosome::new(0.1, Coord::new(0.0, 1.0)),
            Chromosome::new(0.2, Coord::new(0.0, 2.0)),
        ]
    }

    #[test]
    fn first_max_prefers_earliest() {
        assert_eq!(first_max(&[1, 3, 2, 3]), Some(1));
        assert_eq!(first_max(&[0]), Some(0));
        assert_eq!(first_max(&[]), None);
    }

    #[test]
    fn tournament_ties_go_to_second_draw() {
        let f = field();
        let opt = GeneticOptimizer::new(&f, params(0.0), SolverCfg::default());
        let pop = pair();
        let mut rng = ScriptedSource::new(&[], &[0, 1, 0, 1, 1, 0]);
        assert_eq!(opt.select(&pop, &[1, 1], &mut rng), pop[1]);
        assert_eq!(opt.select(&pop, &[2, 1], &mut rng), pop[0]);
        assert_eq!(opt.select(&pop, &[2, 1], &mut rng), pop[0]);
        assert!(rng.exhausted());
    }

    #[test]
    fn crossover_mixes_genes_per_coin() {
        let f = field();
        let cfg = SolverCfg {
            crossover_bias: 0.5,
            ..SolverCfg::default()
        };
        let opt = GeneticOptimizer::new(&f, params(0.0), cfg);
        let [father, mother] = pair();
        // Angle coin below bias (father), point coin above (mother).
        let mut rng = ScriptedSource::new(&[0.1, 0.9], &[]);
        let child = opt.crossover(father, mother, &mut rng);
        assert_eq!(child.angle, father.angle);
        assert_eq!(child.point, mother.point);
        assert!(rng.exhausted());
    }

    #[test]
    fn targeted_crossover_reaims_inherited_point() {
        let f = field();
        let opt = GeneticOptimizer::new(&f, params(0.0), SolverCfg::default()).with_target(6.0);
        let [father, mother] = pair();
        let mut rng = ScriptedSource::new(&[0.9], &[]);
        let child = opt.crossover(father, mother, &mut rng);
        assert_eq!(child.point, mother.point);
        assert!((child.segment(f.x_max).end.y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn mutation_replaces_whole_child() {
        let f = field();
        let [child, _] = pair();
        let opt = GeneticOptimizer::new(&f, params(0.5), SolverCfg::default());
        // Trigger below rate, then a fresh sample: launch y, angle fraction.
        let mut rng = ScriptedSource::new(&[0.2, 0.75, 0.5], &[]);
        let mutated = opt.mutate(child, &mut rng);
        assert_eq!(mutated.point, Coord::new(0.0, 7.5));
        assert_ne!(mutated, child);
        let mut keep = ScriptedSource::new(&[0.7], &[]);
        assert_eq!(opt.mutate(child, &mut keep), child);
    }
}
