use super::*;
use crate::cfg::{AnnealingParams, GeneticParams, SolverCfg};
use crate::field::{generate_field, Field};
use crate::geom2::{Coord, Obstacle};
use nalgebra::vector;
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::PI;

fn square_field() -> Field {
    Field::new(
        10.0,
        10.0,
        vec![Obstacle::new(vec![
            vector![2.0, 2.0],
            vector![2.0, 4.0],
            vector![4.0, 4.0],
            vector![4.0, 2.0],
        ])],
    )
}

fn leg_with(intersected: Vec<usize>) -> Leg {
    Leg {
        start: Coord::new(0.0, 0.0),
        end: Coord::new(1.0, 0.0),
        intersected,
        chromosome: Chromosome::new(0.0, Coord::new(0.0, 0.0)),
    }
}

#[test]
fn ray_through_obstacle_is_counted() {
    let field = square_field();
    let level = Chromosome::new(0.0, vector![0.0, 3.0]);
    assert_eq!(evaluate(&level, &field), vec![0]);
    // Grazing the top edge still counts.
    let grazing = Chromosome::new(0.0, vector![0.0, 4.0]);
    assert_eq!(fitness(&grazing, &field), 1);
    let above = Chromosome::new(0.0, vector![0.0, 8.0]);
    assert!(evaluate(&above, &field).is_empty());
    // Diagonal through the square's center.
    let diagonal = Chromosome::aimed(vector![0.0, 0.0], 10.0, 10.0);
    assert!((diagonal.angle - PI / 4.0).abs() < 1e-12);
    assert_eq!(evaluate(&diagonal, &field), vec![0]);
}

#[test]
fn masked_obstacle_is_never_hit() {
    let field = square_field().masked(&[0]);
    let level = Chromosome::new(0.0, vector![0.0, 3.0]);
    assert!(evaluate(&level, &field).is_empty());
}

#[test]
fn intersected_indices_follow_field_order() {
    let mut field = square_field();
    field.obstacles.insert(
        0,
        Obstacle::new(vec![
            vector![6.0, 2.0],
            vector![6.0, 4.0],
            vector![8.0, 4.0],
            vector![8.0, 2.0],
        ]),
    );
    let level = Chromosome::new(0.0, vector![0.0, 3.0]);
    assert_eq!(evaluate(&level, &field), vec![0, 1]);
}

#[test]
fn aiming_downward_wraps_into_upper_half_turn() {
    let c = Chromosome::aimed(vector![0.0, 8.0], 10.0, 1.0);
    assert!(c.angle > PI / 2.0 && c.angle <= PI);
    let seg = c.segment(10.0);
    assert!((seg.end.y - 1.0).abs() < 1e-9);
    assert_eq!(seg.end.x, 10.0);
}

#[test]
fn untargeted_samples_cross_right_edge_inside_field() {
    let field = Field::new(20.0, 5.0, vec![]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let c = sample_candidate(&field, None, &mut rng);
        assert_eq!(c.point.x, 0.0);
        assert!((0.0..=5.0).contains(&c.point.y));
        assert!((0.0..=PI).contains(&c.angle));
        let end = c.segment(field.x_max).end;
        assert!(end.y >= -1e-9 && end.y <= 5.0 + 1e-9, "end {end:?}");
    }
}

#[test]
fn targeted_samples_hit_the_target() {
    let field = Field::new(10.0, 10.0, vec![]);
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..100 {
        let c = sample_candidate(&field, Some(7.5), &mut rng);
        assert!((c.segment(field.x_max).end.y - 7.5).abs() < 1e-9);
    }
}

#[test]
fn genetic_single_individual_no_generations_returns_sample() {
    let field = square_field();
    let params = GeneticParams {
        population_size: 1,
        iterations_count: 0,
        mutation_rate: 0.5,
    };
    let expected = sample_candidate(&field, None, &mut StdRng::seed_from_u64(9));
    let leg = GeneticOptimizer::new(&field, params, SolverCfg::default())
        .run(&mut StdRng::seed_from_u64(9))
        .unwrap();
    assert_eq!(leg.chromosome, expected);
    assert_eq!(leg, Leg::evaluate(expected, &field));
}

#[test]
fn genetic_empty_population_yields_nothing() {
    let field = square_field();
    let params = GeneticParams {
        population_size: 0,
        iterations_count: 3,
        mutation_rate: 0.1,
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(GeneticOptimizer::new(&field, params, SolverCfg::default())
        .run(&mut rng)
        .is_none());
}

#[test]
fn genetic_finds_single_square() {
    let field = square_field();
    let params = GeneticParams {
        population_size: 20,
        iterations_count: 50,
        mutation_rate: 0.05,
    };
    let trials = 30;
    let hits = (0..trials)
        .filter(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let leg = GeneticOptimizer::new(&field, params, SolverCfg::default())
                .run(&mut rng)
                .unwrap();
            leg.fitness() == 1
        })
        .count();
    assert!(hits as u64 >= trials * 9 / 10, "hits {hits} of {trials}");
}

#[test]
fn genetic_targeted_run_keeps_target() {
    let mut rng = StdRng::seed_from_u64(21);
    let cfg = SolverCfg::default();
    let obstacles = generate_field(30.0, 20.0, 8, &cfg, &mut rng).unwrap();
    let field = Field::new(30.0, 20.0, obstacles);
    let params = GeneticParams {
        population_size: 15,
        iterations_count: 10,
        mutation_rate: 0.2,
    };
    let leg = GeneticOptimizer::new(&field, params, cfg)
        .with_target(12.0)
        .run(&mut rng)
        .unwrap();
    assert!((leg.end.y - 12.0).abs() < 1e-9);
}

#[test]
fn annealing_without_cooling_range_returns_initial() {
    let field = square_field();
    let params = AnnealingParams {
        initial_temperature: 1.0,
        stopping_temperature: 1.0,
        cooling_factor: 0.5,
    };
    let expected = sample_candidate(&field, None, &mut StdRng::seed_from_u64(17));
    let leg = AnnealingOptimizer::new(&field, params, SolverCfg::default())
        .run(&mut StdRng::seed_from_u64(17));
    assert_eq!(leg.chromosome, expected);
}

#[test]
fn annealing_tracks_best_over_run() {
    let field = square_field();
    let params = AnnealingParams::default();
    let mut rng = StdRng::seed_from_u64(99);
    let leg = AnnealingOptimizer::new(&field, params, SolverCfg::default()).run(&mut rng);
    assert!((0.0..=PI).contains(&leg.chromosome.angle));
    assert!((0.0..=field.y_max).contains(&leg.chromosome.point.y));
    assert_eq!(leg.intersected, evaluate(&leg.chromosome, &field));
}

#[test]
fn solution_percent_counts_duplicates() {
    let s = Solution::combine(leg_with(vec![0, 2]), leg_with(vec![2]), 4);
    assert_eq!(s.intersected, vec![1, 3, 3]);
    assert_eq!(s.percent, (3.0 / 4.0) * 100.0);
    let over = Solution::combine(leg_with(vec![0]), leg_with(vec![0]), 1);
    assert_eq!(over.percent, 200.0);
    let none = Solution::combine(leg_with(vec![]), leg_with(vec![]), 0);
    assert_eq!(none.percent, 0.0);
}

#[test]
fn two_leg_solution_forms_a_v() {
    let mut rng = StdRng::seed_from_u64(8);
    let cfg = SolverCfg::default();
    let obstacles = generate_field(40.0, 30.0, 10, &cfg, &mut rng).unwrap();
    let field = Field::new(40.0, 30.0, obstacles);
    let params = GeneticParams {
        population_size: 20,
        iterations_count: 15,
        mutation_rate: 0.1,
    };
    let solution = PathComposer::new(&field, params, cfg)
        .two_leg(&mut rng)
        .unwrap();
    // Finish leg lands where the start leg ends.
    assert!((solution.finish.end.y - solution.start.end.y).abs() < 1e-6);
    // Obstacles hit by the start leg are masked for the finish leg.
    for k in &solution.finish.intersected {
        assert!(!solution.start.intersected.contains(k));
    }
    let combined = solution.start.fitness() + solution.finish.fitness();
    assert_eq!(solution.intersected.len(), combined);
    assert_eq!(
        solution.percent,
        (combined as f64 / field.obstacles.len() as f64) * 100.0
    );
    assert!(solution.intersected.iter().all(|&k| k >= 1 && k <= 10));
}

#[test]
fn single_leg_mode_is_one_genetic_run() {
    let field = square_field();
    let params = GeneticParams {
        population_size: 5,
        iterations_count: 4,
        mutation_rate: 0.1,
    };
    let composed = PathComposer::new(&field, params, SolverCfg::default())
        .single_leg(Some(3.0), &mut StdRng::seed_from_u64(12))
        .unwrap();
    let direct = GeneticOptimizer::new(&field, params, SolverCfg::default())
        .with_target(3.0)
        .run(&mut StdRng::seed_from_u64(12))
        .unwrap();
    assert_eq!(composed, direct);
}
