//! Candidate encoding: (launch angle, launch point) → path leg → fitness.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::geom2::{segments_intersect, Coord, Segment};
use crate::rng::RandomSource;

/// One candidate leg. The launch point sits on the left field edge (`x = 0`).
///
/// Angles are kept in `[0, π]`; a descending direction is stored as its
/// supplement, which has the same tangent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    pub angle: f64,
    pub point: Coord,
}

#[inline]
fn wrap_half_turn(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + PI
    } else {
        angle
    }
}

impl Chromosome {
    pub fn new(angle: f64, point: Coord) -> Self {
        Self { angle, point }
    }

    /// Candidate launched from `point` that reaches `(x_max, target_y)`.
    pub fn aimed(point: Coord, x_max: f64, target_y: f64) -> Self {
        let angle = wrap_half_turn(((target_y - point.y) / x_max).atan());
        Self { angle, point }
    }

    #[inline]
    pub fn tan(&self) -> f64 {
        self.angle.tan()
    }

    /// Segment from the launch point to the right field edge.
    pub fn segment(&self, x_max: f64) -> Segment {
        let end = Coord::new(x_max, self.tan() * x_max + self.point.y);
        Segment::new(self.point, end)
    }
}

/// Draw a candidate with a uniform launch height in `[0, y_max]`.
///
/// Without a target the angle is uniform over the cone whose right-edge crossing
/// stays inside `[0, y_max]`; with a target the angle aims exactly at
/// `(x_max, target_y)`.
pub fn sample_candidate<R: RandomSource + ?Sized>(
    field: &Field,
    target_y: Option<f64>,
    rng: &mut R,
) -> Chromosome {
    let y = rng.uniform(0.0, field.y_max);
    let point = Coord::new(0.0, y);
    match target_y {
        Some(t) => Chromosome::aimed(point, field.x_max, t),
        None => {
            let low = (-y / field.x_max).atan();
            let high = ((field.y_max - y) / field.x_max).atan();
            Chromosome::new(wrap_half_turn(rng.uniform(low, high)), point)
        }
    }
}

/// Indices of the obstacles the candidate's segment touches, in field order.
pub fn evaluate(chromosome: &Chromosome, field: &Field) -> Vec<usize> {
    let ray = chromosome.segment(field.x_max);
    field
        .obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| o.edges().any(|e| segments_intersect(&ray, &e)))
        .map(|(k, _)| k)
        .collect()
}

/// Number of obstacles crossed.
#[inline]
pub fn fitness(chromosome: &Chromosome, field: &Field) -> usize {
    evaluate(chromosome, field).len()
}

/// Evaluated path leg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub start: Coord,
    pub end: Coord,
    /// Zero-based obstacle indices, field order.
    pub intersected: Vec<usize>,
    pub chromosome: Chromosome,
}

impl Leg {
    pub fn evaluate(chromosome: Chromosome, field: &Field) -> Self {
        let seg = chromosome.segment(field.x_max);
        Self {
            start: seg.start,
            end: seg.end,
            intersected: evaluate(&chromosome, field),
            chromosome,
        }
    }

    #[inline]
    pub fn fitness(&self) -> usize {
        self.intersected.len()
    }
}
