//! Random obstacle fields by rejection sampling.
//!
//! Model
//! - Draw a center `(cx, cy)` uniformly in the field; the sub-box has half-extents
//!   `cx / reducer` and `cy / reducer`, clamped to the field. Obstacles near the
//!   origin are therefore small, obstacles far from it larger.
//! - Draw four uniform points in the sub-box; accept if some vertex ordering is
//!   convex, all interior angles are below `max_angle`, and no edge meets an edge
//!   of an already accepted obstacle.
//! - Attempts are capped by `SolverCfg::max_placement_attempts`; an overfull field
//!   fails with `FieldError::Unplaceable` instead of looping forever.

use tracing::{debug, warn};

use super::{check_bounds, FieldError};
use crate::cfg::SolverCfg;
use crate::geom2::{
    find_convex_ordering, interior_angles_below, obstacles_intersect, Coord, Obstacle,
};
use crate::rng::RandomSource;

/// Axis-aligned sampling box `[x_low, x_top] × [y_low, y_top]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubBox {
    pub x_low: f64,
    pub x_top: f64,
    pub y_low: f64,
    pub y_top: f64,
}

impl SubBox {
    /// Box around `center` with half-extents `center / reducer`, clamped to the field.
    pub fn around(center: Coord, reducer: f64, x_max: f64, y_max: f64) -> Self {
        let rx = center.x / reducer;
        let ry = center.y / reducer;
        Self {
            x_low: (center.x - rx).max(0.0),
            x_top: (center.x + rx).min(x_max),
            y_low: (center.y - ry).max(0.0),
            y_top: (center.y + ry).min(y_max),
        }
    }
}

/// One rejection-sampling draw: four uniform points in `bx`, reordered convex.
///
/// `None` when no ordering is convex or an interior angle reaches `max_angle`;
/// the caller retries.
pub fn sample_convex_obstacle<R: RandomSource + ?Sized>(
    bx: SubBox,
    max_angle: f64,
    rng: &mut R,
) -> Option<Obstacle> {
    let points: Vec<Coord> = (0..4)
        .map(|_| {
            let x = rng.uniform(bx.x_low, bx.x_top);
            let y = rng.uniform(bx.y_low, bx.y_top);
            Coord::new(x, y)
        })
        .collect();
    find_convex_ordering(&points).filter(|o| interior_angles_below(&o.vertices, max_angle))
}

/// Generate `count` pairwise non-intersecting convex obstacles inside the field.
pub fn generate_field<R: RandomSource + ?Sized>(
    x_max: f64,
    y_max: f64,
    count: usize,
    cfg: &SolverCfg,
    rng: &mut R,
) -> Result<Vec<Obstacle>, FieldError> {
    check_bounds(x_max, y_max)?;
    let mut accepted: Vec<Obstacle> = Vec::with_capacity(count);
    let mut attempts: u64 = 0;
    while accepted.len() < count {
        if attempts >= cfg.max_placement_attempts {
            warn!(
                placed = accepted.len(),
                requested = count,
                attempts,
                "field generation exhausted its attempt cap"
            );
            return Err(FieldError::Unplaceable {
                placed: accepted.len(),
                requested: count,
            });
        }
        attempts += 1;
        let center = Coord::new(rng.uniform(0.0, x_max), rng.uniform(0.0, y_max));
        let bx = SubBox::around(center, cfg.area_size_reducer, x_max, y_max);
        let Some(candidate) = sample_convex_obstacle(bx, cfg.max_angle, rng) else {
            continue;
        };
        if accepted.iter().any(|o| obstacles_intersect(&candidate, o)) {
            continue;
        }
        accepted.push(candidate);
    }
    debug!(count, attempts, "field generated");
    Ok(accepted)
}
