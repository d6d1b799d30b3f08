//! Obstacle field: bounds plus an indexed obstacle list.
//!
//! - `generate_field`: rejection-sample `count` pairwise disjoint convex obstacles.
//! - `validate_field`: check a user-supplied field and reorder each obstacle
//!   into a convex vertex ordering.
//!
//! Obstacle index is identity: reports use the position in `obstacles`, and no
//! operation reorders or removes entries (masking replaces an entry with
//! `Obstacle::empty()`).

mod generate;
mod validate;

pub use generate::{generate_field, sample_convex_obstacle, SubBox};
pub use validate::validate_field;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom2::Obstacle;

/// Field setup and validation failures. Indices in messages are 1-based.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("obstacle {} is outside the field bounds", .index + 1)]
    OutsideBounds { index: usize },
    #[error("obstacle {} is not convex", .index + 1)]
    NotConvex { index: usize },
    #[error("obstacle {} intersects obstacle {}", .index + 1, .other + 1)]
    Intersects { index: usize, other: usize },
    #[error("field bounds must be finite and positive, got ({x_max}, {y_max})")]
    InvalidBounds { x_max: f64, y_max: f64 },
    #[error("could not place {requested} obstacles (placed {placed})")]
    Unplaceable { placed: usize, requested: usize },
}

/// Rectangular field `[0, x_max] × [0, y_max]` with its obstacles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub x_max: f64,
    pub y_max: f64,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl Field {
    pub fn new(x_max: f64, y_max: f64, obstacles: Vec<Obstacle>) -> Self {
        Self {
            x_max,
            y_max,
            obstacles,
        }
    }

    pub fn check_bounds(&self) -> Result<(), FieldError> {
        check_bounds(self.x_max, self.y_max)
    }

    /// Copy of the field with the listed obstacles replaced by empty ones.
    ///
    /// Indices stay stable; masked obstacles can no longer be intersected.
    pub fn masked(&self, hits: &[usize]) -> Field {
        let obstacles = self
            .obstacles
            .iter()
            .enumerate()
            .map(|(k, o)| {
                if hits.contains(&k) {
                    Obstacle::empty()
                } else {
                    o.clone()
                }
            })
            .collect();
        Field {
            x_max: self.x_max,
            y_max: self.y_max,
            obstacles,
        }
    }
}

pub(crate) fn check_bounds(x_max: f64, y_max: f64) -> Result<(), FieldError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(x_max) && ok(y_max) {
        Ok(())
    } else {
        Err(FieldError::InvalidBounds { x_max, y_max })
    }
}
