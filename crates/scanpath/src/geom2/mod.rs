//! 2D geometry kernel: points, segments, quadrilateral obstacles.
//!
//! Purpose
//! - Exact (no epsilon) predicates on `f64` coordinates: orientation, segment
//!   intersection, convexity and interior-angle tests for 4-vertex obstacles.
//! - Everything is boundary-inclusive: touching endpoints and collinear overlap
//!   count as intersection.
//!
//! Conventions
//! - `Coord` is `nalgebra::Vector2<f64>`.
//! - Obstacle vertices are cyclic: edge `k` runs from vertex `k` to vertex `k+1 mod n`.
//! - Convexity search over vertex orderings is a fixed 24-entry table, never a
//!   general permutation routine.
//!
//! Code cross-refs: `segments_intersect`, `find_convex_ordering`, `Obstacle::edges`

mod predicates;
mod quad;
mod types;

pub use predicates::{on_segment, orientation, segments_intersect, Orientation};
pub use quad::{
    find_convex_ordering, interior_angles_below, is_convex_quadrilateral, obstacles_intersect,
    QUAD_ORDERINGS,
};
pub use types::{Coord, Obstacle, Segment, QUAD_VERTICES};
