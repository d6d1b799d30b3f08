//! Basic 2D types.
//!
//! - `Segment`: closed segment between two coordinates.
//! - `Obstacle`: cyclic vertex list; accepted obstacles carry exactly four vertices,
//!   a masked obstacle carries none.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Field coordinate.
pub type Coord = Vector2<f64>;

/// Vertex count of every accepted obstacle.
pub const QUAD_VERTICES: usize = 4;

/// Closed segment `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Coord,
    pub end: Coord,
}

impl Segment {
    #[inline]
    pub fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }
}

/// Obstacle boundary as a cyclic vertex list.
///
/// Any vertex count deserializes; the convexity test rejects counts other than
/// [`QUAD_VERTICES`] at validation time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub vertices: Vec<Coord>,
}

impl Obstacle {
    pub fn new(vertices: Vec<Coord>) -> Self {
        Self { vertices }
    }

    /// An obstacle without vertices. It has no edges and is never intersected.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges, cyclic. Empty for a masked obstacle.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| Segment::new(self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Every vertex inside the closed box `[0, x_max] × [0, y_max]`.
    pub fn within(&self, x_max: f64, y_max: f64) -> bool {
        self.vertices
            .iter()
            .all(|p| (0.0..=x_max).contains(&p.x) && (0.0..=y_max).contains(&p.y))
    }
}
