//! Convexity and angle checks for 4-vertex obstacles.

use super::predicates::segments_intersect;
use super::types::{Coord, Obstacle, QUAD_VERTICES};

/// All 24 orderings of four vertex indices, lexicographic.
///
/// `find_convex_ordering` returns the first convex entry; callers may rely on
/// "convex" only, not on a specific winding.
pub const QUAD_ORDERINGS: [[usize; 4]; 24] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 2, 3, 0],
    [1, 3, 0, 2],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 0, 3, 1],
    [2, 1, 0, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 1, 2, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

/// Strictly convex quadrilateral in the given vertex order.
///
/// The cross product of incoming and outgoing edge must be strictly positive at
/// every vertex, or strictly negative at every vertex. A zero (collinear triple)
/// fails.
pub fn is_convex_quadrilateral(points: &[Coord]) -> bool {
    if points.len() != QUAD_VERTICES {
        return false;
    }
    let n = points.len();
    let crosses: Vec<f64> = (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            let incoming = cur - prev;
            let outgoing = next - cur;
            incoming.x * outgoing.y - incoming.y * outgoing.x
        })
        .collect();
    crosses.iter().all(|&c| c > 0.0) || crosses.iter().all(|&c| c < 0.0)
}

/// Every interior angle (in the given vertex order) is strictly below `max_angle`.
///
/// Zero-length edges give a NaN angle and fail.
pub fn interior_angles_below(points: &[Coord], max_angle: f64) -> bool {
    if points.len() != QUAD_VERTICES {
        return false;
    }
    let n = points.len();
    (0..n).all(|i| {
        let corner = points[(i + 1) % n];
        let a = points[i] - corner;
        let b = points[(i + 2) % n] - corner;
        let cos = a.dot(&b) / (a.norm() * b.norm());
        cos.clamp(-1.0, 1.0).acos() < max_angle
    })
}

/// First vertex ordering (in `QUAD_ORDERINGS` order) that forms a convex quadrilateral.
pub fn find_convex_ordering(points: &[Coord]) -> Option<Obstacle> {
    if points.len() != QUAD_VERTICES {
        return None;
    }
    QUAD_ORDERINGS.iter().find_map(|perm| {
        let ordered: Vec<Coord> = perm.iter().map(|&k| points[k]).collect();
        is_convex_quadrilateral(&ordered).then(|| Obstacle::new(ordered))
    })
}

/// Some edge of `a` intersects some edge of `b`.
pub fn obstacles_intersect(a: &Obstacle, b: &Obstacle) -> bool {
    a.edges()
        .any(|ea| b.edges().any(|eb| segments_intersect(&ea, &eb)))
}
