use super::types::{Coord, Segment};

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Sign of the cross product of `p2 - p1` and `p3 - p2`.
#[inline]
pub fn orientation(p1: Coord, p2: Coord, p3: Coord) -> Orientation {
    let val = (p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// `q` lies in the closed bounding box of `p` and `r`.
///
/// Only meaningful once `p, q, r` are known to be collinear.
#[inline]
pub fn on_segment(p: Coord, q: Coord, r: Coord) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed segments `a` and `b` share at least one point.
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    let o1 = orientation(a.start, a.end, b.start);
    let o2 = orientation(a.start, a.end, b.end);
    let o3 = orientation(b.start, b.end, a.start);
    let o4 = orientation(b.start, b.end, a.end);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    // Collinear and touching cases.
    (o1 == Orientation::Collinear && on_segment(a.start, b.start, a.end))
        || (o2 == Orientation::Collinear && on_segment(a.start, b.end, a.end))
        || (o3 == Orientation::Collinear && on_segment(b.start, a.start, b.end))
        || (o4 == Orientation::Collinear && on_segment(b.start, a.end, b.end))
}
