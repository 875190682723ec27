use crate::{edge::Edge, error::GeometryErr, point::Point};
use itertools::izip;
use std::f64::consts::PI;

// determinants below this are treated as parallel lines
const PARALLEL_TOLERANCE: f64 = 1e-12;

// signed_area is positive for counter-clockwise rings and negative for clockwise ones.
// The ring may be open or closed, a repeated closing point contributes nothing.
pub fn signed_area(points: &[Point]) -> f64 {
    Point::edges(points)
        .iter()
        .map(|Edge(p0, p1)| p0.cross(p1))
        .sum::<f64>() / 2.
}

// open_ring drops the closing duplicate of a closed ring
pub fn open_ring(points: &[Point]) -> &[Point] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first.key().is_some() && first.key() == last.key() => {
            &points[..points.len() - 1]
        },
        _ => points,
    }
}

// intersect_lines returns the intersection of the infinite lines through a and b,
// solved as the 2x2 system a_dy * x + a_dx * y = c for both lines
pub fn intersect_lines(a: &Edge, b: &Edge) -> Option<Point> {
    let (a_dy, a_dx) = (a.1 .1 - a.0 .1, a.0 .0 - a.1 .0);
    let (b_dy, b_dx) = (b.1 .1 - b.0 .1, b.0 .0 - b.1 .0);
    let c1 = a_dy * a.0 .0 + a_dx * a.0 .1;
    let c2 = b_dy * b.0 .0 + b_dx * b.0 .1;
    let determinant = a_dy * b_dx - b_dy * a_dx;
    if determinant.abs() < PARALLEL_TOLERANCE {
        return None
    }
    Some(Point(
        (b_dx * c1 - a_dx * c2) / determinant,
        (a_dy * c2 - b_dy * c1) / determinant,
    ))
}

// inset_polygon offsets every edge of a closed ring by margin toward the interior of the ring
// and returns the closed ring of mitered corners where consecutive offset edges meet.
// A negative margin grows the ring instead. Either winding is accepted.
pub fn inset_polygon(points: &[Point], margin: f64) -> Result<Vec<Point>, GeometryErr> {
    let ring = open_ring(points);
    if ring.len() < 3 {
        return Err(GeometryErr::Degenerate(ring.len()))
    }
    if margin == 0. {
        return Ok(ring.iter().chain(ring.first()).copied().collect())
    }

    // the interior lies left of each edge for counter-clockwise rings
    let turn = if signed_area(ring) >= 0. { PI / 2. } else { -PI / 2. };
    let offset_edges: Vec<Edge> = Point::edges(ring)
        .iter()
        .map(|edge| edge.offset(margin, edge.angle() + turn))
        .collect();

    // corner i sits between the edge ending at ring[i] and the edge starting at it
    let mut result = Vec::with_capacity(ring.len() + 1);
    for (point, incoming, outgoing) in izip!(
        ring.iter(),
        offset_edges.iter().cycle().skip(ring.len() - 1),
        offset_edges.iter(),
    ) {
        match intersect_lines(incoming, outgoing) {
            Some(corner) => result.push(corner),
            None => return Err(GeometryErr::ParallelEdges(*point)),
        }
    }
    if let Some(first) = result.first().copied() {
        result.push(first);
    }
    Ok(result)
}
