use crate::point::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum GeometryErr {
    Degenerate(usize),             // number of distinct points in a ring which needs at least 3
    ParallelEdges(Point),          // corner whose adjacent edges are parallel
    Unrepresentable(Point),        // point with no canonical key: not finite or too far out
}

impl std::fmt::Display for GeometryErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryErr::Degenerate(size) => write!(f, "GeometryErr: ring has {} distinct points, expected at least 3", size),
            GeometryErr::ParallelEdges(point) => write!(f, "GeometryErr: adjacent edges at {} are parallel", point),
            GeometryErr::Unrepresentable(point) => write!(f, "GeometryErr: {:?} has no canonical position", point),
        }
    }
}

impl std::error::Error for GeometryErr {}
