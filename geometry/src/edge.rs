use crate::point::Point;
use std::f64::consts::PI;

// Edge is a directed segment from .0 to .1
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge(pub Point, pub Point);

impl Edge {
    // angle is the direction of the edge, as returned by atan2
    pub fn angle(&self) -> f64 {
        (self.1 - self.0).arg()
    }

    pub fn length(&self) -> f64 {
        (self.1 - self.0).norm()
    }

    pub fn mid(&self) -> Point {
        self.0.mid(&self.1)
    }

    // normal is the direction to the right of the edge, i.e. away from the interior of a
    // counter-clockwise ring
    pub fn normal(&self) -> f64 {
        self.angle() - PI / 2.
    }

    // offset shifts the edge perpendicular to itself by distance along the given direction
    pub fn offset(&self, distance: f64, radians: f64) -> Edge {
        Edge(self.0.polar(distance, radians), self.1.polar(distance, radians))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;

    #[test]
    fn test_edge_angle_and_normal() {
        let edge = Edge(Point(0., 0.), Point(0., 2.));
        approx_eq!(f64, PI / 2., edge.angle());
        approx_eq!(f64, 0., edge.normal());
        approx_eq!(f64, 2., edge.length());
        approx_eq!(&Point, &Point(0., 1.), &edge.mid());
    }

    #[test]
    fn test_edge_offset() {
        let edge = Edge(Point(0., 0.), Point(1., 0.)).offset(0.5, edge_normal());
        approx_eq!(&Point, &Point(0., -0.5), &edge.0);
        approx_eq!(&Point, &Point(1., -0.5), &edge.1);
    }

    fn edge_normal() -> f64 {
        Edge(Point(0., 0.), Point(1., 0.)).normal()
    }
}
