use crate::point::{ORIGIN, Point};

// Bounds is an axis aligned rectangle described by its center and half extents
#[derive(Clone, Debug)]
pub struct Bounds {
    pub center: Point,
    pub half_width: f64,
    pub half_height: f64,
}

impl Bounds {
    // viewport returns the bounds an output of width x height units covers once divided by scale,
    // centered on the origin of the plane
    pub fn viewport(width: f64, height: f64, scale: f64) -> Bounds {
        Bounds {
            center: ORIGIN,
            half_width: width / 2. / scale,
            half_height: height / 2. / scale,
        }
    }

    // corners returns the corners in the order top left, top right, bottom left, bottom right
    // (y growing downward as on a raster)
    pub fn corners(&self) -> [Point; 4] {
        let Point(x, y) = self.center;
        [
            Point(x - self.half_width, y - self.half_height),
            Point(x + self.half_width, y - self.half_height),
            Point(x - self.half_width, y + self.half_height),
            Point(x + self.half_width, y + self.half_height),
        ]
    }

    // beyond_corner reports whether point lies strictly outside the given corner along both axes,
    // on the side facing away from the center
    pub fn beyond_corner(&self, corner: &Point, point: &Point) -> bool {
        let outward_x = corner.0 - self.center.0;
        let outward_y = corner.1 - self.center.1;
        (point.0 - corner.0) * outward_x.signum() > 0. && (point.1 - corner.1) * outward_y.signum() > 0.
    }

    // covered_by reports whether every corner has at least one point strictly beyond it
    pub fn covered_by<'a, I: IntoIterator<Item = &'a Point>>(&self, points: I) -> bool {
        let corners = self.corners();
        let mut covered = [false; 4];
        for point in points {
            for (i, corner) in corners.iter().enumerate() {
                covered[i] |= self.beyond_corner(corner, point);
            }
            if covered.iter().all(|c| *c) {
                return true
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;

    #[test]
    fn test_bounds_viewport() {
        let bounds = Bounds::viewport(1024., 512., 64.);
        approx_eq!(f64, 8., bounds.half_width);
        approx_eq!(f64, 4., bounds.half_height);
        approx_eq!(&Point, &Point(-8., -4.), &bounds.corners()[0]);
        approx_eq!(&Point, &Point(8., 4.), &bounds.corners()[3]);
    }

    #[test]
    fn test_bounds_beyond_corner() {
        let bounds = Bounds::viewport(2., 2., 1.);
        let corners = bounds.corners();
        assert!(bounds.beyond_corner(&corners[0], &Point(-1.5, -1.5)));
        assert!(!bounds.beyond_corner(&corners[0], &Point(-1., -1.5)));
        assert!(bounds.beyond_corner(&corners[3], &Point(2., 3.)));
        assert!(!bounds.beyond_corner(&corners[3], &Point(-2., 3.)));
    }

    #[test]
    fn test_bounds_covered_by() {
        let bounds = Bounds::viewport(2., 2., 1.);
        let points = vec![Point(-2., -2.), Point(2., -2.), Point(-2., 2.)];
        assert!(!bounds.covered_by(&points));
        let points = vec![Point(-2., -2.), Point(2., -2.), Point(-2., 2.), Point(1.5, 1.5)];
        assert!(bounds.covered_by(&points));
        assert!(!Bounds::viewport(4., 4., 1.).covered_by(&points));
    }
}
