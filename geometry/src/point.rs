use crate::edge::Edge;
use common::{DEFAULT_F64_MARGIN, DEFAULT_PRECISION, fmt_float, hash_float};
use float_cmp::{ApproxEq, F64Margin};
use itertools::izip;
use std::ops::{Add, Neg, Sub};

pub const ORIGIN: Point = Point(0., 0.);

pub const DISPLAY_PRECISION: u32 = 2;

// coordinates further out than this are rejected by constructors, keeping every point derived
// from them well inside the range a Key can represent
pub const MAX_COORDINATE: f64 = 1e9;

#[derive(Clone, Copy, Debug, Default)]
pub struct Point(pub f64, pub f64);

// Key is the canonical position of a Point: each coordinate rounded to DEFAULT_PRECISION
// decimal digits, so that points reached along different paths of floating point
// arithmetic land on the same key. Points which are not finite, or too large to scale into
// an i64, have no Key.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Key(pub i64, pub i64);

impl Point {
    // edges pairs each point of an open ring with its successor, wrapping around at the end
    pub fn edges(points: &[Point]) -> Vec<Edge> {
        izip!(
            points.iter().cycle().take(points.len()),
            points.iter().cycle().skip(1).take(points.len()),
        )
            .map(|(point1, point2)| Edge(*point1, *point2))
            .collect()
    }

    // polar returns the point at the given distance and angle from self
    pub fn polar(&self, distance: f64, radians: f64) -> Point {
        Point(self.0 + radians.cos() * distance, self.1 + radians.sin() * distance)
    }

    // arg is the signed angle of the vector in (-π, π], as returned by atan2
    pub fn arg(&self) -> f64 {
        self.1.atan2(self.0)
    }

    pub fn cross(&self, other: &Point) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    pub fn key(&self) -> Option<Key> {
        Some(Key(hash_float(self.0, DEFAULT_PRECISION)?, hash_float(self.1, DEFAULT_PRECISION)?))
    }

    pub fn mid(&self, other: &Point) -> Point {
        Point(self.0 + (other.0 - self.0) / 2., self.1 + (other.1 - self.1) / 2.)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.0.powi(2) + self.1.powi(2)
    }

    pub fn values(&self) -> (f64, f64) {
        (self.0, self.1)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Self::Output {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl Add for &Point {
    type Output = Point;
    fn add(self, other: &Point) -> Self::Output {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl ApproxEq for Point {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        0_f64.approx_eq((self - other).norm(), margin)
    }
}

impl ApproxEq for &Point {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        0_f64.approx_eq((self - other).norm(), margin)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Self::Output {
        Point(-self.0, -self.1)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(other.0, DEFAULT_F64_MARGIN)
            && self.1.approx_eq(other.1, DEFAULT_F64_MARGIN)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Self::Output {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl Sub for &Point {
    type Output = Point;
    fn sub(self, other: &Point) -> Self::Output {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", fmt_float(self.0, DISPLAY_PRECISION), fmt_float(self.1, DISPLAY_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::approx_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_point_arg() {
        approx_eq!(f64, 0. * TAU / 8., Point(1., 0.).arg());
        approx_eq!(f64, 1. * TAU / 8., Point(1., 1.).arg());
        approx_eq!(f64, 2. * TAU / 8., Point(0., 1.).arg());
        approx_eq!(f64, 3. * TAU / 8., Point(-1., 1.).arg());
        approx_eq!(f64, 4. * TAU / 8., Point(-1., 0.).arg());
        approx_eq!(f64, -3. * TAU / 8., Point(-1., -1.).arg());
        approx_eq!(f64, -2. * TAU / 8., Point(0., -1.).arg());
        approx_eq!(f64, -1. * TAU / 8., Point(1., -1.).arg());
    }

    #[test]
    fn test_point_polar() {
        let point = Point(1., 2.).polar(2., PI / 2.);
        approx_eq!(&Point, &Point(1., 4.), &point);
        let point = ORIGIN.polar(1., PI);
        approx_eq!(&Point, &Point(-1., 0.), &point);
    }

    #[test]
    fn test_point_cross() {
        approx_eq!(f64, 38., Point(3., 4.).cross(&Point(-2., 10.)));
        approx_eq!(f64, -38., Point(-2., 10.).cross(&Point(3., 4.)));
    }

    #[test]
    fn test_point_norm() {
        approx_eq!(f64, 5., Point(3., 4.).norm());
        approx_eq!(f64, 25., Point(3., 4.).norm_squared());
    }

    #[test]
    fn test_point_mid() {
        approx_eq!(&Point, &Point(0.5, -1.), &Point(-1., 0.).mid(&Point(2., -2.)));
    }

    #[test]
    fn test_point_ops() {
        approx_eq!(&Point, &Point(-1., 5.), &(&Point(1., 2.) + &Point(-2., 3.)));
        approx_eq!(&Point, &Point(3., -1.), &(Point(1., 2.) - Point(-2., 3.)));
        approx_eq!(&Point, &Point(-1., 1.), &(-Point(1., -1.)));
    }

    #[test]
    fn test_point_key() {
        assert_eq!(Some(Key(3141593, 6283185)), Point(PI, TAU).key());
        assert_eq!(Point(PI, TAU).key(), Point(PI + 1e-9, TAU - 1e-9).key());
        assert_ne!(Point(PI, TAU).key(), Point(PI + 1e-5, TAU).key());
        assert_eq!(Some(Key(0, 0)), Point(-1e-12, 1e-12).key());
    }

    #[test]
    fn test_point_key_unrepresentable() {
        assert_eq!(None, Point(f64::NAN, 0.).key());
        assert_eq!(None, Point(0., f64::INFINITY).key());
        assert_eq!(None, Point(1e15, 0.).key());
        assert!(Point(MAX_COORDINATE, -MAX_COORDINATE).key().is_some());
        assert!(!Point(f64::NAN, 0.).is_finite());
        assert!(Point(1., 2.).is_finite());
    }

    #[test]
    fn test_point_eq() {
        assert!(Point(PI, TAU) == Point(PI + 1e-12, TAU - 1e-12));
        assert!(Point(PI, TAU) != Point(PI + 1e-3, TAU));
    }

    #[test]
    fn test_point_edges() {
        let points = vec![Point(0., 0.), Point(1., 0.), Point(0., 1.)];
        let edges = Point::edges(&points);
        assert_eq!(3, edges.len());
        assert_eq!(Point(0., 1.), edges[2].0);
        assert_eq!(Point(0., 0.), edges[2].1);
    }

    #[test]
    fn test_point_fmt() {
        assert_eq!("[0.00,0.00]", format!("{}", Point(0., 0.)));
        assert_eq!("[1.45,-1.45]", format!("{}", Point(1.449, -1.449)));
        assert_eq!("[2.00,-2.00]", format!("{}", Point(1.999, -1.999)));
    }
}
