use crate::{error::TileErr, style::Style};
use geometry::{inset_polygon, open_ring, Edge, GeometryErr, Key, Point};
use itertools::Itertools;

// DualPolygon is an irregular polygon given directly by its vertex ring, as produced by
// connecting the centers of the polygons around a vertex of a tiling
#[derive(Clone, Debug, PartialEq)]
pub struct DualPolygon {
    points: Vec<Point>, // closed ring, first point repeated last
    style: Style,
}

impl DualPolygon {
    // new accepts an open or closed ring of at least 3 distinct points, each with a canonical position
    pub fn new(points: Vec<Point>, style: Style) -> Result<DualPolygon, TileErr> {
        let mut points = open_ring(&points).to_vec();
        let keys = points
            .iter()
            .map(|point| point.key().ok_or(GeometryErr::Unrepresentable(*point)))
            .collect::<Result<Vec<Key>, GeometryErr>>()?;
        let distinct = keys.into_iter().unique().count();
        if distinct < 3 {
            return Err(TileErr::Geometry(GeometryErr::Degenerate(distinct)))
        }
        points.push(points[0]);
        Ok(DualPolygon { points, style })
    }

    pub fn sides(&self) -> usize {
        self.points.len() - 1
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    // points returns the closed ring, inset by margin when margin is non zero
    pub fn points(&self, margin: f64) -> Result<Vec<Point>, TileErr> {
        if margin == 0. {
            return Ok(self.points.clone())
        }
        Ok(inset_polygon(&self.points, margin)?)
    }

    // centroid computes the area centroid of the ring, where a renderer places the polygon's label
    pub fn centroid(&self) -> Point {
        let ring = open_ring(&self.points);
        let (area, x, y) = Point::edges(ring)
            .into_iter()
            .map(|Edge(p0, p1)| {
                let conv = p0.cross(&p1);
                (conv, conv * (p0.0 + p1.0), conv * (p0.1 + p1.1))
            })
            .fold((0., 0., 0.), |(a0, a1, a2), (e0, e1, e2)| (a0 + e0, a1 + e1, a2 + e2));
        let area = area / 2.;
        Point(x / (6. * area), y / (6. * area))
    }
}
