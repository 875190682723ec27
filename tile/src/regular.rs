use crate::{error::TileErr, style::Style};
use geometry::{Edge, Key, Point, MAX_COORDINATE};
use std::f64::consts::{PI, TAU};

// RegularPolygon is a regular polygon with unit length edges. Its vertex ring is derived
// from sides, center and rotation whenever it is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygon {
    sides: usize,
    center: Point,
    rotation: f64, // angle of vertex 0, or of the middle of edge 0 for even sides, relative to "up"
    style: Style,
    key: Key,
}

// circumradius of a unit edge regular polygon, shrunk so that each edge moves margin toward the center
pub fn circumradius(sides: usize, margin: f64) -> f64 {
    let half_angle = PI / sides as f64;
    0.5 / half_angle.sin() - margin / half_angle.cos()
}

// apothem of a unit edge regular polygon
pub fn apothem(sides: usize) -> f64 {
    0.5 / (PI / sides as f64).tan()
}

impl RegularPolygon {
    // new rejects placements which could not be told apart by their canonical position:
    // non finite values and centers beyond MAX_COORDINATE
    pub fn new(sides: usize, center: Point, rotation: f64, style: Style) -> Result<RegularPolygon, TileErr> {
        if sides < 3 {
            return Err(TileErr::TooFewSides(sides))
        }
        if !center.is_finite() || !rotation.is_finite() {
            return Err(TileErr::NonFinite(center, rotation))
        }
        if center.0.abs() > MAX_COORDINATE || center.1.abs() > MAX_COORDINATE {
            return Err(TileErr::OutOfRange(center))
        }
        let key = center.key().ok_or(TileErr::OutOfRange(center))?;
        Ok(RegularPolygon { sides, center, rotation, style, key })
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn key(&self) -> Key {
        self.key
    }

    // points returns the closed vertex ring (vertex 0 repeated at the end), counter-clockwise,
    // with every edge moved margin toward the center
    pub fn points(&self, margin: f64) -> Vec<Point> {
        let angle = TAU / self.sides as f64;
        let mut rotation = self.rotation - PI / 2.;
        if self.sides % 2 == 0 {
            rotation += angle / 2.;
        }
        let distance = circumradius(self.sides, margin);
        (0..self.sides)
            .chain(std::iter::once(0))
            .map(|i| self.center.polar(distance, rotation + angle * i as f64))
            .collect()
    }

    pub fn edge(&self, index: usize) -> Result<Edge, TileErr> {
        if index >= self.sides {
            return Err(TileErr::EdgeOutOfBounds(index, self.sides))
        }
        let points = self.points(0.);
        Ok(Edge(points[index], points[index + 1]))
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.points(0.).windows(2).map(|pair| Edge(pair[0], pair[1])).collect()
    }

    // adjacent places a new regular polygon with the given number of sides on the outside of
    // edge `index`. The new polygon's edge 0 is the shared edge, walked in the opposite direction.
    pub fn adjacent(&self, sides: usize, index: usize, style: Style) -> Result<RegularPolygon, TileErr> {
        if sides < 3 {
            return Err(TileErr::TooFewSides(sides))
        }
        let edge = self.edge(index)?;
        let edge_angle = edge.angle();
        let center = edge.mid().polar(apothem(sides), edge.normal());
        // integer division: an even polygon's rotation already carries a half step
        let rotation = edge_angle + TAU / sides as f64 * ((sides - 1) / 2) as f64;
        RegularPolygon::new(sides, center, rotation, style)
    }

    // translate copies the polygon to center + offset, keeping sides, rotation and style
    pub fn translate(&self, offset: &Point) -> Result<RegularPolygon, TileErr> {
        RegularPolygon::new(self.sides, &self.center + offset, self.rotation, self.style.clone())
    }
}

impl std::fmt::Display for RegularPolygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RegularPolygon({}, {}, {}π)", self.sides, self.center, common::fmt_float(self.rotation / PI, 2))
    }
}
