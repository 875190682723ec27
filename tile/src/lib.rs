mod dual;
mod error;
mod regular;
mod style;

pub use self::dual::*;
pub use self::error::*;
pub use self::regular::*;
pub use self::style::*;

use geometry::Point;
use serde::{Deserialize, Serialize};

// Tile is anything the renderer can draw: a regular polygon of the tiling or a polygon of its dual
#[derive(Clone, Debug, PartialEq)]
pub enum Tile {
    Regular(RegularPolygon),
    Dual(DualPolygon),
}

// Outline is the renderer facing form of a Tile: a closed ring of (x, y) pairs in plane units,
// the point to anchor a label at, plus the style tokens to draw it with
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Outline {
    pub sides: usize,
    pub center: (f64, f64),
    pub points: Vec<(f64, f64)>,
    pub fill: Color,
    pub stroke: Color,
}

impl Tile {
    pub fn points(&self, margin: f64) -> Result<Vec<Point>, TileErr> {
        match self {
            Tile::Regular(polygon) => Ok(polygon.points(margin)),
            Tile::Dual(polygon) => polygon.points(margin),
        }
    }

    // center is the regular polygon's center, or the area centroid of a dual polygon
    pub fn center(&self) -> Point {
        match self {
            Tile::Regular(polygon) => polygon.center(),
            Tile::Dual(polygon) => polygon.centroid(),
        }
    }

    pub fn sides(&self) -> usize {
        match self {
            Tile::Regular(polygon) => polygon.sides(),
            Tile::Dual(polygon) => polygon.sides(),
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Tile::Regular(polygon) => polygon.style(),
            Tile::Dual(polygon) => polygon.style(),
        }
    }

    pub fn outline(&self, margin: f64) -> Result<Outline, TileErr> {
        let style = self.style();
        Ok(Outline {
            sides: self.sides(),
            center: self.center().values(),
            points: self.points(margin)?.iter().map(Point::values).collect(),
            fill: style.fill,
            stroke: style.stroke,
        })
    }
}

impl From<RegularPolygon> for Tile {
    fn from(polygon: RegularPolygon) -> Tile {
        Tile::Regular(polygon)
    }
}

impl From<DualPolygon> for Tile {
    fn from(polygon: DualPolygon) -> Tile {
        Tile::Dual(polygon)
    }
}
