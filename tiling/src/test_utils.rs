use crate::{config::Config, model::Model};
use geometry::{Key, ORIGIN};
use std::{collections::HashMap, f64::consts::PI, ops::Range};
use tile::{RegularPolygon, Style, RED};

// config for a viewport reaching `half_extent` units from the origin in both directions
pub fn config(half_extent: u32) -> Config {
    Config {
        width: half_extent * 2 * 64,
        height: half_extent * 2 * 64,
        scale: 64.,
        ..Config::default()
    }
}

// hexagons with a triangle on each edge, and the six hexagons around them as generators
pub fn trihexagonal(config: Config) -> (Model, Range<usize>) {
    let mut model = Model::new(config);
    model.append(RegularPolygon::new(6, ORIGIN, 0., Style::fill(RED)).unwrap());
    let triangles = model.add_all(vec![0], 0..6, 3, Style::default()).unwrap();
    let hexagons = model.add_all(triangles, [1], 6, Style::fill(RED)).unwrap();
    (model, hexagons)
}

// an octagon with squares on every other edge, and the four octagons beyond them
pub fn truncated_square(config: Config) -> (Model, Range<usize>) {
    let mut model = Model::new(config);
    model.append(RegularPolygon::new(8, ORIGIN, 0., Style::fill(RED)).unwrap());
    let squares = model.add_all(vec![0], (1..8).step_by(2), 4, Style::default()).unwrap();
    let octagons = model.add_all(squares, [1], 8, Style::fill(RED)).unwrap();
    (model, octagons)
}

// a hexagon ringed by squares with triangles in the gaps, and the six hexagons beyond the squares
pub fn rhombitrihexagonal(config: Config) -> (Model, Range<usize>) {
    let mut model = Model::new(config);
    model.append(RegularPolygon::new(6, ORIGIN, 0., Style::fill(RED)).unwrap());
    let squares = model.add_all(vec![0], 0..6, 4, Style::default()).unwrap();
    model.add_all(squares.clone(), [1], 3, Style::default()).unwrap();
    let hexagons = model.add_all(squares, [2], 6, Style::fill(RED)).unwrap();
    (model, hexagons)
}

// vertex_angles sums the interior angles of the tiles meeting at each vertex
pub fn vertex_angles(model: &Model) -> HashMap<Key, (geometry::Point, f64)> {
    let mut angles = HashMap::new();
    for polygon in model.tiles() {
        let interior = PI - 2. * PI / polygon.sides() as f64;
        let points = polygon.points(0.);
        for point in points[..points.len() - 1].iter() {
            angles.entry(point.key().unwrap()).or_insert((*point, 0.)).1 += interior;
        }
    }
    angles
}
