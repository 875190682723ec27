use geometry::{GeometryErr, Point, MAX_COORDINATE};

#[derive(Clone, Debug, PartialEq)]
pub enum TileErr {
    EdgeOutOfBounds(usize, usize), // (edge index, number of sides)
    Geometry(GeometryErr),
    NonFinite(Point, f64),  // (center, rotation) of a placement with a NaN or infinite value
    OutOfRange(Point),      // center beyond MAX_COORDINATE
    TooFewSides(usize),
}

impl std::fmt::Display for TileErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileErr::EdgeOutOfBounds(edge, sides) => write!(f, "TileErr: edge {} out of bounds for polygon with {} sides", edge, sides),
            TileErr::Geometry(err) => write!(f, "TileErr: {}", err),
            TileErr::NonFinite(center, rotation) => write!(f, "TileErr: placement {:?} rotated {} is not finite", center, rotation),
            TileErr::OutOfRange(center) => write!(f, "TileErr: center {} is beyond {} units from the origin", center, MAX_COORDINATE),
            TileErr::TooFewSides(sides) => write!(f, "TileErr: a regular polygon needs at least 3 sides, received {}", sides),
        }
    }
}

impl std::error::Error for TileErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TileErr::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryErr> for TileErr {
    fn from(err: GeometryErr) -> TileErr {
        TileErr::Geometry(err)
    }
}
