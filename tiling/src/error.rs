use geometry::GeometryErr;
use paste::paste;
use tile::TileErr;

#[derive(Debug)]
pub enum Error {
    Config(String),
    CoverageNotReached(usize), // maximum replication depth which was exhausted
    Geometry(GeometryErr),
    IndexOutOfBounds(usize, usize), // (requested index, number of polygons in the motif)
    Json(serde_json::Error),
    NoGenerators,
    Tile(TileErr),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "invalid config: {}", msg),
            Error::CoverageNotReached(max_depth) => write!(
                f,
                "viewport not covered after {} replication steps: the generators do not span the plane or the viewport is inconsistent with the scale",
                max_depth,
            ),
            Error::Geometry(err) => write!(f, "{}", err),
            Error::IndexOutOfBounds(index, len) => write!(f, "polygon {} out of bounds for motif of {} polygons", index, len),
            Error::Json(err) => write!(f, "{}", err),
            Error::NoGenerators => write!(f, "replication needs at least one generator"),
            Error::Tile(err) => write!(f, "{}", err),
            Error::Yaml(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Geometry(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Tile(err) => Some(err),
            Error::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

// error_type generates From impls for the errors of sibling crates, which are named <Name>Err
macro_rules! error_type {
    ($($name:ident),*) => {
        paste! {
            $(
                impl From<[<$name Err>]> for Error {
                    fn from(err: [<$name Err>]) -> Error {
                        Error::$name(err)
                    }
                }
            )*
        }
    }
}

error_type!{
    Geometry,
    Tile
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
