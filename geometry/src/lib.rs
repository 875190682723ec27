mod bounds;
mod edge;
mod error;
mod inset;
mod point;

pub use self::bounds::*;
pub use self::edge::*;
pub use self::error::*;
pub use self::inset::*;
pub use self::point::*;
